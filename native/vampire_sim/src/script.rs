//! Path: native/vampire_sim/src/script.rs
//! Summary: 入力スクリプト（1 行 = 1 tick、`N:` で繰り返し）のパース
//!
//! 例:
//! ```text
//! # 右へ 60 tick 歩いてから変身
//! 60: d
//! e
//! 30: w a f
//! ```

use crate::error::{Result, SimError};
use vampire_core::TickInput;

/// スクリプト全体を tick ごとの入力列に展開する
pub fn parse_script(text: &str) -> Result<Vec<TickInput>> {
    let mut inputs = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let (repeat, body) = match line.split_once(':') {
            Some((count, rest)) => {
                let n = count.trim().parse::<usize>().map_err(|_| SimError::BadRepeat {
                    line:  line_no,
                    count: count.trim().to_string(),
                })?;
                (n, rest)
            }
            None => (1, line),
        };

        let input = parse_tokens(body, line_no)?;
        inputs.extend(std::iter::repeat(input).take(repeat));
    }
    Ok(inputs)
}

fn parse_tokens(body: &str, line: usize) -> Result<TickInput> {
    let mut input = TickInput::idle();
    for token in body.split_whitespace() {
        match token.to_ascii_lowercase().as_str() {
            "w" | "up" => input.movement.up = true,
            "s" | "down" => input.movement.down = true,
            "a" | "left" => input.movement.left = true,
            "d" | "right" => input.movement.right = true,
            "e" | "bat" => input.bat_form = true,
            "f" | "feed" => input.feed = true,
            "space" | "start" => input.start = true,
            "." | "idle" => {}
            _ => {
                return Err(SimError::UnknownToken { line, token: token.to_string() });
            }
        }
    }
    Ok(input)
}
