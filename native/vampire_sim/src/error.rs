//! Path: native/vampire_sim/src/error.rs
//! Summary: ヘッドレス実行のエラー型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("failed to read input script {path}: {source}")]
    Script {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown input token `{token}`")]
    UnknownToken { line: usize, token: String },

    #[error("line {line}: invalid repeat count `{count}`")]
    BadRepeat { line: usize, count: String },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
