//! Path: native/vampire_sim/src/main.rs
//! Summary: ウィンドウなしでセッションを走らせ、最終スナップショットを出力するバイナリ

/// Headless driver.
/// Runs the simulation core without a window, from an input script or idle.
mod error;
mod script;

use clap::{Parser, ValueEnum};
use error::{Result, SimError};
use serde::Serialize;
use vampire_core::{FrameEvent, GameSession, SessionSnapshot, TickInput};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Vampire survival simulation - headless runner
#[derive(Parser, Debug)]
#[command(name = "vampire_sim")]
#[command(about = "Run a vampire survival session without a window and report the result")]
struct Args {
    /// Maximum ticks to simulate (60 ticks = 1 second)
    #[arg(long, default_value_t = 3600)]
    ticks: usize,

    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Input script: one line per tick, `N:` prefix repeats a line
    #[arg(long)]
    script: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// tick 中に発生したイベントの集計
#[derive(Debug, Default, Serialize)]
struct EventTally {
    humans_fed:    u32,
    hunters_slain: u32,
    phase_changes: u32,
    damage_taken:  f32,
}

impl EventTally {
    fn record(&mut self, events: &[FrameEvent]) {
        for e in events {
            match e {
                FrameEvent::HumanFed { .. } => self.humans_fed += 1,
                FrameEvent::HunterSlain { .. } => self.hunters_slain += 1,
                FrameEvent::PhaseChanged { .. } => self.phase_changes += 1,
                FrameEvent::PlayerDamaged { amount, .. } => self.damage_taken += amount,
                FrameEvent::FormChanged { .. } | FrameEvent::PlayerDied { .. } => {}
            }
        }
    }
}

#[derive(Serialize)]
struct RunReport {
    seed:     u64,
    ticks:    usize,
    tally:    EventTally,
    snapshot: SessionSnapshot,
}

fn load_inputs(path: Option<&str>) -> Result<Vec<TickInput>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let text = std::fs::read_to_string(path).map_err(|source| SimError::Script {
        path: path.to_string(),
        source,
    })?;
    script::parse_script(&text)
}

fn run(args: &Args) -> Result<RunReport> {
    let inputs = load_inputs(args.script.as_deref())?;
    log::info!("loaded {} scripted ticks (seed={})", inputs.len(), args.seed);

    let mut session = GameSession::new(args.seed);
    session.start();

    let mut tally = EventTally::default();
    let mut ticks = 0;
    while ticks < args.ticks {
        let input = inputs.get(ticks).copied().unwrap_or_else(TickInput::idle);
        session.step(&input);
        tally.record(&session.drain_frame_events());
        ticks += 1;
        if session.is_dead() {
            break;
        }
    }

    Ok(RunReport { seed: args.seed, ticks, tally, snapshot: session.snapshot() })
}

fn print_text(report: &RunReport) {
    let s = &report.snapshot;
    println!("state:    {:?}", s.state);
    println!("phase:    {:?} ({} ticks in phase)", s.phase.phase, s.phase.ticks_in_phase);
    println!("survived: {}s ({} ticks)", s.survival_seconds, report.ticks);
    println!("score:    {}", s.score);
    println!(
        "player:   blood={:.1} energy={:.1} health={:.1} form={:?}",
        s.player.blood, s.player.energy, s.player.health, s.player.form
    );
    println!("humans:   {}  hunters: {}", s.humans.len(), s.hunters.len());
    println!(
        "events:   fed={} slain={} phase_changes={} damage={:.1}",
        report.tally.humans_fed,
        report.tally.hunters_slain,
        report.tally.phase_changes,
        report.tally.damage_taken
    );
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_default_env().try_init();
    let args = Args::parse();

    let report = run(&args)?;
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }
    Ok(())
}
