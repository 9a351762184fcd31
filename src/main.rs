//! Terminal runner.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use flexi_logger::{FileSpec, Logger, WriteMode};

use octris::core::{GameState, SimpleRng};
use octris::run::run;
use octris::term::{TermDisplay, TermInput};
use octris::types::TICK_MS;

#[derive(Debug, Parser)]
#[command(name = "octris", about = "Falling-block puzzle on an emulated 8x32 panel")]
struct Options {
    /// Seed for shape selection (derived from the clock when omitted).
    #[arg(long)]
    seed: Option<u32>,

    /// Frame period in milliseconds.
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u64,

    /// Log level filter (off, error, warn, info, debug, trace). Logs go to
    /// a file; the terminal is owned by the game while it runs.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let options = Options::parse();

    let _logger = Logger::try_with_str(&options.log_level)?
        .log_to_file(FileSpec::default().basename("octris").suppress_timestamp())
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;

    let seed = options.seed.unwrap_or_else(clock_seed);
    log::info!("starting run, seed {seed}, tick {} ms", options.tick_ms);

    let mut display = TermDisplay::new();
    display.enter()?;

    let result = play(&mut display, seed, Duration::from_millis(options.tick_ms));

    // Always try to restore terminal state.
    let _ = display.exit();

    let exit_value = result?;
    log::info!("run finished, exit value {exit_value}");
    println!("final score: {exit_value}");
    Ok(())
}

fn play(display: &mut TermDisplay, seed: u32, tick: Duration) -> Result<u32> {
    let mut game = GameState::new();
    let mut input = TermInput::new();
    let mut picker = SimpleRng::new(seed);
    run(&mut game, display, &mut input, &mut picker, tick)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
