//! Headless driver for the emu8 core.
//!
//! Reads a rom, steps it at a fixed rate and optionally prints the last frame.
//! Set `RUST_LOG=debug` to see frames and skipped opcodes, `RUST_LOG=trace` for every opcode.
//!
//! ```bash
//! chip8 roms/ibm-logo.ch8 --cycles 120 --fast --dump
//! ```

use std::path::PathBuf;

use clap::Parser;

use chip8_core::CLOCK_SPEED;

use crate::run::Settings;

mod display;
mod keymap;
mod run;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Cycles per second; the delay and sound timers tick once per cycle
    #[arg(long, default_value_t = CLOCK_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    hz: u32,

    /// Stop after this many cycles instead of running until the program leaves memory
    #[arg(short, long)]
    cycles: Option<u64>,

    /// Keyboard keys to hold down for the whole run, e.g. "qe" (layout 1234/qwer/asdf/zxcv)
    #[arg(long, default_value = "")]
    hold: String,

    /// Run as fast as possible instead of at --hz
    #[arg(short, long)]
    fast: bool,

    /// Print the last frame when the run ends
    #[arg(short, long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let settings = Settings {
        rom: args.rom,
        clock_speed: args.hz,
        cycles: args.cycles,
        held_keys: keymap::held_keys(&args.hold)?,
        fast_forward: args.fast,
        dump: args.dump,
    };

    run::run(&settings)
}
