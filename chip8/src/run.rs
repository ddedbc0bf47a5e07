use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, error, info, warn};

use chip8_core::constants::KEY_COUNT;
use chip8_core::Chip8;

use crate::display;

/// Everything the driver needs to know to run a rom
#[derive(Debug)]
pub struct Settings {
    pub rom: PathBuf,
    /// Cycles per second; the timers tick at the same rate
    pub clock_speed: u32,
    /// Stop after this many cycles, or never
    pub cycles: Option<u64>,
    pub held_keys: [bool; KEY_COUNT],
    /// Whether or not the clock speed should be ignored
    pub fast_forward: bool,
    /// Print the last frame when the run ends
    pub dump: bool,
}

pub fn run(settings: &Settings) -> Result<()> {
    let mut chip8: Chip8 = Chip8::new();

    // Load ROM
    let rom = std::fs::read(&settings.rom)
        .with_context(|| format!("unable to read ROM {}", settings.rom.display()))?;
    chip8
        .load_rom(&rom)
        .with_context(|| format!("unable to load ROM {}", settings.rom.display()))?;
    info!(
        "loaded {} byte ROM from {}",
        rom.len(),
        settings.rom.display()
    );

    // Keys are released by the reset in load_rom so they're held from here
    chip8.set_keys(settings.held_keys);

    // Set initial timing
    let cycle_time = Duration::from_secs_f64(1.0 / f64::from(settings.clock_speed));
    let mut last_cycle: Instant = Instant::now();
    let mut cycles: u64 = 0;

    let outcome = loop {
        if settings.cycles.map_or(false, |limit| cycles >= limit) {
            break Ok(());
        }

        // Update state
        if let Err(e) = chip8.step() {
            error!("halting at pc {:04X} after {} cycles: {}", chip8.pc(), cycles, e);
            break Err(e);
        }
        cycles += 1;

        // If the draw flag is set, unset it and report the current frame
        if let Some(frame) = chip8.get_frame() {
            debug!(
                "frame {} has {} pixels lit",
                cycles,
                frame.iter().filter(|&&pixel| pixel == 1).count()
            );
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !settings.fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    };

    info!("ran {} cycles", cycles);
    if chip8.unimplemented_opcodes() > 0 {
        warn!(
            "skipped {} unimplemented opcodes, the last was {:04X}",
            chip8.unimplemented_opcodes(),
            chip8.last_unimplemented().unwrap_or_default()
        );
    }

    if settings.dump {
        println!("{}", display::render(chip8.frame_buffer()));
    }

    outcome.with_context(|| format!("{} stopped running", settings.rom.display()))
}
