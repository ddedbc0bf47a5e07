//! # emu8 core
//!
//! A CHIP-8 interpreter as a plain state machine: load a rom, call [`Chip8::step`] at
//! whatever rate you like and read the frame buffer back out. Files, clocks, windows and
//! keyboards are left to whoever drives it.
//!
//! Only part of the instruction set is implemented: `00E0`, `1nnn`, `6xkk`, `7xkk`,
//! `Annn` and `Dxyn`. Everything else is skipped and counted.

pub use chip8::Chip8;
pub use constants::CLOCK_SPEED;
pub use error::{Error, Result};
pub use keymap::keymap;

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod keymap;
mod opcode;
mod operations;
pub mod state;
