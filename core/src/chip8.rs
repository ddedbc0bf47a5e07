use log::{debug, trace};

use crate::constants::{KEY_COUNT, MAX_ROM_SIZE, PROGRAM_START};
use crate::error::{Error, Result};
use crate::instruction;
use crate::opcode;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - opcodes it was asked to run but doesn't implement
///
/// Supplies interfaces for:
/// - resetting the machine and loading roms
/// - pressing and releasing keys
/// - advancing the CPU (and with it the timers) one instruction at a time
/// - inspecting its frame buffer for rendering by some display
/// - inspecting registers and timers for debugging
///
/// Every method that changes the machine takes `&mut self`; hosts that share a `Chip8`
/// between threads need to lock around whole calls to `step`.
pub struct Chip8 {
    state: State,
    unimplemented_opcodes: usize,
    last_unimplemented: Option<u16>,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            unimplemented_opcodes: 0,
            last_unimplemented: None,
        }
    }

    /// Puts the machine back into its power-on state.
    /// Memory, registers, timers, keys and the frame buffer are zeroed, the sprite sheet is
    /// reinstalled and the pc points at the start of the program area.
    pub fn reset(&mut self) {
        debug!("resetting");
        *self = Chip8::new();
    }

    /// Load a rom into memory at 0x200.
    ///
    /// Always starts from a freshly reset machine; anything that was running is discarded.
    /// A rom that doesn't fit leaves the machine untouched.
    ///
    /// # Arguments
    /// * `rom` the raw bytes of the program
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max_size: MAX_ROM_SIZE,
            });
        }

        self.reset();
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(rom);
        debug!("loaded {} byte rom at {:#05X}", rom.len(), start);
        Ok(())
    }

    /// Advances the CPU by a single instruction
    /// - fetches the opcode at the pc and moves the pc past it
    /// - executes it, or skips it if it isn't implemented
    /// - ticks the timers
    ///
    /// On error nothing about the machine has changed.
    pub fn step(&mut self) -> Result<()> {
        let op = self.get_op()?;
        let fetched = State {
            pc: self.state.pc + 0x2,
            ..self.state
        };
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            fetched.v,
            fetched.i,
            fetched.pc
        );

        let mut next = match instruction::from_op(&op) {
            Some(instruction) => instruction(&op, &fetched)?,
            None => {
                self.record_unimplemented(op);
                fetched
            }
        };
        Self::tick_timers(&mut next);
        self.state = next;
        Ok(())
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> Result<u16> {
        let pc = self.state.pc as usize;
        match self.state.memory.get(pc..pc + 2) {
            Some(&[high, low]) => Ok(opcode::from_bytes(high, low)),
            _ => Err(Error::MemoryOutOfBounds {
                address: pc.max(self.state.memory.len()),
            }),
        }
    }

    /// The delay and sound timers count down once per instruction until they hit 0.
    /// They run at the CPU's rate, so they only keep 60Hz time if the CPU is driven at 60Hz.
    fn tick_timers(state: &mut State) {
        state.delay_timer = state.delay_timer.saturating_sub(1);
        state.sound_timer = state.sound_timer.saturating_sub(1);
    }

    fn record_unimplemented(&mut self, op: u16) {
        debug!(
            "skipping unimplemented opcode {:04X} at {:04X}",
            op, self.state.pc
        );
        self.unimplemented_opcodes += 1;
        self.last_unimplemented = Some(op);
    }

    /// Returns the FrameBuffer if it has changed since the last call
    pub fn get_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// The current FrameBuffer whether or not it has changed
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// A read-only view of the whole machine, for debuggers
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn registers(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    /// How many times an opcode was skipped because it isn't implemented
    pub fn unimplemented_opcodes(&self) -> usize {
        self.unimplemented_opcodes
    }

    /// The most recent opcode that was skipped because it isn't implemented
    pub fn last_unimplemented(&self) -> Option<u16> {
        self.last_unimplemented
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) -> Result<()> {
        *self.key_mut(key)? = true;
        Ok(())
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) -> Result<()> {
        *self.key_mut(key)? = false;
        Ok(())
    }

    /// Replace the pressed status of every key at once
    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.state.pressed_keys = keys;
    }

    pub fn keys(&self) -> &[bool; KEY_COUNT] {
        &self.state.pressed_keys
    }

    fn key_mut(&mut self, key: u8) -> Result<&mut bool> {
        self.state
            .pressed_keys
            .get_mut(key as usize)
            .ok_or(Error::InvalidKey { key })
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
