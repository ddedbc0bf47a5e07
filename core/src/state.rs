use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_COUNT, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET,
};

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is also the collision flag written by `draw`
/// - (i) a memory address register, only ever holding 0x000..=0xFFF
///
/// Counter
/// - (pc) a 16-bit program counter, starting at 0x200
///
/// Timers
/// - 2 8-bit timers (delay & sound), ticked down once per cycle until they reach 0
/// - nothing reads either of them yet; the sound timer makes no sound
///
/// ## Memory
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the sprite sheet
///     - 0x200.. holds the loaded ROM
/// - 64x32 frame buffer stored row by row
///     - stores the contents of the next frame to be drawn
///
/// ## Input
/// - the pressed status of keys 0..F, written from outside the CPU
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub pressed_keys: [bool; KEY_COUNT],
}

impl State {
    pub fn new() -> Self {
        // 0x000 - 0x050 is reserved for a sprite sheet
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            delay_timer: 0,
            sound_timer: 0,
            memory,
            frame_buffer: [0; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            draw_flag: false,
            pressed_keys: [false; KEY_COUNT],
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The FrameBuffer is stored row-major: the pixel at (x, y) lives at `x + y * DISPLAY_WIDTH`.
/// Every cell is either 0 (off) or 1 (on).
pub type FrameBuffer = [u8; DISPLAY_WIDTH * DISPLAY_HEIGHT];
