//! Each operation takes the state as it is after the fetch (pc already points at the
//! next instruction) and returns the state after the instruction has executed.

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Result;
use crate::opcode::Opcode;
use crate::state::State;

/// clear
pub fn clr(_op: &dyn Opcode, state: &State) -> Result<State> {
    Ok(State {
        frame_buffer: [0; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        draw_flag: true,
        ..*state
    })
}

/// PC = addr
pub fn jump(op: &dyn Opcode, state: &State) -> Result<State> {
    Ok(State {
        pc: op.addr(),
        ..*state
    })
}

/// Vx = kk
pub fn load(op: &dyn Opcode, state: &State) -> Result<State> {
    let mut v = state.v;
    v[op.x() as usize] = op.kk();
    Ok(State { v, ..*state })
}

/// Vx += kk
/// Wraps around on overflow; unlike `8xy4` the carry is dropped and VF is left alone
pub fn add(op: &dyn Opcode, state: &State) -> Result<State> {
    let mut v = state.v;
    v[op.x() as usize] = v[op.x() as usize].wrapping_add(op.kk());
    Ok(State { v, ..*state })
}

/// I = addr
pub fn loadi(op: &dyn Opcode, state: &State) -> Result<State> {
    Ok(State {
        i: op.addr(),
        ..*state
    })
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased.
///
/// Rows that would come from past the end of memory are blank.
pub fn draw(op: &dyn Opcode, state: &State) -> Result<State> {
    let start = state.i as usize;
    let sprite = (start..start + op.n() as usize)
        .map(|address| state.memory.get(address).copied().unwrap_or(0));

    let mut v = state.v;
    let mut frame_buffer = state.frame_buffer;

    // Reset the carry flag (used for collision detection)
    v[0xF] = 0x0;
    // Coordinates are latched after the reset so a draw at (VF, _) starts from 0
    let origin_x = v[op.x() as usize] as usize;
    let origin_y = v[op.y() as usize] as usize;

    for (row, byte) in sprite.enumerate() {
        let y = (origin_y + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if byte & (0x80 >> bit) == 0 {
                continue;
            }
            let x = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel = &mut frame_buffer[x + y * DISPLAY_WIDTH];
            if *pixel == 1 {
                v[0xF] = 0x1;
            }
            *pixel ^= 1;
        }
    }

    Ok(State {
        draw_flag: true,
        v,
        frame_buffer,
        ..*state
    })
}
