use crate::error::Result;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// Something that turns the current state into the next one
pub type Instruction = fn(op: &dyn Opcode, state: &State) -> Result<State>;

/// Selects the correct Instruction for a given Opcode.
/// Returns None for anything this interpreter doesn't implement; callers treat those as no-ops.
pub fn from_op(op: &dyn Opcode) -> Option<Instruction> {
    match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => Some(clr),
        (0x1, ..) => Some(jump),
        (0x6, ..) => Some(load),
        (0x7, ..) => Some(add),
        (0xA, ..) => Some(loadi),
        (0xD, ..) => Some(draw),
        _ => None,
    }
}
