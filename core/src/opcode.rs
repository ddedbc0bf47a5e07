/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian in memory.
/// The most significant nibble selects the instruction family; the rest carry operands.
/// - `(n, _, _, _)` instruction family; applies to all opcodes
/// - `(_, n, n, n)` a 12-bit address (JP, LD I) or a fixed function (CLS)
/// - `(_, _, n, n)` an 8-bit immediate that is assigned to or added to Vx
/// - `(_, n, _, _)` the register Vx
/// - `(_, _, n, _)` the register Vy
/// - `(_, _, _, n)` a 4-bit immediate (the height of a sprite)
pub trait Opcode {
    /// Returns the Opcode's component nibbles.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The Opcode's most significant nibble.
    /// `[f___]`
    fn family(&self) -> u8;

    /// The Opcode's second nibble.
    /// `[_x__]`
    fn x(&self) -> u8;

    /// The Opcode's third nibble.
    /// `[__y_]`
    fn y(&self) -> u8;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// The Opcode without its family nibble.
    /// `[_adr]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.family(), self.x(), self.y(), self.n())
    }

    fn family(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Combines the two bytes of an instruction; the high byte comes from the lower address.
pub fn from_bytes(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}
