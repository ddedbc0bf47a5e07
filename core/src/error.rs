use crate::constants::KEY_COUNT;

/// Everything that can go wrong while loading or running a program
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("memory access out of bounds at address {address:#05X}")]
    MemoryOutOfBounds { address: usize },

    #[error("key {key:#04X} is not on the keypad (expected 0x0..0x{max:X})", max = KEY_COUNT - 1)]
    InvalidKey { key: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
