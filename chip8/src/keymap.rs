use anyhow::{bail, Result};

use chip8_core::constants::KEY_COUNT;
use chip8_core::keymap;

/// Turns a string of keyboard characters (e.g. "qwe") into the keypad state with those keys down.
/// See `chip8_core::keymap` for the layout.
pub fn held_keys(keys: &str) -> Result<[bool; KEY_COUNT]> {
    let mut held = [false; KEY_COUNT];
    for key in keys.chars() {
        match keymap(key) {
            Some(kc) => held[kc as usize] = true,
            None => bail!("'{}' is not mapped to a key on the keypad", key),
        }
    }
    Ok(held)
}
