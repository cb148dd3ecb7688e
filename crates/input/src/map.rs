//! Key mapping from raw terminal bytes to round inputs.

use crate::types::KeyInput;

/// Map one raw input byte to what it does in a round.
pub fn map_byte(b: u8) -> KeyInput {
    KeyInput::from_byte(b)
}
