//! Reserved byte values.
//!
//! Only two byte values carry framing meaning. Every other byte passes
//! through escaping untouched.

/// Field separator. Never appears raw inside an escaped field.
pub const SEPARATOR: u8 = 0x00;

/// Escape marker. Always followed by one escape code.
pub const ESCAPE: u8 = 0x01;

/// Escape code standing for a literal [`SEPARATOR`].
pub const ESCAPED_SEPARATOR: u8 = SEPARATOR + 1;

/// Escape code standing for a literal [`ESCAPE`].
pub const ESCAPED_ESCAPE: u8 = ESCAPE + 1;

/// Returns true if the byte must be escaped before framing.
pub fn is_reserved(byte: u8) -> bool {
    byte == SEPARATOR || byte == ESCAPE
}
