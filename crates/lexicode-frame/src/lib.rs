//! Byte escaping and separator framing for order-preserving composite keys.
//!
//! This is the lowest layer of lexicode. Composite encodings are built by:
//! - Escaping each field so it contains no raw `0x00`
//! - Joining the escaped fields with a single `0x00` separator
//!
//! Because `0x00` sorts below every other byte, a framed sequence of fields
//! compares like a tuple: field by field, with a shorter sequence first.

pub mod codec;
pub mod error;
pub mod reader;
pub mod reserved;
pub mod writer;

pub use codec::{concat, escape, escape_into, escaped_len, split, unescape};
pub use error::{FrameError, Result};
pub use reader::Fields;
pub use reserved::{ESCAPE, ESCAPED_ESCAPE, ESCAPED_SEPARATOR, SEPARATOR};
pub use writer::FrameBuilder;
