//! Order-preserving binary encodings for sorted key/value stores.
//!
//! A lexicoder turns a value into bytes whose unsigned lexicographic order
//! matches the value's natural order, so a store that only compares raw bytes
//! can range-scan typed keys.
//!
//! # Crate Structure
//!
//! - [`frame`]: escaping and separator framing for multi-field encodings
//! - [`codec`]: scalar and composite lexicoders
//! - [`schema`]: runtime codec trees built from type expressions (behind `schema` feature)
//! - [`typed`]: typed views over raw key/value entries (behind `typed` feature)

/// Re-export framing primitives.
pub mod frame {
    pub use lexicode_frame::*;
}

/// Re-export codec types.
pub mod codec {
    pub use lexicode_codec::*;
}

/// Re-export runtime schema types (requires `schema` feature).
#[cfg(feature = "schema")]
pub mod schema {
    pub use lexicode_schema::*;
}

/// Re-export typed entry adapters (requires `typed` feature).
#[cfg(feature = "typed")]
pub mod typed {
    pub use lexicode_typed::*;
}

pub use lexicode_codec::{list, pair, reverse, CodecError, Lexicoder};
