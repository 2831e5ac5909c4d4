//! Typed views over raw key/value pairs from sorted stores.
//!
//! This is the glue between a store that hands out raw `(key, value)` byte
//! pairs and application code that wants typed entries. Decoding happens
//! lazily, one entry at a time; encoding returns the raw bytes to write
//! back. Nothing here touches storage.

pub mod entry;
pub mod error;
pub mod iter;

pub use entry::{EntryCodec, TypedEntry};
pub use error::{Result, TypedError};
pub use iter::TypedEntries;
