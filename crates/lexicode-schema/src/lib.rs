//! Runtime-typed order-preserving codecs.
//!
//! A [`Schema`] is parsed from a type expression such as
//! `pair<string,reverse<i64>>` and encodes dynamic [`Value`]s with exactly
//! the bytes the statically typed codec tree for that type would produce.
//!
//! Use it when the key type is only known at run
//! time (tooling, configuration-driven tables).

pub mod config;
pub mod error;
pub mod json;
pub mod parser;
pub mod schema;
pub mod value;

pub use config::SchemaConfig;
pub use error::{ErrorKind, Result, SchemaError};
pub use schema::Schema;
pub use value::Value;
