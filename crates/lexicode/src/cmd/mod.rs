use clap::{Args, Subcommand};
use lexicode_schema::Schema;
use tracing::debug;

use crate::exit::{schema_error, CliResult};
use crate::output::OutputFormat;

pub mod compare;
pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a JSON value with a schema.
    Encode(EncodeArgs),
    /// Decode hex bytes with a schema.
    Decode(DecodeArgs),
    /// Encode two JSON values and compare the encodings bytewise.
    Compare(CompareArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Compare(args) => compare::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Parse a type expression, mapping failures to CLI exit codes.
pub fn parse_schema(expr: &str) -> CliResult<Schema> {
    let schema = Schema::parse(expr).map_err(|err| schema_error("invalid schema", err))?;
    debug!(%schema, "using schema");
    Ok(schema)
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Type expression, e.g. `pair<string,reverse<i64>>`.
    pub schema: String,
    /// Value as JSON.
    pub value: String,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Type expression the bytes were encoded with.
    pub schema: String,
    /// Encoded bytes as hex.
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Type expression used for both values.
    pub schema: String,
    /// Left value as JSON.
    pub left: String,
    /// Right value as JSON.
    pub right: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
