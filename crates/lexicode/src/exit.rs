use std::fmt;

use lexicode_schema::{ErrorKind, SchemaError};

pub const SUCCESS: i32 = 0;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

/// A failed command: the process exit code plus the message for stderr.
#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    fn with_context(code: i32, context: &str, err: impl fmt::Display) -> Self {
        Self {
            code,
            message: format!("{context}: {err}"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Exit code for a schema failure.
///
/// A malformed type expression is a usage error; a value or byte string
/// that does not fit a valid schema is invalid data.
pub fn schema_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Syntax => USAGE,
        ErrorKind::Format | ErrorKind::Unrepresentable => DATA_INVALID,
    }
}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    CliError::with_context(schema_exit_code(err.kind()), context, err)
}

pub fn hex_error(context: &str, err: hex::FromHexError) -> CliError {
    CliError::with_context(DATA_INVALID, context, err)
}

pub fn json_error(context: &str, err: serde_json::Error) -> CliError {
    CliError::with_context(INTERNAL, context, err)
}
