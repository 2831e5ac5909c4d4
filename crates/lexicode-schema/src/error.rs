use lexicode_codec::CodecError;

/// Broad classes of [`SchemaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The type expression is malformed or exceeds configured limits.
    Syntax,
    /// Encoded bytes violate the codec's structural invariants.
    Format,
    /// A value does not fit the schema it was encoded with.
    Unrepresentable,
}

/// Errors that can occur while parsing schemas or converting values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The type expression could not be parsed.
    #[error("syntax error at offset {position}: {message}")]
    Syntax { position: usize, message: String },

    /// The type expression names a type that does not exist.
    #[error("unknown type {name:?} at offset {position}")]
    UnknownType { name: String, position: usize },

    /// The type expression nests deeper than allowed.
    #[error("schema nesting exceeds maximum depth {max}")]
    TooDeep { max: usize },

    /// The type expression is longer than allowed.
    #[error("schema expression too long ({len} bytes, max {max})")]
    TooLong { len: usize, max: usize },

    /// The value cannot be encoded with this schema.
    #[error("{found} is not representable as {schema}")]
    Unrepresentable { schema: String, found: String },

    /// Decoding failed.
    #[error("decode failed: {0}")]
    Codec(#[from] CodecError),
}

impl SchemaError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchemaError::Syntax { .. }
            | SchemaError::UnknownType { .. }
            | SchemaError::TooDeep { .. }
            | SchemaError::TooLong { .. } => ErrorKind::Syntax,
            SchemaError::Unrepresentable { .. } => ErrorKind::Unrepresentable,
            SchemaError::Codec(_) => ErrorKind::Format,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
