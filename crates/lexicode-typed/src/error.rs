use lexicode_codec::CodecError;

/// Errors that can occur while decoding a raw entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypedError {
    /// The raw key could not be decoded.
    #[error("key decode failed: {0}")]
    Key(#[source] CodecError),

    /// The raw value could not be decoded.
    #[error("value decode failed: {0}")]
    Value(#[source] CodecError),
}

impl TypedError {
    /// The underlying codec error.
    pub fn codec_error(&self) -> &CodecError {
        match self {
            TypedError::Key(err) | TypedError::Value(err) => err,
        }
    }
}

pub type Result<T> = std::result::Result<T, TypedError>;
