use lexicode_frame::FrameError;

/// Errors that can occur while decoding.
///
/// Every variant means the input was not produced by the matching encoder:
/// corrupted data or a codec mismatch. Decoding never falls back to a
/// default value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A fixed-width codec received the wrong number of bytes.
    #[error("expected exactly {expected} bytes, found {found}")]
    Width { expected: usize, found: usize },

    /// The input ends before a required header is complete.
    #[error("truncated input ({found} bytes, need at least {needed})")]
    Truncated { needed: usize, found: usize },

    /// A length header disagrees with the bytes that follow it.
    #[error("length header declares {declared} bytes but {remaining} remain")]
    LengthHeader { declared: usize, remaining: usize },

    /// A length header declares an empty magnitude.
    #[error("length header declares an empty magnitude")]
    EmptyMagnitude,

    /// The magnitude carries a redundant leading sign byte.
    #[error("magnitude is not minimally encoded")]
    NonCanonical,

    /// The decoded magnitude's sign disagrees with the length header.
    #[error("magnitude sign disagrees with length header")]
    SignMismatch,

    /// A composite encoding has the wrong number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A reversed encoding does not end with the sentinel byte.
    #[error("reversed encoding missing 0xff sentinel (last byte {found:?})")]
    MissingSentinel { found: Option<u8> },

    /// Text bytes are not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A framed field could not be unescaped.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),
}

pub type Result<T> = std::result::Result<T, CodecError>;
