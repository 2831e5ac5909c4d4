/// Errors that can occur while unescaping a framed field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The field ends with an escape marker that has no following byte.
    #[error("dangling escape marker at offset {offset}")]
    DanglingEscape { offset: usize },

    /// An escape marker is followed by a byte that is not a valid escape code.
    #[error("invalid escape sequence 0x01 0x{byte:02x} at offset {offset}")]
    InvalidEscape { offset: usize, byte: u8 },
}

pub type Result<T> = std::result::Result<T, FrameError>;
