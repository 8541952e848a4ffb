use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Opus return code for invalid arguments (`OPUS_BAD_ARG`).
pub const OPUS_BAD_ARG: i32 = -1;
/// Opus return code for an internal or bitstream failure (`OPUS_INTERNAL_ERROR`).
pub const OPUS_INTERNAL_ERROR: i32 = -3;
/// Opus return code for unsupported requests (`OPUS_UNIMPLEMENTED`).
pub const OPUS_UNIMPLEMENTED: i32 = -5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Bad argument: {0}")]
    BadArg(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    #[error("Range decoder error: {0}")]
    RangeDecoder(String),
}

impl Error {
    /// The negative Opus return code a C-style caller would have received.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::BadArg(_) => OPUS_BAD_ARG,
            Self::InternalError(_) | Self::RangeDecoder(_) => OPUS_INTERNAL_ERROR,
            Self::Unimplemented(_) => OPUS_UNIMPLEMENTED,
        }
    }
}
