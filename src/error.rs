//! Unified error type.

/// The error type returned by slashward's fallible operations.
///
/// Application-level outcomes (404, redirects) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// registration-time failures — a bad normalization mode, a malformed route
/// pattern — and server infrastructure failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured normalization mode was not `append` or `remove`.
    /// The server must not start with an unrecognized mode.
    #[error("unrecognized trailing-slash mode `{0}` (expected `append` or `remove`)")]
    InvalidMode(String),

    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
