use thiserror::Error;

/// Reasons a [`ZipRange`](crate::ZipRange) can be rejected.
///
/// Bounds are reported exactly as they were supplied, formatted
/// zero-padded to five digits (wider values are never truncated).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZipError {
    /// A bound lies outside `00000..=99999`.
    #[error("{0:05} is not a valid 5-digit zip code.")]
    InvalidZipCode(i32),
    /// Both bounds are valid zip codes, but `lower > upper`.
    #[error("[{0:05},{1:05}] is not a valid zip range")]
    InvalidZipRange(i32, i32),
}

pub type Result<T, E = ZipError> = std::result::Result<T, E>;
