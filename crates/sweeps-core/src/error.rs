//! Error taxonomy for the resampling core.
//!
//! The core never retries or recovers: a failing call returns one of these
//! and leaves the caller's buffers untouched. Output storage is only handed
//! back on success, so no partially written buffer can escape.

use core::fmt;

/// Errors reported by the resampling and conversion entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument was rejected (zero channels, zero sample
    /// rate, a buffer that does not match its depth tag).
    InvalidArgument(&'static str),

    /// The allocator capability refused or failed an output allocation.
    /// The message names the failing call site.
    AllocationFailure(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::AllocationFailure(site) => write!(f, "allocation failure in {site}"),
        }
    }
}

impl core::error::Error for Error {}

/// Convenience result type for core operations.
pub type Result<T> = core::result::Result<T, Error>;
