//! Recoverable errors reported by [`crate::HystVec`].
//!
//! Contract violations (unchecked indexing or [`crate::HystVec::remove_at`] past the end) are
//! not represented here; they panic.

use thiserror::Error;

/// Result type for fallible [`crate::HystVec`] operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur in [`crate::HystVec`] operations.
/// In every case the container is left exactly as it was before the call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A signed index resolved to an offset outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The index as given by the caller (may be negative).
        index: isize,
        /// Length of the container at the time of the call.
        len: usize,
    },

    /// A sub-range `[start, end)` that is empty, reversed, or extends past the source.
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange {
        /// Inclusive start of the requested range.
        start: usize,
        /// Exclusive end of the requested range.
        end: usize,
        /// Length of the source container.
        len: usize,
    },

    /// The capacity required by a growth step does not fit in `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator could not provide a buffer of the requested capacity.
    #[error("allocation of {requested} elements failed")]
    AllocFailed {
        /// Capacity (in elements) of the buffer that could not be allocated.
        requested: usize,
    },
}
