//! Error types for the `uniquify` crate.

use std::collections::TryReserveError;

/// Errors raised while deduplicating a sequence.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A new distinct value arrived after the probe table hit its load limit.
    ///
    /// Only fixed-capacity tables can produce this; the scaled policy sizes
    /// the table from the input length.
    #[error("probe table capacity exceeded: {limit} distinct values allowed in {capacity} slots")]
    CapacityExceeded {
        /// Total number of slots in the table.
        capacity: usize,
        /// Maximum number of distinct values admitted under the load bound.
        limit: usize,
    },

    /// The configuration cannot describe a working probe table.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The requested unique prefix is longer than the buffer holding it.
    #[error("unique prefix of {unique} elements exceeds buffer length {len}")]
    PrefixOutOfRange { unique: usize, len: usize },

    /// The result buffer could not be allocated.
    #[error("failed to allocate result buffer")]
    Allocation(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;
