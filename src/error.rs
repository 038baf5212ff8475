//! Error type for the checked entry points.
//!
//! Sorting itself is total: the plain entry points never fail. Errors only surface from
//! [`Introsort::sort_range`](crate::Introsort::sort_range), which accepts caller-supplied bounds,
//! and from [`Config::validate`](crate::Config::validate).

use thiserror::Error;

/// Errors reported by the checked entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// `high` does not index into the sequence.
    #[error("range [{low}, {high}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { low: usize, high: usize, len: usize },

    /// `low > high`.
    #[error("inverted range: low ({low}) is greater than high ({high})")]
    InvertedRange { low: usize, high: usize },

    /// A custom depth budget log base that is not finite or not greater than 1.
    #[error("log base must be finite and greater than 1, got {0}")]
    InvalidLogBase(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
