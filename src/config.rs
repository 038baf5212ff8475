//! Tuning knobs for [`Introsort`](crate::Introsort).
//!
//! None of these affect correctness. The insertion threshold trades partitioning overhead
//! against quadratic leaf sorting, and the depth budget bounds how many quicksort levels run
//! before heapsort takes over. Any budget in O(log n) keeps the O(n log n) worst case.

use crate::core::{DEFAULT_DEPTH_MULTIPLIER, INSERTION_SORT_THRESHOLD};
use crate::error::{Error, Result};

/// Logarithm used in the depth budget `floor(log(n)) * multiplier`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LogBase {
    /// Natural logarithm.
    #[default]
    Natural,
    /// Base-2 logarithm, computed exactly on integers.
    Binary,
    /// Any finite base greater than 1.
    Custom(f64),
}

impl LogBase {
    /// `floor(log(len))` in this base. `len` must be at least 1.
    fn floor_log(self, len: usize) -> usize {
        match self {
            LogBase::Natural => (len as f64).ln().floor() as usize,
            LogBase::Binary => len.ilog2() as usize,
            LogBase::Custom(base) => {
                let len = len as f64;
                let mut k = (len.ln() / base.ln()).floor() as i32;
                // The quotient can land just below an integer at exact powers.
                while base.powi(k + 1) <= len {
                    k += 1;
                }
                while k > 0 && base.powi(k) > len {
                    k -= 1;
                }
                k as usize
            }
        }
    }
}

/// Sorter configuration.
///
/// ```
/// use introsort::{Config, LogBase};
///
/// let config = Config::default()
///     .with_log_base(LogBase::Binary)
///     .with_depth_multiplier(2);
///
/// assert_eq!(config.depth_budget(1024), 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub insertion_threshold: usize,
    pub depth_multiplier: usize,
    pub log_base: LogBase,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            insertion_threshold: INSERTION_SORT_THRESHOLD,
            depth_multiplier: DEFAULT_DEPTH_MULTIPLIER,
            log_base: LogBase::Natural,
        }
    }
}

impl Config {
    /// Ranges with `high - low < threshold` are insertion sorted.
    pub fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = threshold;
        self
    }

    pub fn with_depth_multiplier(mut self, multiplier: usize) -> Self {
        self.depth_multiplier = multiplier;
        self
    }

    pub fn with_log_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }

    /// Checks that the depth budget formula is well defined.
    pub fn validate(&self) -> Result<()> {
        match self.log_base {
            LogBase::Custom(base) if !(base.is_finite() && base > 1.0) => {
                Err(Error::InvalidLogBase(base))
            }
            _ => Ok(()),
        }
    }

    /// Initial depth budget for a sequence of `len` elements.
    ///
    /// Sequences with fewer than two elements are already sorted and get a budget of 0.
    pub fn depth_budget(&self, len: usize) -> usize {
        if len < 2 {
            return 0;
        }
        self.log_base
            .floor_log(len)
            .saturating_mul(self.depth_multiplier)
    }
}
