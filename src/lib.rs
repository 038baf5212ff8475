//! # Introsort
//!
//! `introsort` is a generic, in-place, unstable comparison sort.
//!
//! It implements [**introsort**](https://en.wikipedia.org/wiki/Introsort), which starts out as
//! **Quicksort**, switches to **Heapsort** once the recursion gets too deep and finishes small
//! ranges with **Insertion Sort**. The result is quicksort's average-case speed with an
//! O(n log n) worst case.
//!
//! ## Key Features
//!
//! - **Randomized Pivots**: Every partition step draws its pivot from an injected [`PivotSource`]
//!   (any [`rand::Rng`] works), so sorted or adversarial inputs do not degrade the split.
//! - **Bounded Depth**: A depth budget of `2 * floor(ln(n))` quicksort levels; ranges that exhaust
//!   it are heapsorted.
//! - **In-Place**: Elements are only ever swapped. No allocation, no `Clone` or `Copy` bound.
//! - **Any Collection**: The [`SortSequence`] trait covers slices, arrays, `Vec` and `VecDeque`,
//!   and can be implemented for custom containers.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use introsort::introsort;
//!
//! let mut data = vec!["march", "january", "may", "april"];
//! introsort(&mut data);
//!
//! assert_eq!(data, vec!["april", "january", "march", "may"]);
//! ```
//!
//! ### Floats and Custom Orders
//!
//! Types without a total order are sorted through a comparator.
//!
//! ```rust
//! use introsort::introsort_by;
//!
//! let mut data = vec![4096.0, 3.142, -400.0, 0.04];
//! introsort_by(&mut data, f64::total_cmp);
//!
//! assert_eq!(data, vec![-400.0, 0.04, 3.142, 4096.0]);
//! ```
//!
//! ### Tuning
//!
//! The insertion threshold and the depth budget formula are set through [`Config`].
//!
//! ```rust
//! use introsort::{Config, Introsort, LogBase};
//!
//! let sorter = Introsort::new(Config::default().with_log_base(LogBase::Binary)).unwrap();
//!
//! let mut data: Vec<u64> = (0..1000).rev().collect();
//! sorter.sort(&mut data);
//!
//! assert!(data.is_sorted());
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Average Case**: O(N log N).
//! - **Worst Case**: O(N log N), guaranteed by the heapsort fallback.
//! - **Memory Overhead**: None besides O(log N) stack frames.
//!
//! Log output goes through [`tracing`]; install a subscriber to see when ranges fall back to
//! heapsort.

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub use crate::algo::{Introsort, introsort, introsort_by, introsort_by_key, introsort_with_rng};
pub use crate::config::{Config, LogBase};
pub use crate::core::{LastElement, PivotSource, SortSequence};
pub use crate::error::{Error, Result};

pub mod prelude {
    pub use crate::algo::{Introsort, introsort, introsort_by, introsort_by_key, introsort_with_rng};
    pub use crate::config::{Config, LogBase};
    pub use crate::core::{PivotSource, SortSequence};
}
