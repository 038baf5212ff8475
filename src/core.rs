//! Core traits and types for introsort.
//!
//! This module defines:
//! - [`SortSequence`]: Mutable random-access collections that can be sorted in place.
//! - [`PivotSource`]: The randomness capability used to choose quicksort pivots.
//! - [`LastElement`]: A deterministic pivot source (classic Lomuto, last element as pivot).

use rand::Rng;
use std::collections::VecDeque;

/// Ranges with `high - low` below this value are finished with insertion sort, i.e. ranges of up
/// to 16 elements.
pub const INSERTION_SORT_THRESHOLD: usize = 16;

/// Default multiplier applied to `floor(log(n))` when computing the depth budget.
pub const DEFAULT_DEPTH_MULTIPLIER: usize = 2;

/// A mutable, random-access collection that can be sorted in place.
///
/// The sort only ever exchanges elements, it never copies the collection. Implementations hand out
/// the elements as one contiguous mutable slice.
///
/// # Examples
///
/// Implementing for a custom collection:
///
/// ```
/// use introsort::core::SortSequence;
///
/// struct Scores {
///     values: Vec<u32>,
/// }
///
/// impl SortSequence for Scores {
///     type Item = u32;
///
///     fn elements_mut(&mut self) -> &mut [u32] {
///         &mut self.values
///     }
///
///     fn len(&self) -> usize {
///         self.values.len()
///     }
/// }
///
/// let mut scores = Scores { values: vec![30, 10, 20] };
/// introsort::introsort(&mut scores);
/// assert_eq!(scores.values, vec![10, 20, 30]);
/// ```
pub trait SortSequence {
    /// Element type of the collection.
    type Item;

    /// Returns all elements as one contiguous mutable slice.
    fn elements_mut(&mut self) -> &mut [Self::Item];

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SortSequence for [T] {
    type Item = T;

    fn elements_mut(&mut self) -> &mut [T] {
        self
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> SortSequence for [T; N] {
    type Item = T;

    fn elements_mut(&mut self) -> &mut [T] {
        &mut self[..]
    }

    fn len(&self) -> usize {
        N
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T> SortSequence for Vec<T> {
    type Item = T;

    fn elements_mut(&mut self) -> &mut [T] {
        self
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// A ring buffer may be split in two; it is rotated into one contiguous run first.
impl<T> SortSequence for VecDeque<T> {
    type Item = T;

    fn elements_mut(&mut self) -> &mut [T] {
        self.make_contiguous()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Chooses the pivot index for a randomized partition.
///
/// Every [`rand::Rng`] is a pivot source and draws uniformly. Supplying a seeded generator (or a
/// custom implementation) makes the sort reproducible.
pub trait PivotSource {
    /// Returns an index in the closed range `[low, high]`.
    ///
    /// Callers clamp the result into `[low, high]`, so an out-of-range answer can degrade
    /// performance but never correctness.
    fn pick(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng> PivotSource for R {
    #[inline]
    fn pick(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}

/// Always picks `high`, turning the randomized partition into plain Lomuto.
///
/// Deterministic, and therefore quadratic on sorted input until the depth budget runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LastElement;

impl PivotSource for LastElement {
    #[inline]
    fn pick(&mut self, _low: usize, high: usize) -> usize {
        high
    }
}
