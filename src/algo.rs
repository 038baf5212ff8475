//! Core sorting algorithms (randomized quicksort, heapsort, insertion sort).
//!
//! This module implements [introsort](https://en.wikipedia.org/wiki/Introsort), a hybrid of:
//! - **Randomized Quicksort**: Lomuto partitioning around a randomly chosen pivot.
//! - **Heapsort**: Taken over when the recursion depth budget runs out, bounding the worst case
//!   to O(n log n).
//! - **Insertion Sort**: Finishes small ranges.
//!
//! The main entry points are [`introsort`], [`introsort_by`] and the configurable [`Introsort`].
//! The building blocks operate on explicit index ranges and are public so they can be used and
//! tested on their own.

use crate::config::Config;
use crate::core::{PivotSource, SortSequence};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Sorts a sequence in place.
///
/// The sort is unstable and does not allocate. Pivots are drawn from the thread-local generator
/// returned by [`rand::rng`].
///
/// # Examples
///
/// ```
/// use introsort::introsort;
///
/// let mut data = vec![5, 7, -8, 9, 10, 4, -7, 0];
/// introsort(&mut data);
///
/// assert_eq!(data, vec![-8, -7, 0, 4, 5, 7, 9, 10]);
/// ```
pub fn introsort<S>(seq: &mut S)
where
    S: SortSequence + ?Sized,
    S::Item: Ord,
{
    Introsort::default().sort(seq.elements_mut());
}

/// Sorts a sequence in place with a comparator.
///
/// The comparator must implement a total order for the result to be sorted. If it does not, the
/// final order is unspecified, but the sort still terminates and stays in bounds.
///
/// # Examples
///
/// ```
/// use introsort::introsort_by;
///
/// let mut data = vec![3.142, 77.8, -66.6, -400.0, 0.04];
/// introsort_by(&mut data, f64::total_cmp);
///
/// assert_eq!(data, vec![-400.0, -66.6, 0.04, 3.142, 77.8]);
/// ```
pub fn introsort_by<S, F>(seq: &mut S, compare: F)
where
    S: SortSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    Introsort::default().sort_by(seq.elements_mut(), compare);
}

/// Sorts a sequence in place by a key extracted from each element.
///
/// ```
/// use introsort::introsort_by_key;
///
/// let mut words = vec!["september", "may", "june"];
/// introsort_by_key(&mut words, |w| w.len());
///
/// assert_eq!(words, vec!["may", "june", "september"]);
/// ```
pub fn introsort_by_key<S, K, F>(seq: &mut S, mut key: F)
where
    S: SortSequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    Introsort::default().sort_by(seq.elements_mut(), |a, b| key(a).cmp(&key(b)));
}

/// Sorts a sequence in place, drawing pivots from the given generator.
///
/// ```
/// use introsort::introsort_with_rng;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut data: Vec<u32> = (0..100).rev().collect();
/// introsort_with_rng(&mut data, &mut rng);
///
/// assert!(data.is_sorted());
/// ```
pub fn introsort_with_rng<S, P>(seq: &mut S, pivots: &mut P)
where
    S: SortSequence + ?Sized,
    S::Item: Ord,
    P: PivotSource,
{
    Introsort::default().sort_with(
        seq.elements_mut(),
        &mut <S::Item as PartialOrd>::lt,
        pivots,
    );
}

/// A configured introsort.
///
/// [`Introsort::default`] matches the free functions: insertion sort below 16 elements and a
/// depth budget of `2 * floor(ln(n))`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Introsort {
    config: Config,
}

impl Introsort {
    /// Creates a sorter from a validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration this sorter was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Depth budget for a sequence of `len` elements.
    pub fn depth_budget(&self, len: usize) -> usize {
        self.config.depth_budget(len)
    }

    /// Sorts `v` by `Ord`, drawing pivots from [`rand::rng`].
    pub fn sort<T: Ord>(&self, v: &mut [T]) {
        self.sort_with(v, &mut T::lt, &mut rand::rng());
    }

    /// Sorts `v` with a comparator, drawing pivots from [`rand::rng`].
    pub fn sort_by<T, F>(&self, v: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_with(
            v,
            &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
            &mut rand::rng(),
        );
    }

    /// Sorts `v` with a strict less-than predicate and an explicit pivot source.
    ///
    /// Slices with fewer than two elements return immediately, without drawing a pivot.
    pub fn sort_with<T, F, P>(&self, v: &mut [T], is_less: &mut F, pivots: &mut P)
    where
        F: FnMut(&T, &T) -> bool,
        P: PivotSource,
    {
        let len = v.len();
        if len < 2 {
            return;
        }

        let depth_budget = self.depth_budget(len);
        trace!(len, depth_budget, "introsort");

        self.recurse(v, 0, len - 1, depth_budget, is_less, pivots);
    }

    /// Sorts the closed range `[low, high]` of `v` with an explicit depth budget.
    ///
    /// This is the checked form of the recursive step: it rejects bounds that do not describe a
    /// non-empty range inside `v` instead of panicking.
    ///
    /// ```
    /// use introsort::{Error, Introsort};
    /// use introsort::core::LastElement;
    ///
    /// let sorter = Introsort::default();
    /// let mut data = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    ///
    /// sorter
    ///     .sort_range(&mut data, 2, 6, 0, &mut |a: &i32, b: &i32| a < b, &mut LastElement)
    ///     .unwrap();
    /// assert_eq!(data, [9, 8, 3, 4, 5, 6, 7, 2, 1, 0]);
    ///
    /// let err = sorter
    ///     .sort_range(&mut data, 4, 10, 0, &mut |a: &i32, b: &i32| a < b, &mut LastElement)
    ///     .unwrap_err();
    /// assert_eq!(err, Error::RangeOutOfBounds { low: 4, high: 10, len: 10 });
    /// ```
    pub fn sort_range<T, F, P>(
        &self,
        v: &mut [T],
        low: usize,
        high: usize,
        depth_budget: usize,
        is_less: &mut F,
        pivots: &mut P,
    ) -> Result<()>
    where
        F: FnMut(&T, &T) -> bool,
        P: PivotSource,
    {
        if low > high {
            return Err(Error::InvertedRange { low, high });
        }
        if high >= v.len() {
            return Err(Error::RangeOutOfBounds {
                low,
                high,
                len: v.len(),
            });
        }

        self.recurse(v, low, high, depth_budget, is_less, pivots);
        Ok(())
    }

    /// The introsort dispatcher. `low <= high < v.len()` holds on every call.
    ///
    /// Only the smaller side of a partition is recursed into; the larger side is handled by the
    /// loop with the same decremented budget. Stack depth stays O(log n) for any budget.
    fn recurse<T, F, P>(
        &self,
        v: &mut [T],
        mut low: usize,
        mut high: usize,
        mut depth_budget: usize,
        is_less: &mut F,
        pivots: &mut P,
    ) where
        F: FnMut(&T, &T) -> bool,
        P: PivotSource,
    {
        loop {
            if high - low < self.config.insertion_threshold {
                insertion_sort(v, low, high, is_less);
                return;
            }

            if depth_budget == 0 {
                debug!(low, high, "depth budget exhausted, falling back to heapsort");
                heapsort(v, low, high + 1, is_less);
                return;
            }
            depth_budget -= 1;

            let p = randomized_partition(v, low, high, is_less, pivots);

            // Either side may be empty when the pivot lands on a boundary.
            if p - low < high - p {
                if p > low {
                    self.recurse(v, low, p - 1, depth_budget, is_less, pivots);
                }
                low = p + 1;
            } else {
                if p < high {
                    self.recurse(v, p + 1, high, depth_budget, is_less, pivots);
                }
                if p == low {
                    return;
                }
                high = p - 1;
            }
        }
    }
}

/// Insertion sort on the closed range `[low, high]`.
///
/// Each element moves left past every preceding element that is strictly greater, so equal
/// elements keep their relative order.
///
/// # Panics
///
/// Panics if `high >= v.len()`. An inverted range (`low > high`) is treated as empty.
pub fn insertion_sort<T, F>(v: &mut [T], low: usize, high: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        high < v.len(),
        "insertion_sort: high ({high}) out of bounds for length {}",
        v.len()
    );

    if low >= high {
        return;
    }

    // The element at `low` is trivially sorted.
    for i in (low + 1)..=high {
        let mut j = i;
        while j > low && is_less(&v[j], &v[j - 1]) {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Lomuto partition of the closed range `[low, high]` around the element at `high`.
///
/// Returns the final index `p` of the pivot. Afterwards every element in `[low, p)` is not
/// greater than the pivot and every element in `(p, high]` is not less than it. Elements equal
/// to the pivot may end up on either side.
///
/// # Panics
///
/// Panics if `low > high` or `high >= v.len()`.
pub fn partition<T, F>(v: &mut [T], low: usize, high: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        low <= high && high < v.len(),
        "partition: invalid range [{low}, {high}] for length {}",
        v.len()
    );

    let range = &mut v[low..=high];
    let last = range.len() - 1;

    let (head, tail) = range.split_at_mut(last);
    let pivot = &tail[0];

    let mut store = 0;
    for i in 0..last {
        // head[i] <= pivot
        if !is_less(pivot, &head[i]) {
            head.swap(i, store);
            store += 1;
        }
    }

    range.swap(store, last);
    low + store
}

/// Moves a randomly chosen element of `[low, high]` to `high`, then [`partition`]s.
///
/// The index drawn from `pivots` is clamped into the range.
///
/// # Panics
///
/// Panics if `low > high` or `high >= v.len()`.
pub fn randomized_partition<T, F, P>(
    v: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
    pivots: &mut P,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
    P: PivotSource,
{
    assert!(
        low <= high && high < v.len(),
        "randomized_partition: invalid range [{low}, {high}] for length {}",
        v.len()
    );

    let r = pivots.pick(low, high).clamp(low, high);
    v.swap(r, high);

    partition(v, low, high, is_less)
}

/// Heapsort on the half-open range `[begin, end)`.
///
/// Builds a max-heap in linear time, then repeatedly swaps the root behind the shrinking heap.
/// O(n log n) regardless of the input.
///
/// # Panics
///
/// Panics if `begin > end` or `end > v.len()`.
pub fn heapsort<T, F>(v: &mut [T], begin: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let v = &mut v[begin..end];
    let len = v.len();
    if len < 2 {
        return;
    }

    for node in (0..len / 2).rev() {
        sift_down(v, node, is_less);
    }

    for last in (1..len).rev() {
        v.swap(0, last);
        sift_down(&mut v[..last], 0, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
