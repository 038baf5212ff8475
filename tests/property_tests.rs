use introsort::algo::{heapsort, insertion_sort, partition, randomized_partition};
use introsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Counts pivot draws; every randomized partition draws exactly once.
struct Counting {
    draws: usize,
    rng: StdRng,
}

impl Counting {
    fn new(seed: u64) -> Self {
        Self {
            draws: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PivotSource for Counting {
    fn pick(&mut self, low: usize, high: usize) -> usize {
        self.draws += 1;
        self.rng.random_range(low..=high)
    }
}

fn lt(a: &i32, b: &i32) -> bool {
    a < b
}

fn assert_sorted_permutation(actual: &[i32], original: &[i32]) {
    let mut expected = original.to_vec();
    expected.sort();

    if actual != expected.as_slice() {
        // Find first mismatch
        for (i, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
            if a != b {
                panic!("Mismatch at index {}: Got {:?}, Expected {:?}", i, a, b);
            }
        }
        panic!(
            "Lengths differ? Actual: {}, Expected: {}",
            actual.len(),
            expected.len()
        );
    }
}

#[test]
fn test_seeded_permutations() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let len = rng.random_range(0..2_000);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();

        let mut actual = input.clone();
        introsort_with_rng(&mut actual, &mut rng);

        assert_sorted_permutation(&actual, &input);
    }
}

#[test]
fn test_idempotence() {
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<i32> = (0..3_000).map(|_| rng.random()).collect();

    let mut once = input.clone();
    introsort(&mut once);

    let mut twice = once.clone();
    introsort(&mut twice);

    assert_eq!(once, twice);
    assert_sorted_permutation(&twice, &input);
}

#[test]
fn test_tiny_inputs_never_partition() {
    let sorter = Introsort::default();

    let mut empty: Vec<i32> = vec![];
    let mut source = Counting::new(1);
    sorter.sort_with(&mut empty, &mut lt, &mut source);
    assert_eq!(source.draws, 0);

    let mut single = vec![42];
    let mut source = Counting::new(1);
    sorter.sort_with(&mut single, &mut lt, &mut source);
    assert_eq!(source.draws, 0);
    assert_eq!(single, vec![42]);
}

#[test]
fn test_threshold_boundary() {
    let sorter = Introsort::default();

    // 16 elements: high - low = 15, entirely insertion sorted.
    let input: Vec<i32> = (0..16).rev().collect();
    let mut actual = input.clone();
    let mut source = Counting::new(3);
    sorter.sort_with(&mut actual, &mut lt, &mut source);
    assert_eq!(source.draws, 0);
    assert_sorted_permutation(&actual, &input);

    // 17 elements: one partition step first.
    let input: Vec<i32> = (0..17).rev().collect();
    let mut actual = input.clone();
    let mut source = Counting::new(3);
    sorter.sort_with(&mut actual, &mut lt, &mut source);
    assert!(source.draws >= 1);
    assert_sorted_permutation(&actual, &input);
}

#[test]
fn test_depth_exhaustion() {
    let sorter = Introsort::default();

    let input = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0, 15, 14, 13, 12, 11, 10];
    let mut actual = input.clone();
    sorter
        .sort_range(&mut actual, 0, 15, 0, &mut lt, &mut Counting::new(0))
        .unwrap();
    assert_eq!(actual, (0..16).collect::<Vec<_>>());

    // Large enough to skip insertion sort: budget 0 goes straight to heapsort.
    let mut rng = StdRng::seed_from_u64(11);
    let input: Vec<i32> = (0..1_000).map(|_| rng.random_range(0..100)).collect();
    let mut actual = input.clone();
    let mut source = Counting::new(0);
    sorter
        .sort_range(&mut actual, 0, 999, 0, &mut lt, &mut source)
        .unwrap();
    assert_eq!(source.draws, 0);
    assert_sorted_permutation(&actual, &input);
}

#[test]
fn test_zero_depth_multiplier() {
    let sorter = Introsort::new(Config::default().with_depth_multiplier(0)).unwrap();
    assert_eq!(sorter.depth_budget(1_000_000), 0);

    let input: Vec<i32> = (0..2_000).map(|i| (i * 31) % 257).collect();
    let mut actual = input.clone();
    let mut source = Counting::new(5);
    sorter.sort_with(&mut actual, &mut lt, &mut source);
    assert_eq!(source.draws, 0);
    assert_sorted_permutation(&actual, &input);
}

#[test]
fn test_unbounded_budget_with_last_element_pivots() {
    let sorter = Introsort::new(Config::default().with_depth_multiplier(usize::MAX)).unwrap();

    // A small stack makes any linear-depth recursion fail loudly.
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(move || {
            let mut ascending: Vec<i32> = (0..8_000).collect();
            sorter.sort_with(&mut ascending, &mut lt, &mut introsort::LastElement);

            let mut descending: Vec<i32> = (0..8_000).rev().collect();
            sorter.sort_with(&mut descending, &mut lt, &mut introsort::LastElement);

            (ascending, descending)
        })
        .unwrap();

    let (ascending, descending) = handle.join().unwrap();
    assert_eq!(ascending, (0..8_000).collect::<Vec<_>>());
    assert_eq!(descending, (0..8_000).collect::<Vec<_>>());
}

#[test]
fn test_descending_input() {
    for len in [64, 65, 100, 1_000, 100_000] {
        let input: Vec<i32> = (0..len).rev().collect();
        let mut actual = input.clone();
        introsort(&mut actual);
        assert_eq!(actual, (0..len).collect::<Vec<_>>());
    }
}

#[test]
fn test_partition_postcondition() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..500 {
        let len = rng.random_range(1..100);
        let mut v: Vec<i32> = (0..len).map(|_| rng.random_range(0..10)).collect();
        let pivot = v[len - 1];

        let p = partition(&mut v, 0, len - 1, &mut lt);

        assert_eq!(v[p], pivot);
        assert!(v[..p].iter().all(|&x| x <= pivot));
        assert!(v[p + 1..].iter().all(|&x| x >= pivot));
    }
}

#[test]
fn test_randomized_partition_draws_once() {
    let mut v: Vec<i32> = (0..50).rev().collect();
    let mut source = Counting::new(8);
    let p = randomized_partition(&mut v, 10, 40, &mut lt, &mut source);
    assert_eq!(source.draws, 1);
    assert!((10..=40).contains(&p));
    assert_eq!(&v[..10], &(40..50).rev().collect::<Vec<_>>()[..]);
    assert_eq!(&v[41..], &(0..9).rev().collect::<Vec<_>>()[..]);
}

#[test]
fn test_building_blocks_sort_subranges() {
    let mut rng = StdRng::seed_from_u64(2024);
    let input: Vec<i32> = (0..64).map(|_| rng.random_range(-1_000..1_000)).collect();

    let mut by_insertion = input.clone();
    insertion_sort(&mut by_insertion, 8, 40, &mut lt);
    assert!(by_insertion[8..=40].is_sorted());
    assert_eq!(by_insertion[..8], input[..8]);
    assert_eq!(by_insertion[41..], input[41..]);

    let mut by_heap = input.clone();
    heapsort(&mut by_heap, 8, 41, &mut lt);
    assert_eq!(by_heap, by_insertion);
}

#[test]
fn test_non_total_comparator_terminates() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut input: Vec<f64> = (0..5_000)
        .map(|i| {
            if i % 7 == 0 {
                f64::NAN
            } else {
                rng.random_range(-1.0..1.0)
            }
        })
        .collect();

    // partial_cmp treats NaN as equal to everything, which is not a total order.
    introsort_by(&mut input, |a, b| {
        a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
    });

    assert_eq!(input.len(), 5_000);
    assert_eq!(input.iter().filter(|x| x.is_nan()).count(), 715);
}

#[test]
fn test_inconsistent_comparator_terminates() {
    let mut input: Vec<u32> = (0..10_000).collect();
    let mut flip = StdRng::seed_from_u64(60);

    introsort_by(&mut input, |_, _| match flip.random_range(0..3) {
        0 => std::cmp::Ordering::Less,
        1 => std::cmp::Ordering::Equal,
        _ => std::cmp::Ordering::Greater,
    });

    // Still a permutation.
    input.sort();
    assert_eq!(input, (0..10_000).collect::<Vec<_>>());
}
