//! Sorts integers, floats, characters and strings, printing each before and after.
//!
//! Run with `cargo run --example showcase`. Set `RUST_LOG=introsort=trace` to see every sort
//! call and each heapsort fallback.

use introsort::{introsort, introsort_by};
use std::fmt::Display;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const PER_ROW: usize = 5;

fn show<T: Display>(label: &str, values: &[T], width: usize) {
    let rule = "-".repeat(width * PER_ROW);
    println!("{label}:\n{rule}");
    for row in values.chunks(PER_ROW) {
        let line: String = row.iter().map(|v| format!("{v:>width$}")).collect();
        println!("{line}");
    }
    println!("{rule}");
}

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("introsort=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut ints = [5, 7, -8, 9, 10, 4, -7, 0, -12, 1, 6, 2, 3, -4, -15, 12];
    show("Before", &ints, 4);
    introsort(&mut ints);
    show("After", &ints, 4);

    let mut floats = [3.142, 77.8, -66.6, -4.0e2, 4.0e-2, 4096.0, 1024.0];
    let formatted = |v: &[f64]| v.iter().map(|x| format!("{x:.3}")).collect::<Vec<_>>();
    show("Before", &formatted(&floats), 10);
    introsort_by(&mut floats, f64::total_cmp);
    show("After", &formatted(&floats), 10);

    let mut chars: Vec<char> = "a quick brown fox jumps over the lazy dog".chars().collect();
    show("Before", &chars, 2);
    introsort(&mut chars);
    show("After", &chars, 2);

    let mut months = [
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december",
    ]
    .map(String::from);
    show("Before", &months, 12);
    introsort(&mut months);
    show("After", &months, 12);

    info!(
        ints = ints.len(),
        floats = floats.len(),
        chars = chars.len(),
        months = months.len(),
        "sorted all samples"
    );
}
