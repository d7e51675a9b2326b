//! Demonstrates the three public entry points: a one-shot within-set query,
//! a one-shot cross-set query, and a `CachedSymdel` handle reused across
//! several queries against the same reference set.
//!
//! Run with: cargo run --example simple_usage

use symdel::{symdel_within, CachedSymdel};

fn print_matches(title: &str, matches: &[symdel::Match]) {
    println!("-- {} ({} matches) --", title, matches.len());
    for m in matches {
        println!("  ({}, {}) distance {}", m.i, m.j, m.distance);
    }
}

fn main() {
    let strings = ["fizz", "fuzz", "buzz", "jazz"];

    let within = symdel_within(strings, 1, true).unwrap();
    print_matches("within-set, k=1", &within);

    let reference = CachedSymdel::new(["fooo", "barr", "bazz", "buzz"], 2).unwrap();
    let cross = reference.symdel_cross(strings, 2, true).unwrap();
    print_matches("cross-set against cached reference, k=2", &cross);

    // Re-querying the same handle does not rebuild the reference index.
    let within_reference = reference.symdel_within(1, true).unwrap();
    print_matches("within the cached reference, k=1", &within_reference);
}
