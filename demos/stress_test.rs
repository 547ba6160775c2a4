//! Stress Suite for TextChain
//!
//! Covers: large sorts, reversal of long chains, and destructive merges
//!
//! Run with: cargo run --release --example stress_test

use std::time::Instant;
use textchain::Sequence;

fn main() {
    println!("========================================");
    println!(" TextChain Stress Suite");
    println!("========================================\n");

    test_merge_sort_scaling(&[1_000, 10_000, 100_000]);
    test_long_chain_reverse(1_000_000);
    test_merge_halves(200_000);
}

/// Deterministic pseudo-random keys.
fn keys(n: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            format!("{:012x}", state >> 20)
        })
        .collect()
}

// -----------------------------------------------------------------------------
// 1. Merge sort scaling
// -----------------------------------------------------------------------------
fn test_merge_sort_scaling(sizes: &[usize]) {
    println!("Test: Merge sort scaling");

    for &n in sizes {
        let items = keys(n, n as u64);
        let mut seq = Sequence::from_array(&items);

        let start = Instant::now();
        seq.merge_sort();
        let duration = start.elapsed();

        let sorted = seq.iter().zip(seq.iter().skip(1)).all(|(a, b)| a <= b);
        println!(
            "   n = {:>7}:  {:>10.2?}  sorted = {}  len = {}",
            n,
            duration,
            sorted,
            seq.len()
        );
    }
    println!();
}

// -----------------------------------------------------------------------------
// 2. Reversal and release of a long chain
// -----------------------------------------------------------------------------
fn test_long_chain_reverse(n: usize) {
    println!("Test: Reverse a {} element chain", n);

    let items: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    let mut seq = Sequence::from_array(&items);

    let start = Instant::now();
    seq.reverse();
    let reverse_time = start.elapsed();

    let front_ok = seq.front().map(|e| e == (n - 1).to_string()).unwrap_or(false);

    let start = Instant::now();
    drop(seq);
    let drop_time = start.elapsed();

    println!("   Reverse Time:     {:>8.2?}", reverse_time);
    println!("   Drop Time:        {:>8.2?}", drop_time);
    println!("   Front Correct:    {}", front_ok);
    println!("   [Analysis]: Both walks are iterative; no stack growth with length.\n");
}

// -----------------------------------------------------------------------------
// 3. Destructive merge of two sorted halves
// -----------------------------------------------------------------------------
fn test_merge_halves(n: usize) {
    println!("Test: Merge two sorted sequences of {} elements", n);

    let mut left = Sequence::from_array(&keys(n, 7));
    let mut right = Sequence::from_array(&keys(n, 11));
    left.merge_sort();
    right.merge_sort();

    let start = Instant::now();
    left.merge(&mut right);
    let duration = start.elapsed();

    println!("   Merge Time:       {:>8.2?}", duration);
    println!("   Merged Length:    {} (Expected: {})", left.len(), 2 * n);
    println!("   Donor Length:     {}", right.len());
    println!();
}
