//! Timed stress run over the full 32-bit universe.
//!
//! Inserts N random keys, queries them, runs N successor probes, then
//! deletes everything and verifies the set is empty. A BTreeSet runs
//! the same workload as the baseline.
//!
//! Usage: cargo run --release --example stress -- <N> [veb|btree]

use std::collections::BTreeSet;
use std::env;
use std::process;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use veb_set::VebSet;

fn main() {
    let mut args = env::args().skip(1);
    let n: usize = match args.next().and_then(|v| v.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("Specify the number of items for the run.");
            process::exit(1);
        }
    };
    let mode = args.next().unwrap_or_default();

    // Same seeded keys for both structures
    let mut rng = StdRng::seed_from_u64(7);
    let in_keys: Vec<u32> = (0..n).map(|_| rng.gen()).collect();
    let out_keys: Vec<u32> = (0..n).map(|_| rng.gen()).collect();

    if mode.is_empty() || mode == "btree" {
        println!("Testing BTreeSet...");
        let mut bst = BTreeSet::new();

        let start = Instant::now();
        let mut unique = 0usize;
        for &k in &in_keys {
            if bst.insert(k) {
                unique += 1;
            }
        }
        let secs = start.elapsed().as_secs_f64();
        println!("Time to insert {n} items: {secs:.3} secs ({unique} unique)");

        let start = Instant::now();
        let mut hits = 0usize;
        for &k in &in_keys {
            if bst.contains(&k) {
                hits += 1;
            }
        }
        let secs = start.elapsed().as_secs_f64();
        println!("Time to query {n} items: {secs:.3} secs ({hits} hits)");

        let start = Instant::now();
        let mut found = 0usize;
        for &k in &out_keys {
            if bst.range(k..).next().is_some() {
                found += 1;
            }
        }
        let secs = start.elapsed().as_secs_f64();
        println!("Time to successor query {n} items: {secs:.3} secs ({found} found)");

        let start = Instant::now();
        let mut removed = 0usize;
        for &k in &in_keys {
            if bst.remove(&k) {
                removed += 1;
            }
        }
        let secs = start.elapsed().as_secs_f64();
        println!("Time to delete {n} items: {secs:.3} secs ({removed} removed)");
    }

    if mode.is_empty() || mode == "veb" {
        println!("Testing van Emde Boas set...");
        let mut set = VebSet::new();

        let start = Instant::now();
        let mut unique = 0usize;
        for &k in &in_keys {
            if set.insert(k) {
                unique += 1;
            }
        }
        let secs = start.elapsed().as_secs_f64();
        println!("Time to insert {n} items: {secs:.3} secs ({unique} unique)");

        let start = Instant::now();
        let mut hits = 0usize;
        for &k in &in_keys {
            if set.contains(k) {
                hits += 1;
            }
        }
        let secs = start.elapsed().as_secs_f64();
        println!("Time to query {n} items: {secs:.3} secs ({hits} hits)");

        let start = Instant::now();
        let mut found = 0usize;
        for &k in &out_keys {
            if set.successor(k).is_some() {
                found += 1;
            }
        }
        let secs = start.elapsed().as_secs_f64();
        println!("Time to successor query {n} items: {secs:.3} secs ({found} found)");

        let start = Instant::now();
        let mut removed = 0usize;
        for &k in &in_keys {
            if set.remove(k) {
                removed += 1;
            }
        }
        let secs = start.elapsed().as_secs_f64();
        println!("Time to delete {n} items: {secs:.3} secs ({removed} removed)");

        if !set.is_empty() || set.min().is_some() || set.max().is_some() {
            eprintln!("delete failed to clear the set");
            process::exit(1);
        }
    }
}
