//! Shared generators and assertions for the integration tests.

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Deterministic RNG so test failures reproduce.
pub fn rng(seed: u64) -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(seed)
}

/// Random ensemble of `count` ACGT sequences of shared length `len`.
pub fn random_ensemble(rng: &mut impl Rng, count: usize, len: usize) -> Vec<Vec<u8>> {
    const ALPHABET: [u8; 4] = *b"ACGT";
    (0..count)
        .map(|_| (0..len).map(|_| ALPHABET[rng.gen_range(0..4)]).collect())
        .collect()
}

/// Random 0.0/1.0 indicator profile of the given length.
pub fn random_profile(rng: &mut impl Rng, len: usize) -> Vec<f64> {
    (0..len)
        .map(|_| if rng.gen_bool(0.3) { 1.0 } else { 0.0 })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64, context: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{context}: got {actual}, expected {expected} (tolerance {tolerance})"
    );
}
