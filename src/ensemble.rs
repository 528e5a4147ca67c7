//! Drivers over whole sequence ensembles.
//!
//! Each driver enumerates the `n·(n−1)/2` unordered pairs of an ensemble,
//! reduces every pair to its substitution profile, and feeds the profile into
//! one accumulator. The loop is embarrassingly parallel over pairs; callers
//! that want to shard it build one accumulator per worker, run disjoint pair
//! subsets through each, and reduce with `merge`/`merge_all` — these drivers
//! are the single-threaded reference for that reduction.
//!
//! Preconditions the accumulators only debug-assert (equal sequence lengths,
//! `max_lag` within the sequence length) are validated here and surfaced as
//! [`EnsembleError`].

use thiserror::Error;
use tracing::debug;

use crate::accumulate::ProfileAccumulator;
use crate::ct::{DirectAutocovariance, SpectralAutocovariance};
use crate::fourier::{CorrelationEngine, CorrelationMode, FftCorrelation};
use crate::ks::Ks;
use crate::profile::substitution_profile;

/// Invalid ensemble input rejected at the driver boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnsembleError {
    /// A sequence's length disagrees with the first sequence's.
    #[error("sequence {index} has length {actual}, expected {expected}")]
    LengthMismatch {
        /// Index of the offending sequence in the ensemble.
        index: usize,
        /// Length of the first sequence, which sets the ensemble length.
        expected: usize,
        /// Length actually found.
        actual: usize,
    },

    /// The requested lag range does not fit the sequence length.
    #[error("max lag {max_lag} exceeds sequence length {len}")]
    LagExceedsLength {
        /// Number of lags requested.
        max_lag: usize,
        /// Shared length of the ensemble's sequences.
        len: usize,
    },
}

/// All unordered index pairs `(i, j)` with `i < j < n`, in row order.
pub fn unordered_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Estimate the Ct curve with the direct estimator.
///
/// Uses population (uncorrected) covariance at every lag. An ensemble with
/// fewer than two sequences yields zero pairs and an empty accumulator,
/// which reads as `NaN`.
pub fn ct_direct<S: AsRef<[u8]>>(
    seqs: &[S],
    max_lag: usize,
) -> Result<DirectAutocovariance, EnsembleError> {
    validate(seqs, Some(max_lag))?;
    let mut ct = DirectAutocovariance::new(max_lag, false);
    run(seqs, &mut ct);
    Ok(ct)
}

/// Estimate the Ct curve with the built-in FFT engine in the given mode.
pub fn ct_spectral<S: AsRef<[u8]>>(
    seqs: &[S],
    max_lag: usize,
    mode: CorrelationMode,
) -> Result<SpectralAutocovariance<FftCorrelation>, EnsembleError> {
    ct_with_engine(seqs, max_lag, FftCorrelation::new(mode))
}

/// Estimate the Ct curve with a caller-supplied transform engine.
pub fn ct_with_engine<S: AsRef<[u8]>, E: CorrelationEngine>(
    seqs: &[S],
    max_lag: usize,
    engine: E,
) -> Result<SpectralAutocovariance<E>, EnsembleError> {
    validate(seqs, Some(max_lag))?;
    let mut ct = SpectralAutocovariance::with_engine(max_lag, engine);
    run(seqs, &mut ct);
    Ok(ct)
}

/// Compute the Ks statistic: mean and variance of the substitution
/// indicator across every position of every unordered pair.
pub fn ks<S: AsRef<[u8]>>(seqs: &[S]) -> Result<Ks, EnsembleError> {
    validate(seqs, None)?;
    let mut ks = Ks::new();
    run(seqs, &mut ks);
    Ok(ks)
}

fn validate<S: AsRef<[u8]>>(seqs: &[S], max_lag: Option<usize>) -> Result<(), EnsembleError> {
    let Some(first) = seqs.first() else {
        return Ok(());
    };
    let expected = first.as_ref().len();
    for (index, seq) in seqs.iter().enumerate().skip(1) {
        let actual = seq.as_ref().len();
        if actual != expected {
            return Err(EnsembleError::LengthMismatch {
                index,
                expected,
                actual,
            });
        }
    }
    if let Some(max_lag) = max_lag {
        if max_lag > expected {
            return Err(EnsembleError::LagExceedsLength {
                max_lag,
                len: expected,
            });
        }
    }
    Ok(())
}

fn run<S: AsRef<[u8]>, A: ProfileAccumulator>(seqs: &[S], acc: &mut A) {
    let n = seqs.len();
    debug!(sequences = n, pairs = n * n.saturating_sub(1) / 2, "ensemble pass");
    for (i, j) in unordered_pairs(n) {
        let profile = substitution_profile(seqs[i].as_ref(), seqs[j].as_ref());
        acc.record(&profile);
    }
}
