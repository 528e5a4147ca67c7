//! # seqcorr — Ct curves and Ks statistics over sequence ensembles
//!
//! Every unordered pair of equal-length sequences reduces to a binary
//! substitution profile (1.0 where the pair differs, 0.0 where it matches).
//! The profiles aggregate two ways:
//!
//! 1. **Ct**: the autocovariance of the substitution indicator at each lag,
//!    estimated either directly ([`DirectAutocovariance`], O(lags · len) per
//!    pair) or via FFT autocorrelation ([`SpectralAutocovariance`],
//!    O(len · log len) per pair). The two estimators are statistically
//!    equivalent.
//! 2. **Ks**: one running mean/variance over every indicator value ([`Ks`]),
//!    the ensemble's overall substitution rate.
//!
//! All accumulators build incrementally and merge associatively, so disjoint
//! pair batches can be processed separately (one accumulator per shard) and
//! reduced afterwards with [`ProfileAccumulator::merge`] or [`merge_all`].
//!
//! ## Usage example
//!
//! ```
//! use seqcorr::{ct_spectral, ks, CorrelationMode};
//!
//! let seqs: Vec<&[u8]> = vec![b"AAAA", b"AABA", b"ABAA"];
//!
//! let ct = ct_spectral(&seqs, 3, CorrelationMode::Circular)?;
//! let ks = ks(&seqs)?;
//!
//! // Lag-0 autocovariance is the variance of the indicator stream.
//! assert!((ct.result(0) - ks.population_variance()).abs() < 1e-9);
//! # Ok::<(), seqcorr::EnsembleError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one stage of the pipeline
pub mod accumulate; // accumulate/merge contract shared by the estimators
pub mod ct; // lag-autocovariance estimators (direct and spectral)
pub mod ensemble; // pair enumeration, validation, drivers
pub mod fourier; // FFT autocorrelation engine
pub mod ks; // global substitution-rate statistic
pub mod profile; // substitution profile generator
pub mod stats; // mergeable running-statistics primitives

// Re-exports for convenience
pub use accumulate::{merge_all, ProfileAccumulator};
pub use ct::{DirectAutocovariance, SpectralAutocovariance};
pub use ensemble::{ct_direct, ct_spectral, ct_with_engine, ks, unordered_pairs, EnsembleError};
pub use fourier::{autocorrelation, CorrelationEngine, CorrelationMode, FftCorrelation};
pub use ks::Ks;
pub use profile::substitution_profile;
pub use stats::{BivariateCovariance, MeanVariance, RunningMean};
