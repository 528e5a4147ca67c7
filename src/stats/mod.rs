//! Running-statistics primitives shared by the estimators.
//!
//! Each accumulator is a value-like state: feed observations one at a time,
//! combine shards with `merge`, read results at any point. Merges use the
//! pairwise combination formulas (Chan et al.) so unequal-sized shards reduce
//! without the precision loss of re-averaging finished results.

mod covariance;
mod mean;
mod meanvar;

pub use covariance::BivariateCovariance;
pub use mean::RunningMean;
pub use meanvar::MeanVariance;
