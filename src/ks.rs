//! The Ks statistic: overall substitution rate of an ensemble.

use crate::accumulate::ProfileAccumulator;
use crate::stats::MeanVariance;

/// Global substitution-rate statistic (Ks).
///
/// Feeds every substitution indicator — all positions of all pairs — into
/// one running mean/variance state. The mean is the overall divergence of
/// the ensemble; the population variance is what the autocovariance curve
/// reads at lag 0.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Ks {
    stats: MeanVariance,
}

impl Ks {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            stats: MeanVariance::new(),
        }
    }

    /// Feed one substitution indicator.
    pub fn increment(&mut self, value: f64) {
        self.stats.increment(value);
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &Self) {
        self.stats.merge(&other.stats);
    }

    /// Mean substitution rate, `NaN` when empty.
    pub fn mean(&self) -> f64 {
        self.stats.mean()
    }

    /// Bias-corrected (n−1) variance of the indicator stream.
    pub fn sample_variance(&self) -> f64 {
        self.stats.sample_variance()
    }

    /// Population (n) variance of the indicator stream.
    pub fn population_variance(&self) -> f64 {
        self.stats.population_variance()
    }

    /// Number of indicators folded in so far.
    pub fn count(&self) -> u64 {
        self.stats.count()
    }
}

impl ProfileAccumulator for Ks {
    fn record(&mut self, profile: &[f64]) {
        for &value in profile {
            self.increment(value);
        }
    }

    fn merge(&mut self, other: &Self) {
        Ks::merge(self, other);
    }
}
