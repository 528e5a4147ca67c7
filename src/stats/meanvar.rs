/// Mergeable running mean and variance (Welford's online algorithm).
///
/// Tracks the mean and the centered sum of squares `m2 = Σ (x - mean)²`,
/// avoiding the catastrophic cancellation of the naive `E[X²] - E[X]²`
/// formula.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct MeanVariance {
    count: u64,
    mean: f64,
    m2: f64,
}

impl MeanVariance {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Feed one observation.
    pub fn increment(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Fold another accumulator into this one.
    ///
    /// Uses the pairwise combination of Welford states, which stays exact for
    /// shards of very different sizes.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }
        let n1 = self.count as f64;
        let n2 = other.count as f64;
        let total = n1 + n2;
        let delta = other.mean - self.mean;
        self.m2 += other.m2 + delta * delta * n1 * n2 / total;
        self.mean += delta * n2 / total;
        self.count += other.count;
    }

    /// Current mean, `NaN` when nothing has been observed.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Bias-corrected (n−1) variance. `NaN` when empty, 0 for one observation.
    pub fn sample_variance(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            1 => 0.0,
            n => self.m2 / (n - 1) as f64,
        }
    }

    /// Population (n) variance. `NaN` when empty.
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Number of observations folded in so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}
