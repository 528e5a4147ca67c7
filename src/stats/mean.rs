/// Mergeable running mean over a stream of observations.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningMean {
    count: u64,
    mean: f64,
}

impl RunningMean {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self { count: 0, mean: 0.0 }
    }

    /// Feed one observation.
    pub fn increment(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    /// Fold another accumulator into this one, weighting by counts.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        let total = self.count + other.count;
        self.mean += (other.mean - self.mean) * other.count as f64 / total as f64;
        self.count = total;
    }

    /// Current mean, `NaN` when nothing has been observed.
    pub fn result(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Number of observations folded in so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}
