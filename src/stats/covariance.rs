/// Mergeable bivariate covariance accumulator.
///
/// Maintains running marginal means and the comoment
/// `Σ (x - mean_x)(y - mean_y)` over a stream of `(x, y)` samples, one pass,
/// no raw-sample storage. The bias flag chosen at construction decides
/// whether [`result`](Self::result) divides by `n` or `n - 1`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct BivariateCovariance {
    bias_corrected: bool,
    count: u64,
    mean_x: f64,
    mean_y: f64,
    comoment: f64,
}

impl BivariateCovariance {
    /// Create an empty accumulator. `bias_corrected` selects the `n - 1`
    /// denominator for [`result`](Self::result).
    pub fn new(bias_corrected: bool) -> Self {
        Self {
            bias_corrected,
            count: 0,
            mean_x: 0.0,
            mean_y: 0.0,
            comoment: 0.0,
        }
    }

    /// Feed one `(x, y)` sample.
    pub fn increment(&mut self, x: f64, y: f64) {
        self.count += 1;
        let n = self.count as f64;
        let delta_x = x - self.mean_x;
        let delta_y = y - self.mean_y;
        self.mean_x += delta_x / n;
        self.mean_y += delta_y / n;
        self.comoment += delta_x * delta_y * (n - 1.0) / n;
    }

    /// Fold another accumulator into this one.
    ///
    /// Combines means, comoments, and counts pairwise, so shards of unequal
    /// size merge without re-averaging error. The bias flag of `self` is
    /// kept.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            self.count = other.count;
            self.mean_x = other.mean_x;
            self.mean_y = other.mean_y;
            self.comoment = other.comoment;
            return;
        }
        let n1 = self.count as f64;
        let n2 = other.count as f64;
        let total = n1 + n2;
        let delta_x = other.mean_x - self.mean_x;
        let delta_y = other.mean_y - self.mean_y;
        self.comoment += other.comoment + delta_x * delta_y * n1 * n2 / total;
        self.mean_x += delta_x * n2 / total;
        self.mean_y += delta_y * n2 / total;
        self.count += other.count;
    }

    /// Covariance estimate: `comoment / n`, or `comoment / (n - 1)` when
    /// bias-corrected. Non-finite when the accumulator is empty.
    pub fn result(&self) -> f64 {
        let n = self.count as f64;
        if self.bias_corrected {
            self.comoment / (n - 1.0)
        } else {
            self.comoment / n
        }
    }

    /// Running mean of the `x` marginal, `NaN` when empty.
    pub fn mean_x(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean_x
        }
    }

    /// Running mean of the `y` marginal, `NaN` when empty.
    pub fn mean_y(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean_y
        }
    }

    /// Number of samples folded in so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}
