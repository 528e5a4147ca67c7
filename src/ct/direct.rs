use crate::accumulate::ProfileAccumulator;
use crate::stats::BivariateCovariance;

/// Direct lag-covariance accumulator.
///
/// Keeps one [`BivariateCovariance`] state per lag and feeds it every
/// `(profile[k], profile[k+lag])` sample — a single streaming pass, no raw
/// samples stored. Costs O(num_lags · len) per profile where the spectral
/// estimator costs O(len · log len), but tracks per-lag marginal means and
/// sample counts the spectral one cannot provide.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectAutocovariance {
    lags: Vec<BivariateCovariance>,
}

impl DirectAutocovariance {
    /// Create an accumulator tracking lags `[0, num_lags)`. The bias flag is
    /// forwarded to every per-lag covariance state.
    pub fn new(num_lags: usize, bias_corrected: bool) -> Self {
        Self {
            lags: (0..num_lags)
                .map(|_| BivariateCovariance::new(bias_corrected))
                .collect(),
        }
    }

    /// Feed one `(x[k], x[k+lag])` sample into the given lag.
    ///
    /// # Panics
    /// Panics when `lag >= num_lags()`.
    pub fn increment(&mut self, lag: usize, x: f64, y: f64) {
        self.lags[lag].increment(x, y);
    }

    /// Covariance estimate at `lag`, non-finite while the lag has no
    /// samples.
    ///
    /// # Panics
    /// Panics when `lag >= num_lags()`.
    pub fn result(&self, lag: usize) -> f64 {
        self.lags[lag].result()
    }

    /// Product of the marginal means at `lag`, for diagnostics and bias
    /// policy.
    ///
    /// # Panics
    /// Panics when `lag >= num_lags()`.
    pub fn mean_xy(&self, lag: usize) -> f64 {
        self.lags[lag].mean_x() * self.lags[lag].mean_y()
    }

    /// Number of samples folded into `lag`.
    ///
    /// # Panics
    /// Panics when `lag >= num_lags()`.
    pub fn count(&self, lag: usize) -> u64 {
        self.lags[lag].count()
    }

    /// Number of lags tracked, fixed at construction.
    pub fn num_lags(&self) -> usize {
        self.lags.len()
    }

    /// The whole autocovariance curve in lag order.
    pub fn curve(&self) -> Vec<f64> {
        self.lags.iter().map(BivariateCovariance::result).collect()
    }
}

impl ProfileAccumulator for DirectAutocovariance {
    fn record(&mut self, profile: &[f64]) {
        // Lags at or beyond the profile length have no valid start position
        // and receive nothing.
        for (lag, state) in self.lags.iter_mut().enumerate() {
            for k in 0..profile.len().saturating_sub(lag) {
                state.increment(profile[k], profile[k + lag]);
            }
        }
    }

    fn merge(&mut self, other: &Self) {
        debug_assert_eq!(
            self.num_lags(),
            other.num_lags(),
            "merged accumulators must track the same lag range"
        );
        for (mine, theirs) in self.lags.iter_mut().zip(other.lags.iter()) {
            mine.merge(theirs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_matches_explicit_increments() {
        let profile = [0.0, 1.0, 1.0, 0.0, 1.0];
        let max_lag = 3;

        let mut recorded = DirectAutocovariance::new(max_lag, false);
        recorded.record(&profile);

        let mut explicit = DirectAutocovariance::new(max_lag, false);
        for lag in 0..max_lag {
            for k in 0..profile.len() - lag {
                explicit.increment(lag, profile[k], profile[k + lag]);
            }
        }

        for lag in 0..max_lag {
            assert_eq!(recorded.count(lag), explicit.count(lag));
            assert!((recorded.result(lag) - explicit.result(lag)).abs() < 1e-12);
        }
    }

    #[test]
    fn lag_zero_is_population_variance() {
        let profile = [0.0, 0.0, 1.0, 0.0];
        let mut ct = DirectAutocovariance::new(1, false);
        ct.record(&profile);
        assert!((ct.result(0) - 0.1875).abs() < 1e-12);
        assert_eq!(ct.count(0), 4);
    }

    #[test]
    fn sample_counts_shrink_with_lag() {
        let profile = [1.0; 10];
        let mut ct = DirectAutocovariance::new(4, false);
        ct.record(&profile);
        for lag in 0..4 {
            assert_eq!(ct.count(lag), (10 - lag) as u64);
        }
    }

    #[test]
    fn short_profiles_skip_unreachable_lags() {
        let mut ct = DirectAutocovariance::new(6, false);
        ct.record(&[1.0, 0.0, 1.0]);
        assert_eq!(ct.count(2), 1);
        assert_eq!(ct.count(3), 0);
        assert!(ct.result(5).is_nan());
    }

    #[test]
    fn merge_matches_single_accumulator() {
        let profiles = [
            vec![0.0, 1.0, 0.0, 1.0, 1.0],
            vec![1.0, 1.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0, 0.0],
        ];

        let mut whole = DirectAutocovariance::new(3, false);
        for profile in &profiles {
            whole.record(profile);
        }

        let mut left = DirectAutocovariance::new(3, false);
        left.record(&profiles[0]);
        let mut right = DirectAutocovariance::new(3, false);
        right.record(&profiles[1]);
        right.record(&profiles[2]);
        left.merge(&right);

        for lag in 0..3 {
            assert_eq!(left.count(lag), whole.count(lag));
            assert!((left.result(lag) - whole.result(lag)).abs() < 1e-12);
            assert!((left.mean_xy(lag) - whole.mean_xy(lag)).abs() < 1e-12);
        }
    }

    #[test]
    #[should_panic]
    fn out_of_range_lag_panics() {
        let ct = DirectAutocovariance::new(2, false);
        ct.result(2);
    }
}
