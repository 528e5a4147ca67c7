use crate::accumulate::ProfileAccumulator;
use crate::fourier::{CorrelationEngine, CorrelationMode, FftCorrelation};
use crate::stats::RunningMean;

/// FFT-backed lag-covariance accumulator, generic over the transform engine.
///
/// Every profile goes through the engine twice: once as-is, once as an
/// all-ones mask whose autocorrelation counts the valid offset pairs per
/// lag. Both one-sided results are folded (lag `l` with lag
/// `(len − l) mod len`) into running sums, and the covariance is derived
/// lazily at read time as `sum_xy[lag] / sum_mask[lag] − mean²`, `mean`
/// being the global running mean of every indicator value.
///
/// The mask sum — not a single running divisor — is the normalizer because
/// one accumulator may ingest profiles of different lengths, so the number
/// of offset pairs contributing to a given lag varies across increments.
pub struct SpectralAutocovariance<E = FftCorrelation> {
    sum_xy: Vec<f64>,
    sum_mask: Vec<f64>,
    mean: RunningMean,
    engine: E,
}

impl SpectralAutocovariance<FftCorrelation> {
    /// Create an accumulator tracking lags `[0, num_lags)` with the built-in
    /// FFT engine in the given correlation mode.
    pub fn new(num_lags: usize, mode: CorrelationMode) -> Self {
        Self::with_engine(num_lags, FftCorrelation::new(mode))
    }
}

impl<E: CorrelationEngine> SpectralAutocovariance<E> {
    /// Create an accumulator around a caller-supplied engine.
    pub fn with_engine(num_lags: usize, engine: E) -> Self {
        Self {
            sum_xy: vec![0.0; num_lags],
            sum_mask: vec![0.0; num_lags],
            mean: RunningMean::new(),
            engine,
        }
    }

    /// Feed one substitution profile.
    ///
    /// `profile.len() >= num_lags()` is a caller guarantee; only the first
    /// `num_lags()` lags are tracked.
    pub fn increment(&mut self, profile: &[f64]) {
        debug_assert!(
            profile.len() >= self.num_lags(),
            "profile shorter than the tracked lag range"
        );

        for &value in profile {
            self.mean.increment(value);
        }

        // Mask is all ones; gapped or ambiguous positions are not supported
        // yet. It still runs through the engine so the per-lag pair counts
        // come from the same transform as the cross terms.
        let mask = vec![1.0; profile.len()];
        let mask_corr = self.engine.autocorrelation(&mask);
        let profile_corr = self.engine.autocorrelation(profile);

        let len = profile.len();
        for lag in 0..self.sum_xy.len() {
            // Fold the one-sided output into a two-sided estimate: lag l and
            // lag (len − l) mod len measure the same separation.
            let mirrored = (len - lag) % len;
            self.sum_xy[lag] += profile_corr[lag] + profile_corr[mirrored];
            self.sum_mask[lag] += mask_corr[lag] + mask_corr[mirrored];
        }
    }

    /// Fold another accumulator into this one: element-wise sums plus a
    /// count-weighted mean merge.
    pub fn merge(&mut self, other: &Self) {
        debug_assert_eq!(
            self.num_lags(),
            other.num_lags(),
            "merged accumulators must track the same lag range"
        );
        self.mean.merge(&other.mean);
        for (sum, &add) in self.sum_xy.iter_mut().zip(other.sum_xy.iter()) {
            *sum += add;
        }
        for (sum, &add) in self.sum_mask.iter_mut().zip(other.sum_mask.iter()) {
            *sum += add;
        }
    }

    /// Covariance estimate at `lag`: `sum_xy / sum_mask − mean²`.
    ///
    /// Reading an empty accumulator divides zero by a zero pair count and
    /// yields a non-finite value rather than an error.
    ///
    /// # Panics
    /// Panics when `lag >= num_lags()`.
    pub fn result(&self, lag: usize) -> f64 {
        let pxy = self.sum_xy[lag] / self.sum_mask[lag];
        let mean = self.mean.result();
        pxy - mean * mean
    }

    /// Global mean of every indicator value folded in so far.
    pub fn mean(&self) -> f64 {
        self.mean.result()
    }

    /// Number of lags tracked, fixed at construction.
    pub fn num_lags(&self) -> usize {
        self.sum_xy.len()
    }

    /// The whole autocovariance curve in lag order.
    pub fn curve(&self) -> Vec<f64> {
        (0..self.num_lags()).map(|lag| self.result(lag)).collect()
    }
}

impl<E: CorrelationEngine> ProfileAccumulator for SpectralAutocovariance<E> {
    fn record(&mut self, profile: &[f64]) {
        self.increment(profile);
    }

    fn merge(&mut self, other: &Self) {
        SpectralAutocovariance::merge(self, other);
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for SpectralAutocovariance<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectralAutocovariance")
            .field("num_lags", &self.sum_xy.len())
            .field("mean", &self.mean)
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
