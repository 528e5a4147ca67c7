//! Lag-autocovariance (Ct) estimators.
//!
//! Two interchangeable estimators of the same curve: [`DirectAutocovariance`]
//! streams every `(x[k], x[k+lag])` sample through per-lag covariance states
//! in O(lags · len) per profile; [`SpectralAutocovariance`] derives the curve
//! from FFT autocorrelations in O(len · log len). Both accumulate
//! incrementally and merge associatively, so partial results over disjoint
//! pair batches reduce to the full-ensemble answer.

mod direct;
mod spectral;

pub use direct::DirectAutocovariance;
pub use spectral::SpectralAutocovariance;
