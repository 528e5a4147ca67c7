//! FFT-backed autocorrelation: the transform seam of the spectral estimator.
//!
//! The free [`autocorrelation`] routine plans its transforms per call; the
//! [`FftCorrelation`] engine owns a planner so repeated calls reuse plans.
//! Both honor one contract: same-length, one-sided output, folded into a
//! two-sided estimate by the accumulator.

mod autocorr;
mod engine;

pub use autocorr::{autocorrelation, CorrelationMode};
pub use engine::{CorrelationEngine, FftCorrelation};
