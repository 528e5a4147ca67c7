use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// How the autocorrelation treats the boundary of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrelationMode {
    /// Treat the input as periodic: lag products wrap at the boundary.
    Circular,
    /// Zero-padded linear autocorrelation: lag products never wrap.
    Linear,
}

/// Compute the one-sided autocorrelation of `xs` via FFT.
///
/// The output has the same length as the input. In circular mode the value
/// at lag `l` is `Σ_k xs[k]·xs[(k+l) mod len]`. In linear mode it is the
/// zero-padded equivalent `Σ_k xs[k]·xs[k+l]` with no wraparound; the input
/// is padded to at least `2·len − 1` internally and the result truncated
/// back to `len`. An empty input yields an empty output.
pub fn autocorrelation(xs: &[f64], mode: CorrelationMode) -> Vec<f64> {
    let mut planner = FftPlanner::new();
    autocorrelation_with_planner(&mut planner, xs, mode)
}

/// Shared core for the free routine and the planner-owning engine.
pub(crate) fn autocorrelation_with_planner(
    planner: &mut FftPlanner<f64>,
    xs: &[f64],
    mode: CorrelationMode,
) -> Vec<f64> {
    let len = xs.len();
    if len == 0 {
        return Vec::new();
    }

    let padded = match mode {
        CorrelationMode::Circular => len,
        CorrelationMode::Linear => (2 * len - 1).next_power_of_two(),
    };

    let forward = planner.plan_fft_forward(padded);
    let inverse = planner.plan_fft_inverse(padded);

    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(padded);
    buffer.extend(xs.iter().map(|&x| Complex::new(x, 0.0)));
    buffer.resize(padded, Complex::new(0.0, 0.0));

    // Wiener-Khinchin: autocorrelation is the inverse transform of the
    // power spectrum. rustfft leaves the inverse unnormalized, hence 1/n.
    forward.process(&mut buffer);
    for value in buffer.iter_mut() {
        *value = Complex::new(value.norm_sqr(), 0.0);
    }
    inverse.process(&mut buffer);

    let scale = 1.0 / padded as f64;
    buffer.iter().take(len).map(|c| c.re * scale).collect()
}
