//! Derivative prototype filter
//!
//! The derivative matched filter feeds the timing-error detector. Its
//! coefficients are the centered finite difference of the matched-filter
//! prototype, with circular boundaries, scaled by `npfb / 16`. The scale
//! factor is a numerical normalization (not a free parameter) that makes
//! the TED gain close to 1 for typical Nyquist pulses — it must be
//! reproduced exactly, boundary handling included.

/// Derive the 3-tap centered-difference prototype of `prototype`, scaled by
/// `npfb as f64 / 16.0`.
pub fn derivative_prototype(prototype: &[f64], npfb: usize) -> Vec<f64> {
    let m = prototype.len();
    let scale = npfb as f64 / 16.0;

    (0..m)
        .map(|i| {
            let diff = if i == 0 {
                prototype[1] - prototype[m - 1]
            } else if i == m - 1 {
                prototype[0] - prototype[m - 2]
            } else {
                prototype[i + 1] - prototype[i - 1]
            };
            diff * scale
        })
        .collect()
}
