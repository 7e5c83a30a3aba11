//! Square-root-Nyquist prototype filter design
//!
//! Generates the matched-filter prototype consumed by
//! [`crate::synchronizer::SymbolSynchronizer::create_rnyquist`]. Adapted from
//! the root-raised-cosine coefficient generator, generalized to the
//! `k*N, m, beta, offset` parameterization the synchronizer needs (one
//! prototype tap per polyphase sub-filter position rather than one tap per
//! transmitted sample).

use std::f64::consts::PI;

/// Pulse family to design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Square-root raised cosine (matched pair has zero ISI at symbol centers).
    RootRaisedCosine,
    /// Raised cosine (zero ISI on its own, not as a matched pair).
    RaisedCosine,
}

/// Design a square-root-Nyquist (or raised-cosine) prototype of length
/// `2*samples_per_symbol*span + 1`.
///
/// * `samples_per_symbol` is `k*N` (symbols-per-sample rate times polyphase
///   bank size), i.e. the *effective* oversampling rate of the prototype.
/// * `span` is the one-sided filter delay in symbols.
/// * `beta` is the excess bandwidth / rolloff factor in `[0, 1]`.
/// * `offset` shifts the filter center by a fraction of a sample, for
///   generating an arbitrarily-phased prototype; `0.0` centers it.
///
/// Callers are responsible for validating `samples_per_symbol >= 2`,
/// `span > 0` and `beta in [0, 1]` before calling; this function assumes
/// valid input.
pub fn design(kind: FilterKind, samples_per_symbol: usize, span: usize, beta: f64, offset: f64) -> Vec<f64> {
    match kind {
        FilterKind::RootRaisedCosine => root_raised_cosine(samples_per_symbol, span, beta, offset),
        FilterKind::RaisedCosine => raised_cosine(samples_per_symbol, span, beta, offset),
    }
}

fn root_raised_cosine(sps: usize, span: usize, beta: f64, offset: f64) -> Vec<f64> {
    let filter_len = 2 * span * sps + 1;
    let mut coeffs = Vec::with_capacity(filter_len);

    for i in 0..filter_len {
        let t = (i as f64 - (filter_len - 1) as f64 / 2.0) / sps as f64 + offset;

        let h = if beta.abs() < 1e-12 {
            sinc(t)
        } else if t.abs() < 1e-10 {
            1.0 + beta * (4.0 / PI - 1.0)
        } else if (t.abs() - 1.0 / (4.0 * beta)).abs() < 1e-10 {
            let term1 = (1.0 + 2.0 / PI) * (PI * beta / 4.0).sin();
            let term2 = (1.0 - 2.0 / PI) * (PI * beta / 4.0).cos();
            beta / 2.0_f64.sqrt() * (term1 + term2)
        } else {
            let num =
                (PI * t * (1.0 - beta)).sin() + 4.0 * beta * t * (PI * t * (1.0 + beta)).cos();
            let den = PI * t * (1.0 - (4.0 * beta * t).powi(2));
            num / den
        };

        coeffs.push(h);
    }

    normalize(&mut coeffs);
    coeffs
}

fn raised_cosine(sps: usize, span: usize, beta: f64, offset: f64) -> Vec<f64> {
    let filter_len = 2 * span * sps + 1;
    let mut coeffs = Vec::with_capacity(filter_len);

    for i in 0..filter_len {
        let t = (i as f64 - (filter_len - 1) as f64 / 2.0) / sps as f64 + offset;

        let h = if beta.abs() < 1e-12 {
            sinc(t)
        } else if (t.abs() - 1.0 / (2.0 * beta)).abs() < 1e-10 {
            (PI / (4.0 * sps as f64)) * sinc(t)
        } else {
            let denom = 1.0 - (2.0 * beta * t).powi(2);
            sinc(t) * (PI * beta * t).cos() / denom
        };

        coeffs.push(h);
    }

    normalize(&mut coeffs);
    coeffs
}

fn sinc(t: f64) -> f64 {
    if t.abs() < 1e-10 {
        1.0
    } else {
        (PI * t).sin() / (PI * t)
    }
}

fn normalize(coeffs: &mut [f64]) {
    let energy: f64 = coeffs.iter().map(|x| x * x).sum();
    let norm = energy.sqrt();
    for c in coeffs.iter_mut() {
        *c /= norm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rrc_filter_length_matches_formula() {
        let h = design(FilterKind::RootRaisedCosine, 8, 6, 0.35, 0.0);
        assert_eq!(h.len(), 2 * 6 * 8 + 1);
    }

    #[test]
    fn rrc_is_symmetric_about_its_center() {
        let h = design(FilterKind::RootRaisedCosine, 8, 6, 0.35, 0.0);
        let n = h.len();
        for i in 0..n / 2 {
            assert!((h[i] - h[n - 1 - i]).abs() < 1e-9);
        }
    }

    #[test]
    fn rrc_has_unit_energy() {
        let h = design(FilterKind::RootRaisedCosine, 8, 6, 0.35, 0.0);
        let energy: f64 = h.iter().map(|x| x * x).sum();
        assert!((energy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rrc_center_tap_is_the_largest() {
        let h = design(FilterKind::RootRaisedCosine, 8, 6, 0.35, 0.0);
        let center = h.len() / 2;
        for &c in h.iter() {
            assert!(h[center] >= c);
        }
    }

    #[test]
    fn rc_filter_length_matches_formula() {
        let h = design(FilterKind::RaisedCosine, 4, 3, 0.5, 0.0);
        assert_eq!(h.len(), 2 * 3 * 4 + 1);
    }

    #[test]
    fn zero_rolloff_reduces_to_sinc_shape() {
        let h = design(FilterKind::RootRaisedCosine, 8, 6, 0.0, 0.0);
        let n = h.len();
        assert!((h[n / 2] - h.iter().cloned().fold(f64::MIN, f64::max)).abs() < 1e-9);
    }
}
