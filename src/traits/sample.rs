//! Sample trait - numeric abstraction over the filterbank's data path
//!
//! The synchronizer is parametric over the sample type: real `f64` or
//! complex `Complex<f64>`. Coefficients are always real. Rather than
//! monomorphizing three separate types per the reference design, or paying
//! for a runtime-dispatched operator set, a single trait captures the one
//! multiply-accumulate operation the filterbank needs plus the
//! timing-error-detector product, which differs between the real and
//! complex cases (see `ted_product`).

use num_complex::Complex64;
use num_traits::Zero;
use std::ops::{Add, Mul};

/// A filterbank sample: real `f64` or complex `Complex64`.
///
/// Implementations provide scalar multiply-accumulate against real
/// coefficients and the Mengali timing-error product.
pub trait Sample:
    Copy + Default + Zero + Add<Output = Self> + Mul<f64, Output = Self> + std::fmt::Debug
{
    /// Timing-error-detector product of a matched-filter output `self` (u)
    /// against a derivative-matched-filter output `other` (v).
    ///
    /// Complex: `Re(conj(u) * v)`. Real: `u * v`. Both are the same formula
    /// once `self` is treated as already conjugated for the real case
    /// (conjugation is the identity on reals).
    fn ted_product(self, other: Self) -> f64;
}

impl Sample for f64 {
    #[inline]
    fn ted_product(self, other: Self) -> f64 {
        self * other
    }
}

impl Sample for Complex64 {
    #[inline]
    fn ted_product(self, other: Self) -> f64 {
        (self.conj() * other).re
    }
}
