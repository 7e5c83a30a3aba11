//! Timing-error detector (TED)
//!
//! Mengali/Gardner ML-approximation error: zero at the correct sampling
//! instant, sign indicates whether the current phase leads or lags the
//! true symbol instant. [Mengali:1997] Eq. (8.3.5).

use crate::traits::Sample;

/// Compute the clipped instantaneous timing error from paired matched-filter
/// output `mf` and derivative-matched-filter output `dmf`.
///
/// For complex samples this is `Re(conj(mf) * dmf)`; for real samples it is
/// the plain product. Both are clipped to `[-1, 1]` to bound a transient
/// outlier's effect on the loop filter.
pub fn timing_error<S: Sample>(mf: S, dmf: S) -> f64 {
    mf.ted_product(dmf).clamp(-1.0, 1.0)
}
