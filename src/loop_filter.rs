//! Loop filter
//!
//! First-order recursive smoother that converts the noisy, instantaneous
//! timing-error estimate into a stable control signal for the phase
//! accumulator. `beta` is fixed-scaled by 0.22 relative to the bandwidth
//! parameter to give an empirically critically-damped response; this
//! constant must be reproduced exactly, not treated as tunable.

use crate::error::{Result, SyncError};

/// First-order IIR loop filter: `q_hat <- beta*q + alpha*q_prime`.
#[derive(Debug, Clone, Copy)]
pub struct LoopFilter {
    alpha: f64,
    beta: f64,
    q: f64,
    q_hat: f64,
    q_prime: f64,
}

impl LoopFilter {
    /// Construct with bandwidth `bt` in `[0, 1]`.
    pub fn new(bt: f64) -> Result<Self> {
        let mut lf = Self {
            alpha: 0.0,
            beta: 0.0,
            q: 0.0,
            q_hat: 0.0,
            q_prime: 0.0,
        };
        lf.set_bandwidth(bt)?;
        Ok(lf)
    }

    /// Recompute `(alpha, beta)` from bandwidth `bt`. Does not reset the
    /// running error state.
    pub fn set_bandwidth(&mut self, bt: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&bt) {
            return Err(SyncError::BandwidthOutOfRange(bt));
        }
        self.alpha = 1.0 - bt;
        self.beta = 0.22 * bt;
        Ok(())
    }

    /// Advance the filter with a new instantaneous error `q`, returning the
    /// updated filtered estimate `q_hat`.
    pub fn update(&mut self, q: f64) -> f64 {
        self.q = q;
        self.q_hat = q * self.beta + self.q_prime * self.alpha;
        self.q_prime = self.q_hat;
        self.q_hat
    }

    /// Current filtered estimate.
    pub fn q_hat(&self) -> f64 {
        self.q_hat
    }

    /// Zero the running error state (coefficients are untouched).
    pub fn reset(&mut self) {
        self.q = 0.0;
        self.q_hat = 0.0;
        self.q_prime = 0.0;
    }
}
