//! Symbol timing synchronizer
//!
//! Orchestrates the polyphase matched filter, its derivative, the
//! timing-error detector and the loop filter into a closed-loop
//! sample-rate resampler: push samples at k/symbol, pull samples at
//! k_out/symbol aligned to the transmitter's symbol instants.

use tracing::debug;

use crate::design::{self, FilterKind};
use crate::error::{Result, SyncError};
use crate::filterbank::{derivative_prototype, PolyphaseBank};
use crate::loop_filter::LoopFilter;
use crate::ted::timing_error;
use crate::traits::Sample;

/// Closed-loop polyphase symbol timing synchronizer.
///
/// Generic over the sample type flowing through the filterbank: `f64` for a
/// real-valued data path, `num_complex::Complex64` for the complex I/Q path.
#[derive(Debug, Clone)]
pub struct SymbolSynchronizer<S> {
    k: usize,
    k_out: usize,
    npfb: usize,

    mf: PolyphaseBank<S>,
    dmf: PolyphaseBank<S>,
    loop_filter: LoopFilter,

    tau: f64,
    bf: f64,
    b: usize,
    del: f64,
    decim_counter: usize,
    is_locked: bool,
}

impl<S: Sample> SymbolSynchronizer<S> {
    /// Construct from an explicit prototype filter.
    ///
    /// `k` is the input samples/symbol rate, `npfb` the number of polyphase
    /// sub-filters (phase resolution), `prototype` the matched-filter
    /// coefficients (length `npfb * h_len`, any remainder truncated).
    pub fn create(k: usize, npfb: usize, prototype: &[f64]) -> Result<Self> {
        if k < 2 {
            return Err(SyncError::InputRateTooLow(k));
        }
        if prototype.is_empty() {
            return Err(SyncError::EmptyFilter);
        }
        if npfb == 0 {
            return Err(SyncError::ZeroFilterBanks);
        }

        let dprototype = derivative_prototype(prototype, npfb);
        let mf = PolyphaseBank::new(prototype, npfb);
        let dmf = PolyphaseBank::new(&dprototype, npfb);
        let loop_filter = LoopFilter::new(0.01)?;

        let mut sync = Self {
            k,
            k_out: 1,
            npfb,
            mf,
            dmf,
            loop_filter,
            tau: 0.0,
            bf: 0.0,
            b: 0,
            del: k as f64,
            decim_counter: 0,
            is_locked: false,
        };
        sync.reset();

        debug!(k, npfb, h_len = sync.mf.sub_filter_len(), "synchronizer created");
        Ok(sync)
    }

    /// Construct a square-root-Nyquist synchronizer, designing the prototype
    /// internally (length `2*k*npfb*m + 1`).
    pub fn create_rnyquist(kind: FilterKind, k: usize, m: usize, beta: f64, npfb: usize) -> Result<Self> {
        if k < 2 {
            return Err(SyncError::InputRateTooLow(k));
        }
        if m == 0 {
            return Err(SyncError::ZeroSymbolSpan(m));
        }
        if !(0.0..=1.0).contains(&beta) {
            return Err(SyncError::RolloffOutOfRange(beta));
        }

        let prototype = design::design(kind, k * npfb, m, beta, 0.0);
        debug!(k, m, beta, npfb, "designed square-root-Nyquist prototype");
        Self::create(k, npfb, &prototype)
    }

    /// Push one input sample through the synchronizer, appending emitted
    /// outputs to `out` and returning how many were written.
    pub fn step(&mut self, x: S, out: &mut Vec<S>) -> usize {
        self.mf.push(x);
        self.dmf.push(x);

        let mut emitted = 0;
        while self.b < self.npfb {
            let mf_out = self.mf.execute(self.b);
            out.push(mf_out * (1.0 / self.k as f64));
            emitted += 1;

            if self.decim_counter == self.k_out {
                self.decim_counter = 0;
                if !self.is_locked {
                    let dmf_out = self.dmf.execute(self.b);
                    let q = timing_error(mf_out, dmf_out);
                    let q_hat = self.loop_filter.update(q);
                    self.del = self.k as f64 / self.k_out as f64 + q_hat;
                }
            }
            self.decim_counter += 1;

            self.tau += self.del;
            self.bf = self.tau * self.npfb as f64;
            self.b = round_half_away_from_zero(self.bf) as usize;
        }

        // exactly one symbol-wrap per pushed input under nominal rates
        self.tau -= 1.0;
        self.bf -= self.npfb as f64;
        self.b -= self.npfb;

        emitted
    }

    /// Push a full buffer of input samples, returning all emitted outputs.
    pub fn execute(&mut self, input: &[S]) -> Vec<S> {
        let mut out = Vec::with_capacity(input.len() * self.k_out / self.k + 1);
        for &x in input {
            self.step(x, &mut out);
        }
        out
    }

    /// Recompute loop-filter coefficients from bandwidth `bt in [0, 1]`.
    pub fn set_lf_bw(&mut self, bt: f64) -> Result<()> {
        self.loop_filter.set_bandwidth(bt)?;
        debug!(bt, "loop filter bandwidth updated");
        Ok(())
    }

    /// Update the output rate `k_out >= 1`. Does not reset `tau`.
    pub fn set_output_rate(&mut self, k_out: usize) -> Result<()> {
        if k_out == 0 {
            return Err(SyncError::ZeroOutputRate(k_out));
        }
        self.k_out = k_out;
        self.del = self.k as f64 / self.k_out as f64;
        debug!(k_out, "output rate updated");
        Ok(())
    }

    /// Freeze the TED/loop-filter update; the phase accumulator still advances.
    pub fn lock(&mut self) {
        self.is_locked = true;
        debug!("synchronizer locked");
    }

    /// Resume TED/loop-filter updates.
    pub fn unlock(&mut self) {
        self.is_locked = false;
        debug!("synchronizer unlocked");
    }

    /// True if loop updates are currently suppressed.
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    /// Clear the filterbank delay lines and zero all loop/phase state.
    pub fn reset(&mut self) {
        self.mf.clear();
        self.dmf.clear();
        self.loop_filter.reset();
        self.tau = 0.0;
        self.bf = 0.0;
        self.b = 0;
        self.del = self.k as f64 / self.k_out as f64;
        self.decim_counter = 0;
        debug!("synchronizer reset");
    }

    /// Current fractional timing phase, in symbols.
    pub fn get_tau(&self) -> f64 {
        self.tau
    }

    /// Current filtered timing-error estimate.
    pub fn q_hat(&self) -> f64 {
        self.loop_filter.q_hat()
    }

    /// Current per-output phase increment.
    pub fn del(&self) -> f64 {
        self.del
    }

    /// Number of polyphase sub-filters.
    pub fn npfb(&self) -> usize {
        self.npfb
    }

    /// Current soft (fractional) bank index, `tau * npfb`.
    pub fn bf(&self) -> f64 {
        self.bf
    }

    /// Current hard bank index, `round(bf)`.
    pub fn b(&self) -> usize {
        self.b
    }
}

fn round_half_away_from_zero(x: f64) -> f64 {
    x.round()
}
