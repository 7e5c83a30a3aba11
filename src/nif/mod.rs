//! NIF interface for Elixir
//!
//! Exposes the symbol synchronizer as a rustler resource: one `ResourceArc`
//! per handle, guarded by a `Mutex`, atoms for `ok`/error tags. The NIF
//! surface monomorphizes the generic core to `Complex64` samples, since
//! Erlang/Elixir callers only ever operate on I/Q data.

use num_complex::Complex64;
use rustler::{Atom, NifResult, ResourceArc};
use std::sync::Mutex;

use crate::design::FilterKind;
use crate::synchronizer::SymbolSynchronizer;

rustler::atoms! {
    ok,
    error,
    rrc,
    rc,
}

fn atom_to_filter_kind(atom: Atom) -> Result<FilterKind, &'static str> {
    if atom == rrc() {
        Ok(FilterKind::RootRaisedCosine)
    } else if atom == rc() {
        Ok(FilterKind::RaisedCosine)
    } else {
        Err("unsupported filter kind")
    }
}

/// NIF resource wrapper for a complex-sample symbol synchronizer.
pub struct SynchronizerResource {
    pub inner: Mutex<SymbolSynchronizer<Complex64>>,
}

fn lock_poisoned() -> rustler::Error {
    rustler::Error::Term(Box::new("lock poisoned"))
}

/// Create a synchronizer from an explicit prototype filter.
#[rustler::nif]
pub fn create(k: usize, npfb: usize, prototype: Vec<f64>) -> NifResult<ResourceArc<SynchronizerResource>> {
    let sync = SymbolSynchronizer::create(k, npfb, &prototype)
        .map_err(|e| rustler::Error::Term(Box::new(e.to_string())))?;

    Ok(ResourceArc::new(SynchronizerResource {
        inner: Mutex::new(sync),
    }))
}

/// Create a square-root-Nyquist synchronizer, designing the prototype internally.
#[rustler::nif]
pub fn create_rnyquist(
    kind: Atom,
    k: usize,
    m: usize,
    beta: f64,
    npfb: usize,
) -> NifResult<ResourceArc<SynchronizerResource>> {
    let kind = atom_to_filter_kind(kind).map_err(|e| rustler::Error::Term(Box::new(e)))?;
    let sync = SymbolSynchronizer::create_rnyquist(kind, k, m, beta, npfb)
        .map_err(|e| rustler::Error::Term(Box::new(e.to_string())))?;

    Ok(ResourceArc::new(SynchronizerResource {
        inner: Mutex::new(sync),
    }))
}

/// Feed a buffer of complex samples through the synchronizer, returning all
/// emitted outputs.
#[rustler::nif]
pub fn execute(
    sync: ResourceArc<SynchronizerResource>,
    input: Vec<(f64, f64)>,
) -> NifResult<Vec<(f64, f64)>> {
    let mut state = sync.inner.lock().map_err(|_| lock_poisoned())?;

    let input: Vec<Complex64> = input.into_iter().map(|(re, im)| Complex64::new(re, im)).collect();
    let out = state.execute(&input);
    Ok(out.into_iter().map(|c| (c.re, c.im)).collect())
}

/// Recompute loop-filter coefficients from bandwidth `bt in [0, 1]`.
#[rustler::nif]
pub fn set_lf_bw(sync: ResourceArc<SynchronizerResource>, bt: f64) -> NifResult<Atom> {
    let mut state = sync.inner.lock().map_err(|_| lock_poisoned())?;
    state
        .set_lf_bw(bt)
        .map_err(|e| rustler::Error::Term(Box::new(e.to_string())))?;
    Ok(ok())
}

/// Update the output rate `k_out >= 1`.
#[rustler::nif]
pub fn set_output_rate(sync: ResourceArc<SynchronizerResource>, k_out: usize) -> NifResult<Atom> {
    let mut state = sync.inner.lock().map_err(|_| lock_poisoned())?;
    state
        .set_output_rate(k_out)
        .map_err(|e| rustler::Error::Term(Box::new(e.to_string())))?;
    Ok(ok())
}

/// Freeze the TED/loop-filter update.
#[rustler::nif]
pub fn lock(sync: ResourceArc<SynchronizerResource>) -> Atom {
    if let Ok(mut state) = sync.inner.lock() {
        state.lock();
    }
    ok()
}

/// Resume TED/loop-filter updates.
#[rustler::nif]
pub fn unlock(sync: ResourceArc<SynchronizerResource>) -> Atom {
    if let Ok(mut state) = sync.inner.lock() {
        state.unlock();
    }
    ok()
}

/// Clear filterbank delay lines and zero all loop/phase state.
#[rustler::nif]
pub fn reset(sync: ResourceArc<SynchronizerResource>) -> Atom {
    if let Ok(mut state) = sync.inner.lock() {
        state.reset();
    }
    ok()
}

/// Current fractional timing phase, in symbols.
#[rustler::nif]
pub fn get_tau(sync: ResourceArc<SynchronizerResource>) -> NifResult<f64> {
    let state = sync.inner.lock().map_err(|_| lock_poisoned())?;
    Ok(state.get_tau())
}
