//! Polyphase symbol timing synchronizer
//!
//! A closed-loop, sample-by-sample adaptive resampler for digitally
//! modulated baseband signals: given an oversampled input stream with
//! unknown fractional timing offset, produces an output stream aligned to
//! the transmitter's symbol instants. Combines a polyphase matched-filter
//! bank, its derivative, a Gardner/Mengali timing-error detector and a
//! first-order loop filter.
//!
//! Carrier recovery, equalization, and framing are out of scope; this crate
//! owns timing recovery only.

use rustler::{Env, Term};

pub mod debug_dump;
pub mod design;
pub mod error;
pub mod filterbank;
pub mod loop_filter;
pub mod nif;
pub mod synchronizer;
pub mod ted;
pub mod traits;

pub use debug_dump::{DebugRecorder, Snapshot};
pub use design::FilterKind;
pub use error::{Result, SyncError};
pub use synchronizer::SymbolSynchronizer;
pub use traits::Sample;

fn on_load(env: Env, _info: Term) -> bool {
    let _ = rustler::resource!(nif::SynchronizerResource, env);
    true
}

rustler::init!(
    "Elixir.MinuteModemCore.DSP.SymbolSync",
    [
        nif::create,
        nif::create_rnyquist,
        nif::execute,
        nif::set_lf_bw,
        nif::set_output_rate,
        nif::lock,
        nif::unlock,
        nif::reset,
        nif::get_tau,
    ],
    load = on_load
);
