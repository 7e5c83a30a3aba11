//! Construction and reconfiguration error type
//!
//! Every fatal precondition named in the synchronizer's design lives here as
//! a distinct variant so callers can match on the specific violation instead
//! of parsing a message string.

use thiserror::Error;

/// Precondition violations raised by [`crate::SymbolSynchronizer`] construction
/// and reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SyncError {
    /// `k` (input samples/symbol) must be at least 2.
    #[error("samples per symbol (k={0}) must be at least 2")]
    InputRateTooLow(usize),

    /// The prototype filter coefficient slice was empty.
    #[error("matched filter coefficient length must be greater than zero")]
    EmptyFilter,

    /// `npfb` (number of polyphase sub-filters) was zero.
    #[error("number of polyphase filter banks must be greater than zero")]
    ZeroFilterBanks,

    /// `k_out` (output samples/symbol) was zero.
    #[error("output rate (k_out={0}) must be greater than zero")]
    ZeroOutputRate(usize),

    /// Loop filter bandwidth `bt` fell outside `[0, 1]`.
    #[error("loop filter bandwidth (bt={0}) must be in [0, 1]")]
    BandwidthOutOfRange(f64),

    /// Square-root-Nyquist symbol span `m` was zero.
    #[error("symbol span (m={0}) must be greater than zero")]
    ZeroSymbolSpan(usize),

    /// Square-root-Nyquist excess bandwidth `beta` fell outside `[0, 1]`.
    #[error("excess bandwidth (beta={0}) must be in [0, 1]")]
    RolloffOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, SyncError>;
