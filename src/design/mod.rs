//! Prototype filter design helpers
//!
//! Square-root-Nyquist design is the only family implemented; the
//! synchronizer core is otherwise agnostic to how a prototype was produced
//! and will happily consume one designed elsewhere.

mod rnyquist;

pub use rnyquist::{design, FilterKind};
