//! Optional history recorder for offline plotting
//!
//! Captures a fixed-length ring buffer of `(del, tau, bf, b, q_hat)` tuples
//! and writes them as a MATLAB/Octave script, mirroring the donor reference
//! implementation's debug dump. Opaque to the synchronizer's own contract:
//! nothing here is read back into the control loop.

use std::collections::VecDeque;
use std::io::{self, Write};

/// One per-emission snapshot of the synchronizer's control-loop state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub del: f64,
    pub tau: f64,
    pub bf: f64,
    pub b: usize,
    pub q_hat: f64,
}

/// Fixed-capacity ring buffer of [`Snapshot`] history, plus the script writer.
#[derive(Debug, Clone)]
pub struct DebugRecorder {
    capacity: usize,
    history: VecDeque<Snapshot>,
}

impl DebugRecorder {
    /// Create a recorder holding at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            history: VecDeque::with_capacity(capacity),
        }
    }

    /// Push one snapshot, discarding the oldest if at capacity.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(snapshot);
    }

    /// Number of snapshots currently held.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True if no snapshots have been recorded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Write the recorded history as an Octave/MATLAB script to `w`, along
    /// with the synchronizer's static `npfb`/`k`/`alpha`/`beta` parameters.
    pub fn write_script<W: Write>(
        &self,
        mut w: W,
        npfb: usize,
        k: usize,
        alpha: f64,
        beta: f64,
    ) -> io::Result<()> {
        writeln!(w, "%% auto-generated file\n")?;
        writeln!(w, "npfb = {};", npfb)?;
        writeln!(w, "k = {};\n", k)?;
        writeln!(w, "alpha = {:12.5e};", alpha)?;
        writeln!(w, "beta = {:12.5e};\n", beta)?;

        let n = self.history.len();
        writeln!(w, "n = {};", n)?;

        self.write_field(&mut w, "del", n, |s| s.del)?;
        self.write_field(&mut w, "tau", n, |s| s.tau)?;
        self.write_field(&mut w, "bf", n, |s| s.bf)?;
        self.write_field(&mut w, "b", n, |s| s.b as f64)?;
        self.write_field(&mut w, "q_hat", n, |s| s.q_hat)?;

        Ok(())
    }

    fn write_field<W: Write>(
        &self,
        mut w: W,
        name: &str,
        n: usize,
        f: impl Fn(&Snapshot) -> f64,
    ) -> io::Result<()> {
        writeln!(w, "{name} = zeros(1,{n});")?;
        for (i, snap) in self.history.iter().enumerate() {
            writeln!(w, "{name}({:4}) = {:12.8};", i + 1, f(snap))?;
        }
        writeln!(w)
    }
}
