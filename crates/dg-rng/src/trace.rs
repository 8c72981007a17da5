//! Call tracing for random sources
//!
//! Records every draw so that two generation runs can be compared draw by
//! draw when they diverge.

use serde::{Deserialize, Serialize};

use crate::RandomSource;

/// One recorded `int_in_range` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngTraceEntry {
    /// Sequence number (0-indexed)
    pub seq: u64,
    pub min: i32,
    pub max: i32,
    pub result: i32,
}

/// Wraps another source and records each call.
#[derive(Debug, Clone)]
pub struct TracedRng<R> {
    inner: R,
    trace: Vec<RngTraceEntry>,
}

impl<R: RandomSource> TracedRng<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            trace: Vec::new(),
        }
    }

    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }

    /// Number of calls recorded so far
    pub fn call_count(&self) -> u64 {
        self.trace.len() as u64
    }

    /// Take the recorded trace, leaving an empty log behind
    pub fn take_trace(&mut self) -> Vec<RngTraceEntry> {
        std::mem::take(&mut self.trace)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RandomSource> RandomSource for TracedRng<R> {
    fn int_in_range(&mut self, min: i32, max: i32) -> i32 {
        let result = self.inner.int_in_range(min, max);
        self.trace.push(RngTraceEntry {
            seq: self.trace.len() as u64,
            min,
            max,
            result,
        });
        result
    }
}

/// Index of the first entry where two traces differ.
///
/// A trace that is a strict prefix of the other diverges at its length.
pub fn first_divergence(a: &[RngTraceEntry], b: &[RngTraceEntry]) -> Option<usize> {
    if let Some(i) = a.iter().zip(b).position(|(x, y)| x != y) {
        return Some(i);
    }
    (a.len() != b.len()).then(|| a.len().min(b.len()))
}
