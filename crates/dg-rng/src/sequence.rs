//! Scripted random source for tests

use std::collections::VecDeque;

use crate::RandomSource;

/// Replays a fixed list of values.
///
/// Each call takes the next value and clamps it into the requested range.
/// Once the script runs out every call returns `min`.
#[derive(Debug, Clone, Default)]
pub struct SequenceRng {
    values: VecDeque<i32>,
}

impl SequenceRng {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for SequenceRng {
    fn int_in_range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        match self.values.pop_front() {
            Some(v) => v.clamp(min, max),
            None => min,
        }
    }
}
