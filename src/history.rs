// src/history.rs
//
// Rolling (length, entropy) samples for the chart. This is caller-owned UI
// state; the analysis engine itself never touches it.

use crate::models::HistorySample;
use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Default)]
pub struct AnalysisHistory {
    samples: VecDeque<HistorySample>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    // Record one sample. An empty password resets the chart; otherwise the
    // oldest sample is evicted once the cap is reached.
    pub fn record(&mut self, length: usize, entropy: f64) {
        if length == 0 {
            self.samples.clear();
            return;
        }

        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(HistorySample { length, entropy });
    }

    pub fn samples(&self) -> impl Iterator<Item = &HistorySample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_at_fifty_with_fifo_eviction() {
        let mut history = AnalysisHistory::new();
        for i in 1..=60 {
            history.record(i, i as f64);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);

        // The ten oldest samples were evicted
        let first = history.samples().next().unwrap();
        assert_eq!(first.length, 11);
        let last = history.samples().last().unwrap();
        assert_eq!(last.length, 60);
    }

    #[test]
    fn empty_password_resets_the_history() {
        let mut history = AnalysisHistory::new();
        history.record(8, 37.6);
        history.record(9, 42.3);
        assert_eq!(history.len(), 2);

        history.record(0, 0.0);
        assert!(history.is_empty());
    }

    #[test]
    fn recording_resumes_after_a_reset() {
        let mut history = AnalysisHistory::new();
        history.record(5, 23.5);
        history.record(0, 0.0);
        history.record(3, 14.1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.samples().next().unwrap().length, 3);
    }
}
