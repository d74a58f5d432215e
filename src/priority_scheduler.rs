//! Multi-level ready-queue priority scheduler (PS).

use crate::layout::MAX_TASK_QUEUE;
use crate::queue::Queue;

/// Fixed array of [`MAX_TASK_QUEUE`] priority bands, indexed 0 (highest) to
/// `MAX_TASK_QUEUE - 1` (lowest). Strict priority: lower bands are fully
/// drained before a higher-indexed band is ever visited. No aging —
/// starvation of low-priority bands under sustained high-priority load is
/// intentional.
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    bands: [Queue; MAX_TASK_QUEUE],
}

impl PriorityScheduler {
    /// Create a scheduler with all bands empty.
    pub fn new() -> Self {
        Self {
            bands: std::array::from_fn(|_| Queue::new()),
        }
    }

    /// Append `word` to priority band `band`.
    ///
    /// # Panics
    ///
    /// Panics if `band >= MAX_TASK_QUEUE` — an out-of-range band index is a
    /// guest/decoder programming error (`FatalDecode`), not a recoverable
    /// condition.
    pub fn push(&mut self, band: usize, word: u64) {
        assert!(band < MAX_TASK_QUEUE, "priority band {band} out of range");
        self.bands[band].push(word);
    }

    /// Pop the head of the highest-priority non-empty band, or `0` if every
    /// band is empty.
    pub fn pop(&mut self) -> u64 {
        for band in self.bands.iter_mut() {
            if !band.is_empty() {
                return band.pop();
            }
        }
        0
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_within_a_single_band() {
        let mut ps = PriorityScheduler::new();
        ps.push(3, 0x1);
        ps.push(3, 0x2);
        ps.push(3, 0x3);
        assert_eq!(ps.pop(), 0x1);
        assert_eq!(ps.pop(), 0x2);
        assert_eq!(ps.pop(), 0x3);
        assert_eq!(ps.pop(), 0);
    }

    #[test]
    fn strict_priority_drains_lower_band_index_first() {
        let mut ps = PriorityScheduler::new();
        ps.push(1, 0x11);
        ps.push(0, 0x22);
        assert_eq!(ps.pop(), 0x22);
        assert_eq!(ps.pop(), 0x11);
        assert_eq!(ps.pop(), 0);
    }

    #[test]
    fn empty_scheduler_pops_zero() {
        let mut ps = PriorityScheduler::new();
        assert_eq!(ps.pop(), 0);
    }

    #[test]
    fn lower_bands_starve_under_sustained_high_priority_load() {
        let mut ps = PriorityScheduler::new();
        ps.push(7, 0xdead);
        ps.push(0, 0x1);
        ps.push(0, 0x2);
        assert_eq!(ps.pop(), 0x1);
        assert_eq!(ps.pop(), 0x2);
        // Band 0 now empty — band 7's entry surfaces.
        assert_eq!(ps.pop(), 0xdead);
    }

    #[test]
    #[should_panic(expected = "priority band 8 out of range")]
    fn push_with_out_of_range_band_is_fatal() {
        let mut ps = PriorityScheduler::new();
        ps.push(MAX_TASK_QUEUE, 1);
    }
}
