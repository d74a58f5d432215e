//! Per-IRQ external interrupt handler table (EIH).

use crate::layout::MAX_EXTERNAL_INTR;
use crate::queue::Queue;

/// Fixed array of [`MAX_EXTERNAL_INTR`] queues, one per IRQ line. Multiple
/// handler cookies may be registered for the same IRQ; they are delivered in
/// FIFO order across successive IRQ arrivals.
#[derive(Debug, Clone)]
pub struct ExternalInterruptHandler {
    queues: [Queue; MAX_EXTERNAL_INTR],
}

impl ExternalInterruptHandler {
    /// Create a handler table with every IRQ queue empty.
    pub fn new() -> Self {
        Self {
            queues: std::array::from_fn(|_| Queue::new()),
        }
    }

    /// Register handler cookie `word` for IRQ line `irq`.
    ///
    /// # Panics
    ///
    /// Panics if `irq >= MAX_EXTERNAL_INTR` (`FatalDecode`).
    pub fn push(&mut self, irq: usize, word: u64) {
        assert!(irq < MAX_EXTERNAL_INTR, "irq {irq} out of range");
        self.queues[irq].push(word);
    }

    /// Pop one handler cookie for IRQ line `irq`, or `0` if none registered.
    ///
    /// # Panics
    ///
    /// Panics if `irq >= MAX_EXTERNAL_INTR` (`FatalDecode`).
    pub fn pop(&mut self, irq: usize) -> u64 {
        assert!(irq < MAX_EXTERNAL_INTR, "irq {irq} out of range");
        self.queues[irq].pop()
    }
}

impl Default for ExternalInterruptHandler {
    fn default() -> Self {
        Self::new()
    }
}
