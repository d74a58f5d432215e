//! Construction-time errors.
//!
//! Everything the device does once it is built is either a bounded,
//! infallible operation or a `FatalDecode` (an assertion, not a `Result` —
//! see spec.md §4.9 and §7). The one place this crate returns a `Result` is
//! at construction, where a misconfigured `num_sources` is a configuration
//! bug worth catching before it becomes a runtime panic on the first stray
//! IRQ.

use thiserror::Error;

/// Errors constructing a [`crate::device::LiteExecutorDevice`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceError {
    /// More interrupt source lines were requested than the external
    /// interrupt handler table has room to address.
    #[error("requested {requested} interrupt sources but the EIH table only holds {max}")]
    TooManyInterruptSources { requested: u32, max: usize },
}
