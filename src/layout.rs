//! MMIO aperture layout for the Lite Executor.
//!
//! These constants are the bit-exact ABI between the device and the guest
//! kernel; they must not change shape without changing the guest-visible
//! contract. The hierarchy is process slot → functional block → element:
//! `addr = process_index * PROCESS_MMIO_SIZE + process_addr`, and
//! `process_addr` is further decoded by [`crate::decode::decode`].

/// Total size of the device's MMIO aperture (16 MiB).
pub const RISCV_LITE_EXECUTOR_MMIO_SIZE: u64 = 0x0100_0000;

/// Maximum number of guest processes the device can address.
pub const MAX_PROCESS: u64 = 16;

/// Size in bytes of one process's MMIO slot.
pub const PROCESS_MMIO_SIZE: u64 = 0x1000;

/// Number of priority bands in a `PriorityScheduler` (0 = highest).
pub const MAX_TASK_QUEUE: usize = 8;

/// ABI-advertised per-queue depth. Not enforced by the core (spec §4.1,
/// §4.9 `CapacityFault`); documented here so an enforcing implementation
/// has one obvious place to read the bound from.
pub const MAX_TASK_PER_QUEUE: usize = 256;

/// Number of external interrupt lines the EIH table holds.
pub const MAX_EXTERNAL_INTR: usize = 16;

/// Number of live PriorityScheduler/ExternalInterruptHandler groups. The
/// device multiplexes `MAX_PROCESS` virtual process slots over this much
/// smaller pool of online groups via `ProcStatus::index`.
pub const MAX_ONLINE_STRUCT_GROUP: usize = 4;

/// Number of IPC bound-queue elements in the (reserved) IPC handler block.
pub const IH_BQ_MMIO_COUNT: usize = 31;

// ── Per-process sub-offsets ─────────────────────────────────────────

/// PS dequeue register offset (read: pop; write: dropped).
pub const PS_ENQUEUE_MMIO_OFFSET: u64 = 0x008;
/// Byte stride between PS enqueue-band registers.
pub const PS_ENQUEUE_MMIO_SIZE: u64 = 0x8;

/// Start of the (reserved) IPC handler block within a process slot.
pub const IPC_HANDLER_MMIO_OFFSET: u64 = 0x800;
/// IPC bound-queue element array offset, relative to `IPC_HANDLER_MMIO_OFFSET`.
pub const IH_BQ_MMIO_OFFSET: u64 = 0x8;
/// Byte stride between IPC bound-queue elements.
pub const IH_BQ_MMIO_SIZE: u64 = 0x8;

/// Start of the external interrupt handler block within a process slot.
pub const EXTERNAL_INTERRUPT_HANDLER_MMIO_OFFSET: u64 = 0x900;
/// EIH enqueue array offset, relative to `EXTERNAL_INTERRUPT_HANDLER_MMIO_OFFSET`.
pub const EIH_ENQUEUE_MMIO_OFFSET: u64 = 0x0;
/// Byte stride between EIH enqueue-by-irq registers.
pub const EIH_ENQUEUE_MMIO_SIZE: u64 = 0x8;

/// Only 8-byte accesses are valid on this aperture.
pub const VALID_ACCESS_SIZE: u8 = 8;
