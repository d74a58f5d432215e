//! RISC-V Lite Executor device model.
//!
//! This crate is the MMIO decode-and-dispatch core of an emulated hardware
//! accelerator: a guest RISC-V kernel offloads per-process priority
//! scheduling, external-interrupt dispatch, and (reserved) IPC delivery to
//! this device through 64-bit loads and stores at well-known offsets inside
//! a 16 MiB aperture. Everything outside that core — the surrounding
//! platform's bus, device tree, and CPU wiring — is an external collaborator
//! and out of scope here; see [`device::LiteExecutorDevice`] for the two
//! entry points (`mmio_read64`/`mmio_write64`) a platform emulator calls.

pub mod decode;
pub mod device;
pub mod error;
pub mod external_interrupt_handler;
pub mod ipc;
pub mod layout;
pub mod priority_scheduler;
pub mod proc_status;
pub mod queue;

pub use device::LiteExecutorDevice;
pub use error::DeviceError;
