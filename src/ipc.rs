//! IPC handler block — decoded and acknowledged, but reserved.
//!
//! The send register and bound-queue array are part of the guest-visible
//! ABI layout (spec.md §6) but their side effects are an open question in
//! the original device: every access is logged and accepted, and reads
//! always return `0`, without touching any `PriorityScheduler` or
//! `ExternalInterruptHandler` state.

/// Which field within the (reserved) IPC handler block an access decoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcField {
    /// The write-only send scratch register.
    Send,
    /// One element of the bound-queue array, by index.
    BoundQueue(usize),
}

/// Reserved IPC handler state for one online group.
///
/// Present so the device has somewhere to land writes without discarding
/// them outright; no field here currently feeds scheduling or interrupt
/// delivery.
#[derive(Debug, Default, Clone)]
pub struct IpcHandler {
    send: u64,
    bound_queue: [u64; crate::layout::IH_BQ_MMIO_COUNT],
}

impl IpcHandler {
    /// A freshly-zeroed IPC handler block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a read of `field`. Always `0` — see module docs.
    pub fn read(&self, field: IpcField) -> u64 {
        match field {
            IpcField::Send => 0,
            IpcField::BoundQueue(_) => 0,
        }
    }

    /// Handle a write of `value` to `field`. Accepted and stored for
    /// introspection, but never surfaced to PS/EIH state.
    pub fn write(&mut self, field: IpcField, value: u64) {
        match field {
            IpcField::Send => self.send = value,
            IpcField::BoundQueue(index) => {
                if let Some(slot) = self.bound_queue.get_mut(index) {
                    *slot = value;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_register_reads_back_zero_regardless_of_writes() {
        let mut ipc = IpcHandler::new();
        ipc.write(IpcField::Send, 0xdead_beef);
        assert_eq!(ipc.read(IpcField::Send), 0);
    }

    #[test]
    fn bound_queue_reads_back_zero_regardless_of_writes() {
        let mut ipc = IpcHandler::new();
        ipc.write(IpcField::BoundQueue(4), 0x1234);
        assert_eq!(ipc.read(IpcField::BoundQueue(4)), 0);
    }
}
