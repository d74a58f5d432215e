//! The assembled Lite Executor device: process-status table, the online
//! PS/EIH/IPC group pool, the MMIO decode-and-dispatch engine, and the IRQ
//! input handler.

use tracing::{debug, info, trace};

use crate::decode::{decode, Region};
use crate::error::DeviceError;
use crate::external_interrupt_handler::ExternalInterruptHandler;
use crate::ipc::{IpcField, IpcHandler};
use crate::layout::{MAX_EXTERNAL_INTR, MAX_ONLINE_STRUCT_GROUP};
use crate::priority_scheduler::PriorityScheduler;
use crate::proc_status::ProcessStatusTable;

/// The Lite Executor accelerator.
///
/// Construct with [`LiteExecutorDevice::create`], then drive it with
/// [`mmio_read64`](Self::mmio_read64) / [`mmio_write64`](Self::mmio_write64)
/// for guest loads/stores and [`fire_irq`](Self::fire_irq) for platform
/// interrupt-line assertions — the three entry points a surrounding
/// platform emulator needs. Everything else (mapping the aperture into a
/// bus, wiring GPIO lines, device-tree nodes) is that platform's job, not
/// this crate's (spec.md §1).
pub struct LiteExecutorDevice {
    base_addr: u64,
    num_sources: u32,
    pst: ProcessStatusTable,
    pschedulers: Vec<PriorityScheduler>,
    eihs: Vec<ExternalInterruptHandler>,
    ipcs: Vec<IpcHandler>,
}

impl LiteExecutorDevice {
    /// Build a device mapped (by convention — this crate does no actual bus
    /// mapping) at `base_addr`, wired for `num_sources` external interrupt
    /// input lines.
    ///
    /// Seeds processes `0..MAX_ONLINE_STRUCT_GROUP` online with
    /// `index = i`, matching the original device's realize-time seeding
    /// (spec.md §4.7/§3).
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::TooManyInterruptSources`] if `num_sources`
    /// exceeds [`MAX_EXTERNAL_INTR`] — every source must address a real EIH
    /// queue.
    pub fn create(base_addr: u64, num_sources: u32) -> Result<Self, DeviceError> {
        if num_sources as usize > MAX_EXTERNAL_INTR {
            return Err(DeviceError::TooManyInterruptSources {
                requested: num_sources,
                max: MAX_EXTERNAL_INTR,
            });
        }

        let mut pst = ProcessStatusTable::new();
        for i in 0..MAX_ONLINE_STRUCT_GROUP {
            let proc = pst.get_mut(i);
            proc.set_online();
            proc.add_map(i);
        }

        info!(base_addr, num_sources, "lite executor realized");

        Ok(Self {
            base_addr,
            num_sources,
            pst,
            pschedulers: (0..MAX_ONLINE_STRUCT_GROUP)
                .map(|_| PriorityScheduler::new())
                .collect(),
            eihs: (0..MAX_ONLINE_STRUCT_GROUP)
                .map(|_| ExternalInterruptHandler::new())
                .collect(),
            ipcs: (0..MAX_ONLINE_STRUCT_GROUP).map(|_| IpcHandler::new()).collect(),
        })
    }

    /// The base address this device was created with.
    pub fn base_addr(&self) -> u64 {
        self.base_addr
    }

    /// The number of external interrupt input lines this device was wired
    /// for.
    pub fn num_sources(&self) -> u32 {
        self.num_sources
    }

    /// Mark process `process_index` online, mapped to online group
    /// `group_index`.
    ///
    /// # Panics
    ///
    /// Panics if `process_index` is out of range (`FatalDecode`) or
    /// `group_index >= MAX_ONLINE_STRUCT_GROUP`.
    pub fn set_process_online(&mut self, process_index: usize, group_index: usize) {
        assert!(
            group_index < MAX_ONLINE_STRUCT_GROUP,
            "online group index {group_index} out of range"
        );
        let proc = self.pst.get_mut(process_index);
        proc.add_map(group_index);
        proc.set_online();
    }

    /// Mark process `process_index` offline.
    ///
    /// # Panics
    ///
    /// Panics if `process_index` is out of range (`FatalDecode`).
    pub fn set_process_offline(&mut self, process_index: usize) {
        self.pst.get_mut(process_index).set_offline();
    }

    /// Service a guest 64-bit load at aperture offset `addr`.
    ///
    /// # Panics
    ///
    /// Panics on any `FatalDecode` condition (spec.md §4.9): process index,
    /// band, or irq out of range.
    pub fn mmio_read64(&mut self, addr: u64) -> u64 {
        let decoded = decode(addr);

        if !self.pst.get(decoded.process_index).is_online() {
            debug!(
                process = decoded.process_index,
                addr, "read targets offline process, dropped"
            );
            return 0;
        }

        let group = self.pst.get(decoded.process_index).index();
        match decoded.region {
            Region::PsDequeue => self.pschedulers[group].pop(),
            Region::PsEnqueue { band } => {
                trace!(process = decoded.process_index, band, "read of PS enqueue register, no-op");
                0
            }
            Region::IpcSend => {
                trace!(process = decoded.process_index, "read of IPC send register, reserved");
                self.ipcs[group].read(IpcField::Send)
            }
            Region::IpcBoundQueue { index } => {
                trace!(process = decoded.process_index, index, "read of IPC bound queue, reserved");
                self.ipcs[group].read(IpcField::BoundQueue(index))
            }
            Region::EihEnqueue { irq } => {
                trace!(process = decoded.process_index, irq, "read of EIH enqueue register, no-op");
                0
            }
        }
    }

    /// Service a guest 64-bit store of `value` at aperture offset `addr`.
    ///
    /// # Panics
    ///
    /// Panics on any `FatalDecode` condition (spec.md §4.9).
    pub fn mmio_write64(&mut self, addr: u64, value: u64) {
        let decoded = decode(addr);

        if !self.pst.get(decoded.process_index).is_online() {
            debug!(
                process = decoded.process_index,
                addr, "write targets offline process, dropped"
            );
            return;
        }

        let group = self.pst.get(decoded.process_index).index();
        match decoded.region {
            Region::PsDequeue => {
                trace!(process = decoded.process_index, "write of PS dequeue register, dropped");
            }
            Region::PsEnqueue { band } => {
                self.pschedulers[group].push(band, value);
            }
            Region::IpcSend => {
                trace!(process = decoded.process_index, "write of IPC send register, reserved");
                self.ipcs[group].write(IpcField::Send, value);
            }
            Region::IpcBoundQueue { index } => {
                trace!(process = decoded.process_index, index, "write of IPC bound queue, reserved");
                self.ipcs[group].write(IpcField::BoundQueue(index), value);
            }
            Region::EihEnqueue { irq } => {
                self.eihs[group].push(irq, value);
            }
        }
    }

    /// Assert external interrupt line `irq`, as the platform's interrupt
    /// controller would via a GPIO-style input pin.
    ///
    /// Pops one handler cookie from process 0's EIH queue for `irq` and, if
    /// non-zero, enqueues it at priority band 0 of process 0's PS group —
    /// process 0 is hard-coded as the interrupt-dispatching process
    /// (spec.md §4.6/§9). `level` is accepted for interface parity with a
    /// real GPIO line but ignored: any assertion triggers one dispatch
    /// (spec.md §9, open question).
    ///
    /// # Panics
    ///
    /// Panics if `irq >= MAX_EXTERNAL_INTR` (`FatalDecode`).
    pub fn fire_irq(&mut self, irq: u32, level: bool) {
        let _ = level;
        assert!(
            (irq as usize) < MAX_EXTERNAL_INTR,
            "irq {irq} out of range"
        );

        let group = self.pst.get(0).index();
        let cookie = self.eihs[group].pop(irq as usize);
        if cookie != 0 {
            self.pschedulers[group].push(0, cookie);
            info!(irq, cookie, "external interrupt dispatched to process 0");
        } else {
            trace!(irq, "external interrupt with no registered handler, discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_many_interrupt_sources() {
        let err = LiteExecutorDevice::create(0, (MAX_EXTERNAL_INTR as u32) + 1).unwrap_err();
        assert_eq!(
            err,
            DeviceError::TooManyInterruptSources {
                requested: (MAX_EXTERNAL_INTR as u32) + 1,
                max: MAX_EXTERNAL_INTR,
            }
        );
    }

    #[test]
    fn accepts_num_sources_at_the_limit() {
        assert!(LiteExecutorDevice::create(0, MAX_EXTERNAL_INTR as u32).is_ok());
    }

    #[test]
    fn seeded_processes_are_online_with_identity_group_mapping() {
        let dev = LiteExecutorDevice::create(0, 4).unwrap();
        for i in 0..MAX_ONLINE_STRUCT_GROUP {
            assert!(dev.pst.get(i).is_online());
            assert_eq!(dev.pst.get(i).index(), i);
        }
        assert!(!dev.pst.get(MAX_ONLINE_STRUCT_GROUP).is_online());
    }
}
