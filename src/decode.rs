//! Pure MMIO address decoder.
//!
//! The guest's 24-bit aperture offset is decoded hierarchically: process
//! slot, then functional block, then register/array element, expressed as
//! one `match` over non-overlapping ranges rather than nested `if`/`else`
//! cascades (spec.md §9's "declarative table of regions" design note). The
//! decoder never touches device state — it is a pure function from `addr`
//! to a [`Decoded`] value, which callers in [`crate::device`] then act on.
//! Range violations (process index, band, or irq out of bounds) are
//! `FatalDecode`s and panic here, matching spec.md §4.9.

use crate::layout::*;

/// Which functional block and element a process-relative offset decoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// PS dequeue register (read: pop; write: dropped).
    PsDequeue,
    /// PS enqueue register for priority band `band`.
    PsEnqueue { band: usize },
    /// IPC send register (reserved).
    IpcSend,
    /// IPC bound-queue element `index` (reserved).
    IpcBoundQueue { index: usize },
    /// EIH enqueue register for IRQ line `irq`.
    EihEnqueue { irq: usize },
}

/// A fully decoded MMIO access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Which guest process slot the access targets.
    pub process_index: usize,
    /// Which field within that process's slot.
    pub region: Region,
}

/// Decode aperture offset `addr` into a process index and a region.
///
/// # Panics
///
/// Panics (`FatalDecode`) if `process_index >= MAX_PROCESS`, if a PS
/// enqueue offset decodes to `band >= MAX_TASK_QUEUE`, or if an EIH enqueue
/// offset decodes to `irq >= MAX_EXTERNAL_INTR`. Per spec.md §4.5/§6 these
/// checks apply to every access to the offset, independent of whether it
/// turns out to be a read or a write.
pub fn decode(addr: u64) -> Decoded {
    let process_index = (addr / PROCESS_MMIO_SIZE) as usize;
    assert!(
        (process_index as u64) < MAX_PROCESS,
        "process index {process_index} out of range"
    );
    let process_addr = addr % PROCESS_MMIO_SIZE;

    Decoded {
        process_index,
        region: decode_region(process_addr),
    }
}

fn decode_region(process_addr: u64) -> Region {
    match process_addr {
        _ if process_addr < IPC_HANDLER_MMIO_OFFSET => decode_ps_region(process_addr),
        _ if process_addr < EXTERNAL_INTERRUPT_HANDLER_MMIO_OFFSET => {
            decode_ipc_region(process_addr - IPC_HANDLER_MMIO_OFFSET)
        }
        eih_addr => decode_eih_region(eih_addr - EXTERNAL_INTERRUPT_HANDLER_MMIO_OFFSET),
    }
}

fn decode_ps_region(ps_addr: u64) -> Region {
    if ps_addr < PS_ENQUEUE_MMIO_OFFSET {
        return Region::PsDequeue;
    }
    let band = ((ps_addr - PS_ENQUEUE_MMIO_OFFSET) / PS_ENQUEUE_MMIO_SIZE) as usize;
    assert!(band < MAX_TASK_QUEUE, "priority band {band} out of range");
    Region::PsEnqueue { band }
}

fn decode_ipc_region(ih_addr: u64) -> Region {
    if ih_addr < IH_BQ_MMIO_OFFSET {
        return Region::IpcSend;
    }
    let index = ((ih_addr - IH_BQ_MMIO_OFFSET) / IH_BQ_MMIO_SIZE) as usize;
    Region::IpcBoundQueue { index }
}

fn decode_eih_region(eih_addr: u64) -> Region {
    let irq = ((eih_addr - EIH_ENQUEUE_MMIO_OFFSET) / EIH_ENQUEUE_MMIO_SIZE) as usize;
    assert!(irq < MAX_EXTERNAL_INTR, "irq {irq} out of range");
    Region::EihEnqueue { irq }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_a_pure_function_of_addr() {
        let a = decode(0x1008);
        let b = decode(0x1008);
        assert_eq!(a, b);
    }

    #[test]
    fn decodes_ps_dequeue() {
        let d = decode(0x0000);
        assert_eq!(d.process_index, 0);
        assert_eq!(d.region, Region::PsDequeue);
    }

    #[test]
    fn decodes_ps_enqueue_band() {
        let d = decode(0x0018);
        assert_eq!(d.region, Region::PsEnqueue { band: 2 });
    }

    #[test]
    fn decodes_ipc_send() {
        let d = decode(0x0800);
        assert_eq!(d.region, Region::IpcSend);
    }

    #[test]
    fn decodes_ipc_bound_queue() {
        let d = decode(0x0810);
        assert_eq!(d.region, Region::IpcBoundQueue { index: 1 });
    }

    #[test]
    fn decodes_eih_enqueue() {
        let d = decode(0x0918);
        assert_eq!(d.region, Region::EihEnqueue { irq: 3 });
    }

    #[test]
    fn decodes_process_slot_from_high_bits() {
        let d = decode(0x1008);
        assert_eq!(d.process_index, 1);
        assert_eq!(d.region, Region::PsEnqueue { band: 0 });
    }

    #[test]
    #[should_panic(expected = "process index 16 out of range")]
    fn process_index_out_of_range_is_fatal() {
        decode(MAX_PROCESS * PROCESS_MMIO_SIZE);
    }

    #[test]
    #[should_panic(expected = "priority band 8 out of range")]
    fn ps_enqueue_band_out_of_range_is_fatal() {
        decode(PS_ENQUEUE_MMIO_OFFSET + (MAX_TASK_QUEUE as u64) * PS_ENQUEUE_MMIO_SIZE);
    }

    #[test]
    #[should_panic(expected = "irq 16 out of range")]
    fn eih_irq_out_of_range_is_fatal() {
        decode(
            EXTERNAL_INTERRUPT_HANDLER_MMIO_OFFSET
                + (MAX_EXTERNAL_INTR as u64) * EIH_ENQUEUE_MMIO_SIZE,
        );
    }
}
