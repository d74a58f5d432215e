//! Process-status table (PST): maps guest processes to online state and
//! the online group they use.

use crate::layout::MAX_PROCESS;

/// Per-process online bit, IPC mailbox scratch, and group index.
///
/// `ps_mbuf`'s bit 0 is the online flag. The original C device queries it
/// with `ps->ps_mbuf &= 0x1`, a compound assignment that happens to also
/// read correctly but clobbers every other bit on each call. Per spec, that
/// is a bug to note, not reproduce — `is_online` here is a plain read-only
/// test.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcStatus {
    ps_mbuf: u64,
    ipc_mbuf: u64,
    index: usize,
}

impl ProcStatus {
    /// A freshly-zeroed, offline record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the online bit.
    pub fn set_online(&mut self) {
        self.ps_mbuf |= 0x1;
    }

    /// Clear the online bit.
    pub fn set_offline(&mut self) {
        self.ps_mbuf &= !0x1;
    }

    /// Read-only test of the online bit.
    pub fn is_online(&self) -> bool {
        self.ps_mbuf & 0x1 != 0
    }

    /// Assign which online PS/EIH group this process uses.
    pub fn add_map(&mut self, index: usize) {
        self.index = index;
    }

    /// The online group index backing this process.
    pub fn index(&self) -> usize {
        self.index
    }

    /// IPC mailbox scratch register (reserved, see [`crate::ipc`]).
    pub fn ipc_mbuf(&self) -> u64 {
        self.ipc_mbuf
    }

    /// Overwrite the IPC mailbox scratch register.
    pub fn set_ipc_mbuf(&mut self, value: u64) {
        self.ipc_mbuf = value;
    }
}

/// Fixed table of [`MAX_PROCESS`] [`ProcStatus`] records, indexed by guest
/// process number.
#[derive(Debug, Clone)]
pub struct ProcessStatusTable {
    entries: Vec<ProcStatus>,
}

impl ProcessStatusTable {
    /// Create a table with every process offline.
    pub fn new() -> Self {
        Self {
            entries: vec![ProcStatus::new(); MAX_PROCESS as usize],
        }
    }

    /// Number of process slots in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no process slots (never true for a real table;
    /// kept for API symmetry with `len`).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow process `process_index`'s record.
    ///
    /// # Panics
    ///
    /// Panics if `process_index >= MAX_PROCESS` (`FatalDecode`).
    pub fn get(&self, process_index: usize) -> &ProcStatus {
        assert!(
            process_index < self.entries.len(),
            "process index {process_index} out of range"
        );
        &self.entries[process_index]
    }

    /// Mutably borrow process `process_index`'s record.
    ///
    /// # Panics
    ///
    /// Panics if `process_index >= MAX_PROCESS` (`FatalDecode`).
    pub fn get_mut(&mut self, process_index: usize) -> &mut ProcStatus {
        assert!(
            process_index < self.entries.len(),
            "process index {process_index} out of range"
        );
        &mut self.entries[process_index]
    }
}

impl Default for ProcessStatusTable {
    fn default() -> Self {
        Self::new()
    }
}
