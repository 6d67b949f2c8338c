use std::fmt::{self, Display};

use crate::Pid;

/// One executed slice.
///
/// Entries are appended in execution order and never modified.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The process that ran.
    pub pid: Pid,

    /// Timestamp taken right before the slice, in nanoseconds.
    pub start_time: u64,

    /// Timestamp taken right after the slice, in nanoseconds.
    pub end_time: u64,

    /// The virtual runtime of the process when it was taken out of the queue.
    pub vruntime: i64,

    /// Units of work the slice consumed.
    pub executed: u64,
}

impl LogEntry {
    pub fn duration(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.pid,
            self.start_time,
            self.end_time,
            self.duration()
        )
    }
}
