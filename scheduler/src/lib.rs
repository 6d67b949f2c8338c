//! A fair scheduling library.
//!
//! This library simulates a simplified Completely Fair Scheduler: the
//! process with the smallest virtual runtime always runs next, and the
//! virtual runtime it is charged depends on its priority weight.
//!

use std::num::NonZeroU64;

mod cfs;
mod clock;
mod execution_log;
pub mod policy;
mod process;
mod queue;
mod scheduler;
pub mod weight;

pub use crate::cfs::CfsScheduler;
pub use crate::clock::{Clock, SimulatedClock, WallClock, TIME_UNIT};
pub use crate::execution_log::LogEntry;
pub use crate::process::{Classification, Pid, Process, ProcessError};
pub use crate::queue::{MinHeapQueue, ReadyQueue, TreeQueue};
pub use crate::scheduler::{
    Config, Scheduler, SchedulerState, SchedulingDecision, CPU_TIME_SLICE, IO_WAIT_TIME,
};

/// Returns a CFS scheduler backed by a binary heap and a simulated clock.
///
/// * `time_slice` - the maximum number of work units a CPU bound process
///                  consumes before it goes back to the ready queue.
/// * `io_wait` - the number of time units an I/O bound process waits
///               before its single unit of work.
pub fn cfs(time_slice: NonZeroU64, io_wait: u64) -> CfsScheduler<MinHeapQueue, SimulatedClock> {
    CfsScheduler::new(
        Config {
            time_slice,
            io_wait,
        },
        MinHeapQueue::new(),
        SimulatedClock::default(),
    )
}

/// Returns a CFS scheduler backed by an ordered tree and a simulated clock.
///
/// It yields the same order as [`cfs`].
pub fn cfs_tree(time_slice: NonZeroU64, io_wait: u64) -> CfsScheduler<TreeQueue, SimulatedClock> {
    CfsScheduler::new(
        Config {
            time_slice,
            io_wait,
        },
        TreeQueue::new(),
        SimulatedClock::default(),
    )
}
