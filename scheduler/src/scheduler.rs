use std::fmt::{self, Display};
use std::num::NonZeroU64;

use crate::{LogEntry, Pid, Process};

/// The default number of units a CPU bound process runs per slice, one unit.
pub const CPU_TIME_SLICE: NonZeroU64 = NonZeroU64::MIN;

/// The default number of units an I/O bound process waits per slice.
pub const IO_WAIT_TIME: u64 = 10;

/// Scheduler parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// The maximum amount of work a CPU bound process consumes per slice.
    ///
    /// Cannot be zero, otherwise a CPU bound process would never finish.
    pub time_slice: NonZeroU64,

    /// How long an I/O bound process waits before its single CPU tick.
    pub io_wait: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_slice: CPU_TIME_SLICE,
            io_wait: IO_WAIT_TIME,
        }
    }
}

/// The state of the run loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulerState {
    /// Processes are waiting in the ready queue and none is executing.
    Idle,
    /// The process with PID `pid` is executing a slice.
    Running(Pid),
    /// The ready queue is empty.
    Done,
}

impl Display for SchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerState::Idle => write!(f, "IDLE"),
            SchedulerState::Running(pid) => write!(f, "RUNNING {pid}"),
            SchedulerState::Done => write!(f, "DONE"),
        }
    }
}

/// The result of a single step of the run loop.
///
/// This is returned by [`crate::CfsScheduler::step`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SchedulingDecision {
    /// A slice was executed and logged.
    Run(LogEntry),
    /// There are no more processes to schedule.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingDecision::Run(entry) => {
                write!(f, "Run {} for {} units", entry.pid, entry.executed)
            }
            SchedulingDecision::Done => write!(f, "Done, no more processes"),
        }
    }
}

/// The trait that any scheduler has to implement.
pub trait Scheduler {
    /// Run every present process in `processes` to completion.
    ///
    /// `None` entries are skipped. The processes are updated in place and
    /// the returned log holds one entry per executed slice, in execution order.
    fn schedule(&mut self, processes: &mut [Option<Process>]) -> Vec<LogEntry>;

    /// Returns the current state of the run loop.
    fn state(&self) -> SchedulerState;
}
