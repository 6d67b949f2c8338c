//! A processor simulation library
//!
//! This is used for running schedulers from the [`scheduler`] crate over a
//! list of processes and presenting the result.

use std::fmt::{self, Display};

use log::info;
use scheduler::{Classification, LogEntry, Pid, Process, Scheduler};

/// Information about a process state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInfo {
    /// The PID of the process.
    pub pid: Pid,

    /// The process priority.
    pub priority: u32,

    /// The work the process still has to do.
    pub remaining_work: u64,

    /// The accumulated virtual runtime.
    pub vruntime: i64,

    pub classification: Classification,
}

impl From<&Process> for ProcessInfo {
    fn from(process: &Process) -> Self {
        ProcessInfo {
            pid: process.pid(),
            priority: process.priority(),
            remaining_work: process.remaining_work(),
            vruntime: process.vruntime(),
            classification: process.classification(),
        }
    }
}

impl Display for ProcessInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.pid, self.priority, self.remaining_work, self.vruntime, self.classification
        )
    }
}

/// The outcome of a simulation run.
#[derive(Debug, PartialEq)]
pub struct Report {
    /// The processes as they were handed to the scheduler.
    pub initial: Vec<ProcessInfo>,

    /// Every executed slice, in execution order.
    pub logs: Vec<LogEntry>,

    /// The processes after the scheduler has finished.
    pub processes: Vec<ProcessInfo>,
}

fn snapshot(processes: &[Option<Process>]) -> Vec<ProcessInfo> {
    processes.iter().flatten().map(ProcessInfo::from).collect()
}

fn write_processes(f: &mut fmt::Formatter<'_>, processes: &[ProcessInfo]) -> fmt::Result {
    writeln!(f, "PID\tPRI\tWORK\tVRUNTIME\tTYPE")?;
    for process in processes {
        writeln!(f, "{process}")?;
    }
    Ok(())
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===== Processes =====")?;
        write_processes(f, &self.initial)?;
        writeln!(f)?;
        writeln!(f, "===== Slices =====")?;
        write!(f, "{}", format_logs(&self.logs))?;
        writeln!(f)?;
        writeln!(f, "===== Final =====")?;
        write_processes(f, &self.processes)?;
        writeln!(f)?;
        writeln!(f, "===== Summary =====")?;
        writeln!(f, "Processes scheduled: {}", self.initial.len())?;
        writeln!(f, "Execution slices: {}", self.logs.len())
    }
}

/// The processor simulator.
pub struct Processor;

impl Processor {
    /// Run a simulation.
    ///
    /// * `scheduler` - the scheduler to use for the simulation.
    /// * `processes` - the process list, `None` entries are skipped.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::{Classification, Process};
    /// use std::num::NonZeroU64;
    ///
    /// let report = Processor::run(
    ///     scheduler::cfs(NonZeroU64::new(1).unwrap(), 10),
    ///     vec![
    ///         Some(Process::new(1, 0, 3, Classification::CpuBound)),
    ///         None,
    ///         Some(Process::new(2, 1, 2, Classification::IoBound)),
    ///     ],
    /// );
    /// assert_eq!(report.logs.len(), 5);
    /// ```
    pub fn run<S: Scheduler>(mut scheduler: S, mut processes: Vec<Option<Process>>) -> Report {
        let initial = snapshot(&processes);
        info!("scheduling {} processes", initial.len());

        let logs = scheduler.schedule(&mut processes);

        Report {
            initial,
            logs,
            processes: snapshot(&processes),
        }
    }
}

/// Format the slice log to a [`String`].
///
/// * `logs` - the logs returned by the scheduler.
///
/// ## Example
///
/// ```rust
/// use processor::{format_logs, Processor};
/// use scheduler::{Classification, Process};
/// use std::num::NonZeroU64;
///
/// let report = Processor::run(
///     scheduler::cfs(NonZeroU64::new(1).unwrap(), 10),
///     vec![Some(Process::new(1, 0, 1, Classification::CpuBound))],
/// );
///
/// assert_eq!(
///     format_logs(&report.logs),
///     "#\tPID\tSTART\tEND\tDURATION\n1\t1\t0\t1000000\t1000000\n"
/// );
/// ```
pub fn format_logs(logs: &[LogEntry]) -> String {
    let mut s = String::from("#\tPID\tSTART\tEND\tDURATION\n");
    for (slice, log) in logs.iter().enumerate() {
        s.push_str(&format!("{}\t{}\n", slice + 1, log));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::num::NonZeroU64;

    #[test]
    fn report_keeps_initial_and_final_state() {
        let report = Processor::run(
            scheduler::cfs(NonZeroU64::MIN, 2),
            vec![
                None,
                Some(Process::new(3, 1, 1, Classification::IoBound)),
                Some(Process::new(4, 0, 1, Classification::CpuBound).with_vruntime(5)),
            ],
        );

        assert_eq!(
            report.to_string(),
            "===== Processes =====\n\
             PID\tPRI\tWORK\tVRUNTIME\tTYPE\n\
             3\t1\t1\t0\tIO\n\
             4\t0\t1\t5\tCPU\n\
             \n\
             ===== Slices =====\n\
             #\tPID\tSTART\tEND\tDURATION\n\
             1\t3\t0\t2000000\t2000000\n\
             2\t4\t2000000\t3000000\t1000000\n\
             \n\
             ===== Final =====\n\
             PID\tPRI\tWORK\tVRUNTIME\tTYPE\n\
             3\t1\t0\t6\tIO\n\
             4\t0\t0\t6\tCPU\n\
             \n\
             ===== Summary =====\n\
             Processes scheduled: 2\n\
             Execution slices: 2\n"
        );
    }
}
