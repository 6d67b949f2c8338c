#[cfg(not(feature = "tree-queue"))]
use scheduler::cfs;
#[cfg(feature = "tree-queue")]
use scheduler::cfs_tree;
use scheduler::{Classification, LogEntry, Process, Scheduler};

use std::collections::HashMap;
use std::env;
use std::fs;
use std::num::NonZeroU64;

use processor::Report;

mod edge;

fn write_logs(folder: &str, name: &str, logs: &str) {
    let (time_slice, io_wait) = arguments();
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(
        format!("../outputs/{folder}/{name}___{time_slice}_{io_wait}.log"),
        logs,
    )
    .unwrap();
}

fn read_logs(folder: &str, name: &str) -> String {
    let (time_slice, io_wait) = arguments();
    fs::read_to_string(format!(
        "../outputs/{folder}/{name}___{time_slice}_{io_wait}.log"
    ))
    .unwrap()
}

fn run(folder: &str, name: &str, report: &Report) {
    let output = report.to_string();

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, &output);
    } else {
        let reference = read_logs(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn arguments() -> (u64, u64) {
    let time_slice = env::var("TIME_SLICE")
        .unwrap_or("1".to_string())
        .parse::<u64>()
        .unwrap();
    let io_wait = env::var("IO_WAIT")
        .unwrap_or("10".to_string())
        .parse::<u64>()
        .unwrap();
    (time_slice, io_wait)
}

#[cfg(feature = "heap-queue")]
fn scheduler() -> impl Scheduler {
    let (time_slice, io_wait) = arguments();

    println!("Time slice {time_slice}\nIO wait {io_wait}\nQueue: heap");
    cfs(NonZeroU64::new(time_slice).unwrap(), io_wait)
}

#[cfg(feature = "tree-queue")]
fn scheduler() -> impl Scheduler {
    let (time_slice, io_wait) = arguments();

    println!("Time slice {time_slice}\nIO wait {io_wait}\nQueue: tree");
    cfs_tree(NonZeroU64::new(time_slice).unwrap(), io_wait)
}

#[cfg(not(any(feature = "heap-queue", feature = "tree-queue")))]
fn scheduler() -> impl Scheduler {
    let (time_slice, io_wait) = arguments();

    println!("Time slice {time_slice}\nIO wait {io_wait}\nQueue: heap");
    cfs(NonZeroU64::new(time_slice).unwrap(), io_wait)
}

fn cpu(pid: usize, work: u64, priority: u32) -> Option<Process> {
    Some(Process::new(pid, priority, work, Classification::CpuBound))
}

fn io(pid: usize, work: u64, priority: u32) -> Option<Process> {
    Some(Process::new(pid, priority, work, Classification::IoBound))
}

/// Total work executed per PID.
fn executed_by_pid(logs: &[LogEntry]) -> HashMap<usize, u64> {
    let mut executed = HashMap::new();
    for entry in logs {
        *executed.entry(entry.pid.get()).or_insert(0) += entry.executed;
    }
    executed
}
