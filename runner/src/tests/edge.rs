use processor::Processor;
use scheduler::{Process, Scheduler, SchedulerState};

use super::{cpu, io, scheduler};

#[test]
pub fn empty_input() {
    let mut scheduler = scheduler();
    let mut processes: Vec<Option<Process>> = vec![];

    assert!(scheduler.schedule(&mut processes).is_empty());
    assert_eq!(scheduler.state(), SchedulerState::Done);
}

#[test]
pub fn only_absent_entries() {
    let report = Processor::run(scheduler(), vec![None, None, None]);

    assert!(report.logs.is_empty());
    assert!(report.initial.is_empty());
    assert!(report.processes.is_empty());
}

#[test]
pub fn finished_processes_are_never_run() {
    let report = Processor::run(scheduler(), vec![cpu(1, 0, 0), io(2, 0, 3)]);

    assert!(report.logs.is_empty());
    assert_eq!(report.initial, report.processes);
}

#[test]
pub fn scheduler_can_be_reused() {
    let mut scheduler = scheduler();

    let mut first = vec![cpu(1, 2, 0)];
    assert_eq!(scheduler.schedule(&mut first).len(), 2);

    let mut second = vec![io(2, 3, 0), None, cpu(3, 1, 0)];
    let logs = scheduler.schedule(&mut second);
    assert_eq!(logs.len(), 4);
    assert_eq!(logs[0].pid, 2);
    assert!(second.iter().flatten().all(Process::is_finished));
}

#[test]
pub fn duplicate_pids_are_tolerated() {
    let report = Processor::run(scheduler(), vec![cpu(7, 1, 0), cpu(7, 1, 0)]);

    assert_eq!(report.logs.len(), 2);
    assert!(report.logs.iter().all(|entry| entry.pid == 7));
}
