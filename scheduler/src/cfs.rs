use log::{debug, info, trace};

use crate::policy::{execute_cpu_bound, execute_io_bound, Outcome};
use crate::{
    Classification, Clock, Config, LogEntry, MinHeapQueue, Process, ReadyQueue, Scheduler,
    SchedulerState, SchedulingDecision, SimulatedClock,
};

/// A simplified Completely Fair Scheduler.
///
/// The process with the smallest virtual runtime always runs next. After its
/// slice it is charged virtual runtime according to its priority weight and,
/// if it has work left, goes back to the ready queue.
///
/// The ready queue and the clock are pluggable, see [`ReadyQueue`] and [`Clock`].
pub struct CfsScheduler<Q: ReadyQueue = MinHeapQueue, C: Clock = SimulatedClock> {
    config: Config,
    ready_queue: Q,
    clock: C,
    state: SchedulerState,
}

impl<Q: ReadyQueue, C: Clock> CfsScheduler<Q, C> {
    pub fn new(config: Config, ready_queue: Q, clock: C) -> Self {
        CfsScheduler {
            config,
            ready_queue,
            clock,
            state: SchedulerState::Done,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Replace the ready queue contents with every unfinished process of
    /// `processes`.
    ///
    /// Handles are indices into `processes`, so [`CfsScheduler::step`] must be
    /// given the same list. Absent entries and processes without remaining
    /// work are skipped.
    pub fn load(&mut self, processes: &[Option<Process>]) {
        while let Some(handle) = self.ready_queue.extract_min() {
            trace!("dropping stale handle {handle}");
        }

        for (handle, process) in processes.iter().enumerate() {
            let Some(process) = process else {
                trace!("skipping empty entry {handle}");
                continue;
            };
            if process.is_finished() {
                debug!("{}: no work left, not queued", process.pid());
                continue;
            }
            self.ready_queue.insert(handle, process.vruntime());
        }
        self.update_state();
        trace!(
            "loaded {} processes, state {}",
            self.ready_queue.len(),
            self.state
        );
    }

    /// Execute one slice of the process with the minimum virtual runtime.
    pub fn step(&mut self, processes: &mut [Option<Process>]) -> SchedulingDecision {
        while let Some(handle) = self.ready_queue.extract_min() {
            let Some(process) = processes.get_mut(handle).and_then(Option::as_mut) else {
                trace!("handle {handle} has no process, ignored");
                continue;
            };
            if process.is_finished() {
                trace!("{}: already retired, ignored", process.pid());
                continue;
            }

            let pid = process.pid();
            let vruntime = process.vruntime();
            self.state = SchedulerState::Running(pid);
            trace!("{pid}: RUNNING, vruntime={vruntime}");

            let start_time = self.clock.now();
            let slice = match process.classification() {
                Classification::CpuBound => {
                    execute_cpu_bound(process, self.config.time_slice.get(), &mut self.clock)
                }
                Classification::IoBound => {
                    execute_io_bound(process, self.config.io_wait, &mut self.clock)
                }
            };
            let end_time = self.clock.now();

            debug!(
                "{pid}: executed {} units, vruntime {vruntime} -> {}, remaining {}",
                slice.executed,
                process.vruntime(),
                process.remaining_work()
            );

            match slice.outcome {
                Outcome::Requeue => self.ready_queue.insert(handle, process.vruntime()),
                Outcome::Retire => debug!("{pid}: retired"),
            }
            self.update_state();

            return SchedulingDecision::Run(LogEntry {
                pid,
                start_time,
                end_time,
                vruntime,
                executed: slice.executed,
            });
        }

        self.state = SchedulerState::Done;
        SchedulingDecision::Done
    }

    fn update_state(&mut self) {
        self.state = if self.ready_queue.is_empty() {
            SchedulerState::Done
        } else {
            SchedulerState::Idle
        };
    }
}

impl<Q: ReadyQueue, C: Clock> Scheduler for CfsScheduler<Q, C> {
    fn schedule(&mut self, processes: &mut [Option<Process>]) -> Vec<LogEntry> {
        self.load(processes);

        let mut log = Vec::new();
        while let SchedulingDecision::Run(entry) = self.step(processes) {
            log.push(entry);
        }

        info!("all processes finished after {} slices", log.len());
        log
    }

    fn state(&self) -> SchedulerState {
        self.state
    }
}
