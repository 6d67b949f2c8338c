//! The per-slice update rules for CPU bound and I/O bound processes.

use crate::weight::calc_delta;
use crate::{Clock, Process};

/// What the scheduler should do with a process after its slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The process still has work and goes back to the ready queue.
    Requeue,
    /// The process has no work left and is never scheduled again.
    Retire,
}

/// The result of executing one slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slice {
    /// Units of work consumed.
    pub executed: u64,
    pub outcome: Outcome,
}

impl Slice {
    fn after(process: &Process, executed: u64) -> Slice {
        let outcome = if process.is_finished() {
            Outcome::Retire
        } else {
            Outcome::Requeue
        };
        Slice { executed, outcome }
    }
}

/// Run a CPU bound process for at most `time_slice` units.
///
/// The process is charged `calc_delta(executed, priority)` and the clock is
/// blocked for the executed amount.
pub fn execute_cpu_bound<C: Clock>(process: &mut Process, time_slice: u64, clock: &mut C) -> Slice {
    let executed = process.consume(time_slice);
    process.charge(calc_delta(executed, process.priority()));
    clock.block(executed);
    Slice::after(process, executed)
}

/// Wait `io_wait` units for I/O, then run an I/O bound process for a single unit.
///
/// The wait and the tick are charged separately, so the process pays
/// `calc_delta(io_wait, priority) + calc_delta(1, priority)` per slice.
/// Only the wait blocks the clock.
pub fn execute_io_bound<C: Clock>(process: &mut Process, io_wait: u64, clock: &mut C) -> Slice {
    clock.block(io_wait);
    process.charge(calc_delta(io_wait, process.priority()));
    let executed = process.consume(1);
    process.charge(calc_delta(executed, process.priority()));
    Slice::after(process, executed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Classification, SimulatedClock};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn cpu_slice_charges_weighted_runtime() {
        let mut clock = SimulatedClock::new(Duration::from_nanos(1));
        let mut process = Process::new(1, 2, 3, Classification::CpuBound);

        let slice = execute_cpu_bound(&mut process, 2, &mut clock);
        assert_eq!(
            slice,
            Slice {
                executed: 2,
                outcome: Outcome::Requeue
            }
        );
        assert_eq!(process.vruntime(), 6);
        assert_eq!(process.remaining_work(), 1);
        assert_eq!(clock.now(), 2);

        let slice = execute_cpu_bound(&mut process, 2, &mut clock);
        assert_eq!(
            slice,
            Slice {
                executed: 1,
                outcome: Outcome::Retire
            }
        );
        assert_eq!(process.vruntime(), 9);
        assert_eq!(process.remaining_work(), 0);
        assert_eq!(clock.now(), 3);
    }

    #[test]
    fn io_slice_charges_wait_and_tick() {
        let mut clock = SimulatedClock::new(Duration::from_nanos(1));
        let mut process = Process::new(2, 5, 2, Classification::IoBound).with_vruntime(4);

        let slice = execute_io_bound(&mut process, 10, &mut clock);
        assert_eq!(slice.executed, 1);
        assert_eq!(slice.outcome, Outcome::Requeue);
        assert_eq!(process.vruntime(), 4 + 60 + 6);
        assert_eq!(process.remaining_work(), 1);
        assert_eq!(clock.now(), 10);

        let slice = execute_io_bound(&mut process, 10, &mut clock);
        assert_eq!(slice.outcome, Outcome::Retire);
        assert_eq!(process.vruntime(), 4 + 2 * 66);
    }
}
