use std::io::Write;
use std::num::NonZeroU64;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::info;

use processor::{Processor, Report};
use scheduler::{
    CfsScheduler, Classification, Clock, Config, MinHeapQueue, Process, ReadyQueue,
    SimulatedClock, TreeQueue, WallClock, CPU_TIME_SLICE, IO_WAIT_TIME,
};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum QueueKind {
    Heap,
    Tree,
}

/// Simulates a simplified Completely Fair Scheduler and prints the
/// execution log.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The maximum number of work units a CPU bound process runs per slice.
    #[arg(long, default_value_t = CPU_TIME_SLICE)]
    time_slice: NonZeroU64,

    /// The number of time units an I/O bound process waits per slice.
    #[arg(long, default_value_t = IO_WAIT_TIME)]
    io_wait: u64,

    /// The ready queue implementation. Can be one of the following items:
    ///  - `heap`;
    ///  - `tree`.
    #[arg(long, value_enum, default_value_t = QueueKind::Heap)]
    queue: QueueKind,

    /// Sleep for real instead of using a simulated clock.
    #[arg(long, default_value_t = false)]
    wall_clock: bool,

    /// A process as `pid:class:work:priority[:vruntime]`, for example
    /// `2:io:20:5`. Can be repeated. Without it a sample set is used.
    #[arg(long = "process", value_name = "PROCESS")]
    processes: Vec<String>,
}

fn sample_processes() -> Vec<Option<Process>> {
    vec![
        Some(Process::new(1, 0, 15, Classification::CpuBound)),
        Some(Process::new(2, 5, 20, Classification::IoBound)),
        Some(Process::new(3, 2, 10, Classification::CpuBound)),
        Some(Process::new(4, 1, 25, Classification::IoBound)),
        Some(Process::new(5, 3, 12, Classification::CpuBound)),
    ]
}

fn parse_processes(descriptions: &[String]) -> anyhow::Result<Vec<Option<Process>>> {
    descriptions
        .iter()
        .map(|description| {
            description
                .parse::<Process>()
                .map(Some)
                .with_context(|| format!("invalid --process `{description}`"))
        })
        .collect()
}

fn simulate<Q: ReadyQueue, C: Clock>(
    config: Config,
    queue: Q,
    clock: C,
    processes: Vec<Option<Process>>,
) -> Report {
    Processor::run(CfsScheduler::new(config, queue, clock), processes)
}

fn main() -> anyhow::Result<()> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();

    let processes = if args.processes.is_empty() {
        sample_processes()
    } else {
        parse_processes(&args.processes)?
    };

    let config = Config {
        time_slice: args.time_slice,
        io_wait: args.io_wait,
    };
    info!(
        "time slice {}, io wait {}, {:?} queue, wall clock {}",
        config.time_slice, config.io_wait, args.queue, args.wall_clock
    );

    let report = match (args.queue, args.wall_clock) {
        (QueueKind::Heap, false) => simulate(
            config,
            MinHeapQueue::new(),
            SimulatedClock::default(),
            processes,
        ),
        (QueueKind::Heap, true) => {
            simulate(config, MinHeapQueue::new(), WallClock::default(), processes)
        }
        (QueueKind::Tree, false) => simulate(
            config,
            TreeQueue::new(),
            SimulatedClock::default(),
            processes,
        ),
        (QueueKind::Tree, true) => {
            simulate(config, TreeQueue::new(), WallClock::default(), processes)
        }
    };

    print!("{report}");
    Ok(())
}

#[cfg(test)]
mod tests;
