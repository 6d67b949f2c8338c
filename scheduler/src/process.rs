use std::fmt::{self, Display};
use std::str::FromStr;

/// The PID of a process
///
/// PIDs are assigned by whoever builds the process list. The scheduler
/// never checks them for uniqueness.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(usize);

impl Pid {
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a process spends its time slices.
///
/// The classification is fixed when the process is created.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The process consumes CPU for the whole slice.
    CpuBound,
    /// The process waits for I/O, then consumes a single CPU tick.
    IoBound,
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::CpuBound => write!(f, "CPU"),
            Classification::IoBound => write!(f, "IO"),
        }
    }
}

/// The state the scheduler keeps for one process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Process {
    pid: Pid,
    vruntime: i64,
    remaining_work: u64,
    priority: u32,
    classification: Classification,
}

impl Process {
    /// Create a process with a virtual runtime of 0.
    ///
    /// * `priority` - lower values get a larger weight and accumulate
    ///                virtual runtime more slowly.
    /// * `remaining_work` - the number of time units the process still needs.
    pub fn new(
        pid: usize,
        priority: u32,
        remaining_work: u64,
        classification: Classification,
    ) -> Process {
        Process {
            pid: Pid::new(pid),
            vruntime: 0,
            remaining_work,
            priority,
            classification,
        }
    }

    /// Start the process from a caller supplied virtual runtime baseline.
    pub fn with_vruntime(mut self, vruntime: i64) -> Process {
        self.vruntime = vruntime;
        self
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn vruntime(&self) -> i64 {
        self.vruntime
    }

    pub fn remaining_work(&self) -> u64 {
        self.remaining_work
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// A finished process is never placed in the ready queue again.
    pub fn is_finished(&self) -> bool {
        self.remaining_work == 0
    }

    /// Consume up to `amount` units of work and return how much was consumed.
    pub(crate) fn consume(&mut self, amount: u64) -> u64 {
        let executed = amount.min(self.remaining_work);
        self.remaining_work -= executed;
        executed
    }

    pub(crate) fn charge(&mut self, delta: i64) {
        self.vruntime = self.vruntime.saturating_add(delta);
    }
}

/// Errors produced while building a [`Process`] from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// The description does not have 4 or 5 `:` separated fields.
    Malformed(String),
    /// A field is not a valid integer.
    InvalidNumber { field: &'static str, value: String },
    /// The classification is neither `cpu` nor `io`.
    UnknownClassification(String),
    /// A negative priority would make the weight function divide by zero
    /// or become negative.
    NegativePriority(i64),
    /// Remaining work cannot be negative.
    NegativeWork(i64),
}

impl Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessError::Malformed(input) => {
                write!(
                    f,
                    "malformed process `{input}`, expected pid:class:work:priority[:vruntime]"
                )
            }
            ProcessError::InvalidNumber { field, value } => {
                write!(f, "invalid {field} `{value}`")
            }
            ProcessError::UnknownClassification(class) => {
                write!(f, "unknown classification `{class}`, expected cpu or io")
            }
            ProcessError::NegativePriority(priority) => {
                write!(f, "priority {priority} is negative")
            }
            ProcessError::NegativeWork(work) => {
                write!(f, "remaining work {work} is negative")
            }
        }
    }
}

impl std::error::Error for ProcessError {}

fn parse_number(field: &'static str, value: &str) -> Result<i64, ProcessError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ProcessError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl FromStr for Classification {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Classification::CpuBound),
            "io" => Ok(Classification::IoBound),
            _ => Err(ProcessError::UnknownClassification(s.to_string())),
        }
    }
}

/// Parses `pid:class:work:priority[:vruntime]`, for example `4:io:25:1`.
impl FromStr for Process {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() != 4 && fields.len() != 5 {
            return Err(ProcessError::Malformed(s.to_string()));
        }

        let pid = fields[0]
            .trim()
            .parse::<usize>()
            .map_err(|_| ProcessError::InvalidNumber {
                field: "pid",
                value: fields[0].to_string(),
            })?;
        let classification = fields[1].parse::<Classification>()?;

        let work = parse_number("work", fields[2])?;
        let work = u64::try_from(work).map_err(|_| ProcessError::NegativeWork(work))?;

        let priority = parse_number("priority", fields[3])?;
        if priority < 0 {
            return Err(ProcessError::NegativePriority(priority));
        }
        let priority = u32::try_from(priority).map_err(|_| ProcessError::InvalidNumber {
            field: "priority",
            value: fields[3].to_string(),
        })?;

        let vruntime = match fields.get(4) {
            Some(value) => parse_number("vruntime", value)?,
            None => 0,
        };

        Ok(Process::new(pid, priority, work, classification).with_vruntime(vruntime))
    }
}
