//! Simulation output model.
//!
//! A run produces an ordered list of execution intervals (the Gantt
//! timeline) plus one result record per process, in completion order.

use serde::{Deserialize, Serialize};

use super::Process;

/// One contiguous slice of CPU time granted to a process.
///
/// Invariant: `start_time < end_time`. Adjacent intervals of the same
/// process are never merged; each one is a separate dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that held the CPU.
    pub process_id: String,
    /// Dispatch time.
    pub start_time: i64,
    /// Time the CPU was released (exclusive).
    pub end_time: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Per-process metrics after the process finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// The input record.
    #[serde(flatten)]
    pub process: Process,
    /// Time the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl ProcessResult {
    /// Derives turnaround and waiting time from the completion time.
    pub fn new(process: Process, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        Self {
            process,
            completion_time,
            turnaround_time,
            waiting_time,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }
}

/// Complete outcome of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// One entry per input process, in completion order.
    pub process_results: Vec<ProcessResult>,
    /// Gantt timeline in dispatch order.
    pub execution_intervals: Vec<ExecutionInterval>,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// End of the last interval (= latest completion time).
    pub total_time: i64,
}

impl SchedulingResult {
    /// Looks up the result for a process.
    pub fn result_for(&self, process_id: &str) -> Option<&ProcessResult> {
        self.process_results.iter().find(|r| r.id() == process_id)
    }

    /// All intervals granted to a process, in order.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&ExecutionInterval> {
        self.execution_intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Total CPU time the timeline accounts for.
    pub fn busy_time(&self) -> i64 {
        self.execution_intervals.iter().map(|i| i.duration()).sum()
    }

    /// Completion order as process IDs.
    pub fn completion_order(&self) -> Vec<&str> {
        self.process_results.iter().map(|r| r.id()).collect()
    }

    /// Number of intervals.
    pub fn interval_count(&self) -> usize {
        self.execution_intervals.len()
    }
}
