//! Process model.
//!
//! A process is a unit of CPU work: it becomes eligible at its arrival
//! time and needs `burst_time` units of CPU to finish.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled (caller-owned input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (uniqueness is the caller's responsibility).
    pub id: String,
    /// Time at which the process becomes ready (≥ 0).
    pub arrival_time: i64,
    /// Total CPU time required (≥ 1).
    pub burst_time: i64,
    /// Scheduling priority (higher = more urgent). Only priority
    /// algorithms read it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used in comparisons, falling back to `default_priority`.
    #[inline]
    pub fn priority_or(&self, default_priority: i32) -> i32 {
        self.priority.unwrap_or(default_priority)
    }
}

/// Working copy of a [`Process`] owned by one simulation run.
///
/// Carries the resolved priority, the input position (used for
/// deterministic tie-breaking), and the remaining CPU time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationProcess {
    /// The caller's process record.
    pub process: Process,
    /// Position in the caller's input slice.
    pub input_index: usize,
    /// Priority after applying the run's default.
    pub effective_priority: i32,
    /// CPU time still owed. Starts at `burst_time`.
    pub remaining_time: i64,
}

impl SimulationProcess {
    /// Creates a working copy for the process at `input_index`.
    pub fn new(process: &Process, input_index: usize, default_priority: i32) -> Self {
        Self {
            effective_priority: process.priority_or(default_priority),
            remaining_time: process.burst_time,
            process: process.clone(),
            input_index,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }

    #[inline]
    pub fn arrival_time(&self) -> i64 {
        self.process.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> i64 {
        self.process.burst_time
    }

    /// Whether all required CPU time has been granted.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 5).with_priority(7);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.priority, Some(7));
    }

    #[test]
    fn test_priority_default() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority_or(0), 0);
        assert_eq!(p.priority_or(4), 4);
        assert_eq!(p.with_priority(9).priority_or(4), 9);
    }

    #[test]
    fn test_simulation_process_copy() {
        let p = Process::new("P2", 1, 3);
        let sp = SimulationProcess::new(&p, 1, 5);
        assert_eq!(sp.remaining_time, 3);
        assert_eq!(sp.effective_priority, 5);
        assert_eq!(sp.input_index, 1);
        assert_eq!(sp.id(), "P2");
        assert!(!sp.is_finished());
    }

    #[test]
    fn test_priority_omitted_in_json() {
        let json = serde_json::to_string(&Process::new("P1", 0, 2)).unwrap();
        assert!(!json.contains("priority"));

        let parsed: Process =
            serde_json::from_str(r#"{"id":"P9","arrival_time":2,"burst_time":4}"#).unwrap();
        assert_eq!(parsed.priority, None);
    }
}
