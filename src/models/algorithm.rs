//! Scheduling policy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchedError;

/// The five supported uniprocessor scheduling disciplines.
///
/// Serialized as its slug; deserialized through [`FromStr`], so files
/// accept the same names (and casing) as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum AlgorithmKind {
    /// First come, first served (non-preemptive).
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest job first (non-preemptive).
    #[serde(rename = "sjf")]
    Sjf,
    /// Round robin with a fixed quantum.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Highest priority first, runs to completion once dispatched.
    #[serde(rename = "priority")]
    PriorityNonPreemptive,
    /// Highest priority first, re-evaluated at every arrival.
    #[serde(rename = "priority-preemptive")]
    PriorityPreemptive,
}

impl AlgorithmKind {
    /// All algorithms in presentation order.
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::Sjf,
        AlgorithmKind::RoundRobin,
        AlgorithmKind::PriorityNonPreemptive,
        AlgorithmKind::PriorityPreemptive,
    ];

    /// Short code (e.g. `"rr"`).
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin => "rr",
            Self::PriorityNonPreemptive => "priority",
            Self::PriorityPreemptive => "priority-preemptive",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve",
            Self::Sjf => "Shortest Job First",
            Self::RoundRobin => "Round Robin",
            Self::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            Self::PriorityPreemptive => "Priority (Preemptive)",
        }
    }

    /// Whether the algorithm compares process priorities.
    pub fn uses_priority(&self) -> bool {
        matches!(
            self,
            Self::PriorityNonPreemptive | Self::PriorityPreemptive
        )
    }

    /// Whether the algorithm takes a time quantum.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin | Self::PriorityPreemptive)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "rr" | "round-robin" => Ok(Self::RoundRobin),
            "priority" | "priority-non-preemptive" => Ok(Self::PriorityNonPreemptive),
            "priority-preemptive" => Ok(Self::PriorityPreemptive),
            _ => Err(SchedError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for AlgorithmKind {
    type Error = SchedError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
