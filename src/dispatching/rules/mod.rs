//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::SimulationProcess;

/// Shortest burst time first.
///
/// Uses the total burst, not the remaining time: SJF here is the
/// non-preemptive discipline and only compares undispatched processes.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &SimulationProcess) -> RuleScore {
        process.burst_time()
    }
}

/// Highest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &SimulationProcess) -> RuleScore {
        -i64::from(process.effective_priority)
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &SimulationProcess) -> RuleScore {
        process.arrival_time()
    }
}
