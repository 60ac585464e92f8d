//! Simulation entry point.
//!
//! `Simulator` holds the policy parameters (quantum, default priority,
//! tie-breaker) and dispatches to one of the five algorithms. Each call
//! copies the caller's processes into its own working pool, so a
//! `Simulator` can be shared freely between threads.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::primitives::ProcessPool;
use super::{fcfs, non_preemptive, preemptive, round_robin};
use crate::dispatching::{rules, RuleEngine, SelectionRule, TieBreaker};
use crate::error::SchedError;
use crate::models::{AlgorithmKind, Process, SchedulingResult};

/// Quantum used when none (or zero) is supplied.
pub const DEFAULT_QUANTUM: u32 = 2;

/// Input container for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline to simulate.
    pub algorithm: AlgorithmKind,
    /// Round-robin quantum. Ignored by other algorithms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<u32>,
}

impl SimulationRequest {
    /// Creates a request without an explicit quantum.
    pub fn new(processes: Vec<Process>, algorithm: AlgorithmKind) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: u32) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Deterministic uniprocessor scheduling simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{AlgorithmKind, Process};
/// use u_cpusched::scheduler::Simulator;
///
/// let processes = vec![
///     Process::new("P1", 0, 4),
///     Process::new("P2", 1, 3),
///     Process::new("P3", 2, 1),
///     Process::new("P4", 3, 2),
/// ];
/// let result = Simulator::new().simulate(&processes, AlgorithmKind::Fcfs);
/// assert_eq!(result.total_time, 10);
/// assert!((result.average_waiting_time - 3.25).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    quantum: u32,
    default_priority: i32,
    tie_breaker: TieBreaker,
}

impl Simulator {
    /// Creates a simulator with quantum 2, default priority 0, and
    /// arrival-then-input tie-breaking.
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            default_priority: 0,
            tie_breaker: TieBreaker::default(),
        }
    }

    /// Sets the round-robin quantum. Zero selects [`DEFAULT_QUANTUM`].
    pub fn with_quantum(mut self, quantum: u32) -> Self {
        self.quantum = if quantum == 0 { DEFAULT_QUANTUM } else { quantum };
        self
    }

    /// Sets the priority assumed for processes that carry none.
    pub fn with_default_priority(mut self, priority: i32) -> Self {
        self.default_priority = priority;
        self
    }

    /// Sets the tie-breaker for SJF and both priority disciplines.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    pub fn quantum(&self) -> u32 {
        self.quantum
    }

    pub fn default_priority(&self) -> i32 {
        self.default_priority
    }

    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Runs one simulation.
    ///
    /// The caller must supply well-formed processes (burst ≥ 1,
    /// arrival ≥ 0); see [`crate::validation`].
    pub fn simulate(&self, processes: &[Process], algorithm: AlgorithmKind) -> SchedulingResult {
        debug!(
            %algorithm,
            processes = processes.len(),
            quantum = self.quantum,
            "starting simulation"
        );

        let pool = ProcessPool::new(processes, self.default_priority);
        let timeline = match algorithm {
            AlgorithmKind::Fcfs => fcfs::run(pool, &fcfs::engine()),
            AlgorithmKind::Sjf => non_preemptive::run(pool, &self.engine(rules::ShortestBurst)),
            AlgorithmKind::RoundRobin => round_robin::run(pool, i64::from(self.quantum)),
            AlgorithmKind::PriorityNonPreemptive => {
                non_preemptive::run(pool, &self.engine(rules::HighestPriority))
            }
            AlgorithmKind::PriorityPreemptive => {
                preemptive::run(pool, &self.engine(rules::HighestPriority))
            }
        };

        let result = timeline.finish();
        debug!(
            %algorithm,
            intervals = result.execution_intervals.len(),
            total_time = result.total_time,
            avg_waiting = result.average_waiting_time,
            "simulation finished"
        );
        result
    }

    /// Runs a request, honoring its quantum when present.
    pub fn simulate_request(&self, request: &SimulationRequest) -> SchedulingResult {
        let simulator = match request.quantum {
            Some(q) => self.with_quantum(q),
            None => *self,
        };
        simulator.simulate(&request.processes, request.algorithm)
    }

    /// Runs a simulation for an algorithm given by name.
    pub fn simulate_named(
        &self,
        processes: &[Process],
        algorithm: &str,
    ) -> Result<SchedulingResult, SchedError> {
        let kind: AlgorithmKind = algorithm.parse()?;
        Ok(self.simulate(processes, kind))
    }

    fn engine<R: SelectionRule + 'static>(&self, rule: R) -> RuleEngine {
        RuleEngine::new()
            .with_rule(rule)
            .with_final_tie_breaker(self.tie_breaker)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one simulation with default settings and the given quantum.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{AlgorithmKind, Process};
/// use u_cpusched::scheduler::simulate;
///
/// let result = simulate(&[Process::new("P1", 3, 5)], AlgorithmKind::RoundRobin, Some(2));
/// assert_eq!(result.execution_intervals.len(), 3);
/// assert_eq!(result.total_time, 8);
/// ```
pub fn simulate(
    processes: &[Process],
    algorithm: AlgorithmKind,
    quantum: Option<u32>,
) -> SchedulingResult {
    let simulator = Simulator::new().with_quantum(quantum.unwrap_or(DEFAULT_QUANTUM));
    simulator.simulate(processes, algorithm)
}

/// Like [`simulate`], but parses the algorithm name first.
///
/// Fails with [`SchedError::UnknownAlgorithm`] for unrecognized names.
pub fn simulate_named(
    processes: &[Process],
    algorithm: &str,
    quantum: Option<u32>,
) -> Result<SchedulingResult, SchedError> {
    let kind: AlgorithmKind = algorithm.parse()?;
    Ok(simulate(processes, kind, quantum))
}
