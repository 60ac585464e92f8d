//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg / Max Waiting | Time spent ready but not running |
//! | Avg Turnaround | Completion − arrival |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Completed processes per time unit |
//! | Context Switches | Adjacent intervals owned by different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::SchedulingResult;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Total time the CPU was busy.
    pub busy_time: i64,
    /// Busy fraction of the makespan (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Number of dispatches that switched to a different process.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished simulation.
    pub fn calculate(result: &SchedulingResult) -> Self {
        let makespan = result.total_time;
        let busy_time = result.busy_time();
        let completed = result.process_results.len();

        let max_waiting_time = result
            .process_results
            .iter()
            .map(|r| r.waiting_time)
            .max()
            .unwrap_or(0);

        let context_switches = result
            .execution_intervals
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count();

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                completed as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            avg_waiting_time: result.average_waiting_time,
            max_waiting_time,
            avg_turnaround_time: result.average_turnaround_time,
            busy_time,
            cpu_utilization,
            throughput,
            context_switches,
        }
    }
}
