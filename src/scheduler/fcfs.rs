//! First come, first served.
//!
//! Processes run to completion in arrival order (ties in input order).
//! Each starts at `max(clock, arrival)`.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.

use super::primitives::{ProcessPool, Timeline};
use crate::dispatching::{rules, RuleEngine, TieBreaker};

/// Arrival order with input-order ties, regardless of the configured
/// tie-breaker.
pub(crate) fn engine() -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::EarliestArrival)
        .with_final_tie_breaker(TieBreaker::InputOrder)
}

pub(crate) fn run(mut pool: ProcessPool, engine: &RuleEngine) -> Timeline {
    let mut timeline = Timeline::new();
    let arrivals = pool.drain_pending();

    for idx in engine.sort_indices(pool.processes(), &arrivals) {
        let process = pool.get(idx);
        timeline.advance_to(process.arrival_time());
        timeline.run(process, process.burst_time());
        timeline.complete(process);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    #[test]
    fn test_fcfs_textbook() {
        let procs = vec![
            Process::new("P1", 0, 4),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
            Process::new("P4", 3, 2),
        ];
        let result = run(ProcessPool::new(&procs, 0), &engine()).finish();

        let spans: Vec<(&str, i64, i64)> = result
            .execution_intervals
            .iter()
            .map(|i| (i.process_id.as_str(), i.start_time, i.end_time))
            .collect();
        assert_eq!(
            spans,
            vec![("P1", 0, 4), ("P2", 4, 7), ("P3", 7, 8), ("P4", 8, 10)]
        );

        let waits: Vec<i64> = result.process_results.iter().map(|r| r.waiting_time).collect();
        assert_eq!(waits, vec![0, 3, 5, 5]);
        assert!((result.average_waiting_time - 3.25).abs() < 1e-10);
        assert_eq!(result.total_time, 10);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let procs = vec![Process::new("late", 10, 2), Process::new("early", 1, 3)];
        let result = run(ProcessPool::new(&procs, 0), &engine()).finish();

        assert_eq!(result.completion_order(), vec!["early", "late"]);
        assert_eq!(result.execution_intervals[0].start_time, 1);
        // Clock jumps from 4 to 10, no idle block
        assert_eq!(result.execution_intervals[1].start_time, 10);
        assert_eq!(result.total_time, 12);
    }

    #[test]
    fn test_fcfs_equal_arrivals_keep_input_order() {
        let procs = vec![
            Process::new("B", 0, 5),
            Process::new("A", 0, 1),
            Process::new("C", 0, 2),
        ];
        let result = run(ProcessPool::new(&procs, 0), &engine()).finish();
        assert_eq!(result.completion_order(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_fcfs_order_comes_from_engine() {
        let procs = vec![Process::new("B", 0, 1), Process::new("A", 0, 1)];
        let by_id = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .with_final_tie_breaker(TieBreaker::ById);
        let result = run(ProcessPool::new(&procs, 0), &by_id).finish();
        assert_eq!(result.completion_order(), vec!["A", "B"]);
    }
}
