//! Round robin with a fixed quantum.
//!
//! # Algorithm
//! 1. FIFO ready queue; arrivals join in (arrival, input) order.
//! 2. Dequeue the head and run it for `min(remaining, quantum)`.
//! 3. Enqueue processes that arrived during the slice, *then* requeue
//!    the preempted process if it still has work left.
//! 4. An empty queue with pending arrivals jumps the clock forward.

use std::collections::VecDeque;

use super::primitives::{ProcessPool, Timeline};

pub(crate) fn run(mut pool: ProcessPool, quantum: i64) -> Timeline {
    debug_assert!(quantum > 0);
    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = pool.admit_until(timeline.now()).into();

    loop {
        let Some(idx) = queue.pop_front() else {
            match pool.next_arrival() {
                Some(arrival) => {
                    timeline.advance_to(arrival);
                    queue.extend(pool.admit_until(arrival));
                    continue;
                }
                None => break,
            }
        };

        let slice = pool.get(idx).remaining_time.min(quantum);
        timeline.run(pool.get(idx), slice);
        pool.get_mut(idx).remaining_time -= slice;

        queue.extend(pool.admit_until(timeline.now()));

        if pool.get(idx).is_finished() {
            timeline.complete(pool.get(idx));
        } else {
            queue.push_back(idx);
        }
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, SchedulingResult};

    fn textbook() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 4),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
            Process::new("P4", 3, 2),
        ]
    }

    fn spans(result: &SchedulingResult) -> Vec<(&str, i64, i64)> {
        result
            .execution_intervals
            .iter()
            .map(|i| (i.process_id.as_str(), i.start_time, i.end_time))
            .collect()
    }

    #[test]
    fn test_rr_textbook_quantum_2() {
        let result = run(ProcessPool::new(&textbook(), 0), 2).finish();
        assert_eq!(
            spans(&result),
            vec![
                ("P1", 0, 2),
                ("P2", 2, 4),
                ("P3", 4, 5),
                ("P1", 5, 7),
                ("P4", 7, 9),
                ("P2", 9, 10),
            ]
        );
        assert!(result.interval_count() > 4);
        assert_eq!(result.completion_order(), vec!["P3", "P1", "P4", "P2"]);
        // (3 + 6 + 2 + 4) / 4
        assert!((result.average_waiting_time - 3.75).abs() < 1e-10);
        assert_eq!(result.total_time, 10);
    }

    #[test]
    fn test_rr_arrivals_precede_preempted() {
        // B arrives during A's first slice and must run before A resumes
        let procs = vec![Process::new("A", 0, 4), Process::new("B", 1, 2)];
        let result = run(ProcessPool::new(&procs, 0), 2).finish();
        assert_eq!(spans(&result), vec![("A", 0, 2), ("B", 2, 4), ("A", 4, 6)]);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_joins_first() {
        // B arrives exactly when A's slice ends
        let procs = vec![Process::new("A", 0, 3), Process::new("B", 2, 1)];
        let result = run(ProcessPool::new(&procs, 0), 2).finish();
        assert_eq!(spans(&result), vec![("A", 0, 2), ("B", 2, 3), ("A", 3, 4)]);
    }

    #[test]
    fn test_rr_same_process_slices_not_merged() {
        let procs = vec![Process::new("solo", 0, 5)];
        let result = run(ProcessPool::new(&procs, 0), 2).finish();
        assert_eq!(
            spans(&result),
            vec![("solo", 0, 2), ("solo", 2, 4), ("solo", 4, 5)]
        );
        assert_eq!(result.result_for("solo").unwrap().waiting_time, 0);
    }

    #[test]
    fn test_rr_idle_gap() {
        let procs = vec![Process::new("A", 0, 1), Process::new("B", 6, 3)];
        let result = run(ProcessPool::new(&procs, 0), 2).finish();
        assert_eq!(spans(&result), vec![("A", 0, 1), ("B", 6, 8), ("B", 8, 9)]);
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let result = run(ProcessPool::new(&textbook(), 0), 100).finish();
        assert_eq!(
            spans(&result),
            vec![("P1", 0, 4), ("P2", 4, 7), ("P3", 7, 8), ("P4", 8, 10)]
        );
    }

    #[test]
    fn test_rr_burst_conserved_per_process() {
        let result = run(ProcessPool::new(&textbook(), 0), 1).finish();
        for p in textbook() {
            let total: i64 = result.intervals_for(&p.id).iter().map(|i| i.duration()).sum();
            assert_eq!(total, p.burst_time);
        }
    }
}
