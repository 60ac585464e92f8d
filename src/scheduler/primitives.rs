//! Shared simulation primitives.
//!
//! `ProcessPool` owns the per-run working copies and the not-yet-arrived
//! set; `Timeline` owns the clock and everything the run emits. Each
//! algorithm keeps its own ready collection of pool indices.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::models::{
    ExecutionInterval, Process, ProcessResult, SchedulingResult, SimulationProcess,
};

/// Arena of working copies plus the pending (not yet arrived) set.
#[derive(Debug, Clone)]
pub(crate) struct ProcessPool {
    processes: Vec<SimulationProcess>,
    /// Pool indices ordered by (arrival, input index).
    pending: VecDeque<usize>,
}

impl ProcessPool {
    /// Copies the caller's processes into a fresh arena.
    pub(crate) fn new(processes: &[Process], default_priority: i32) -> Self {
        let processes: Vec<SimulationProcess> = processes
            .iter()
            .enumerate()
            .map(|(i, p)| SimulationProcess::new(p, i, default_priority))
            .collect();

        let mut order: Vec<usize> = (0..processes.len()).collect();
        // Stable sort keeps input order among equal arrivals
        order.sort_by_key(|&i| processes[i].arrival_time());

        Self {
            processes,
            pending: order.into(),
        }
    }

    /// All working copies, indexed by pool index.
    pub(crate) fn processes(&self) -> &[SimulationProcess] {
        &self.processes
    }

    pub(crate) fn get(&self, index: usize) -> &SimulationProcess {
        &self.processes[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut SimulationProcess {
        &mut self.processes[index]
    }

    /// Removes and returns every pending process with `arrival ≤ now`,
    /// in arrival order (ties by input order).
    pub(crate) fn admit_until(&mut self, now: i64) -> Vec<usize> {
        let mut admitted = Vec::new();
        while let Some(&next) = self.pending.front() {
            if self.processes[next].arrival_time() > now {
                break;
            }
            admitted.push(next);
            self.pending.pop_front();
        }
        admitted
    }

    /// Earliest arrival among pending processes.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.pending
            .front()
            .map(|&i| self.processes[i].arrival_time())
    }

    /// Pending processes in arrival order, draining the set.
    pub(crate) fn drain_pending(&mut self) -> Vec<usize> {
        self.pending.drain(..).collect()
    }
}

/// Clock plus the intervals and results recorded so far.
#[derive(Debug, Clone, Default)]
pub(crate) struct Timeline {
    clock: i64,
    intervals: Vec<ExecutionInterval>,
    results: Vec<ProcessResult>,
}

impl Timeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    pub(crate) fn now(&self) -> i64 {
        self.clock
    }

    /// Jumps the clock forward to `time`. Idle time is not recorded.
    pub(crate) fn advance_to(&mut self, time: i64) {
        if time > self.clock {
            trace!(from = self.clock, to = time, "cpu idle");
            self.clock = time;
        }
    }

    /// Grants `duration` units of CPU to `process` starting now.
    pub(crate) fn run(&mut self, process: &SimulationProcess, duration: i64) {
        debug_assert!(duration > 0, "empty slice for {}", process.id());
        let start = self.clock;
        self.clock += duration;
        trace!(process = %process.id(), start, end = self.clock, "dispatch");
        self.intervals
            .push(ExecutionInterval::new(process.id(), start, self.clock));
    }

    /// Records that `process` finished at the current time.
    pub(crate) fn complete(&mut self, process: &SimulationProcess) {
        let result = ProcessResult::new(process.process.clone(), self.clock);
        debug_assert!(result.waiting_time >= 0, "negative wait for {}", result.id());
        debug_assert!(result.turnaround_time >= result.process.burst_time);
        debug!(
            process = %result.id(),
            completion = result.completion_time,
            waiting = result.waiting_time,
            "process completed"
        );
        self.results.push(result);
    }

    /// Aggregates the run into a [`SchedulingResult`].
    pub(crate) fn finish(self) -> SchedulingResult {
        let n = self.results.len();
        let (average_waiting_time, average_turnaround_time) = if n == 0 {
            (0.0, 0.0)
        } else {
            // Summed as f64: per-process times fit in i64, their total may not
            let waiting: f64 = self.results.iter().map(|r| r.waiting_time as f64).sum();
            let turnaround: f64 = self.results.iter().map(|r| r.turnaround_time as f64).sum();
            (waiting / n as f64, turnaround / n as f64)
        };
        let total_time = self
            .results
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0);

        SchedulingResult {
            process_results: self.results,
            execution_intervals: self.intervals,
            average_waiting_time,
            average_turnaround_time,
            total_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1", 4, 2),
            Process::new("P2", 0, 3),
            Process::new("P3", 4, 1),
            Process::new("P4", 9, 1),
        ]
    }

    #[test]
    fn test_pool_pending_order() {
        let mut pool = ProcessPool::new(&sample(), 0);
        assert_eq!(pool.next_arrival(), Some(0));
        assert_eq!(pool.admit_until(0), vec![1]);
        assert_eq!(pool.next_arrival(), Some(4));
        // Equal arrivals come out in input order
        assert_eq!(pool.admit_until(8), vec![0, 2]);
        assert_eq!(pool.drain_pending(), vec![3]);
        assert_eq!(pool.next_arrival(), None);
    }

    #[test]
    fn test_pool_does_not_touch_input() {
        let input = sample();
        let mut pool = ProcessPool::new(&input, 0);
        pool.get_mut(0).remaining_time = 0;
        assert_eq!(input[0].burst_time, 2);
        assert_eq!(pool.get(0).burst_time(), 2);
        assert_eq!(pool.processes().len(), 4);
    }

    #[test]
    fn test_timeline_records() {
        let p = SimulationProcess::new(&Process::new("P1", 2, 3), 0, 0);
        let mut t = Timeline::new();
        t.advance_to(2);
        t.run(&p, 3);
        t.complete(&p);
        assert_eq!(t.now(), 5);

        let result = t.finish();
        assert_eq!(result.execution_intervals, vec![ExecutionInterval::new("P1", 2, 5)]);
        assert_eq!(result.total_time, 5);
        assert!((result.average_waiting_time - 0.0).abs() < 1e-10);
        assert!((result.average_turnaround_time - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_timeline_never_moves_back() {
        let mut t = Timeline::new();
        t.advance_to(7);
        t.advance_to(3);
        assert_eq!(t.now(), 7);
    }

    #[test]
    fn test_empty_finish() {
        let result = Timeline::new().finish();
        assert_eq!(result.total_time, 0);
        assert!(result.process_results.is_empty());
        assert!((result.average_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_finish_large_times() {
        let third = i64::MAX / 3;
        let procs: Vec<SimulationProcess> = (0..3)
            .map(|i| SimulationProcess::new(&Process::new(format!("P{i}"), 0, third), i, 0))
            .collect();
        let mut t = Timeline::new();
        for p in &procs {
            t.run(p, third);
            t.complete(p);
        }

        let result = t.finish();
        assert_eq!(result.total_time, third * 3);
        // turnarounds third, 2*third, 3*third: their i64 sum overflows
        let expected = 2.0 * third as f64;
        assert!((result.average_turnaround_time - expected).abs() / expected < 1e-12);
    }
}
