//! Preemptive priority scheduling.
//!
//! # Algorithm
//! The best ready process runs until it finishes or the next pending
//! arrival, whichever comes first; the choice is then re-evaluated.
//! Each slice is recorded as its own interval, so a process preempted
//! repeatedly accumulates several intervals.
//!
//! # Complexity
//! O(n²): at most one slice per arrival or completion, each a linear scan.

use super::primitives::{ProcessPool, Timeline};
use crate::dispatching::RuleEngine;

pub(crate) fn run(mut pool: ProcessPool, engine: &RuleEngine) -> Timeline {
    let mut timeline = Timeline::new();
    let mut ready: Vec<usize> = Vec::new();

    loop {
        ready.extend(pool.admit_until(timeline.now()));

        let Some(pos) = engine.select_best(pool.processes(), &ready) else {
            match pool.next_arrival() {
                Some(arrival) => {
                    timeline.advance_to(arrival);
                    continue;
                }
                None => break,
            }
        };

        let idx = ready[pos];
        let remaining = pool.get(idx).remaining_time;
        // Pending arrivals are all strictly in the future after admission
        let slice = match pool.next_arrival() {
            Some(arrival) => remaining.min(arrival - timeline.now()),
            None => remaining,
        };

        timeline.run(pool.get(idx), slice);
        pool.get_mut(idx).remaining_time -= slice;

        if pool.get(idx).is_finished() {
            timeline.complete(pool.get(idx));
            ready.remove(pos);
        }
    }

    timeline
}
