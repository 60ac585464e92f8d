//! Non-preemptive ready-set selection (SJF, non-preemptive priority).
//!
//! # Algorithm
//! 1. Admit every process that has arrived by the current time.
//! 2. If nothing is ready, jump the clock to the next arrival.
//! 3. Otherwise pick the best ready process by the rule engine and run
//!    it to completion. Later arrivals never interrupt it.
//!
//! # Complexity
//! O(n²): one linear scan of the ready set per dispatch.

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

        let idx = ready.remove(pos);
        let process = pool.get(idx);
        timeline.run(process, process.burst_time());
        timeline.complete(process);
    }

    timeline
}
