//! Selection rules and rule engine for picking the next process.
//!
//! Non-preemptive SJF and both priority disciplines share one shape:
//! score every ready process, take the lowest score, and break ties
//! with a single deterministic rule.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine, TieBreaker};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::HighestPriority)
//!     .with_final_tie_breaker(TieBreaker::ArrivalThenInput);
//! ```

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::SimulationProcess;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher precedence.** A "highest priority wins" rule
/// negates the priority.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready process.
    fn evaluate(&self, process: &SimulationProcess) -> RuleScore;
}
