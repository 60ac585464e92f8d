//! Rule engine for ready-set selection.
//!
//! Applies rules in sequence (the next rule only on ties) and falls
//! back to a final, total tie-breaker so every selection is
//! deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::SelectionRule;
use crate::models::SimulationProcess;

/// How ties are broken after all rules are exhausted.
///
/// Every variant ends in the input index, so the resulting order is total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Earlier arrival first, then earlier input position.
    #[default]
    ArrivalThenInput,
    /// Earlier input position first.
    InputOrder,
    /// Lexicographic process ID, then input position.
    ById,
}

impl TieBreaker {
    /// Compares two processes that tied on every rule.
    pub fn compare(&self, a: &SimulationProcess, b: &SimulationProcess) -> Ordering {
        let primary = match self {
            TieBreaker::ArrivalThenInput => a.arrival_time().cmp(&b.arrival_time()),
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id().cmp(b.id()),
        };
        primary.then_with(|| a.input_index.cmp(&b.input_index))
    }
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
/// use u_cpusched::models::{Process, SimulationProcess};
///
/// let pool = vec![
///     SimulationProcess::new(&Process::new("P1", 0, 5), 0, 0),
///     SimulationProcess::new(&Process::new("P2", 0, 2), 1, 0),
/// ];
/// let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
/// assert_eq!(engine.select_best(&pool, &[0, 1]), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine (ties only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// The configured tie-breaker.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Total order over processes: rules in sequence, then the tie-breaker.
    pub fn compare(&self, a: &SimulationProcess, b: &SimulationProcess) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.tie_breaker.compare(a, b)
    }

    /// Returns the position in `candidates` of the process to run next.
    ///
    /// `candidates` holds indices into `pool`. Returns `None` when empty.
    pub fn select_best(&self, pool: &[SimulationProcess], candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .min_by(|a, b| self.compare(&pool[*a.1], &pool[*b.1]))
            .map(|(pos, _)| pos)
    }

    /// Sorts pool indices by precedence (first = runs first).
    pub fn sort_indices(&self, pool: &[SimulationProcess], candidates: &[usize]) -> Vec<usize> {
        let mut indices = candidates.to_vec();
        indices.sort_by(|&a, &b| self.compare(&pool[a], &pool[b]));
        indices
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
