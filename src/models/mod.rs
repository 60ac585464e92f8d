//! CPU-scheduling domain models.
//!
//! Provides the input, working-state, and output types of a simulation
//! run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Caller-owned input record |
//! | `SimulationProcess` | Per-run working copy with remaining time |
//! | `ExecutionInterval` | One Gantt block |
//! | `ProcessResult` | Completion, turnaround, waiting time |
//! | `SchedulingResult` | Timeline + results + aggregates |
//! | `AlgorithmKind` | Which discipline to simulate |

mod algorithm;
mod process;
mod schedule;

pub use algorithm::AlgorithmKind;
pub use process::{Process, SimulationProcess};
pub use schedule::{ExecutionInterval, ProcessResult, SchedulingResult};
