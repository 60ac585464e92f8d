//! Deterministic uniprocessor CPU-scheduling simulator.
//!
//! Given a set of processes (arrival, burst, optional priority) and a
//! policy, computes the exact execution timeline and per-process
//! completion, turnaround, and waiting times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionInterval`,
//!   `ProcessResult`, `SchedulingResult`, `AlgorithmKind`
//! - **`dispatching`**: Selection rules and the tie-breaking rule engine
//! - **`scheduler`**: `Simulator`, the five disciplines, `ScheduleKpi`
//! - **`validation`**: Input integrity checks (IDs, times, priorities, quantum)
//! - **`workload`**: JSON/TOML workload files and seeded random workloads
//! - **`config`**: `SimulatorConfig` loaded from TOML
//! - **`export`** / **`palette`** / **`report`**: JSON export and text output
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::AlgorithmKind;
//! use u_cpusched::scheduler::simulate;
//! use u_cpusched::workload::sample_processes;
//!
//! let result = simulate(&sample_processes(), AlgorithmKind::RoundRobin, Some(2));
//! assert_eq!(result.total_time, 10);
//! assert!((result.average_waiting_time - 3.75).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod export;
pub mod models;
pub mod palette;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SchedError;
