//! Scheduling engine and KPI evaluation.
//!
//! `Simulator` turns a process set plus a policy into an execution
//! timeline and per-process metrics. All five disciplines share the
//! same loop shape: admit arrivals, jump the clock when nothing is
//! ready, pick a process, record the slice.
//!
//! # Algorithms
//!
//! | Kind | Preemptive | Selection |
//! |------|-----------|-----------|
//! | FCFS | no | arrival order |
//! | SJF | no | shortest burst |
//! | Round Robin | quantum | FIFO queue |
//! | Priority | no | highest priority |
//! | Priority (Preemptive) | at arrivals | highest priority |
//!
//! # KPI
//!
//! `ScheduleKpi` adds utilization, throughput, and context-switch counts
//! on top of the averages every run reports.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod non_preemptive;
mod preemptive;
mod primitives;
mod round_robin;
mod simulator;

pub use kpi::ScheduleKpi;
pub use simulator::{simulate, simulate_named, SimulationRequest, Simulator, DEFAULT_QUANTUM};
