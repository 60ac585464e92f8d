use std::path::PathBuf;

use clap::Parser;

/// Deterministic CPU-scheduling simulator.
///
/// Runs FCFS, SJF, round robin, or priority scheduling over a workload
/// and prints the Gantt chart, per-process results, and averages.
#[derive(Parser, Debug)]
#[command(name = "cpusched", version, about = "Deterministic CPU-scheduling simulator")]
pub struct CliArgs {
    /// Workload file (.json or .toml) holding processes and, optionally, the algorithm
    #[arg(long, conflicts_with = "random")]
    pub workload: Option<PathBuf>,

    /// Algorithm: fcfs, sjf, rr, priority, priority-preemptive
    /// (default: the workload's algorithm, else fcfs)
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Round-robin time quantum (overrides workload and config)
    #[arg(long)]
    pub quantum: Option<u32>,

    /// Simulator config file (TOML)
    #[arg(long, env = "CPUSCHED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate N random processes instead of reading a workload
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value = "0", requires = "random")]
    pub seed: u64,

    /// Run every algorithm and print a comparison table
    #[arg(long, conflicts_with_all = ["export", "json"])]
    pub compare: bool,

    /// Write the export JSON to this file (a directory gets the default file name)
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the export JSON to stdout instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short)]
    pub verbose: bool,
}
