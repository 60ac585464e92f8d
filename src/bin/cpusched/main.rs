//! `cpusched`: command-line front end for the simulator.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use u_cpusched::config::SimulatorConfig;
use u_cpusched::export::{export_file_name, ExportDocument};
use u_cpusched::models::AlgorithmKind;
use u_cpusched::report;
use u_cpusched::scheduler::{SimulationRequest, Simulator};
use u_cpusched::validation::{validate_comparison, validate_request, ValidationError};
use u_cpusched::workload::{self, sample_processes, WorkloadGenerator};

use crate::cli::CliArgs;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => SimulatorConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => SimulatorConfig::default(),
    };

    let mut request = read_request(&args)?;
    if let Some(name) = &args.algorithm {
        request.algorithm = name.parse()?;
    }
    if let Some(quantum) = args.quantum {
        request.quantum = Some(quantum);
    }

    let simulator = match request.quantum {
        Some(quantum) => config.build_simulator().with_quantum(quantum),
        None => config.build_simulator(),
    };

    if args.compare {
        return run_comparison(&simulator, &request);
    }

    if let Err(errors) = validate_request(&request) {
        report_invalid(&errors)?;
    }

    let result = simulator.simulate_request(&request);
    debug!(
        timeline = %report::interval_list(&result.execution_intervals),
        "timeline"
    );

    let document = ExportDocument::new(&result, request.algorithm, simulator.quantum());
    if let Some(path) = &args.export {
        let path = if path.is_dir() {
            path.join(export_file_name(request.algorithm))
        } else {
            path.clone()
        };
        std::fs::write(&path, document.to_json_pretty()?)
            .with_context(|| format!("failed to write export: {}", path.display()))?;
        debug!(path = %path.display(), "wrote export");
    }

    if args.json {
        println!("{}", document.to_json_pretty()?);
        return Ok(());
    }

    println!("{}", report::render_gantt(&result));
    println!();
    println!("{}", report::render_table(&result));
    println!();
    println!("{}", report::render_summary(&result, request.algorithm));
    Ok(())
}

/// Workload file, random generation, or the built-in demo set.
fn read_request(args: &CliArgs) -> Result<SimulationRequest> {
    if let Some(path) = &args.workload {
        return workload::load(path)
            .with_context(|| format!("failed to load workload: {}", path.display()));
    }

    let processes = match args.random {
        Some(count) => WorkloadGenerator::new(count).with_seed(args.seed).generate(),
        None => sample_processes(),
    };
    Ok(SimulationRequest::new(processes, AlgorithmKind::Fcfs))
}

fn run_comparison(simulator: &Simulator, request: &SimulationRequest) -> Result<()> {
    if let Err(errors) = validate_comparison(&request.processes, request.quantum) {
        report_invalid(&errors)?;
    }
    if request.processes.iter().any(|p| p.priority.is_none()) {
        warn!(
            default_priority = simulator.default_priority(),
            "some processes have no priority; using the default"
        );
    }

    let runs: Vec<_> = AlgorithmKind::ALL
        .into_iter()
        .map(|kind| (kind, simulator.simulate(&request.processes, kind)))
        .collect();

    println!("{}", report::render_comparison(&runs));
    Ok(())
}

fn report_invalid(errors: &[ValidationError]) -> Result<()> {
    for e in errors {
        eprintln!("error: {e}");
    }
    bail!("invalid input ({} problem(s))", errors.len())
}
