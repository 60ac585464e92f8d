//! Workload sources: files on disk and seeded random generation.
//!
//! A workload file is a serialized [`SimulationRequest`] in JSON or TOML:
//!
//! ```toml
//! algorithm = "rr"
//! quantum = 2
//!
//! [[processes]]
//! id = "P1"
//! arrival_time = 0
//! burst_time = 4
//! priority = 2
//! ```

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::debug;

use crate::error::SchedError;
use crate::models::Process;
use crate::scheduler::SimulationRequest;

/// Loads a request from a `.json` or `.toml` file.
pub fn load(path: impl AsRef<Path>) -> Result<SimulationRequest, SchedError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let parse: fn(&str) -> Result<SimulationRequest, SchedError> = match ext.as_str() {
        "json" => from_json_str,
        "toml" => from_toml_str,
        _ => return Err(SchedError::UnsupportedFormat(path.display().to_string())),
    };
    let request = parse(&fs::read_to_string(path)?)?;

    debug!(
        path = %path.display(),
        processes = request.processes.len(),
        algorithm = %request.algorithm,
        "loaded workload"
    );
    Ok(request)
}

/// On-disk layout. The algorithm stays a plain name until
/// [`TryFrom`] so a bad one surfaces as [`SchedError::UnknownAlgorithm`].
#[derive(Debug, Deserialize)]
struct WorkloadFile {
    processes: Vec<Process>,
    algorithm: String,
    #[serde(default)]
    quantum: Option<u32>,
}

impl TryFrom<WorkloadFile> for SimulationRequest {
    type Error = SchedError;

    fn try_from(file: WorkloadFile) -> Result<Self, Self::Error> {
        Ok(SimulationRequest {
            processes: file.processes,
            algorithm: file.algorithm.parse()?,
            quantum: file.quantum,
        })
    }
}

/// Parses a JSON request.
pub fn from_json_str(text: &str) -> Result<SimulationRequest, SchedError> {
    serde_json::from_str::<WorkloadFile>(text)?.try_into()
}

/// Parses a TOML request.
pub fn from_toml_str(text: &str) -> Result<SimulationRequest, SchedError> {
    toml::from_str::<WorkloadFile>(text)?.try_into()
}

/// The classic four-process example set.
///
/// | ID | Arrival | Burst | Priority |
/// |----|---------|-------|----------|
/// | P1 | 0 | 4 | 2 |
/// | P2 | 1 | 3 | 1 |
/// | P3 | 2 | 1 | 3 |
/// | P4 | 3 | 2 | 2 |
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 4).with_priority(2),
        Process::new("P2", 1, 3).with_priority(1),
        Process::new("P3", 2, 1).with_priority(3),
        Process::new("P4", 3, 2).with_priority(2),
    ]
}

/// Seeded random process-set generator.
///
/// The same configuration and seed always produce the same processes.
///
/// # Example
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let procs = WorkloadGenerator::new(5).with_seed(7).generate();
/// assert_eq!(procs.len(), 5);
/// assert_eq!(procs[0].id, "P1");
/// assert_eq!(procs, WorkloadGenerator::new(5).with_seed(7).generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    burst_range: (i64, i64),
    priority_range: (i32, i32),
    seed: u64,
}

impl WorkloadGenerator {
    /// Generator for `count` processes with arrivals in `0..=10`,
    /// bursts in `1..=8`, priorities in `1..=5`, seed 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            burst_range: (1, 8),
            priority_range: (1, 5),
            seed: 0,
        }
    }

    /// Latest possible arrival time (clamped to ≥ 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Inclusive burst range (clamped to ≥ 1, swapped if reversed).
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.burst_range = (lo.max(1), hi.max(1));
        self
    }

    /// Inclusive priority range (swapped if reversed).
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = if min <= max { (min, max) } else { (max, min) };
        self
    }

    /// RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates processes `P1..Pn` in ID order (arrivals unsorted).
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=self.count)
            .map(|n| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.burst_range.0..=self.burst_range.1);
                let priority = rng.random_range(self.priority_range.0..=self.priority_range.1);
                Process::new(format!("P{n}"), arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlgorithmKind;
    use crate::validation::validate_processes;

    #[test]
    fn test_from_json() {
        let text = r#"{
            "algorithm": "priority-preemptive",
            "processes": [
                {"id": "A", "arrival_time": 0, "burst_time": 3, "priority": 1},
                {"id": "B", "arrival_time": 2, "burst_time": 1}
            ]
        }"#;
        let request = from_json_str(text).unwrap();
        assert_eq!(request.algorithm, AlgorithmKind::PriorityPreemptive);
        assert_eq!(request.quantum, None);
        assert_eq!(request.processes[1].priority, None);
    }

    #[test]
    fn test_from_toml() {
        let text = r#"
            algorithm = "rr"
            quantum = 3

            [[processes]]
            id = "P1"
            arrival_time = 0
            burst_time = 4
        "#;
        let request = from_toml_str(text).unwrap();
        assert_eq!(request.algorithm, AlgorithmKind::RoundRobin);
        assert_eq!(request.quantum, Some(3));
        assert_eq!(request.processes, vec![Process::new("P1", 0, 4)]);
    }

    #[test]
    fn test_unknown_algorithm_in_file() {
        let text = r#"{"algorithm": "lottery", "processes": []}"#;
        let err = from_json_str(text).unwrap_err();
        assert!(matches!(err, SchedError::UnknownAlgorithm(ref name) if name == "lottery"));

        let err = from_toml_str("algorithm = \"mlfq\"\nprocesses = []").unwrap_err();
        assert!(matches!(err, SchedError::UnknownAlgorithm(_)));
    }

    #[test]
    fn test_algorithm_name_case_insensitive_in_file() {
        let text = r#"{"algorithm": "SJF", "processes": []}"#;
        assert_eq!(from_json_str(text).unwrap().algorithm, AlgorithmKind::Sjf);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let text = r#"{"algorithm": "fcfs", "processes": [{"id": "P1"}]}"#;
        assert!(matches!(from_json_str(text), Err(SchedError::Json(_))));
    }

    #[test]
    fn test_load_rejects_extension() {
        let err = load("workload.yaml").unwrap_err();
        assert!(matches!(err, SchedError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/nonexistent/u-cpusched/workload.json").unwrap_err();
        assert!(matches!(err, SchedError::Io(_)));
    }

    #[test]
    fn test_load_roundtrip_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("u-cpusched-workload-{}.json", std::process::id()));
        let request = SimulationRequest::new(sample_processes(), AlgorithmKind::Sjf);
        fs::write(&path, serde_json::to_string(&request).unwrap()).unwrap();

        let loaded = load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, request);
    }

    #[test]
    fn test_generator_deterministic() {
        let a = WorkloadGenerator::new(20).with_seed(42).generate();
        let b = WorkloadGenerator::new(20).with_seed(42).generate();
        let c = WorkloadGenerator::new(20).with_seed(43).generate();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generator_respects_ranges() {
        let procs = WorkloadGenerator::new(50)
            .with_max_arrival(3)
            .with_burst_range(9, 2)
            .with_priority_range(-1, 1)
            .with_seed(9)
            .generate();

        assert!(validate_processes(&procs, true).is_ok());
        for p in &procs {
            assert!((0..=3).contains(&p.arrival_time));
            assert!((2..=9).contains(&p.burst_time));
            assert!((-1..=1).contains(&p.priority.unwrap()));
        }
    }

    #[test]
    fn test_sample_processes_valid() {
        assert!(validate_processes(&sample_processes(), true).is_ok());
    }
}
