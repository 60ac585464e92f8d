//! Export documents for finished simulations.
//!
//! Produces the downloadable JSON shape used by the timeline viewer:
//! camelCase keys, the algorithm's display label, the quantum (round
//! robin only), and Gantt blocks tagged with display colors.

use serde::{Deserialize, Serialize};

use crate::error::SchedError;
use crate::models::{AlgorithmKind, ProcessResult, SchedulingResult};
use crate::palette::process_color;

/// One Gantt block as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttBlock {
    pub process_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub color: String,
}

/// One results-table row as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedProcess {
    pub id: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    pub completion_time: i64,
    pub turnaround_time: i64,
    pub waiting_time: i64,
}

impl From<&ProcessResult> for ExportedProcess {
    fn from(r: &ProcessResult) -> Self {
        Self {
            id: r.process.id.clone(),
            arrival_time: r.process.arrival_time,
            burst_time: r.process.burst_time,
            priority: r.process.priority,
            completion_time: r.completion_time,
            turnaround_time: r.turnaround_time,
            waiting_time: r.waiting_time,
        }
    }
}

/// Serializable summary of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Display label, e.g. "Round Robin".
    pub algorithm: String,
    /// Present only for round robin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<u32>,
    pub processes: Vec<ExportedProcess>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub total_time: i64,
    pub gantt_chart: Vec<GanttBlock>,
}

impl ExportDocument {
    /// Builds the document. `quantum` is dropped for non-round-robin runs.
    pub fn new(result: &SchedulingResult, algorithm: AlgorithmKind, quantum: u32) -> Self {
        Self {
            algorithm: algorithm.label().to_string(),
            time_quantum: algorithm.uses_quantum().then_some(quantum),
            processes: result.process_results.iter().map(Into::into).collect(),
            average_waiting_time: result.average_waiting_time,
            average_turnaround_time: result.average_turnaround_time,
            total_time: result.total_time,
            gantt_chart: result
                .execution_intervals
                .iter()
                .map(|i| GanttBlock {
                    process_id: i.process_id.clone(),
                    start_time: i.start_time,
                    end_time: i.end_time,
                    color: process_color(&i.process_id).to_string(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SchedError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Suggested download name, e.g. `scheduling-results-rr.json`.
pub fn export_file_name(algorithm: AlgorithmKind) -> String {
    format!("scheduling-results-{}.json", algorithm.slug())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::simulate;
    use crate::workload::sample_processes;

    #[test]
    fn test_round_robin_document() {
        let result = simulate(&sample_processes(), AlgorithmKind::RoundRobin, Some(2));
        let doc = ExportDocument::new(&result, AlgorithmKind::RoundRobin, 2);

        assert_eq!(doc.algorithm, "Round Robin");
        assert_eq!(doc.time_quantum, Some(2));
        assert_eq!(doc.gantt_chart.len(), result.execution_intervals.len());
        assert_eq!(doc.gantt_chart[0].color, "#EF4444");
        assert_eq!(doc.processes.len(), 4);
    }

    #[test]
    fn test_quantum_omitted_for_other_algorithms() {
        let result = simulate(&sample_processes(), AlgorithmKind::Sjf, None);
        let doc = ExportDocument::new(&result, AlgorithmKind::Sjf, 2);
        assert_eq!(doc.time_quantum, None);

        let json = doc.to_json_pretty().unwrap();
        assert!(!json.contains("timeQuantum"));
        assert!(json.contains("\"averageWaitingTime\""));
        assert!(json.contains("\"ganttChart\""));
    }

    #[test]
    fn test_json_shape() {
        let result = simulate(&sample_processes(), AlgorithmKind::Fcfs, None);
        let json = ExportDocument::new(&result, AlgorithmKind::Fcfs, 2)
            .to_json_pretty()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["algorithm"], "First Come First Serve");
        assert_eq!(value["totalTime"], 10);
        assert_eq!(value["processes"][0]["id"], "P1");
        assert_eq!(value["processes"][0]["completionTime"], 4);
        assert_eq!(value["processes"][0]["priority"], 2);
        assert_eq!(value["ganttChart"][3]["processId"], "P4");
        assert_eq!(value["ganttChart"][3]["startTime"], 8);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            export_file_name(AlgorithmKind::PriorityPreemptive),
            "scheduling-results-priority-preemptive.json"
        );
        assert_eq!(export_file_name(AlgorithmKind::RoundRobin), "scheduling-results-rr.json");
    }
}
