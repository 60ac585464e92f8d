//! Plain-text rendering for terminals.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`render_gantt`] | Two-line Gantt chart (blocks over a time axis) |
//! | [`render_table`] | Per-process results table |
//! | [`render_summary`] | Averages, makespan, and KPIs |
//! | [`render_comparison`] | One row per algorithm |

use crate::models::{AlgorithmKind, ExecutionInterval, SchedulingResult};
use crate::scheduler::ScheduleKpi;

const MAX_BLOCK_WIDTH: usize = 12;
const IDLE_LABEL: &str = "idle";

/// Renders the timeline as a bar of labelled blocks above a time axis.
///
/// Clock jumps between intervals show up as `idle` blocks.
pub fn render_gantt(result: &SchedulingResult) -> String {
    if result.execution_intervals.is_empty() {
        return "(no execution)".to_string();
    }

    let mut bar = String::new();
    let mut axis = String::new();
    let mut prev_end: Option<i64> = None;

    for interval in &result.execution_intervals {
        if let Some(end) = prev_end.filter(|&end| end < interval.start_time) {
            push_block(&mut bar, &mut axis, IDLE_LABEL, end, interval.start_time - end);
        }
        push_block(
            &mut bar,
            &mut axis,
            &interval.process_id,
            interval.start_time,
            interval.duration(),
        );
        prev_end = Some(interval.end_time);
    }

    bar.push('|');
    if let Some(end) = prev_end {
        axis.push_str(&end.to_string());
    }
    format!("{bar}\n{axis}")
}

fn push_block(bar: &mut String, axis: &mut String, label: &str, start: i64, duration: i64) {
    let start = start.to_string();
    let width = label
        .len()
        .max(start.len())
        .max(usize::try_from(duration).unwrap_or(0).min(MAX_BLOCK_WIDTH))
        + 2;
    bar.push_str(&format!("|{label:^width$}"));
    axis.push_str(&format!("{start:<axis_width$}", axis_width = width + 1));
}

/// Renders the per-process results in the order the run completed them.
pub fn render_table(result: &SchedulingResult) -> String {
    let headers = [
        "ID",
        "Arrival",
        "Burst",
        "Priority",
        "Completion",
        "Turnaround",
        "Waiting",
    ];
    let rows: Vec<Vec<String>> = result
        .process_results
        .iter()
        .map(|r| {
            vec![
                r.process.id.clone(),
                r.process.arrival_time.to_string(),
                r.process.burst_time.to_string(),
                r.process
                    .priority
                    .map_or_else(|| "-".to_string(), |p| p.to_string()),
                r.completion_time.to_string(),
                r.turnaround_time.to_string(),
                r.waiting_time.to_string(),
            ]
        })
        .collect();
    write_table(&headers, &rows)
}

/// Renders the aggregate figures for one run.
pub fn render_summary(result: &SchedulingResult, algorithm: AlgorithmKind) -> String {
    let kpi = ScheduleKpi::calculate(result);
    [
        format!("Algorithm:               {}", algorithm.label()),
        format!("Average waiting time:    {:.2}", result.average_waiting_time),
        format!("Average turnaround time: {:.2}", result.average_turnaround_time),
        format!("Total time:              {}", result.total_time),
        format!("CPU utilization:         {:.1}%", kpi.cpu_utilization * 100.0),
        format!("Throughput:              {:.3}", kpi.throughput),
        format!("Context switches:        {}", kpi.context_switches),
    ]
    .join("\n")
}

/// Renders one summary row per algorithm.
pub fn render_comparison(runs: &[(AlgorithmKind, SchedulingResult)]) -> String {
    let headers = ["Algorithm", "Avg Waiting", "Avg Turnaround", "Total", "Switches"];
    let rows: Vec<Vec<String>> = runs
        .iter()
        .map(|(kind, result)| {
            let kpi = ScheduleKpi::calculate(result);
            vec![
                kind.label().to_string(),
                format!("{:.2}", result.average_waiting_time),
                format!("{:.2}", result.average_turnaround_time),
                result.total_time.to_string(),
                kpi.context_switches.to_string(),
            ]
        })
        .collect();
    write_table(&headers, &rows)
}

/// Column-aligned table: header, separator, rows.
fn write_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.len());
            }
        }
    }

    let mut out = String::new();
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        out.push_str(&format!("{:<width$}", header, width = widths[i]));
    }
    out.push('\n');

    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("-+-");
        }
        out.push_str(&"-".repeat(*w));
    }

    for row in rows {
        out.push('\n');
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            if i > 0 {
                out.push_str(" | ");
            }
            out.push_str(&format!("{:<width$}", cell, width = widths[i]));
        }
    }
    out
}

/// Busy intervals as `id[start-end)` tokens, for log lines.
pub fn interval_list(intervals: &[ExecutionInterval]) -> String {
    intervals
        .iter()
        .map(|i| format!("{}[{}-{})", i.process_id, i.start_time, i.end_time))
        .collect::<Vec<_>>()
        .join(" ")
}
