//! Text rendering for timelines and process tables.
//!
//! Purely presentational: converts a policy's output into the Gantt
//! line, the per-process results table, and the metrics summary shown
//! by the operator interface. Tolerates empty timelines and
//! arbitrarily long slice sequences.

use crate::metrics::RunMetrics;
use crate::models::{Process, Timeline};

/// Renders the Gantt chart as a bar line with a time ruler underneath.
///
/// ```text
/// | P1 | IDLE | P2 |
/// 0    5      7    9
/// ```
pub fn render_gantt(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return String::from("(empty timeline)");
    }

    let mut bars = String::from("|");
    let mut ruler = String::from("0");
    for slice in timeline.slices() {
        let cell = format!(" {} |", slice.kind);
        ruler.push_str(&format!("{:>width$}", slice.end, width = cell.len()));
        bars.push_str(&cell);
    }

    format!("{bars}\n{ruler}")
}

/// Renders the per-process results table.
///
/// Waiting and turnaround columns show `-` for processes without
/// recorded metrics (no run has completed yet).
pub fn render_process_table(processes: &[Process]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<5} {:>8} {:>6} {:>9} {:>8} {:>11}\n",
        "PID", "Arrival", "Burst", "Priority", "Waiting", "Turnaround"
    ));

    for p in processes {
        out.push_str(&format!(
            "{:<5} {:>8} {:>6} {:>9} {:>8} {:>11}\n",
            format!("P{}", p.id),
            p.arrival_time,
            p.burst_time,
            p.priority,
            optional(p.waiting_time),
            optional(p.turnaround_time),
        ));
    }

    out
}

/// Renders the aggregate metrics summary.
pub fn render_metrics(metrics: &RunMetrics) -> String {
    format!(
        "Average waiting time:    {:.2}\n\
         Average turnaround time: {:.2}\n\
         Makespan:                {}\n\
         CPU utilization:         {:.1}%\n\
         Throughput:              {:.2} processes/unit\n",
        metrics.avg_waiting_time,
        metrics.avg_turnaround_time,
        metrics.makespan,
        metrics.cpu_utilization * 100.0,
        metrics.throughput,
    )
}

fn optional(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| String::from("-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, ProcessSet, Slice};
    use crate::policies::{Fcfs, SchedulingPolicy};

    #[test]
    fn test_gantt_marks_dispatch_and_idle() {
        let mut timeline = Timeline::new();
        timeline.push(Slice::idle(0, 2));
        timeline.push(Slice::dispatch(1, 2, 5));
        timeline.push(Slice::dispatch(2, 5, 6));

        let rendered = render_gantt(&timeline);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("| IDLE | P1 | P2 |"));

        let ruler = lines.next().unwrap();
        assert!(ruler.starts_with('0'));
        assert!(ruler.ends_with('6'));
    }

    #[test]
    fn test_gantt_empty_timeline() {
        assert_eq!(render_gantt(&Timeline::new()), "(empty timeline)");
    }

    #[test]
    fn test_table_before_and_after_run() {
        let mut set = ProcessSet::new(vec![Process::new(1, 0, 4).with_priority(2)]).unwrap();

        let before = render_process_table(set.processes());
        assert!(before.contains("PID"));
        assert!(before.contains('-'));

        Fcfs.run(&mut set).unwrap();
        let after = render_process_table(set.processes());
        assert!(after.contains("P1"));
        assert!(!after.contains('-'));
        assert!(after.contains('4')); // burst and turnaround
    }

    #[test]
    fn test_metrics_summary_format() {
        let mut set = ProcessSet::new(vec![Process::new(1, 0, 4)]).unwrap();
        let timeline = Fcfs.run(&mut set).unwrap();
        let rendered = render_metrics(&RunMetrics::calculate(&set, &timeline));

        assert!(rendered.contains("Average waiting time:    0.00"));
        assert!(rendered.contains("CPU utilization:         100.0%"));
    }
}
