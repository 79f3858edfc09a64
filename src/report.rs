//! Text report rendering.
//!
//! Each timeline renders as three blocks:
//! 1. a title banner,
//! 2. a Gantt-style timeline (process labels over start ticks),
//! 3. a bordered metrics table with an averages / throughput footer.

use std::io::{self, Write};

use crate::models::{ExecutionInterval, MetricsRow, Timeline};
use crate::scheduler::ScheduleSummary;

const CELL_WIDTH: usize = 8;
const HEADERS: [&str; 7] = [
    "ID",
    "PRIORITY",
    "BURST",
    "ARRIVAL",
    "WAIT",
    "TURNAROUND",
    "EXIT",
];

/// Renders a complete report block for one timeline.
///
/// # Example
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::report::write_report;
/// use cpu_schedule::scheduler::{CpuScheduler, Fcfs};
///
/// let timeline = Fcfs.schedule(&[Process::new(1, 5)]);
/// let mut out = Vec::new();
/// write_report(&mut out, &timeline).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Gantt schedule"));
/// ```
pub fn write_report<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    write_title(w, &timeline.title)?;
    write_gantt(w, &timeline.intervals)?;
    write_schedule(w, &timeline.rows, timeline.summary().as_ref())
}

/// Writes the title banner.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the timeline: labels on one line, start ticks on the next.
pub fn write_gantt<W: Write>(w: &mut W, intervals: &[ExecutionInterval]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for interval in intervals {
        let pid = interval.process_id.to_string();
        let padding = " ".repeat(CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;
    for (i, interval) in intervals.iter().enumerate() {
        write!(w, "{}\t", interval.start)?;
        if i == intervals.len() - 1 {
            write!(w, "{}", interval.stop)?;
        }
    }
    write!(w, "\n\n")
}

/// Writes the metrics table with its footer.
pub fn write_schedule<W: Write>(
    w: &mut W,
    rows: &[MetricsRow],
    summary: Option<&ScheduleSummary>,
) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let body: Vec<[String; 7]> = rows.iter().map(row_cells).collect();
    let footer = footer_cells(summary);

    let mut widths = HEADERS.map(str::len);
    for cells in body.iter().chain(footer.iter()) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    let border = border_line(&widths);
    writeln!(w, "{border}")?;
    write_line(w, &HEADERS.map(String::from), &widths)?;
    writeln!(w, "{border}")?;
    for cells in &body {
        write_line(w, cells, &widths)?;
    }
    writeln!(w, "{border}")?;
    for cells in &footer {
        write_line(w, cells, &widths)?;
    }
    writeln!(w, "{border}")
}

fn row_cells(row: &MetricsRow) -> [String; 7] {
    [
        row.id,
        row.priority,
        row.burst,
        row.arrival,
        row.waiting,
        row.turnaround,
        row.completion,
    ]
    .map(|v| v.to_string())
}

fn footer_cells(summary: Option<&ScheduleSummary>) -> [[String; 7]; 2] {
    let (wait, turnaround, throughput) = match summary {
        Some(s) => (
            format!("{:.2}", s.avg_waiting),
            format!("{:.2}", s.avg_turnaround),
            s.throughput
                .map_or_else(|| "n/a".to_string(), |t| format!("{t:.2}/t")),
        ),
        None => ("n/a".to_string(), "n/a".to_string(), "n/a".to_string()),
    };

    let mut labels: [String; 7] = Default::default();
    labels[4] = "AVERAGE".into();
    labels[5] = "AVERAGE".into();
    labels[6] = "THROUGHPUT".into();

    let mut values: [String; 7] = Default::default();
    values[4] = wait;
    values[5] = turnaround;
    values[6] = throughput;

    [labels, values]
}

fn border_line(widths: &[usize; 7]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn write_line<W: Write>(w: &mut W, cells: &[String; 7], widths: &[usize; 7]) -> io::Result<()> {
    write!(w, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(w, " {cell:>width$} |")?;
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{CpuScheduler, Fcfs};

    fn render(timeline: &Timeline) -> String {
        let mut out = Vec::new();
        write_report(&mut out, timeline).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn reference_timeline() -> Timeline {
        Fcfs.schedule(&[
            Process::new(1, 5),
            Process::new(2, 3).with_arrival(1),
            Process::new(3, 8).with_arrival(2),
        ])
    }

    #[test]
    fn test_title_banner() {
        let mut out = Vec::new();
        write_title(&mut out, "Priority").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "-".repeat(16));
        assert_eq!(lines[1], "     Priority");
        assert_eq!(lines[2], "-".repeat(16));
    }

    #[test]
    fn test_gantt_layout() {
        let mut out = Vec::new();
        write_gantt(
            &mut out,
            &[ExecutionInterval::new(1, 0, 5), ExecutionInterval::new(22, 5, 8)],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Gantt schedule\n|   1   |   22   |\n0\t5\t8\n\n");
    }

    #[test]
    fn test_gantt_long_label_has_no_padding() {
        let mut out = Vec::new();
        write_gantt(&mut out, &[ExecutionInterval::new(123_456_789, 0, 1)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("|123456789|"));
    }

    #[test]
    fn test_reference_report() {
        let text = render(&reference_timeline());
        assert!(text.contains("First-come, first-serve"));
        assert!(text.contains("|   1   |   2   |   3   |"));
        assert!(text.contains("0\t5\t8\t16"));
        assert!(text.contains("THROUGHPUT"));
        assert!(text.contains("3.33"));
        assert!(text.contains("8.67"));
        assert!(text.contains("0.19/t"));
    }

    #[test]
    fn test_table_rows_aligned() {
        let text = render(&reference_timeline());
        let table: Vec<&str> = text
            .lines()
            .skip_while(|l| *l != "Schedule table")
            .skip(1)
            .collect();
        let width = table[0].len();
        assert!(table.iter().all(|l| l.len() == width));
        assert!(table[1].starts_with("| ID | PRIORITY |"));
        assert!(table[3].ends_with(" 5 |"));
    }

    #[test]
    fn test_empty_timeline_footer() {
        let text = render(&Timeline::new("Empty"));
        assert!(text.contains("n/a"));
        assert!(text.contains("Gantt schedule\n|\n\n\n"));
    }
}
