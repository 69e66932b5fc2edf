//! Tabular rendering of aggregate results.
//!
//! CSV for spreadsheets, where absent values render as empty cells, and a
//! JSON dump of the whole report.

use std::fmt::Display;
use std::io::{self, Write};

use crate::neighbors::NeighborTallies;
use crate::record::RunRecord;
use crate::report::AggregateReport;
use crate::summary::AggregateSummary;
use crate::word_counts::WordCountRow;

/// `metric,dimension,window,n,mean,std_dev`, per-window rows first, then
/// the combined rows with window `all`.
pub fn summary_csv(report: &AggregateReport) -> String {
    let mut out = String::from("metric,dimension,window,n,mean,std_dev\n");
    for (window, summaries) in &report.by_window {
        for s in summaries {
            push_summary(&mut out, s, &window.to_string());
        }
    }
    for s in &report.combined {
        push_summary(&mut out, s, "all");
    }
    out
}

/// `term,group,window,resample,wordcount`.
pub fn word_count_csv(rows: &[WordCountRow]) -> String {
    let mut out = String::from("term,group,window,resample,wordcount\n");
    for row in rows {
        push_row(
            &mut out,
            &[
                escape(&row.term),
                escape(&row.group),
                row.run.window.to_string(),
                row.run.resample.to_string(),
                cell(row.count),
            ],
        );
    }
    out
}

/// `metric,window,resample,value`, one row per metric per run.
pub fn run_metrics_csv(records: &[RunRecord]) -> String {
    let mut out = String::from("metric,window,resample,value\n");
    for record in records {
        for (key, value) in record.metric_values() {
            push_row(
                &mut out,
                &[
                    escape(&key.name()),
                    record.run.window.to_string(),
                    record.run.resample.to_string(),
                    value.to_string(),
                ],
            );
        }
    }
    out
}

/// `list,term,occurrences,runs,mean_similarity`, ranked within each list.
pub fn neighbor_csv(tallies: &NeighborTallies) -> String {
    let mut out = String::from("list,term,occurrences,runs,mean_similarity\n");
    for tally in tallies.iter() {
        let list = tally.metric_name();
        for entry in tally.ranked() {
            push_row(
                &mut out,
                &[
                    escape(&list),
                    escape(&entry.term),
                    entry.occurrences.to_string(),
                    tally.runs.to_string(),
                    entry.mean_similarity.to_string(),
                ],
            );
        }
    }
    out
}

/// The full report as pretty-printed JSON.
pub fn report_json(report: &AggregateReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn write_csv(mut writer: impl Write, csv: &str) -> io::Result<()> {
    writer.write_all(csv.as_bytes())?;
    writer.flush()
}

fn push_summary(out: &mut String, summary: &AggregateSummary, window: &str) {
    push_row(
        out,
        &[
            summary.metric.kind.prefix().to_string(),
            escape(&summary.metric.subject),
            window.to_string(),
            summary.count().to_string(),
            cell(summary.mean()),
            cell(summary.std_dev()),
        ],
    );
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push_str(&cells.join(","));
    out.push('\n');
}

fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn escape(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
