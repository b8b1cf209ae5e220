//! Report → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one line per test, then a summary line
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use fixtura_core::{Error, SuiteReport, TestOutcome};
use fixtura_engine::Fixture;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format the reports of a run.
pub fn format_reports(reports: &[SuiteReport], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(reports)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Human => reports
            .iter()
            .map(format_suite_human)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn format_suite_human(report: &SuiteReport) -> String {
    let mut lines = vec![format!(
        "running {} tests from {}",
        report.tests.len(),
        report.fixture
    )];
    for test in &report.tests {
        let detail = match &test.outcome {
            TestOutcome::Passed => format!(" ({}us)", test.duration_us),
            TestOutcome::Failed { failure } => format!(": {}", failure),
            TestOutcome::Errored { reason } => format!(": {}", reason),
            TestOutcome::Skipped { reason } => format!(" ({})", reason),
        };
        lines.push(format!(
            "test {} ... {}{}",
            test.name,
            test.outcome.label(),
            detail
        ));
    }
    lines.push(format!(
        "result: {}. {} passed; {} failed; {} errored; {} skipped",
        if report.is_success() { "ok" } else { "FAILED" },
        report.passed(),
        report.failed(),
        report.errored(),
        report.skipped()
    ));
    lines.join("\n")
}

/// Format the fixture listing.
pub fn format_listing(fixtures: &[Fixture], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let listing: Vec<serde_json::Value> = fixtures
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "fixture": f.name(),
                        "tests": f.test_names().collect::<Vec<_>>(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&listing)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
        OutputMode::Human => fixtures
            .iter()
            .map(|f| {
                let mut out = format!("{}:", f.name());
                for name in f.test_names() {
                    out.push_str("\n  ");
                    out.push_str(name);
                }
                out
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Format the stream demonstrations.
pub fn format_streams(demos: &[(&str, String)], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let map: serde_json::Map<String, serde_json::Value> = demos
                .iter()
                .map(|(name, out)| (name.to_string(), serde_json::Value::String(out.clone())))
                .collect();
            serde_json::to_string_pretty(&map)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
        OutputMode::Human => demos
            .iter()
            .map(|(name, out)| format!("{:<22}{}", name, out))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}
