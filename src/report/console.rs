use crate::summary::summary_model::{LoadState, SuiteSummary};
use crate::suite::suite_model::{Suite, TestCase};
use crate::suite::timestamp::format_timestamp;
use crate::viewer::view_model::ReportViewModel;

// ============================================================================
// Console reporter
// ============================================================================

/// Format the visible suite list for terminal output.
///
/// Produces output like:
/// ```text
/// === Suites: Passes | Fails | Oldest ===
///
/// ✓ PASS  2019-12-10 16:36:51  Consensus (go-ethereum) [1575995811.json]
///     10min 0s — 12 passed, 0 failed (12 total)
/// ✗ FAIL  2019-12-11 09:02:13  Sync (besu) [1576054933.json]
///     [ERROR] failed to load suite detail ...
///
/// === Showing 2 of 3 suites: 1 passed, 1 failed ===
/// ```
pub fn format_suite_list(view: &ReportViewModel) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Suites: {} | {} | {} ===\n\n",
        view.pass_filter_label(),
        view.fail_filter_label(),
        view.sort_mode_label()
    ));

    let mut passed = 0;
    let mut failed = 0;
    for summary in view.visible() {
        if summary.pass {
            passed += 1;
        } else {
            failed += 1;
        }
        out.push_str(&format_summary_row(summary));
    }

    if view.visible_count() == 0 {
        out.push_str("(no suites match the current filters)\n");
    }

    out.push_str(&format!(
        "\n=== Showing {} of {} suites: {} passed, {} failed ===\n",
        view.visible_count(),
        view.summaries().len(),
        passed,
        failed
    ));

    out
}

/// One list row, plus its detail when loaded.
pub fn format_summary_row(summary: &SuiteSummary) -> String {
    let mut out = format!(
        "{}  {}  {} ({}) [{}]\n",
        marker(summary.pass),
        format_timestamp(&summary.started),
        summary.name,
        summary.primary_client,
        summary.file_name
    );

    match summary.state() {
        LoadState::Loaded => {
            if let Some(suite) = summary.suite() {
                out.push_str(&format!("    {}\n", aggregate_line(suite)));
                if suite.shows_cases() {
                    for case in &suite.test_cases {
                        out.push_str(&indent(&format_test_case(case), 4));
                    }
                }
            }
        }
        LoadState::Error => {
            let message = summary
                .load_error()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "failed to load suite detail".to_string());
            out.push_str(&format!("    [ERROR] {}\n", message));
        }
        LoadState::Loading => out.push_str("    (loading)\n"),
        LoadState::NotLoaded => {}
    }

    out
}

/// Format a loaded suite with every test case.
pub fn format_suite_detail(suite: &Suite) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Suite: {} ({}) ===\n", suite.name, suite.id));
    if !suite.description.is_empty() {
        out.push_str(&format!("{}\n", suite.description));
    }

    let started = suite.started.as_ref().map(format_timestamp).unwrap_or_else(|| "-".into());
    let ended = suite.ended.as_ref().map(format_timestamp).unwrap_or_else(|| "-".into());
    out.push_str(&format!(
        "\nStarted: {}  Ended: {}  Duration: {}\n\n",
        started, ended, suite.duration
    ));

    for case in &suite.test_cases {
        out.push_str(&format_test_case(case));
    }

    out.push_str(&format!("\n=== Results: {} ===\n", counts(suite)));
    out
}

/// One test case with its per-client results.
pub fn format_test_case(case: &TestCase) -> String {
    let mut out = format!("{}  {} ({})\n", marker(case.passed()), case.name, case.duration);

    if !case.passed() && !case.summary_result.details.is_empty() {
        out.push_str(&format!("    [FAIL] {}\n", case.summary_result.details.trim()));
    }

    for client in &case.client_results {
        let version = if client.client_version.is_empty() {
            String::new()
        } else {
            format!(" {}", client.client_version)
        };
        out.push_str(&format!(
            "    {} {}{}",
            if client.pass { "\u{2713}" } else { "\u{2717}" },
            client.client_name,
            version
        ));
        if !client.details.is_empty() {
            out.push_str(&format!(" — {}", client.details.trim()));
        }
        if !client.log_file.is_empty() {
            out.push_str(&format!(" (log: {})", client.log_file));
        }
        out.push('\n');
    }

    out
}

fn aggregate_line(suite: &Suite) -> String {
    format!("{} — {}", suite.duration, counts(suite))
}

fn counts(suite: &Suite) -> String {
    format!(
        "{} passed, {} failed ({} total)",
        suite.passes,
        suite.fails,
        suite.total()
    )
}

fn marker(pass: bool) -> &'static str {
    if pass { "\u{2713} PASS" } else { "\u{2717} FAIL" }
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines().map(|line| format!("{}{}\n", pad, line)).collect()
}
