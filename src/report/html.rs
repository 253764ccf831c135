use crate::summary::summary_model::{LoadState, SuiteSummary};
use crate::suite::suite_model::{Suite, TestCase};
use crate::suite::timestamp::format_timestamp;
use crate::viewer::view_model::ReportViewModel;

// ============================================================================
// HTML reporter
// ============================================================================

/// Generate a self-contained HTML page of the visible suite list.
///
/// Features:
/// - Filter/sort labels and visible counts in the header
/// - One bordered row per suite, green or red by outcome
/// - Loaded detail nested under its row, cases listed when expanded
/// - Per-row error flag for detail that failed to load
/// - Inline CSS (no external dependencies)
pub fn generate_html_report(view: &ReportViewModel) -> String {
    let mut rows = String::new();
    for summary in view.visible() {
        rows.push_str(&summary_row_html(summary));
    }
    if view.visible_count() == 0 {
        rows.push_str("<p class=\"empty\">No suites match the current filters.</p>\n");
    }

    let heading = format!(
        "{} | {} | {}",
        view.pass_filter_label(),
        view.fail_filter_label(),
        view.sort_mode_label()
    );
    let subtitle = format!(
        "Showing {} of {} suites",
        view.visible_count(),
        view.summaries().len()
    );

    page("Test Suites", &heading, &subtitle, &rows)
}

/// Generate a page for a single suite row with its detail.
pub fn generate_suite_html(summary: &SuiteSummary) -> String {
    let subtitle = match summary.suite() {
        Some(suite) => format!(
            "{} passed, {} failed ({} total) in {}",
            suite.passes,
            suite.fails,
            suite.total(),
            suite.duration
        ),
        None => format_timestamp(&summary.started),
    };
    page(&summary.name, &summary.name, &subtitle, &summary_row_html(summary))
}

fn summary_row_html(summary: &SuiteSummary) -> String {
    let mut out = format!(
        r#"<div class="suite {style}" id="{id}">
<h3>{marker} {name}</h3>
<p>{started} | {client} | {file}</p>
"#,
        style = summary.pass_style(),
        id = escape_html(&summary.suite_label()),
        marker = marker(summary.pass),
        name = escape_html(&summary.name),
        started = format_timestamp(&summary.started),
        client = escape_html(&summary.primary_client),
        file = escape_html(&summary.file_name),
    );

    match summary.state() {
        LoadState::Loaded => {
            if let Some(suite) = summary.suite() {
                out.push_str(&format!(
                    "<div class=\"detail\" id=\"{}\">\n",
                    escape_html(&summary.detail_label())
                ));
                out.push_str(&suite_detail_html(suite));
                out.push_str("</div>\n");
            }
        }
        LoadState::Error => {
            let message = summary
                .load_error()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "failed to load suite detail".to_string());
            out.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(&message)));
        }
        LoadState::Loading => out.push_str("<p class=\"loading\">Loading…</p>\n"),
        LoadState::NotLoaded => {}
    }

    out.push_str("</div>\n");
    out
}

fn suite_detail_html(suite: &Suite) -> String {
    let mut out = String::new();

    if !suite.description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", escape_html(&suite.description)));
    }
    out.push_str(&format!(
        "<p>Duration: {} | {} passed, {} failed</p>\n",
        escape_html(&suite.duration),
        suite.passes,
        suite.fails
    ));

    if !suite.shows_cases() {
        return out;
    }

    out.push_str("<table class=\"cases\">\n<tr><th>Case</th><th>Result</th><th>Duration</th><th>Clients</th></tr>\n");
    for case in &suite.test_cases {
        out.push_str(&test_case_html(case));
    }
    out.push_str("</table>\n");
    out
}

fn test_case_html(case: &TestCase) -> String {
    let clients: Vec<String> = case
        .client_results
        .iter()
        .map(|client| {
            let mut item = format!(
                "<li class=\"{}\">{} {}",
                if client.pass { "text-success" } else { "text-danger" },
                escape_html(&client.client_name),
                escape_html(&client.client_version)
            );
            if !client.log_file.is_empty() {
                item.push_str(&format!(
                    " <a href=\"{0}\">{0}</a>",
                    escape_html(&client.log_file)
                ));
            }
            item.push_str("</li>");
            item
        })
        .collect();

    format!(
        "<tr><td title=\"{desc}\">{name}</td><td class=\"{style}\">{label}</td><td>{duration}</td><td><ul>{clients}</ul></td></tr>\n",
        desc = escape_html(&case.description),
        name = escape_html(&case.name),
        style = case.pass_text_style(),
        label = case.summary_result.pass_label(),
        duration = escape_html(&case.duration),
        clients = clients.join(""),
    )
}

fn page(title: &str, heading: &str, subtitle: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }}
.header {{ background: #37474f; color: white; padding: 20px 30px; }}
.header h1 {{ margin: 0 0 8px 0; font-size: 24px; }}
.header p {{ margin: 0; font-size: 16px; opacity: 0.9; }}
.content {{ max-width: 1000px; margin: 20px auto; padding: 0 20px; }}
.suite {{ background: white; border-radius: 6px; padding: 16px 20px; margin-bottom: 12px; border-left: 4px solid #ccc; }}
.suite.border-success {{ border-left-color: #4CAF50; }}
.suite.border-danger {{ border-left-color: #f44336; }}
.suite h3 {{ margin: 0 0 8px 0; font-size: 16px; }}
.suite p {{ margin: 4px 0; color: #666; font-size: 14px; }}
.suite .error {{ color: #f44336; font-weight: bold; }}
.cases {{ width: 100%; border-collapse: collapse; font-size: 13px; }}
.cases td, .cases th {{ text-align: left; padding: 4px 8px; border-bottom: 1px solid #eee; vertical-align: top; }}
.cases ul {{ margin: 0; padding-left: 16px; }}
.text-success {{ color: #2e7d32; }}
.text-danger {{ color: #c62828; }}
</style>
</head>
<body>
<div class="header">
<h1>{heading}</h1>
<p>{subtitle}</p>
</div>
<div class="content">
{body}
</div>
</body>
</html>"##,
        title = escape_html(title),
        heading = escape_html(heading),
        subtitle = escape_html(subtitle),
        body = body,
    )
}

fn marker(pass: bool) -> &'static str {
    if pass { "\u{2713}" } else { "\u{2717}" }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
