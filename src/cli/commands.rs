use tracing::info;

use crate::cli::config::ResolvedSource;
use crate::error::ViewerError;
use crate::report::console::{format_suite_detail, format_suite_list};
use crate::report::html::{generate_html_report, generate_suite_html};
use crate::source::source::{ReportSource, open_source};
use crate::summary::summary_model::LoadState;
use crate::viewer::view_model::{ReportViewModel, ViewOptions};

// ============================================================================
// list subcommand
// ============================================================================

/// Load the index, apply the toggles and render the visible list.
pub fn cmd_list(
    target: &ResolvedSource,
    options: ViewOptions,
    expand: bool,
    format: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = open_source(&target.base, target.timeout)?;
    let view = build_list(source.as_ref(), target, options, expand)?;

    let content = match format {
        "html" => generate_html_report(&view),
        _ => format_suite_list(&view),
    };
    write_output(&content, output)
}

/// Build the list view; with `expand`, reveal every visible row.
pub fn build_list(
    source: &dyn ReportSource,
    target: &ResolvedSource,
    options: ViewOptions,
    expand: bool,
) -> Result<ReportViewModel, ViewerError> {
    let mut view = ReportViewModel::with_options(options);
    view.load_index(&target.base, &target.index, source)?;

    if expand {
        let failed = view.reveal_visible(source);
        if failed > 0 {
            info!(failed, "some suite details could not be loaded");
        }
    }

    Ok(view)
}

// ============================================================================
// show subcommand
// ============================================================================

/// Load one suite's detail and render it with its cases expanded.
pub fn cmd_show(
    target: &ResolvedSource,
    file: &str,
    format: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = open_source(&target.base, target.timeout)?;
    let mut view = ReportViewModel::new();
    view.load_index(&target.base, &target.index, source.as_ref())?;

    if view.reveal(file, source.as_ref())? == LoadState::Error {
        let message = view
            .find(file)
            .and_then(|s| s.load_error())
            .map(|e| e.to_string())
            .unwrap_or_else(|| format!("failed to load suite detail {}", file));
        return Err(message.into());
    }

    if let Some(suite) = view.suite_mut(file) {
        if !suite.shows_cases() {
            suite.toggle_test_cases();
        }
    }

    let summary = view
        .find(file)
        .ok_or_else(|| ViewerError::UnknownSuite(file.to_string()))?;

    let content = match format {
        "html" => generate_suite_html(summary),
        _ => summary.suite().map(format_suite_detail).unwrap_or_default(),
    };
    write_output(&content, output)
}

// ============================================================================
// clients subcommand
// ============================================================================

pub fn cmd_clients(target: &ResolvedSource) -> Result<(), Box<dyn std::error::Error>> {
    let source = open_source(&target.base, target.timeout)?;
    let mut view = ReportViewModel::new();
    view.load_index(&target.base, &target.index, source.as_ref())?;

    for client in view.clients() {
        println!("{}", client);
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn write_output(content: &str, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => print!("{}", content),
    }
    Ok(())
}
