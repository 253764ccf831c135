use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::viewer::view_model::{SortOrder, ViewOptions};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "hive-viewer",
    version,
    about = "Browse test-suite execution reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base location of the reports: an http(s) URL or a directory
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Index file name, relative to the base
    #[arg(long, global = true)]
    pub index: Option<String>,

    /// Path to config file (default: hive-viewer.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List suites from the index
    List {
        /// Leave passing suites out
        #[arg(long)]
        hide_passes: bool,

        /// Leave failing suites out
        #[arg(long)]
        hide_fails: bool,

        /// Sort newest first instead of oldest first
        #[arg(long)]
        newest_first: bool,

        /// Load the detail of every listed suite
        #[arg(long)]
        expand: bool,

        /// Output format: console, html
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show one suite with all of its test cases
    Show {
        /// Suite file name as listed in the index
        #[arg(long)]
        file: String,

        /// Output format: console, html
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the distinct primary clients in the index
    Clients,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `hive-viewer.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base: Option<String>,

    #[serde(default = "default_index")]
    pub index: String,

    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base: None,
            index: default_index(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_true")]
    pub show_passes: bool,

    #[serde(default = "default_true")]
    pub show_fails: bool,

    #[serde(default)]
    pub sort: SortOrder,

    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            show_passes: true,
            show_fails: true,
            sort: SortOrder::Oldest,
            format: default_console(),
        }
    }
}

// Serde default helpers
fn default_index() -> String { "listing.jsonl".to_string() }
fn default_true() -> bool { true }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("hive-viewer.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI > config file > defaults)
// ============================================================================

/// Where to read reports from, after merging CLI args with the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub base: String,
    pub index: String,
    pub timeout: Option<Duration>,
}

pub fn resolve_source(
    base: Option<&str>,
    index: Option<&str>,
    config: &SourceConfig,
) -> Result<ResolvedSource, ViewerError> {
    let base = base
        .or(config.base.as_deref())
        .ok_or(ViewerError::MissingBase)?;
    Ok(ResolvedSource {
        base: base.to_string(),
        index: index.unwrap_or(&config.index).to_string(),
        timeout: config.timeout_secs.map(Duration::from_secs),
    })
}

/// Initial view toggles. A `--hide-*` flag wins over the config file;
/// `--newest-first` overrides the configured sort.
pub fn build_view_options(
    config: &ViewConfig,
    hide_passes: bool,
    hide_fails: bool,
    newest_first: bool,
) -> ViewOptions {
    ViewOptions {
        show_passes: config.show_passes && !hide_passes,
        show_fails: config.show_fails && !hide_fails,
        sort: if newest_first { SortOrder::Newest } else { config.sort },
    }
}
