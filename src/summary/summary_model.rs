use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ViewerError;
use crate::source::source::join_location;
use crate::suite::suite_model::Suite;
use crate::suite::timestamp;

// ============================================================================
// Index line
// ============================================================================

/// One line of the suite index file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub file_name: String,
    pub name: String,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start: DateTime<Utc>,

    #[serde(default)]
    pub primary_client: String,

    pub pass: bool,
}

// ============================================================================
// Suite summary (one row of the list)
// ============================================================================

/// Where a summary's detail stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
    /// Last fetch failed. Not terminal: the next reveal tries again.
    Error,
}

/// Lightweight metadata for one suite execution, plus its lazily loaded
/// detail.
#[derive(Debug)]
pub struct SuiteSummary {
    pub file_name: String,
    pub name: String,
    pub started: DateTime<Utc>,
    pub primary_client: String,
    pub pass: bool,

    /// Base location the index was loaded from; detail is fetched relative to it
    pub path: String,

    pub(crate) state: LoadState,
    pub(crate) suite: Option<Suite>,
    pub(crate) load_error: Option<ViewerError>,
}

impl SuiteSummary {
    pub fn from_data(data: SummaryData, path: &str) -> Self {
        Self {
            file_name: data.file_name,
            name: data.name,
            started: data.start,
            primary_client: data.primary_client,
            pass: data.pass,
            path: path.to_string(),
            state: LoadState::NotLoaded,
            suite: None,
            load_error: None,
        }
    }

    /// Parse one index line and attach the base path it came from.
    pub fn parse_line(line: &str, path: &str) -> Result<Self, serde_json::Error> {
        let data: SummaryData = serde_json::from_str(line)?;
        Ok(Self::from_data(data, path))
    }

    /// Location of this suite's detail file.
    pub fn location(&self) -> String {
        join_location(&self.path, &self.file_name)
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn suite(&self) -> Option<&Suite> {
        self.suite.as_ref()
    }

    pub fn suite_mut(&mut self) -> Option<&mut Suite> {
        self.suite.as_mut()
    }

    /// Failure from the most recent reveal, cleared when a new one starts.
    pub fn load_error(&self) -> Option<&ViewerError> {
        self.load_error.as_ref()
    }

    fn file_stem(&self) -> &str {
        self.file_name
            .strip_suffix(".json")
            .unwrap_or(&self.file_name)
    }

    /// Element id of the row.
    pub fn suite_label(&self) -> String {
        format!("Suite{}", self.file_stem())
    }

    /// Element id of the row's collapsible detail.
    pub fn detail_label(&self) -> String {
        format!("CollapseSuite{}", self.file_stem())
    }

    pub fn pass_style(&self) -> &'static str {
        if self.pass { "border-success" } else { "border-danger" }
    }
}
