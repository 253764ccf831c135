use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LoadCause, ViewerError};
use crate::source::source::{ReportSource, join_location};
use crate::suite::suite_model::Suite;
use crate::summary::summary_model::{LoadState, SuiteSummary};

// ============================================================================
// View options
// ============================================================================

/// Order of the visible list by suite start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    #[default]
    Oldest,
    /// Newest first
    Newest,
}

/// Initial toggle state of a view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub show_passes: bool,
    pub show_fails: bool,
    pub sort: SortOrder,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_passes: true,
            show_fails: true,
            sort: SortOrder::Oldest,
        }
    }
}

// ============================================================================
// Report view-model
// ============================================================================

/// Holds the loaded suite summaries and the filter/sort toggles, and keeps
/// the derived visible list and client list current.
///
/// Derived state is recomputed eagerly on every write (collection replaced
/// or toggle flipped), so reads never observe a stale list.
#[derive(Debug)]
pub struct ReportViewModel {
    summaries: Vec<SuiteSummary>,

    show_passes: bool,
    show_fails: bool,
    sort_ascending: bool,

    /// Indices into `summaries`, filtered and sorted
    visible: Vec<usize>,

    /// Distinct primary clients, first-occurrence order
    clients: Vec<String>,
}

impl Default for ReportViewModel {
    fn default() -> Self {
        Self::with_options(ViewOptions::default())
    }
}

impl ReportViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ViewOptions) -> Self {
        Self {
            summaries: Vec::new(),
            show_passes: options.show_passes,
            show_fails: options.show_fails,
            sort_ascending: options.sort == SortOrder::Oldest,
            visible: Vec::new(),
            clients: Vec::new(),
        }
    }

    // ---- Loading ----

    /// Fetch and parse the suite index at `path/file`.
    ///
    /// Every non-blank line must parse; the first failure rejects the whole
    /// index and the current collection is left as it was. On success the
    /// collection is replaced in one step. Returns the number of summaries.
    pub fn load_index(
        &mut self,
        path: &str,
        file: &str,
        source: &dyn ReportSource,
    ) -> Result<usize, ViewerError> {
        let location = join_location(path, file);

        let summaries = source
            .fetch(&location)
            .map_err(LoadCause::from)
            .and_then(|text| parse_index(&text, path))
            .map_err(|cause| ViewerError::IndexLoad {
                location: location.clone(),
                cause,
            })?;

        let count = summaries.len();
        self.replace_summaries(summaries);
        info!(location = %location, suites = count, "suite index loaded");
        Ok(count)
    }

    /// Swap in a new collection and recompute the derived lists.
    pub fn replace_summaries(&mut self, summaries: Vec<SuiteSummary>) {
        self.summaries = summaries;
        self.recompute();
    }

    // ---- Toggles ----

    pub fn toggle_show_passes(&mut self) {
        self.show_passes = !self.show_passes;
        self.recompute();
    }

    pub fn toggle_show_fails(&mut self) {
        self.show_fails = !self.show_fails;
        self.recompute();
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        self.recompute();
    }

    pub fn shows_passes(&self) -> bool {
        self.show_passes
    }

    pub fn shows_fails(&self) -> bool {
        self.show_fails
    }

    pub fn sort_order(&self) -> SortOrder {
        if self.sort_ascending {
            SortOrder::Oldest
        } else {
            SortOrder::Newest
        }
    }

    pub fn pass_filter_label(&self) -> &'static str {
        if self.show_passes { "Passes" } else { "No passes" }
    }

    pub fn fail_filter_label(&self) -> &'static str {
        if self.show_fails { "Fails" } else { "No fails" }
    }

    pub fn sort_mode_label(&self) -> &'static str {
        if self.sort_ascending { "Oldest" } else { "Newest" }
    }

    // ---- Derived views ----

    /// All loaded summaries in index order.
    pub fn summaries(&self) -> &[SuiteSummary] {
        &self.summaries
    }

    /// Summaries passing the filters, sorted by start time.
    pub fn visible(&self) -> impl Iterator<Item = &SuiteSummary> + '_ {
        self.visible.iter().map(|&i| &self.summaries[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn clients(&self) -> &[String] {
        &self.clients
    }

    // ---- Row access ----

    pub fn find(&self, file_name: &str) -> Option<&SuiteSummary> {
        self.summaries.iter().find(|s| s.file_name == file_name)
    }

    /// Loaded detail of one row. Only the suite is handed out mutably; the
    /// summary fields the visible list is derived from stay read-only.
    pub fn suite_mut(&mut self, file_name: &str) -> Option<&mut Suite> {
        self.find_mut(file_name).and_then(|s| s.suite_mut())
    }

    fn find_mut(&mut self, file_name: &str) -> Option<&mut SuiteSummary> {
        self.summaries.iter_mut().find(|s| s.file_name == file_name)
    }

    /// Reveal one row by file name.
    pub fn reveal(
        &mut self,
        file_name: &str,
        source: &dyn ReportSource,
    ) -> Result<LoadState, ViewerError> {
        let summary = self
            .find_mut(file_name)
            .ok_or_else(|| ViewerError::UnknownSuite(file_name.to_string()))?;
        Ok(summary.reveal(source))
    }

    /// Reveal every visible row. Failures stay on their rows; returns how
    /// many rows ended in the error state.
    pub fn reveal_visible(&mut self, source: &dyn ReportSource) -> usize {
        let mut failed = 0;
        for &i in &self.visible {
            if self.summaries[i].reveal(source) == LoadState::Error {
                failed += 1;
            }
        }
        failed
    }

    fn recompute(&mut self) {
        let summaries = &self.summaries;

        let mut visible: Vec<usize> = (0..summaries.len())
            .filter(|&i| {
                let pass = summaries[i].pass;
                (pass && self.show_passes) || (!pass && self.show_fails)
            })
            .collect();

        // Stable sorts: equal start times keep index order in both directions.
        if self.sort_ascending {
            visible.sort_by(|&a, &b| summaries[a].started.cmp(&summaries[b].started));
        } else {
            visible.sort_by(|&a, &b| summaries[b].started.cmp(&summaries[a].started));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let clients: Vec<String> = summaries
            .iter()
            .filter(|s| seen.insert(s.primary_client.as_str()))
            .map(|s| s.primary_client.clone())
            .collect();

        self.visible = visible;
        self.clients = clients;
    }
}

/// Parse index text: one summary per non-blank line.
pub fn parse_index(text: &str, path: &str) -> Result<Vec<SuiteSummary>, LoadCause> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            SuiteSummary::parse_line(line, path)
                .map_err(|source| LoadCause::IndexLine { line: i + 1, source })
        })
        .collect()
}
