use tracing::{debug, warn};

use crate::error::{FetchError, LoadCause, ViewerError};
use crate::source::source::ReportSource;
use crate::suite::suite_model::Suite;
use crate::summary::summary_model::{LoadState, SuiteSummary};

// ============================================================================
// Lazy detail loading
// ============================================================================

impl SuiteSummary {
    /// Start loading this suite's detail.
    ///
    /// Returns the location to fetch, or `None` when the detail is already
    /// loaded or a fetch is outstanding. Every `Some` must be answered by
    /// exactly one `finish_reveal`.
    pub fn begin_reveal(&mut self) -> Option<String> {
        match self.state {
            LoadState::Loaded | LoadState::Loading => None,
            LoadState::NotLoaded | LoadState::Error => {
                self.state = LoadState::Loading;
                self.load_error = None;
                Some(self.location())
            }
        }
    }

    /// Apply the outcome of the fetch started by `begin_reveal`.
    ///
    /// The outcome is recorded before the loading flag is cleared. A
    /// completion that arrives while no fetch is outstanding is ignored.
    pub fn finish_reveal(&mut self, fetched: Result<String, FetchError>) -> LoadState {
        if self.state != LoadState::Loading {
            debug!(file = %self.file_name, state = ?self.state, "ignoring stray detail completion");
            return self.state;
        }

        let parsed = fetched
            .map_err(LoadCause::from)
            .and_then(|body| Suite::parse(&body).map_err(LoadCause::from));

        match parsed {
            Ok(suite) => {
                debug!(file = %self.file_name, cases = suite.total(), "suite detail loaded");
                self.suite = Some(suite);
                self.state = LoadState::Loaded;
            }
            Err(cause) => {
                let error = ViewerError::DetailLoad {
                    location: self.location(),
                    cause,
                };
                warn!("{}", error);
                self.load_error = Some(error);
                self.state = LoadState::Error;
            }
        }

        self.state
    }

    /// Load the detail on first use.
    ///
    /// Fetches at most once per successful load; while loaded or loading this
    /// is a no-op. The returned state lets a caller expand the row whatever
    /// the outcome and show the error flag when it is `Error`.
    pub fn reveal(&mut self, source: &dyn ReportSource) -> LoadState {
        match self.begin_reveal() {
            Some(location) => {
                let fetched = source.fetch(&location);
                self.finish_reveal(fetched)
            }
            None => self.state,
        }
    }
}
