use thiserror::Error;

/// A single fetch against a `ReportSource` failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status
    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Reading a file from a local report directory failed
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// No entry registered under this location (in-memory source)
    #[error("{0} not found")]
    NotFound(String),
}

/// What went wrong underneath an index or detail load.
#[derive(Debug, Error)]
pub enum LoadCause {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Suite detail document did not parse
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// One line of the index did not parse; the whole index is rejected
    #[error("malformed index line {line}: {source}")]
    IndexLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by the report view-model.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The suite index could not be fetched or parsed. No partial data is kept.
    #[error("failed to load suite index {location}: {cause}")]
    IndexLoad {
        location: String,
        #[source]
        cause: LoadCause,
    },

    /// A single suite's detail could not be fetched or parsed.
    #[error("failed to load suite detail {location}: {cause}")]
    DetailLoad {
        location: String,
        #[source]
        cause: LoadCause,
    },

    /// No summary with this file name is loaded
    #[error("suite '{0}' is not in the index")]
    UnknownSuite(String),

    /// Neither the command line nor the config file names a report location
    #[error("no report base location given (use --base or set source.base in the config file)")]
    MissingBase,
}
