use std::time::Duration;

use crate::error::FetchError;
use crate::source::file::FileSource;
use crate::source::http::HttpSource;

// ============================================================================
// ReportSource trait
// ============================================================================

/// Fetches report files as text. Locations are produced by `join_location`
/// from a base path and a file name.
pub trait ReportSource {
    fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// Join a base path and a file name with exactly one separating slash.
pub fn join_location(path: &str, file: &str) -> String {
    if path.is_empty() {
        return file.to_string();
    }
    format!(
        "{}/{}",
        path.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}

/// Whether a base location should be fetched over HTTP. The scheme is
/// matched case-insensitively.
pub fn is_remote(base: &str) -> bool {
    has_scheme(base, "http://") || has_scheme(base, "https://")
}

fn has_scheme(base: &str, scheme: &str) -> bool {
    base.get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Pick the source for a base location: HTTP for `http(s)://` URLs,
/// the local filesystem for anything else.
pub fn open_source(
    base: &str,
    timeout: Option<Duration>,
) -> Result<Box<dyn ReportSource>, reqwest::Error> {
    if is_remote(base) {
        Ok(Box::new(HttpSource::new(timeout)?))
    } else {
        Ok(Box::new(FileSource))
    }
}
