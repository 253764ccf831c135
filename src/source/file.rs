use tracing::debug;

use crate::error::FetchError;
use crate::source::source::ReportSource;

/// Reads report files from a directory on disk, the same layout a static
/// file server would expose.
pub struct FileSource;

impl ReportSource for FileSource {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        debug!(path = location, "read");
        std::fs::read_to_string(location).map_err(|source| FetchError::Io {
            path: location.to_string(),
            source,
        })
    }
}
