use std::time::Duration;

use tracing::debug;

use crate::error::FetchError;
use crate::source::source::ReportSource;

/// Plain HTTP GET, no authentication or extra headers.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl ReportSource for HttpSource {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        debug!(url = location, "GET");
        self.client
            .get(location)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| FetchError::Http {
                url: location.to_string(),
                source,
            })
    }
}
