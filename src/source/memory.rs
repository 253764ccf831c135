use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::FetchError;
use crate::source::source::ReportSource;

// ============================================================================
// In-memory source (for testing without a server or files)
// ============================================================================

/// Serves registered documents by location and records every fetch.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
    fetched: RefCell<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under `location`, replacing any earlier one.
    pub fn insert(&mut self, location: impl Into<String>, body: impl Into<String>) {
        self.documents.insert(location.into(), body.into());
    }

    /// Chainable form of `insert`.
    pub fn with(mut self, location: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(location, body);
        self
    }

    pub fn remove(&mut self, location: &str) {
        self.documents.remove(location);
    }

    /// Every location requested so far, in order, including failed ones.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.borrow().len()
    }
}

impl ReportSource for MemorySource {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        self.fetched.borrow_mut().push(location.to_string());
        self.documents
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(location.to_string()))
    }
}
