use chrono::{DateTime, TimeDelta, Utc};

use crate::suite::client_join::join_client_results;
use crate::suite::duration::{format_coarse, format_fine};
use crate::suite::suite_data::{SuiteData, TestCaseData, TestResultData};

/// Duration text for a suite with no test cases.
pub const UNKNOWN_DURATION: &str = "unknown";

// ============================================================================
// Results
// ============================================================================

/// Outcome of a test case, or of one client within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub pass: bool,
    pub details: String,
}

impl TestResult {
    pub fn pass_label(&self) -> &'static str {
        if self.pass { "pass" } else { "fail" }
    }
}

impl From<TestResultData> for TestResult {
    fn from(data: TestResultData) -> Self {
        Self {
            pass: data.pass,
            details: data.details,
        }
    }
}

/// A test result for one client, joined with that client's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientResult {
    pub pass: bool,
    pub details: String,

    /// Key the result was reported under
    pub client_id: String,

    /// Human-readable client name, or the missing-info placeholder
    pub client_name: String,

    pub client_version: String,
    pub instantiated_at: Option<DateTime<Utc>>,
    pub log_file: String,
}

// ============================================================================
// Test case
// ============================================================================

#[derive(Debug, Clone)]
pub struct TestCase {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary_result: TestResult,
    pub client_results: Vec<ClientResult>,

    /// Elapsed time, millisecond precision
    pub duration: String,
}

impl TestCase {
    pub fn from_data(data: TestCaseData) -> Self {
        let duration = format_fine(data.end - data.start);
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            start: data.start,
            end: data.end,
            summary_result: data.summary_result.into(),
            client_results: join_client_results(data.client_results, &data.client_info),
            duration,
        }
    }

    pub fn elapsed(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn passed(&self) -> bool {
        self.summary_result.pass
    }

    pub fn pass_text_style(&self) -> &'static str {
        if self.passed() { "text-success" } else { "text-danger" }
    }
}

// ============================================================================
// Suite
// ============================================================================

/// Full detail of one suite execution.
///
/// `started`/`ended` span every case regardless of input order and are
/// `None` for a suite without cases.
#[derive(Debug, Clone)]
pub struct Suite {
    pub id: String,
    pub name: String,
    pub description: String,
    pub test_cases: Vec<TestCase>,

    pub started: Option<DateTime<Utc>>,
    pub ended: Option<DateTime<Utc>>,
    pub passes: usize,
    pub fails: usize,

    /// Elapsed time between `started` and `ended`, second precision
    pub duration: String,

    show_cases: bool,
}

impl Suite {
    pub fn from_data(data: SuiteData) -> Self {
        let test_cases: Vec<TestCase> = data.test_cases.into_iter().map(TestCase::from_data).collect();

        let started = test_cases.iter().map(|tc| tc.start).min();
        let ended = test_cases.iter().map(|tc| tc.end).max();
        let passes = test_cases.iter().filter(|tc| tc.passed()).count();
        let fails = test_cases.len() - passes;

        let duration = match (started, ended) {
            (Some(s), Some(e)) => format_coarse(e - s),
            _ => UNKNOWN_DURATION.to_string(),
        };

        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            test_cases,
            started,
            ended,
            passes,
            fails,
            duration,
            show_cases: false,
        }
    }

    /// Parse a suite detail document.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let data: SuiteData = serde_json::from_str(json)?;
        Ok(Self::from_data(data))
    }

    pub fn elapsed(&self) -> Option<TimeDelta> {
        Some(self.ended? - self.started?)
    }

    pub fn total(&self) -> usize {
        self.test_cases.len()
    }

    pub fn all_passed(&self) -> bool {
        self.fails == 0
    }

    /// Whether the case list is expanded.
    pub fn shows_cases(&self) -> bool {
        self.show_cases
    }

    pub fn toggle_test_cases(&mut self) {
        self.show_cases = !self.show_cases;
    }

    /// Label for the expand/collapse control: the action it would perform.
    pub fn show_state_label(&self) -> &'static str {
        if self.show_cases { "Hide" } else { "Show" }
    }
}
