use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::suite::timestamp;

// ============================================================================
// Suite detail file, as written by the test harness
// ============================================================================

/// Top-level suite detail document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteData {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub test_cases: Vec<TestCaseData>,
}

/// One test case inside a suite document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseData {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start: DateTime<Utc>,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub end: DateTime<Utc>,

    pub summary_result: TestResultData,

    /// Per-client outcomes keyed by client id, in document order
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub client_results: Vec<(String, TestResultData)>,

    /// Client metadata keyed by client id
    #[serde(default)]
    pub client_info: HashMap<String, ClientInfoData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestResultData {
    pub pass: bool,

    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfoData {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version_info: String,

    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub instantiated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub log_file: String,
}

// ============================================================================
// serde helpers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

/// Ids show up as numbers or strings depending on the harness version.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Read a JSON object as key/value pairs, keeping document order.
fn deserialize_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object of client results")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}
