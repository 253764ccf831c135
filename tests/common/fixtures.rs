use std::path::{Path, PathBuf};

use hive_viewer::source::memory::MemorySource;
use hive_viewer::source::source::join_location;
use hive_viewer::viewer::view_model::ReportViewModel;
use serde_json::json;

pub const BASE: &str = "http://reports.test/results";
pub const INDEX: &str = "listing.jsonl";

pub const CONSENSUS: &str = "1575995811-consensus.json";
pub const SYNC: &str = "1576054933-sync.json";
pub const DEVP2P: &str = "1575900000-devp2p.json";
pub const GRAPHQL: &str = "1576100000-graphql.json";

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

pub fn at(file: &str) -> String {
    join_location(BASE, file)
}

/// Index plus three of the four detail files. `SYNC` is missing and
/// `GRAPHQL` is truncated JSON.
pub fn fixture_source() -> MemorySource {
    MemorySource::new()
        .with(at(INDEX), fixture(INDEX))
        .with(at(CONSENSUS), fixture(CONSENSUS))
        .with(at(DEVP2P), fixture(DEVP2P))
        .with(at(GRAPHQL), fixture(GRAPHQL))
}

pub fn loaded_view() -> (ReportViewModel, MemorySource) {
    let source = fixture_source();
    let mut view = ReportViewModel::new();
    view.load_index(BASE, INDEX, &source).unwrap();
    (view, source)
}

pub fn summary_line(file: &str, start: &str, client: &str, pass: bool) -> String {
    json!({
        "fileName": file,
        "name": file.trim_end_matches(".json"),
        "start": start,
        "primaryClient": client,
        "pass": pass,
    })
    .to_string()
}

/// View-model over an index built from `summary_line`s.
pub fn view_of(lines: &[String]) -> ReportViewModel {
    let source = MemorySource::new().with(at(INDEX), lines.join("\n"));
    let mut view = ReportViewModel::new();
    view.load_index(BASE, INDEX, &source).unwrap();
    view
}

pub fn visible_files(view: &ReportViewModel) -> Vec<String> {
    view.visible().map(|s| s.file_name.clone()).collect()
}

pub fn case_json(id: u32, start: &str, end: &str, pass: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("case-{}", id),
        "description": "",
        "start": start,
        "end": end,
        "summaryResult": { "pass": pass, "details": "" },
        "clientResults": {},
        "clientInfo": {}
    })
}

pub fn suite_json(cases: Vec<serde_json::Value>) -> String {
    json!({
        "id": 7,
        "name": "suite",
        "description": "",
        "testCases": cases,
    })
    .to_string()
}
