use std::collections::HashMap;

use chrono::{TimeDelta, TimeZone, Utc};
use hive_viewer::suite::client_join::{MISSING_CLIENT_INFO, join_client_results};
use hive_viewer::suite::duration::{format_coarse, format_fine};
use hive_viewer::suite::suite_data::{ClientInfoData, TestResultData};
use hive_viewer::suite::suite_model::{Suite, UNKNOWN_DURATION};
use hive_viewer::suite::timestamp::{format_timestamp, parse_timestamp};

mod common;
use crate::common::fixtures::{CONSENSUS, DEVP2P, case_json, fixture, suite_json};

fn consensus() -> Suite {
    Suite::parse(&fixture(CONSENSUS)).unwrap()
}

// ============================================================================
// 1. Aggregation
// ============================================================================

#[test]
fn started_and_ended_span_all_cases() {
    let suite = consensus();
    assert_eq!(
        suite.started,
        Some(Utc.with_ymd_and_hms(2019, 12, 10, 10, 0, 0).unwrap())
    );
    assert_eq!(
        suite.ended,
        Some(Utc.with_ymd_and_hms(2019, 12, 10, 10, 10, 0).unwrap())
    );
    assert_eq!(suite.duration, "10min 0s");
    assert_eq!(suite.elapsed(), Some(TimeDelta::minutes(10)));
}

#[test]
fn overlapping_cases_span_from_earliest_start_to_latest_end() {
    let suite = Suite::parse(&suite_json(vec![
        case_json(1, "2020-06-01T10:00:00Z", "2020-06-01T10:05:00Z", true),
        case_json(2, "2020-06-01T10:02:00Z", "2020-06-01T10:10:00Z", true),
    ]))
    .unwrap();
    assert_eq!(suite.duration, "10min 0s");
}

#[test]
fn case_order_does_not_matter() {
    let forward = Suite::parse(&suite_json(vec![
        case_json(1, "2020-06-01T10:00:00Z", "2020-06-01T10:05:00Z", true),
        case_json(2, "2020-06-01T10:02:00Z", "2020-06-01T10:10:00Z", true),
        case_json(3, "2020-06-01T09:58:00Z", "2020-06-01T10:01:00Z", true),
    ]))
    .unwrap();
    let backward = Suite::parse(&suite_json(vec![
        case_json(3, "2020-06-01T09:58:00Z", "2020-06-01T10:01:00Z", true),
        case_json(2, "2020-06-01T10:02:00Z", "2020-06-01T10:10:00Z", true),
        case_json(1, "2020-06-01T10:00:00Z", "2020-06-01T10:05:00Z", true),
    ]))
    .unwrap();

    assert_eq!(forward.started, backward.started);
    assert_eq!(forward.ended, backward.ended);
    assert_eq!(forward.duration, "12min 0s");
}

#[test]
fn pass_and_fail_counts_cover_every_case() {
    let suite = consensus();
    assert_eq!(suite.passes, 2);
    assert_eq!(suite.fails, 1);
    assert_eq!(suite.passes + suite.fails, suite.total());
    assert!(!suite.all_passed());
}

#[test]
fn empty_suite_has_unknown_span() {
    let suite = Suite::parse(&fixture(DEVP2P)).unwrap();
    assert_eq!(suite.id, "devp2p-0");
    assert_eq!(suite.total(), 0);
    assert_eq!(suite.started, None);
    assert_eq!(suite.ended, None);
    assert_eq!(suite.elapsed(), None);
    assert_eq!(suite.duration, UNKNOWN_DURATION);
    assert_eq!(suite.passes + suite.fails, 0);
    assert!(suite.all_passed());
}

#[test]
fn missing_test_cases_field_is_empty_suite() {
    let suite = Suite::parse(r#"{"id": 9, "name": "bare"}"#).unwrap();
    assert_eq!(suite.id, "9");
    assert_eq!(suite.total(), 0);
}

#[test]
fn case_list_toggle_defaults_to_hidden() {
    let mut suite = consensus();
    assert!(!suite.shows_cases());
    assert_eq!(suite.show_state_label(), "Show");

    suite.toggle_test_cases();
    assert!(suite.shows_cases());
    assert_eq!(suite.show_state_label(), "Hide");

    suite.toggle_test_cases();
    assert!(!suite.shows_cases());
}

// ============================================================================
// 2. Test cases
// ============================================================================

#[test]
fn case_fields_and_fine_duration() {
    let suite = consensus();
    let first = &suite.test_cases[0];
    assert_eq!(first.id, "1");
    assert_eq!(first.name, "bcStateTests/suicideStorageCheck");
    assert_eq!(first.duration, "5min 0s 0ms");
    assert_eq!(first.pass_text_style(), "text-success");
    assert_eq!(first.summary_result.pass_label(), "pass");

    let third = &suite.test_cases[2];
    assert_eq!(third.duration, "2min 30s 250ms");
    assert_eq!(third.elapsed(), TimeDelta::milliseconds(150_250));
    assert_eq!(third.pass_text_style(), "text-danger");
    assert_eq!(third.summary_result.pass_label(), "fail");
    assert_eq!(third.summary_result.details, "block 1 accepted");
}

#[test]
fn malformed_case_timestamp_fails_parse() {
    let json = suite_json(vec![case_json(1, "yesterday", "2020-06-01T10:05:00Z", true)]);
    assert!(Suite::parse(&json).is_err());
}

#[test]
fn missing_summary_result_fails_parse() {
    let json = r#"{"id": 1, "name": "s", "testCases": [
        {"id": 1, "name": "c", "start": "2020-06-01T10:00:00Z", "end": "2020-06-01T10:00:01Z"}
    ]}"#;
    assert!(Suite::parse(json).is_err());
}

// ============================================================================
// 3. Client-result join
// ============================================================================

#[test]
fn client_results_keep_document_order() {
    let suite = consensus();
    let ids: Vec<&str> = suite.test_cases[2]
        .client_results
        .iter()
        .map(|c| c.client_id.as_str())
        .collect();
    assert_eq!(ids, vec!["besu-7", "ghost-9"]);
}

#[test]
fn known_client_gets_its_metadata() {
    let suite = consensus();
    let besu = &suite.test_cases[2].client_results[0];
    assert!(!besu.pass);
    assert_eq!(besu.details, "block 1 accepted");
    assert_eq!(besu.client_name, "besu");
    assert_eq!(besu.client_version, "besu/v1.3.6");
    assert_eq!(besu.log_file, "besu/client-besu-7.log");
    assert_eq!(
        besu.instantiated_at,
        Some(Utc.with_ymd_and_hms(2019, 12, 10, 10, 0, 58).unwrap())
    );
}

#[test]
fn unknown_client_gets_placeholder() {
    let suite = consensus();
    let ghost = &suite.test_cases[2].client_results[1];
    assert_eq!(ghost.client_id, "ghost-9");
    assert_eq!(ghost.client_name, MISSING_CLIENT_INFO);
    assert_eq!(ghost.client_version, "");
    assert_eq!(ghost.log_file, "");
    assert_eq!(ghost.instantiated_at, None);
    assert!(!ghost.pass);
    assert_eq!(ghost.details, "no response");
}

#[test]
fn join_with_empty_info_table() {
    let results = vec![
        (
            "x".to_string(),
            TestResultData {
                pass: true,
                details: "ok".into(),
            },
        ),
        (
            "y".to_string(),
            TestResultData {
                pass: false,
                details: String::new(),
            },
        ),
    ];
    let joined = join_client_results(results, &HashMap::new());

    assert_eq!(joined.len(), 2);
    assert!(joined.iter().all(|c| c.client_name == MISSING_CLIENT_INFO));
    assert!(joined[0].pass);
    assert!(!joined[1].pass);
}

#[test]
fn join_uses_only_matching_keys() {
    let mut infos = HashMap::new();
    infos.insert(
        "y".to_string(),
        ClientInfoData {
            name: "nethermind".into(),
            version_info: "1.4.0".into(),
            instantiated_at: None,
            log_file: "nm.log".into(),
        },
    );
    let results = vec![(
        "y".to_string(),
        TestResultData {
            pass: true,
            details: String::new(),
        },
    )];

    let joined = join_client_results(results, &infos);
    assert_eq!(joined[0].client_name, "nethermind");
    assert_eq!(joined[0].client_version, "1.4.0");
    assert_eq!(joined[0].log_file, "nm.log");
}

#[test]
fn case_without_client_tables_has_no_client_results() {
    let json = r#"{"id": 1, "name": "s", "testCases": [
        {"id": 1, "name": "c", "start": "2020-06-01T10:00:00Z", "end": "2020-06-01T10:00:01Z",
         "summaryResult": {"pass": true}}
    ]}"#;
    let suite = Suite::parse(json).unwrap();
    assert!(suite.test_cases[0].client_results.is_empty());
    assert_eq!(suite.test_cases[0].summary_result.details, "");
}

// ============================================================================
// 4. Duration formatting
// ============================================================================

#[test]
fn coarse_duration_drops_leading_zero_units() {
    assert_eq!(format_coarse(TimeDelta::zero()), "0s");
    assert_eq!(format_coarse(TimeDelta::seconds(42)), "42s");
    assert_eq!(format_coarse(TimeDelta::minutes(10)), "10min 0s");
    assert_eq!(format_coarse(TimeDelta::seconds(3605)), "1hr 0min 5s");
    assert_eq!(format_coarse(TimeDelta::seconds(3661)), "1hr 1min 1s");
    assert_eq!(format_coarse(TimeDelta::hours(26)), "26hr 0min 0s");
}

#[test]
fn coarse_duration_truncates_milliseconds() {
    assert_eq!(format_coarse(TimeDelta::milliseconds(59_999)), "59s");
}

#[test]
fn fine_duration_includes_milliseconds() {
    assert_eq!(format_fine(TimeDelta::zero()), "0s 0ms");
    assert_eq!(format_fine(TimeDelta::milliseconds(2500)), "2s 500ms");
    assert_eq!(format_fine(TimeDelta::milliseconds(61_007)), "1min 1s 7ms");
    assert_eq!(format_fine(TimeDelta::milliseconds(3_723_004)), "1hr 2min 3s 4ms");
}

#[test]
fn negative_duration_is_clamped() {
    assert_eq!(format_coarse(TimeDelta::seconds(-30)), "0s");
    assert_eq!(format_fine(TimeDelta::seconds(-30)), "0s 0ms");
}

// ============================================================================
// 5. Timestamps
// ============================================================================

#[test]
fn parses_rfc3339_variants() {
    let expected = Utc.with_ymd_and_hms(2019, 12, 10, 16, 36, 51).unwrap();
    assert_eq!(parse_timestamp("2019-12-10T16:36:51Z"), Some(expected));
    assert_eq!(parse_timestamp("2019-12-10T18:36:51+02:00"), Some(expected));

    let nanos = parse_timestamp("2019-12-10T16:36:51.9917117Z").unwrap();
    assert_eq!(format_timestamp(&nanos), "2019-12-10 16:36:51");
}

#[test]
fn parses_naive_forms_as_utc() {
    let expected = Utc.with_ymd_and_hms(2019, 12, 10, 16, 36, 51).unwrap();
    assert_eq!(parse_timestamp("2019-12-10T16:36:51"), Some(expected));
    assert_eq!(parse_timestamp("2019-12-10 16:36:51"), Some(expected));
    assert_eq!(
        parse_timestamp("2019-12-10"),
        Some(Utc.with_ymd_and_hms(2019, 12, 10, 0, 0, 0).unwrap())
    );
}

#[test]
fn rejects_garbage_timestamps() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("not a date"), None);
    assert_eq!(parse_timestamp("2019-13-45T00:00:00Z"), None);
}
