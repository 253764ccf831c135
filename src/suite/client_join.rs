use std::collections::HashMap;

use crate::suite::suite_data::{ClientInfoData, TestResultData};
use crate::suite::suite_model::ClientResult;

/// Display name used when a result names a client the suite has no info for.
pub const MISSING_CLIENT_INFO: &str = "Missing client info.";

/// Pair every per-client result with its client metadata.
///
/// Output order follows `results`. A client id absent from `infos` yields a
/// placeholder record instead of an error.
pub fn join_client_results(
    results: Vec<(String, TestResultData)>,
    infos: &HashMap<String, ClientInfoData>,
) -> Vec<ClientResult> {
    results
        .into_iter()
        .map(|(client_id, result)| match infos.get(&client_id) {
            Some(info) => ClientResult {
                pass: result.pass,
                details: result.details,
                client_name: info.name.clone(),
                client_version: info.version_info.clone(),
                instantiated_at: info.instantiated_at,
                log_file: info.log_file.clone(),
                client_id,
            },
            None => ClientResult {
                pass: result.pass,
                details: result.details,
                client_name: MISSING_CLIENT_INFO.to_string(),
                client_version: String::new(),
                instantiated_at: None,
                log_file: String::new(),
                client_id,
            },
        })
        .collect()
}
