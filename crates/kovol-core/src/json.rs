//! JSON entry points
//!
//! String in, string out. Failures come back as `{"error": "..."}` rather
//! than a panic, so these can sit behind an FFI or WASM boundary.

use serde::{Deserialize, Serialize};

use crate::compare::{CompareConfig, DiscrepancyMap};
use crate::ingest::{records_from_rows, ElicitationRow};
use crate::paradigm::VerbRecord;
use crate::predict::{predict, AnchorForms, RulesetKind};

/// Input for [`predict_json`]
#[derive(Debug, Deserialize)]
pub struct PredictInput {
    pub ruleset: RulesetKind,
    pub anchors: AnchorForms,
    #[serde(default)]
    pub english: String,
}

/// Input for [`compare_json`]
#[derive(Debug, Deserialize)]
pub struct CompareInput {
    pub predicted: VerbRecord,
    pub attested: VerbRecord,
    #[serde(default)]
    pub config: CompareConfig,
}

/// Output of [`compare_json`]
#[derive(Debug, Serialize)]
pub struct CompareOutput {
    pub errors: DiscrepancyMap,
    pub matched: bool,
}

/// Input for [`records_json`]
#[derive(Debug, Deserialize)]
pub struct RecordsInput {
    pub rows: Vec<ElicitationRow>,
}

fn error_json(context: &str, e: impl std::fmt::Display) -> String {
    serde_json::json!({ "error": format!("{}: {}", context, e) }).to_string()
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => error_json("serialization failed", e),
    }
}

/// Predict a paradigm from anchors; returns the record
pub fn predict_json(input: &str) -> String {
    let parsed: PredictInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json("invalid predict input", e),
    };

    match predict(parsed.ruleset, &parsed.anchors, &parsed.english) {
        Ok(record) => to_json(&record),
        Err(e) => error_json("prediction failed", e),
    }
}

/// Compare two records; returns the discrepancy map
pub fn compare_json(input: &str) -> String {
    let parsed: CompareInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json("invalid compare input", e),
    };

    let errors =
        crate::compare::compare_with_config(&parsed.predicted, &parsed.attested, &parsed.config);
    to_json(&CompareOutput {
        matched: errors.is_empty(),
        errors,
    })
}

/// Group elicitation rows into records; unroutable rows are listed, not fatal
pub fn records_json(input: &str) -> String {
    let parsed: RecordsInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json("invalid records input", e),
    };

    to_json(&records_from_rows(&parsed.rows))
}
