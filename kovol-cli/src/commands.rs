//! Subcommand logic, kept free of argument parsing and printing

use kovol::tracing::prefix;
use kovol_core::{
    predict as predict_record, AnchorForms, CompareConfig, DiscrepancyMap, IngestError, Ingested,
    RulesetKind, VerbRecord,
};
use serde::Serialize;
use tracing::{debug, info, warn};

pub fn predict(
    ruleset: RulesetKind,
    anchors: &AnchorForms,
    english: &str,
) -> kovol::Result<VerbRecord> {
    let record = predict_record(ruleset, anchors, english)?;
    info!("{} {}", prefix::PREDICT, record);
    Ok(record)
}

/// Outcome of cross-checking a whole dataset
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub ruleset: RulesetKind,
    pub checked: usize,
    pub matched: usize,
    pub mismatched: Vec<Mismatch>,
    pub skipped: Vec<Skipped>,
    /// Sheet rows that never made it into a record
    pub skipped_rows: Vec<IngestError>,
}

/// A verb whose prediction disagrees with the data
#[derive(Debug, Serialize)]
pub struct Mismatch {
    pub english: String,
    pub citation: String,
    pub errors: DiscrepancyMap,
}

/// A verb that could not be predicted
#[derive(Debug, Serialize)]
pub struct Skipped {
    pub english: String,
    pub reason: String,
}

pub fn check(ruleset: RulesetKind, ingested: &Ingested, config: &CompareConfig) -> CheckReport {
    let mut report = CheckReport {
        ruleset,
        checked: 0,
        matched: 0,
        mismatched: Vec::new(),
        skipped: Vec::new(),
        skipped_rows: ingested.skipped.clone(),
    };

    for attested in &ingested.records {
        let anchors = AnchorForms::from_record(attested);
        let mut predicted = match predict_record(ruleset, &anchors, attested.english()) {
            Ok(v) => v,
            Err(e) => {
                debug!("{} skipping '{}': {}", prefix::CHECK, attested.english(), e);
                report.skipped.push(Skipped {
                    english: attested.english().to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        report.checked += 1;
        let errors = predicted.compare_with_config(attested, config);
        if errors.is_empty() {
            report.matched += 1;
            continue;
        }

        warn!(
            "{} {} disagrees in {} slots",
            prefix::CHECK,
            attested,
            errors.len()
        );
        report.mismatched.push(Mismatch {
            english: attested.english().to_string(),
            citation: attested.citation().to_string(),
            errors: errors.clone(),
        });
    }

    info!(
        "{} checked {} verbs with ruleset {}: {} matched, {} mismatched, {} skipped, {} rows unused",
        prefix::CHECK,
        report.checked,
        ruleset,
        report.matched,
        report.mismatched.len(),
        report.skipped.len(),
        report.skipped_rows.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use kovol_core::{records_from_rows, ElicitationRow, Slot, Tense};

    fn sheet(records: Vec<VerbRecord>) -> Ingested {
        Ingested {
            records,
            skipped: Vec::new(),
        }
    }
    use pretty_assertions::assert_eq;

    fn pig() -> VerbRecord {
        VerbRecord::builder("to put")
            .tense(
                Tense::RemotePast,
                ["pigɔm", "pigɔŋ", "pigɔt", "pigomuŋg", "pigomwa", "pigɛmind"],
            )
            .tense(
                Tense::RecentPast,
                ["pigɔm", "pigɔŋ", "pige", "pigɔŋg", "pigima", "pigɔnd"],
            )
            .tense(
                Tense::Future,
                ["piginim", "piginiŋ ig", "pigiŋ", "pigug", "pigwa ig", "pigis"],
            )
            .singular_imperative("pigu")
            .plural_imperative("pigas")
            .build()
    }

    #[test]
    fn check_counts_outcomes() {
        let typo = VerbRecord::builder("to put")
            .tense(
                Tense::RemotePast,
                ["pigɔm", "pigɔŋ", "pigɔt", "pigomuŋg", "pigomwa", "pigɛmind"],
            )
            .tense(
                Tense::RecentPast,
                ["pigɔm", "pigɔŋ", "pige", "pigɔŋg", "pigima", "pigɔnd"],
            )
            .tense(
                Tense::Future,
                ["piginim", "piginiŋ", "pigiŋ", "pigug", "pigwa", "pigiis"],
            )
            .singular_imperative("pigu")
            .plural_imperative("pigas")
            .build();
        let no_anchors = VerbRecord::builder("to speak").build();

        let report = check(
            RulesetKind::A,
            &sheet(vec![pig(), typo, no_anchors]),
            &CompareConfig::default(),
        );
        assert_eq!(report.checked, 2);
        assert_eq!(report.matched, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].english, "to speak");

        let mismatch = &report.mismatched[0];
        let slots: Vec<Slot> = mismatch.errors.keys().copied().collect();
        assert_eq!(slots, vec![Slot::new(Tense::Future, kovol_core::Actor::P3)]);
        assert_eq!(mismatch.errors[&slots[0]].attested, "pigiis");
        assert_eq!(mismatch.errors[&slots[0]].predicted, "pigis");
    }

    #[test]
    fn marker_config_is_honoured() {
        let config = CompareConfig {
            marker_slots: Vec::new(),
            ..Default::default()
        };
        let report = check(RulesetKind::A, &sheet(vec![pig()]), &config);
        assert_eq!(report.matched, 0);
        assert_eq!(report.mismatched[0].errors.len(), 2);
    }

    #[test]
    fn predict_reports_root_errors() {
        let anchors = AnchorForms {
            future_3p: Some("is".into()),
            ..Default::default()
        };
        let err = predict(RulesetKind::B, &anchors, "").unwrap_err();
        assert!(matches!(err, kovol::Error::Root(_)));
    }

    #[test]
    fn report_serializes_slot_names() {
        let report = check(RulesetKind::B, &sheet(vec![pig()]), &CompareConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ruleset"], "b");
        assert_eq!(json["checked"], 1);
        assert!(json["mismatched"][0]["errors"].get("remote_past_1s").is_some());
    }

    #[test]
    fn blank_sheet_row_still_checks_the_rest() {
        let rows: Vec<ElicitationRow> = serde_json::from_value(serde_json::json!([
            { "actor": "1s", "tense": "remote past", "kov": "pigɔm", "eng": "to put" },
            { "actor": "1s", "tense": "recent past", "kov": "pigɔm", "eng": "to put" },
            { "actor": "", "tense": "", "kov": "note", "eng": "to speak" },
        ]))
        .unwrap();

        let report = check(RulesetKind::A, &records_from_rows(&rows), &CompareConfig::default());
        assert_eq!(report.checked, 1);
        assert_eq!(report.skipped_rows.len(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["skipped_rows"],
            serde_json::json!(["row 2 ('to speak'): unknown actor ''"])
        );
    }

    #[test]
    fn bad_ruleset_name_is_explained() {
        let err = "c".parse::<RulesetKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown ruleset 'c': expected 'a' or 'b'");
    }
}
