//! Elicitation row routing
//!
//! Elicitation sheets arrive as flat rows, one form per row, keyed by the
//! English gloss. This module regroups them into attested [`VerbRecord`]s.
//! Reading the sheets themselves happens elsewhere; rows come in already
//! deserialized.
//!
//! Routing:
//!
//! - `imperative` rows on 2s/2p fill the singular/plural imperative
//! - `short` rows fill the short form
//! - every other row fills its (tense, actor) slot
//!
//! Rows that fit none of these (notes, blank lines, typos in the tense
//! column) are skipped and handed back alongside the records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::paradigm::{Actor, Slot, Tense, VerbRecord};

/// One row of an elicitation sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElicitationRow {
    #[serde(default)]
    pub actor: String,
    #[serde(default)]
    pub tense: String,
    /// Blank for ordinary indicative forms
    #[serde(default)]
    pub mode: String,
    #[serde(alias = "kov")]
    pub kovol: String,
    #[serde(alias = "eng")]
    pub english: String,
    /// Reviewer's mark, not carried into records
    #[serde(default)]
    pub checked: String,
}

/// Row mode column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Indicative,
    Imperative,
    Short,
}

/// A mode column value other than blank, `imperative` or `short`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown row mode '{0}': expected blank, 'imperative' or 'short'")]
pub struct UnknownMode(pub String);

impl std::str::FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(Self::Indicative),
            "imperative" => Ok(Self::Imperative),
            "short" => Ok(Self::Short),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Row routing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("row {row} ('{english}'): unknown tense '{tense}'")]
    UnknownTense {
        row: usize,
        english: String,
        tense: String,
    },

    #[error("row {row} ('{english}'): unknown actor '{actor}'")]
    UnknownActor {
        row: usize,
        english: String,
        actor: String,
    },

    #[error("row {row} ('{english}'): unknown mode '{mode}'")]
    UnknownMode {
        row: usize,
        english: String,
        mode: String,
    },
}

impl Serialize for IngestError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Records grouped from a sheet, plus the rows left out of them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ingested {
    pub records: Vec<VerbRecord>,
    pub skipped: Vec<IngestError>,
}

/// Where a row's form ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Slot(Slot),
    Short,
}

fn route(index: usize, row: &ElicitationRow) -> Result<Target, IngestError> {
    let mode: Mode = row.mode.parse().map_err(|_| IngestError::UnknownMode {
        row: index,
        english: row.english.clone(),
        mode: row.mode.clone(),
    })?;
    if mode == Mode::Short {
        return Ok(Target::Short);
    }

    let actor: Actor = row.actor.parse().map_err(|_| IngestError::UnknownActor {
        row: index,
        english: row.english.clone(),
        actor: row.actor.clone(),
    })?;
    match (mode, actor) {
        (Mode::Imperative, Actor::S2) => return Ok(Target::Slot(Slot::SingularImperative)),
        (Mode::Imperative, Actor::P2) => return Ok(Target::Slot(Slot::PluralImperative)),
        _ => {}
    }

    let tense: Tense = row.tense.parse().map_err(|_| IngestError::UnknownTense {
        row: index,
        english: row.english.clone(),
        tense: row.tense.clone(),
    })?;
    Ok(Target::Slot(Slot::new(tense, actor)))
}

/// Group rows into attested records, one per English gloss.
///
/// Later rows overwrite earlier ones for the same slot. Records come back
/// sorted by citation form, ties broken by gloss. A row that cannot be
/// routed is skipped; it never costs the other rows their record.
pub fn records_from_rows(rows: &[ElicitationRow]) -> Ingested {
    let mut map: BTreeMap<&str, VerbRecord> = BTreeMap::new();
    let mut skipped = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let target = match route(index, row) {
            Ok(target) => target,
            Err(e) => {
                tracing::warn!(%e, "skipping elicitation row");
                skipped.push(e);
                continue;
            }
        };
        let record = map
            .entry(row.english.as_str())
            .or_insert_with(|| VerbRecord::builder(row.english.as_str()).build());
        match target {
            Target::Slot(slot) => record.set_slot(slot, row.kovol.as_str()),
            Target::Short => record.set_short(row.kovol.as_str()),
        }
    }

    let mut records: Vec<VerbRecord> = map.into_values().collect();
    records.sort_by(|a, b| a.citation().cmp(b.citation()));
    tracing::debug!(
        rows = rows.len(),
        verbs = records.len(),
        skipped = skipped.len(),
        "grouped elicitation rows"
    );
    Ingested { records, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(actor: &str, tense: &str, mode: &str, kovol: &str, english: &str) -> ElicitationRow {
        ElicitationRow {
            actor: actor.into(),
            tense: tense.into(),
            mode: mode.into(),
            kovol: kovol.into(),
            english: english.into(),
            checked: String::new(),
        }
    }

    #[test]
    fn rows_route_to_slots() {
        let rows = vec![
            row("1s", "Future", "", "piginim", "to put"),
            row("2s", "future", "", "piginiŋ", "to put"),
            row("2s", "future", "imperative", "pigu", "to put"),
            row("2p", "", "imperative", "pigas", "to put"),
            row("1s", "remote past", "", "pigɔm", "to put"),
            row("3p", "Recent Past", "", "pigɔnd", "to put"),
            row("", "", "short", "pig", "to put"),
        ];
        let ingested = records_from_rows(&rows);
        assert!(ingested.skipped.is_empty());
        assert_eq!(ingested.records.len(), 1);

        let v = &ingested.records[0];
        assert_eq!(v.english(), "to put");
        assert_eq!(v.future(), ["piginim", "piginiŋ", "", "", "", ""]);
        assert_eq!(v.imperatives(), ["pigu", "pigas"]);
        assert_eq!(v.remote_past()[0], "pigɔm");
        assert_eq!(v.recent_past()[5], "pigɔnd");
        assert_eq!(v.short(), "pig");
    }

    #[test]
    fn records_sorted_by_citation() {
        let rows = vec![
            row("1s", "future", "", "piginim", "to put"),
            row("1s", "future", "", "aminim", "to speak"),
            row("1s", "future", "", "asinim", "to jab"),
        ];
        let citations: Vec<String> = records_from_rows(&rows)
            .records
            .iter()
            .map(|v| v.citation().to_string())
            .collect();
        assert_eq!(citations, vec!["aminim", "asinim", "piginim"]);
    }

    #[test]
    fn unknown_tense_is_skipped() {
        let rows = vec![
            row("1s", "future", "", "piginim", "to put"),
            row("1s", "past", "", "pigɔm", "to put"),
        ];
        let ingested = records_from_rows(&rows);
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.records[0].remote_past()[0], "");
        assert_eq!(
            ingested.skipped,
            vec![IngestError::UnknownTense {
                row: 1,
                english: "to put".into(),
                tense: "past".into(),
            }]
        );
    }

    #[test]
    fn unknown_mode_is_skipped() {
        let rows = vec![row("2s", "future", "question", "pigu", "to put")];
        let ingested = records_from_rows(&rows);
        assert!(ingested.records.is_empty());
        assert!(matches!(
            ingested.skipped[..],
            [IngestError::UnknownMode { row: 0, .. }]
        ));
    }

    #[test]
    fn note_row_does_not_sink_the_sheet() {
        let rows = vec![
            row("1s", "remote past", "", "pigɔm", "to put"),
            row("1s", "recent past", "", "pigɔm", "to put"),
            row("", "", "", "note", "to speak"),
        ];
        let ingested = records_from_rows(&rows);

        assert_eq!(ingested.records.len(), 1);
        let put = &ingested.records[0];
        assert_eq!(put.english(), "to put");
        assert_eq!(put.remote_past()[0], "pigɔm");
        assert_eq!(put.recent_past()[0], "pigɔm");

        assert_eq!(
            ingested.skipped,
            vec![IngestError::UnknownActor {
                row: 2,
                english: "to speak".into(),
                actor: String::new(),
            }]
        );
    }

    #[test]
    fn mode_error_names_the_choices() {
        assert_eq!(
            "question".parse::<Mode>().unwrap_err().to_string(),
            "unknown row mode 'question': expected blank, 'imperative' or 'short'"
        );
        assert_eq!(" Imperative ".parse::<Mode>().unwrap(), Mode::Imperative);
    }

    #[test]
    fn skipped_rows_serialize_as_messages() {
        let ingested = records_from_rows(&[row("1s", "past", "", "pigɔm", "to put")]);
        let json = serde_json::to_value(&ingested).unwrap();
        assert_eq!(
            json["skipped"],
            serde_json::json!(["row 0 ('to put'): unknown tense 'past'"])
        );
    }

    #[test]
    fn sheet_column_names_deserialize() {
        let row: ElicitationRow = serde_json::from_value(serde_json::json!({
            "actor": "1s",
            "tense": "future",
            "mode": "",
            "kov": "aminim",
            "eng": "to speak",
            "checked": "SS",
        }))
        .unwrap();
        assert_eq!(row.kovol, "aminim");
        assert_eq!(row.english, "to speak");
    }
}
