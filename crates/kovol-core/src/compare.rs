//! Paradigm comparison
//!
//! Diffs a predicted record against an attested one, slot by slot, in
//! [`Slot::ORDER`]. The only normalization is the uncertainty marker: field
//! transcribers append `" ig"` to a future 2s/2p form they are unsure of,
//! meaning "use the base form". The marker is stripped from the attested
//! value on those slots before comparing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::paradigm::{Actor, Slot, Tense, VerbRecord};

/// Default uncertainty marker appended by transcribers
pub const UNCERTAIN_MARKER: &str = " ig";

/// An attested/predicted pair that disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub attested: String,
    pub predicted: String,
}

/// Slot name to disagreeing pair, ordered like [`Slot::ORDER`]
pub type DiscrepancyMap = BTreeMap<Slot, Discrepancy>;

/// Comparison settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Suffix stripped from attested values on `marker_slots`
    pub uncertain_marker: String,
    /// Slots where the marker may appear
    pub marker_slots: Vec<Slot>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            uncertain_marker: UNCERTAIN_MARKER.to_string(),
            marker_slots: vec![
                Slot::new(Tense::Future, Actor::S2),
                Slot::new(Tense::Future, Actor::P2),
            ],
        }
    }
}

impl CompareConfig {
    /// The attested value as it should be compared on `slot`
    fn normalize<'a>(&self, slot: Slot, attested: &'a str) -> &'a str {
        if self.uncertain_marker.is_empty() || !self.marker_slots.contains(&slot) {
            return attested;
        }
        attested
            .strip_suffix(self.uncertain_marker.as_str())
            .unwrap_or(attested)
    }
}

/// Compare with the default configuration. Never fails; an empty map means
/// every slot matched.
pub fn compare(predicted: &VerbRecord, attested: &VerbRecord) -> DiscrepancyMap {
    compare_with_config(predicted, attested, &CompareConfig::default())
}

pub fn compare_with_config(
    predicted: &VerbRecord,
    attested: &VerbRecord,
    config: &CompareConfig,
) -> DiscrepancyMap {
    let mut errors = DiscrepancyMap::new();

    for slot in Slot::ORDER {
        let expected = config.normalize(slot, attested.slot(slot));
        let actual = predicted.slot(slot);
        if expected != actual {
            errors.insert(
                slot,
                Discrepancy {
                    attested: expected.to_string(),
                    predicted: actual.to_string(),
                },
            );
        }
    }

    tracing::debug!(
        english = predicted.english(),
        discrepancies = errors.len(),
        "compared paradigm"
    );
    errors
}
