//! Paradigm prediction
//!
//! Two independent analyses of Kovol verb morphology, each a [`Ruleset`]:
//!
//! - [`RulesetA`] works from the remote past 1s and recent past 1s forms
//! - [`RulesetB`] works from the future 3p form
//!
//! The rulesets share the paradigm shape and nothing else. Their tables look
//! alike in places but differ on edge cases, so neither borrows from the other.
//!
//! # Example
//!
//! ```rust
//! use kovol_core::predict::{AnchorB, Ruleset, RulesetB};
//!
//! let verb = RulesetB::predict(&AnchorB::new("amis"), "to speak").unwrap();
//! assert_eq!(verb.future()[0], "aminim");
//! assert_eq!(verb.remote_past()[0], "amom");
//! assert_eq!(verb.recent_past()[0], "aŋgom");
//! ```

pub mod rules;
mod ruleset_a;
mod ruleset_b;

pub use ruleset_a::{AnchorsA, RulesetA};
pub use ruleset_b::{AnchorB, RulesetB};

/// Rule tables, exposed for row-by-row inspection
pub mod tables {
    pub mod a {
        pub use super::super::ruleset_a::{FUTURE, IMPERATIVE, RECENT_PAST, REMOTE_PAST};
    }
    pub mod b {
        pub use super::super::ruleset_b::{FUTURE, IMPERATIVE, RECENT_PAST, REMOTE_PAST};
    }
}

use serde::{Deserialize, Serialize};

use crate::paradigm::{Actor, Origin, Slot, Tense, VerbRecord};
use crate::root::{Root, RootError};

/// Which analysis to predict with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetKind {
    A,
    B,
}

impl std::fmt::Display for RulesetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "a"),
            Self::B => write!(f, "b"),
        }
    }
}

/// A ruleset name other than `a` or `b`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ruleset '{0}': expected 'a' or 'b'")]
pub struct UnknownRuleset(pub String);

impl std::str::FromStr for RulesetKind {
    type Err = UnknownRuleset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            _ => Err(UnknownRuleset(s.to_string())),
        }
    }
}

/// One analysis of Kovol verb morphology.
///
/// Implementors provide root extraction and one generator per tense; the
/// provided [`Ruleset::predict`] runs them in order over a single root and
/// then writes the anchors back as ground truth.
pub trait Ruleset {
    /// Elicited forms the ruleset predicts from
    type Anchors;

    const KIND: RulesetKind;

    fn extract_root(anchors: &Self::Anchors) -> Result<Root, RootError>;

    fn future(root: &Root) -> [String; 6];

    fn recent_past(root: &Root) -> [String; 6];

    fn remote_past(root: &Root) -> [String; 6];

    /// Singular then plural imperative
    fn imperative(root: &Root) -> [String; 2];

    /// Write the anchor forms into their slots
    fn seed_anchors(record: &mut VerbRecord, anchors: &Self::Anchors);

    /// Predict a full paradigm.
    ///
    /// Fails only when the anchors cannot yield a root.
    fn predict(anchors: &Self::Anchors, english: &str) -> Result<VerbRecord, RootError> {
        let root = Self::extract_root(anchors)?;

        let mut record = VerbRecord::empty(
            english,
            Origin::Predicted {
                ruleset: Self::KIND,
                root: root.as_str().to_string(),
            },
        );
        record.set_tense(Tense::Future, Self::future(&root));
        record.set_tense(Tense::RecentPast, Self::recent_past(&root));
        record.set_tense(Tense::RemotePast, Self::remote_past(&root));
        record.set_imperatives(Self::imperative(&root));
        Self::seed_anchors(&mut record, anchors);

        tracing::debug!(ruleset = %Self::KIND, %root, english, "predicted paradigm");
        Ok(record)
    }
}

/// Anchor forms as they arrive from outside, any of which may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorForms {
    #[serde(default)]
    pub remote_past_1s: Option<String>,
    #[serde(default)]
    pub recent_past_1s: Option<String>,
    #[serde(default)]
    pub future_3p: Option<String>,
}

impl AnchorForms {
    /// Pull the anchors a ruleset needs out of an attested record.
    /// Empty slots count as missing.
    pub fn from_record(record: &VerbRecord) -> Self {
        let take = |tense: Tense, actor: Actor| {
            let form = record.form(tense, actor);
            (!form.is_empty()).then(|| form.to_string())
        };
        Self {
            remote_past_1s: take(Tense::RemotePast, Actor::S1),
            recent_past_1s: take(Tense::RecentPast, Actor::S1),
            future_3p: take(Tense::Future, Actor::P3),
        }
    }

    pub fn for_a(&self) -> Result<AnchorsA, RootError> {
        let remote = self.remote_past_1s.as_ref().ok_or(RootError::MissingAnchor(
            Slot::new(Tense::RemotePast, Actor::S1),
        ))?;
        let recent = self.recent_past_1s.as_ref().ok_or(RootError::MissingAnchor(
            Slot::new(Tense::RecentPast, Actor::S1),
        ))?;
        Ok(AnchorsA::new(remote.as_str(), recent.as_str()))
    }

    pub fn for_b(&self) -> Result<AnchorB, RootError> {
        let future_3p = self
            .future_3p
            .as_ref()
            .ok_or(RootError::MissingAnchor(Slot::new(Tense::Future, Actor::P3)))?;
        Ok(AnchorB::new(future_3p.as_str()))
    }
}

/// Predict with a ruleset chosen at runtime
pub fn predict(
    kind: RulesetKind,
    anchors: &AnchorForms,
    english: &str,
) -> Result<VerbRecord, RootError> {
    match kind {
        RulesetKind::A => RulesetA::predict(&anchors.for_a()?, english),
        RulesetKind::B => RulesetB::predict(&anchors.for_b()?, english),
    }
}
