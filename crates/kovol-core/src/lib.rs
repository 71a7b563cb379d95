//! Kovol Verb Engine
//!
//! Predicts the full paradigm of a Kovol verb from one or two elicited
//! anchor forms and diffs predictions against attested data. Two competing
//! analyses are provided, ruleset A and ruleset B.
//!
//! The engine is pure: no I/O, no shared state. Independent verbs can be
//! predicted in parallel by the caller.
//!
//! # Example
//!
//! ```rust
//! use kovol_core::predict::{AnchorsA, Ruleset, RulesetA};
//! use kovol_core::{Actor, Tense, VerbRecord};
//!
//! let mut predicted = RulesetA::predict(&AnchorsA::new("pigɔm", "pigɔm"), "to put").unwrap();
//! assert_eq!(predicted.future()[0], "piginim");
//!
//! let attested = VerbRecord::builder("to put")
//!     .form(Tense::Future, Actor::S1, "piginim")
//!     .build();
//! let errors = predicted.compare_with(&attested);
//! assert!(!errors.is_empty());
//! ```

pub mod compare;
pub mod ingest;
pub mod json;
pub mod paradigm;
pub mod phonology;
pub mod predict;
pub mod root;

// Re-export main types at crate root
pub use compare::{compare, compare_with_config, CompareConfig, Discrepancy, DiscrepancyMap};
pub use ingest::{records_from_rows, ElicitationRow, IngestError, Ingested, Mode, UnknownMode};
pub use json::{compare_json, predict_json, records_json};
pub use paradigm::{Actor, Origin, Slot, Tense, UnknownName, VerbRecord, VerbRecordBuilder};
pub use phonology::{vowels, Segment};
pub use predict::{
    predict, AnchorB, AnchorForms, AnchorsA, Ruleset, RulesetA, RulesetB, RulesetKind,
    UnknownRuleset,
};
pub use root::{extract_root_a, extract_root_b, Root, RootError};
