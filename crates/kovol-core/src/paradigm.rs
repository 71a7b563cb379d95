//! Verb paradigm types
//!
//! A paradigm is a fixed, total table: three tenses by six actors, plus two
//! imperatives and a short form. Every slot exists from construction and
//! defaults to the empty string; nothing here is sparse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compare::DiscrepancyMap;
use crate::predict::RulesetKind;

/// Grammatical tense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    RemotePast,
    RecentPast,
    Future,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Tense::RemotePast, Tense::RecentPast, Tense::Future];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RemotePast => "remote_past",
            Self::RecentPast => "recent_past",
            Self::Future => "future",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `remote_past` as well as the spaced `remote past` used in
/// elicitation sheets, ignoring case
impl FromStr for Tense {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace(' ', "_");
        Tense::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Person/number slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Actor {
    #[serde(rename = "1s")]
    S1,
    #[serde(rename = "2s")]
    S2,
    #[serde(rename = "3s")]
    S3,
    #[serde(rename = "1p")]
    P1,
    #[serde(rename = "2p")]
    P2,
    #[serde(rename = "3p")]
    P3,
}

impl Actor {
    pub const ALL: [Actor; 6] = [
        Actor::S1,
        Actor::S2,
        Actor::S3,
        Actor::P1,
        Actor::P2,
        Actor::P3,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::S1 => "1s",
            Self::S2 => "2s",
            Self::S3 => "3s",
            Self::P1 => "1p",
            Self::P2 => "2p",
            Self::P3 => "3p",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Actor {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Actor::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// A name that matches no tense, actor, or slot
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown paradigm name: {0}")]
pub struct UnknownName(pub String);

/// One of the 20 comparable paradigm slots.
///
/// The derived ordering matches [`Slot::ORDER`]: tensed slots by tense then
/// actor, followed by the two imperatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Tensed(Tense, Actor),
    SingularImperative,
    PluralImperative,
}

impl Slot {
    /// Fixed comparison and listing order
    pub const ORDER: [Slot; 20] = [
        Slot::Tensed(Tense::RemotePast, Actor::S1),
        Slot::Tensed(Tense::RemotePast, Actor::S2),
        Slot::Tensed(Tense::RemotePast, Actor::S3),
        Slot::Tensed(Tense::RemotePast, Actor::P1),
        Slot::Tensed(Tense::RemotePast, Actor::P2),
        Slot::Tensed(Tense::RemotePast, Actor::P3),
        Slot::Tensed(Tense::RecentPast, Actor::S1),
        Slot::Tensed(Tense::RecentPast, Actor::S2),
        Slot::Tensed(Tense::RecentPast, Actor::S3),
        Slot::Tensed(Tense::RecentPast, Actor::P1),
        Slot::Tensed(Tense::RecentPast, Actor::P2),
        Slot::Tensed(Tense::RecentPast, Actor::P3),
        Slot::Tensed(Tense::Future, Actor::S1),
        Slot::Tensed(Tense::Future, Actor::S2),
        Slot::Tensed(Tense::Future, Actor::S3),
        Slot::Tensed(Tense::Future, Actor::P1),
        Slot::Tensed(Tense::Future, Actor::P2),
        Slot::Tensed(Tense::Future, Actor::P3),
        Slot::SingularImperative,
        Slot::PluralImperative,
    ];

    pub const fn new(tense: Tense, actor: Actor) -> Self {
        Slot::Tensed(tense, actor)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tensed(tense, actor) => write!(f, "{}_{}", tense, actor),
            Self::SingularImperative => write!(f, "singular_imperative"),
            Self::PluralImperative => write!(f, "plural_imperative"),
        }
    }
}

impl FromStr for Slot {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ORDER
            .into_iter()
            .find(|slot| slot.to_string() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Forms for one tense, ordered 1s, 2s, 3s, 1p, 2p, 3p
pub type TenseForms = [String; 6];

/// How a record came to exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    /// Filled from elicitation data, gaps left empty
    Attested,
    /// Generated from anchor forms by one ruleset
    Predicted { ruleset: RulesetKind, root: String },
}

/// One verb: its full paradigm plus metadata.
///
/// Slots are only written while the record is being built, either through
/// [`VerbRecordBuilder`] or by a ruleset's prediction pipeline. Afterwards
/// the discrepancy map is the only thing that changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbRecord {
    /// English gloss, the elicitation key
    english: String,

    /// Tok Pisin gloss
    #[serde(default)]
    tpi: String,

    /// Who transcribed the data
    #[serde(default)]
    author: String,

    /// Indexed by [`Tense::index`] then [`Actor::index`]
    #[serde(default)]
    paradigm: [TenseForms; 3],

    #[serde(default)]
    singular_imperative: String,

    #[serde(default)]
    plural_imperative: String,

    #[serde(default)]
    short: String,

    #[serde(default = "attested_origin")]
    origin: Origin,

    /// Set whole by a comparison, empty until one is run
    #[serde(default)]
    errors: DiscrepancyMap,
}

fn attested_origin() -> Origin {
    Origin::Attested
}

impl VerbRecord {
    /// Start building an attested record keyed by its English gloss
    pub fn builder(english: impl Into<String>) -> VerbRecordBuilder {
        VerbRecordBuilder::new(english)
    }

    pub(crate) fn empty(english: impl Into<String>, origin: Origin) -> Self {
        Self {
            english: english.into(),
            tpi: String::new(),
            author: String::new(),
            paradigm: Default::default(),
            singular_imperative: String::new(),
            plural_imperative: String::new(),
            short: String::new(),
            origin,
            errors: DiscrepancyMap::new(),
        }
    }

    pub(crate) fn set_tense(&mut self, tense: Tense, forms: TenseForms) {
        self.paradigm[tense.index()] = forms;
    }

    pub(crate) fn set_form(&mut self, tense: Tense, actor: Actor, form: impl Into<String>) {
        self.paradigm[tense.index()][actor.index()] = form.into();
    }

    pub(crate) fn set_slot(&mut self, slot: Slot, form: impl Into<String>) {
        match slot {
            Slot::Tensed(tense, actor) => self.set_form(tense, actor, form),
            Slot::SingularImperative => self.singular_imperative = form.into(),
            Slot::PluralImperative => self.plural_imperative = form.into(),
        }
    }

    pub(crate) fn set_short(&mut self, form: impl Into<String>) {
        self.short = form.into();
    }

    pub(crate) fn set_imperatives(&mut self, [singular, plural]: [String; 2]) {
        self.singular_imperative = singular;
        self.plural_imperative = plural;
    }

    /// Citation form: future 3p for ruleset B predictions, future 1s otherwise
    pub fn citation(&self) -> &str {
        match &self.origin {
            Origin::Predicted {
                ruleset: RulesetKind::B,
                ..
            } => self.form(Tense::Future, Actor::P3),
            _ => self.form(Tense::Future, Actor::S1),
        }
    }

    pub fn english(&self) -> &str {
        &self.english
    }

    pub fn tpi(&self) -> &str {
        &self.tpi
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The root a prediction was generated from
    pub fn root(&self) -> Option<&str> {
        match &self.origin {
            Origin::Predicted { root, .. } => Some(root),
            Origin::Attested => None,
        }
    }

    pub fn is_predicted(&self) -> bool {
        matches!(self.origin, Origin::Predicted { .. })
    }

    pub fn form(&self, tense: Tense, actor: Actor) -> &str {
        &self.paradigm[tense.index()][actor.index()]
    }

    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::Tensed(tense, actor) => self.form(tense, actor),
            Slot::SingularImperative => self.singular_imperative.as_str(),
            Slot::PluralImperative => self.plural_imperative.as_str(),
        }
    }

    pub fn tense(&self, tense: Tense) -> [&str; 6] {
        Actor::ALL.map(|actor| self.form(tense, actor))
    }

    pub fn remote_past(&self) -> [&str; 6] {
        self.tense(Tense::RemotePast)
    }

    pub fn recent_past(&self) -> [&str; 6] {
        self.tense(Tense::RecentPast)
    }

    pub fn future(&self) -> [&str; 6] {
        self.tense(Tense::Future)
    }

    /// Singular then plural imperative
    pub fn imperatives(&self) -> [&str; 2] {
        [self.singular_imperative.as_str(), self.plural_imperative.as_str()]
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    /// All 20 comparable forms in [`Slot::ORDER`]
    pub fn all_conjugations(&self) -> [&str; 20] {
        Slot::ORDER.map(|slot| self.slot(slot))
    }

    /// Discrepancies from the last comparison run against this record
    pub fn errors(&self) -> &DiscrepancyMap {
        &self.errors
    }

    /// Compare this record against attested data and keep the result.
    ///
    /// The stored map is replaced as a whole on every call.
    pub fn compare_with(&mut self, attested: &VerbRecord) -> &DiscrepancyMap {
        self.errors = crate::compare::compare(self, attested);
        &self.errors
    }

    /// Like [`VerbRecord::compare_with`] with a non-default configuration
    pub fn compare_with_config(
        &mut self,
        attested: &VerbRecord,
        config: &crate::compare::CompareConfig,
    ) -> &DiscrepancyMap {
        self.errors = crate::compare::compare_with_config(self, attested, config);
        &self.errors
    }
}

impl fmt::Display for VerbRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_predicted() {
            write!(f, "Predicted ")?;
        }
        write!(f, "Kovol verb: {}, \"{}\"", self.citation(), self.english)
    }
}

/// Builder for attested records
#[derive(Debug)]
pub struct VerbRecordBuilder {
    record: VerbRecord,
}

impl VerbRecordBuilder {
    pub fn new(english: impl Into<String>) -> Self {
        Self {
            record: VerbRecord::empty(english, Origin::Attested),
        }
    }

    pub fn form(mut self, tense: Tense, actor: Actor, form: impl Into<String>) -> Self {
        self.record.set_form(tense, actor, form);
        self
    }

    pub fn slot(mut self, slot: Slot, form: impl Into<String>) -> Self {
        self.record.set_slot(slot, form);
        self
    }

    /// Fill a whole tense, ordered 1s..3p
    pub fn tense(mut self, tense: Tense, forms: [&str; 6]) -> Self {
        self.record.set_tense(tense, forms.map(str::to_string));
        self
    }

    pub fn singular_imperative(mut self, form: impl Into<String>) -> Self {
        self.record.singular_imperative = form.into();
        self
    }

    pub fn plural_imperative(mut self, form: impl Into<String>) -> Self {
        self.record.plural_imperative = form.into();
        self
    }

    pub fn short(mut self, form: impl Into<String>) -> Self {
        self.record.set_short(form);
        self
    }

    pub fn tpi(mut self, tpi: impl Into<String>) -> Self {
        self.record.tpi = tpi.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.record.author = author.into();
        self
    }

    pub fn build(self) -> VerbRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_record_has_every_slot_empty() {
        let v = VerbRecord::builder("to speak").build();
        assert_eq!(v.english(), "to speak");
        assert!(v.all_conjugations().iter().all(|f| f.is_empty()));
        assert_eq!(v.short(), "");
        assert!(v.errors().is_empty());
        assert_eq!(v.root(), None);
    }

    #[test]
    fn partial_record_accessors() {
        let v = VerbRecord::builder("to speak")
            .form(Tense::Future, Actor::S1, "aminim")
            .form(Tense::RemotePast, Actor::S1, "amɔm")
            .form(Tense::RecentPast, Actor::S1, "aŋgɔm")
            .form(Tense::Future, Actor::P3, "amis")
            .build();

        assert_eq!(v.remote_past(), ["amɔm", "", "", "", "", ""]);
        assert_eq!(v.recent_past(), ["aŋgɔm", "", "", "", "", ""]);
        assert_eq!(v.future(), ["aminim", "", "", "", "", "amis"]);
        assert_eq!(v.citation(), "aminim");
        assert_eq!(v.to_string(), "Kovol verb: aminim, \"to speak\"");
    }

    #[test]
    fn all_conjugations_follows_slot_order() {
        let v = VerbRecord::builder("to put")
            .tense(
                Tense::RemotePast,
                ["pigɔm", "pigɔŋ", "pigɔt", "pigomuŋg", "pigomwa", "pigɛmind"],
            )
            .singular_imperative("pigu")
            .plural_imperative("pigas")
            .build();

        let all = v.all_conjugations();
        assert_eq!(all.len(), 20);
        assert_eq!(all[0], "pigɔm");
        assert_eq!(all[5], "pigɛmind");
        assert_eq!(all[18], "pigu");
        assert_eq!(all[19], "pigas");
        for (slot, form) in Slot::ORDER.iter().zip(all) {
            assert_eq!(v.slot(*slot), form);
        }
    }

    #[test]
    fn slot_names_round_trip_through_strings() {
        for slot in Slot::ORDER {
            let name = slot.to_string();
            assert_eq!(name.parse::<Slot>().unwrap(), slot);
        }
        assert_eq!(
            Slot::new(Tense::Future, Actor::S2).to_string(),
            "future_2s"
        );
        assert!("future_4s".parse::<Slot>().is_err());
    }

    #[test]
    fn slot_ordering_matches_order_constant() {
        let mut sorted = Slot::ORDER;
        sorted.sort();
        assert_eq!(sorted, Slot::ORDER);
    }

    #[test]
    fn tense_accepts_sheet_labels() {
        assert_eq!("Remote Past".parse::<Tense>().unwrap(), Tense::RemotePast);
        assert_eq!("recent_past".parse::<Tense>().unwrap(), Tense::RecentPast);
        assert_eq!(" FUTURE".parse::<Tense>().unwrap(), Tense::Future);
        assert!("past".parse::<Tense>().is_err());
    }

    #[test]
    fn builder_slot_fills_imperatives() {
        let v = VerbRecord::builder("to put")
            .slot(Slot::SingularImperative, "pigu")
            .slot(Slot::new(Tense::Future, Actor::S1), "piginim")
            .build();
        assert_eq!(v.imperatives(), ["pigu", ""]);
        assert_eq!(v.citation(), "piginim");
    }

    #[test]
    fn actor_parsing_is_case_insensitive() {
        assert_eq!("1S".parse::<Actor>().unwrap(), Actor::S1);
        assert_eq!(" 3p ".parse::<Actor>().unwrap(), Actor::P3);
        assert!("4s".parse::<Actor>().is_err());
    }

    #[test]
    fn record_serializes_with_slot_names() {
        let v = VerbRecord::builder("to jab")
            .form(Tense::Future, Actor::P3, "asis")
            .author("SS")
            .build();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["english"], "to jab");
        assert_eq!(json["paradigm"][2][5], "asis");
        assert_eq!(json["origin"]["kind"], "attested");

        let back: VerbRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }
}
