//! Ordered rule tables
//!
//! A tense is generated from a base suffix table and a sequence of stages.
//! Each stage is an ordered list of rules; the first rule whose condition
//! holds on the root fires, and the rest of that stage is skipped. A stage
//! where nothing matches leaves the forms untouched, which is the "default"
//! branch of that stage.
//!
//! Rules act on [`Cells`]: one (stem, suffix) pair per slot. Stems start as
//! the full root and suffixes as the base table; the rendered form is stem
//! followed by suffix.

use crate::root::Root;

/// One suffix per slot
pub type SuffixTable<const N: usize> = [&'static str; N];

/// A single conditioned rewrite of the cells
pub struct Rule<const N: usize> {
    /// Short label, used in logs and tests
    pub name: &'static str,
    pub when: fn(&Root) -> bool,
    pub apply: fn(&Root, &mut Cells<N>),
}

/// A stage: first matching rule wins
pub type Stage<const N: usize> = &'static [Rule<N>];

/// Everything needed to generate one tense (or the imperatives)
pub struct TenseRules<const N: usize> {
    pub name: &'static str,
    pub base: SuffixTable<N>,
    pub stages: &'static [Stage<N>],
}

impl<const N: usize> TenseRules<N> {
    /// The rule each stage would fire for this root, `None` where a stage
    /// falls through to its default
    pub fn select(&self, root: &Root) -> Vec<Option<&'static str>> {
        self.stages
            .iter()
            .map(|stage| stage.iter().find(|r| (r.when)(root)).map(|r| r.name))
            .collect()
    }

    pub fn generate(&self, root: &Root) -> [String; N] {
        let mut cells = Cells::new(root, &self.base);
        for stage in self.stages {
            if let Some(rule) = stage.iter().find(|r| (r.when)(root)) {
                tracing::trace!(tense = self.name, rule = rule.name, %root, "rule fired");
                (rule.apply)(root, &mut cells);
            }
        }
        cells.render()
    }
}

/// Working (stem, suffix) pairs for one tense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cells<const N: usize> {
    stems: [String; N],
    suffixes: [String; N],
}

impl<const N: usize> Cells<N> {
    pub fn new(root: &Root, base: &SuffixTable<N>) -> Self {
        Self {
            stems: std::array::from_fn(|_| root.as_str().to_string()),
            suffixes: base.map(str::to_string),
        }
    }

    pub fn set_stem(&mut self, i: usize, stem: impl Into<String>) {
        self.stems[i] = stem.into();
    }

    pub fn set_suffix(&mut self, i: usize, suffix: impl Into<String>) {
        self.suffixes[i] = suffix.into();
    }

    /// Replace every suffix
    pub fn set_suffixes(&mut self, table: &SuffixTable<N>) {
        self.suffixes = table.map(str::to_string);
    }

    /// Rewrite the stems at `slots`, reading each current stem
    pub fn map_stems(&mut self, slots: &[usize], f: impl Fn(&str) -> String) {
        for &i in slots {
            self.stems[i] = f(&self.stems[i]);
        }
    }

    /// Rewrite every stem
    pub fn map_all_stems(&mut self, f: impl Fn(&str) -> String) {
        for stem in &mut self.stems {
            *stem = f(stem);
        }
    }

    /// Rewrite every suffix
    pub fn map_all_suffixes(&mut self, f: impl Fn(&str) -> String) {
        for suffix in &mut self.suffixes {
            *suffix = f(suffix);
        }
    }

    pub fn render(&self) -> [String; N] {
        std::array::from_fn(|i| format!("{}{}", self.stems[i], self.suffixes[i]))
    }
}

/// Indices for the six tensed slots
pub mod slot {
    use crate::paradigm::Actor;

    pub const S1: usize = Actor::S1 as usize;
    pub const S2: usize = Actor::S2 as usize;
    pub const S3: usize = Actor::S3 as usize;
    pub const P1: usize = Actor::P1 as usize;
    pub const P2: usize = Actor::P2 as usize;
    pub const P3: usize = Actor::P3 as usize;

    pub const ALL: [usize; 6] = [S1, S2, S3, P1, P2, P3];

    /// Singular and plural imperative
    pub const SG: usize = 0;
    pub const PL: usize = 1;
}
