//! Root extraction from anchor forms
//!
//! Each ruleset derives the root differently:
//!
//! - **A** strips the default 1s suffix from a remote past form (`-ɔm`, two
//!   characters) and a recent past form (`-gɔm`, three characters) and keeps
//!   the longer residue. Ties go to the remote past residue.
//! - **B** strips the default 3p suffix (`-is`, two characters) from a future
//!   form.
//!
//! Anchors shorter than the suffix they carry are rejected, as are anchors
//! that leave nothing behind once the suffix is gone.

use thiserror::Error;

use crate::paradigm::Slot;
use crate::phonology::{self, Segment};

/// Characters stripped from the remote past 1s anchor
pub const REMOTE_PAST_1S_SUFFIX_LEN: usize = 2;
/// Characters stripped from the recent past 1s anchor
pub const RECENT_PAST_1S_SUFFIX_LEN: usize = 3;
/// Characters stripped from the future 3p anchor
pub const FUTURE_3P_SUFFIX_LEN: usize = 2;

/// Root extraction errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RootError {
    #[error("anchor '{anchor}' for {slot} is too short: need more than {required} characters, found {found}")]
    AnchorTooShort {
        slot: Slot,
        anchor: String,
        required: usize,
        found: usize,
    },

    #[error("anchors leave an empty root")]
    EmptyRoot,

    #[error("missing anchor form for {0}")]
    MissingAnchor(Slot),
}

/// A verb root.
///
/// Only constructed by extraction, so it is never empty. All phonological
/// queries used by the rule tables hang off this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root(String);

impl Root {
    pub fn new(root: impl Into<String>) -> Result<Self, RootError> {
        let root = root.into();
        if root.is_empty() {
            return Err(RootError::EmptyRoot);
        }
        Ok(Self(root))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn final_segment(&self) -> Option<Segment> {
        phonology::final_segment(&self.0)
    }

    pub fn ends_in_vowel(&self) -> bool {
        self.final_segment() == Some(Segment::Vowel)
    }

    pub fn ends_in_consonant(&self) -> bool {
        self.final_segment() == Some(Segment::Consonant)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }

    pub fn last_char(&self) -> Option<char> {
        phonology::last_char(&self.0)
    }

    pub fn last_two(&self) -> Option<&str> {
        phonology::last_two_chars(&self.0)
    }

    pub fn last_vowel(&self) -> Option<char> {
        phonology::last_vowel(&self.0)
    }

    pub fn nth_vowel(&self, n: isize) -> Option<char> {
        phonology::nth_vowel(&self.0, n)
    }

    pub fn vowels(&self) -> String {
        phonology::vowels(&self.0)
    }

    pub fn vowel_count(&self) -> usize {
        self.0.chars().filter(|c| phonology::is_vowel(*c)).count()
    }

    /// Root minus its final `n` characters
    pub fn drop_last(&self, n: usize) -> String {
        phonology::drop_last(&self.0, n).to_string()
    }

    /// Root with every occurrence of `from` replaced
    pub fn replace(&self, from: &str, to: &str) -> String {
        self.0.replace(from, to)
    }
}

impl std::fmt::Display for Root {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Root {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip `len` characters from the end of an anchor
fn strip_suffix(slot: Slot, anchor: &str, len: usize) -> Result<&str, RootError> {
    let found = anchor.chars().count();
    if found <= len {
        return Err(RootError::AnchorTooShort {
            slot,
            anchor: anchor.to_string(),
            required: len,
            found,
        });
    }
    Ok(phonology::drop_last(anchor, len))
}

/// Ruleset A: the longer of the remote past and recent past residues
pub fn extract_root_a(remote_past_1s: &str, recent_past_1s: &str) -> Result<Root, RootError> {
    use crate::paradigm::{Actor, Tense};

    let remote = strip_suffix(
        Slot::new(Tense::RemotePast, Actor::S1),
        remote_past_1s,
        REMOTE_PAST_1S_SUFFIX_LEN,
    )?;
    let recent = strip_suffix(
        Slot::new(Tense::RecentPast, Actor::S1),
        recent_past_1s,
        RECENT_PAST_1S_SUFFIX_LEN,
    )?;

    let root = if recent.chars().count() > remote.chars().count() {
        recent
    } else {
        remote
    };
    tracing::debug!(remote, recent, root, "extracted ruleset A root");
    Root::new(root)
}

/// Ruleset B: the future 3p form minus its suffix
pub fn extract_root_b(future_3p: &str) -> Result<Root, RootError> {
    use crate::paradigm::{Actor, Tense};

    let root = strip_suffix(
        Slot::new(Tense::Future, Actor::P3),
        future_3p,
        FUTURE_3P_SUFFIX_LEN,
    )?;
    tracing::debug!(future_3p, root, "extracted ruleset B root");
    Root::new(root)
}
