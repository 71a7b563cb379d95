//! Phonological queries over a verb root
//!
//! Every query is a pure function of the root string and the fixed Kovol
//! vowel inventory. A root too short for the requested position yields
//! `None` rather than a fault: rule conditions are written as "the feature
//! is present and equal to X", so absence simply means "no match".
//!
//! All positions are counted in characters, never bytes. The phonetic
//! alphabet contains multi-byte symbols such as `ŋ`, `ɛ`, `ɔ` and `β`.
//!
//! # Example
//!
//! ```rust
//! use kovol_core::phonology::{last_vowel, nth_vowel, Segment, final_segment};
//!
//! assert_eq!(final_segment("aso"), Some(Segment::Vowel));
//! assert_eq!(last_vowel("pig"), Some('i'));
//! assert_eq!(nth_vowel("aso", -2), Some('a'));
//! assert_eq!(nth_vowel("aso", 5), None);
//! ```

use serde::{Deserialize, Serialize};

/// Phonetic vowels of Kovol.
///
/// Both `ɑ` and `a` are listed to tolerate transcription inconsistencies.
pub const VOWELS: [char; 9] = ['i', 'ɪ', 'e', 'ɛ', 'u', 'o', 'ɔ', 'ɑ', 'a'];

/// Phonetic consonants of Kovol.
pub const CONSONANTS: [char; 16] = [
    'p', 't', 'k', 'ʔ', 'b', 'd', 'g', 'm', 'n', 'ŋ', 'β', 's', 'r', 'l', 'w', 'j',
];

/// Broad class of a single segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Vowel,
    Consonant,
}

impl Segment {
    /// Classify a character. Anything outside the vowel set counts as a consonant.
    pub fn of(c: char) -> Self {
        if is_vowel(c) {
            Self::Vowel
        } else {
            Self::Consonant
        }
    }
}

#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Class of the final segment, or `None` for an empty root
pub fn final_segment(root: &str) -> Option<Segment> {
    last_char(root).map(Segment::of)
}

/// The vowel-only subsequence of the root
pub fn vowels(root: &str) -> String {
    root.chars().filter(|c| is_vowel(*c)).collect()
}

/// Rightmost vowel of the root
pub fn last_vowel(root: &str) -> Option<char> {
    root.chars().rev().find(|c| is_vowel(*c))
}

/// The n-th vowel of the root. Negative indices count from the end,
/// so `-1` is the last vowel and `-2` the one before it.
pub fn nth_vowel(root: &str, n: isize) -> Option<char> {
    let v: Vec<char> = root.chars().filter(|c| is_vowel(*c)).collect();
    let index = if n < 0 {
        v.len().checked_sub(n.unsigned_abs())?
    } else {
        n as usize
    };
    v.get(index).copied()
}

pub fn last_char(root: &str) -> Option<char> {
    root.chars().next_back()
}

pub fn last_two_chars(root: &str) -> Option<&str> {
    last_chars(root, 2)
}

/// The final `n` characters, or `None` when the root is shorter than `n`
pub fn last_chars(root: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some("");
    }
    root.char_indices()
        .rev()
        .nth(n - 1)
        .map(|(start, _)| &root[start..])
}

/// Drop the final `n` characters. Saturates to the empty string.
pub fn drop_last(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((end, _)) => &s[..end],
        None => "",
    }
}

/// Drop the first `n` characters. Saturates to the empty string.
pub fn drop_first(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((start, _)) => &s[start..],
        None => "",
    }
}
