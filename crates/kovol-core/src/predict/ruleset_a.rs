//! Ruleset A
//!
//! Predicts a paradigm from the remote past 1s and recent past 1s forms.
//! Suffix choice is conditioned mostly on the final segment of the root;
//! vowel-final roots lose their final vowel before most suffixes.

use super::rules::{slot, Cells, Rule, TenseRules};
use super::Ruleset;
use crate::paradigm::{Actor, Tense, VerbRecord};
use crate::phonology::{self, is_vowel};
use crate::root::{self, Root, RootError};

fn drop_final(stem: &str) -> String {
    phonology::drop_last(stem, 1).to_string()
}

/// Every slot except future 2p, which attaches "-wa" to the full root
const FUTURE_REDUCED: [usize; 5] = [slot::S1, slot::S2, slot::S3, slot::P1, slot::P3];

/// Every recent past slot except 1p, which has its own stem
const RECENT_PAST_REDUCED: [usize; 5] = [slot::S1, slot::S2, slot::S3, slot::P2, slot::P3];

pub static FUTURE: TenseRules<6> = TenseRules {
    name: "future",
    base: ["inim", "iniŋ", "iŋ", "ug", "wa", "is"],
    stages: &[
        &[
            Rule {
                name: "final a",
                when: |r: &Root| r.ends_with("a"),
                apply: |_, c: &mut Cells<6>| {
                    c.set_suffixes(&["anim", "aniŋ", "aŋ", "ug", "wa", "is"])
                },
            },
            Rule {
                name: "final l",
                when: |r: &Root| r.ends_with("l"),
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.set_suffixes(&["ɛnim", "ɛniŋ", "aŋ", "olug", "wa", "ɛlis"]);
                    c.map_stems(&FUTURE_REDUCED, |_| r.drop_last(2));
                },
            },
        ],
        &[Rule {
            name: "vowel-final",
            when: Root::ends_in_vowel,
            apply: |_, c: &mut Cells<6>| c.map_stems(&FUTURE_REDUCED, drop_final),
        }],
    ],
};

pub static RECENT_PAST: TenseRules<6> = TenseRules {
    name: "recent_past",
    base: ["gɔm", "gɔŋ", "ge", "ɔŋg", "gɔma", "gɔnd"],
    stages: &[
        &[
            Rule {
                name: "final u or um",
                when: |r: &Root| r.ends_with("u") || r.ends_with("um"),
                apply: |_, c: &mut Cells<6>| {
                    c.set_suffixes(&["gum", "gɔŋ", "ge", "uŋg", "guma", "gund"])
                },
            },
            Rule {
                name: "last vowel i",
                when: |r: &Root| r.last_vowel() == Some('i'),
                apply: |_, c: &mut Cells<6>| c.set_suffix(slot::P2, "gima"),
            },
            Rule {
                name: "final a or l",
                when: |r: &Root| r.ends_with("a") || r.ends_with("l"),
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.set_suffixes(&["gam", "gɔŋ", "ga", "aŋg", "gama", "gand"]);
                    // single syllable roots in "l" replace their vowel
                    if r.ends_with("l") && r.vowel_count() == 1 {
                        c.map_all_stems(|s| s.replace('ɔ', "a"));
                    }
                },
            },
        ],
        &[
            Rule {
                name: "final m",
                when: |r: &Root| r.ends_with("m") && !r.ends_with("um"),
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.map_stems(&RECENT_PAST_REDUCED, |s| format!("{}ŋ", drop_final(s)));
                    c.set_stem(slot::P1, r.as_str());
                },
            },
            Rule {
                name: "final l",
                when: |r: &Root| r.ends_with("l"),
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.map_stems(&RECENT_PAST_REDUCED, drop_final);
                    c.set_stem(slot::P1, r.drop_last(2));
                },
            },
            Rule {
                name: "consonant-final",
                when: Root::ends_in_consonant,
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.map_stems(&RECENT_PAST_REDUCED, drop_final);
                    c.set_stem(slot::P1, r.as_str());
                },
            },
            Rule {
                name: "vowel-final",
                when: Root::ends_in_vowel,
                apply: |r: &Root, c: &mut Cells<6>| c.set_stem(slot::P1, r.drop_last(1)),
            },
        ],
    ],
};

/// Root ends in "u" followed by a consonant
fn ends_in_u_consonant(root: &Root) -> bool {
    let mut tail = root.last_two().unwrap_or_default().chars();
    matches!((tail.next(), tail.next()), (Some('u'), Some(c)) if !is_vowel(c))
}

pub static REMOTE_PAST: TenseRules<6> = TenseRules {
    name: "remote_past",
    base: ["ɔm", "ɔŋ", "ɔt", "omuŋg", "omwa", "ɛmind"],
    stages: &[
        &[
            Rule {
                name: "final u",
                when: |r: &Root| r.ends_with("u"),
                apply: |_, c: &mut Cells<6>| {
                    c.set_suffixes(&["um", "uŋ", "ut", "umuŋg", "umwa", "umind"])
                },
            },
            Rule {
                name: "final u+C",
                when: ends_in_u_consonant,
                apply: |_, c: &mut Cells<6>| {
                    c.set_suffix(slot::S1, "um");
                    c.set_suffix(slot::S2, "uŋ");
                    c.set_suffix(slot::S3, "ut");
                },
            },
        ],
        &[Rule {
            name: "vowel-final",
            when: Root::ends_in_vowel,
            apply: |_, c: &mut Cells<6>| c.map_all_stems(drop_final),
        }],
    ],
};

pub static IMPERATIVE: TenseRules<2> = TenseRules {
    name: "imperative",
    base: ["e", "as"],
    stages: &[
        &[Rule {
            name: "final g",
            when: |r: &Root| r.ends_with("g"),
            apply: |_, c: &mut Cells<2>| c.set_suffix(slot::SG, "u"),
        }],
        &[Rule {
            name: "vowel-final",
            when: Root::ends_in_vowel,
            apply: |_, c: &mut Cells<2>| c.map_all_stems(drop_final),
        }],
    ],
};

/// Anchors for ruleset A
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorsA {
    pub remote_past_1s: String,
    pub recent_past_1s: String,
}

impl AnchorsA {
    pub fn new(remote_past_1s: impl Into<String>, recent_past_1s: impl Into<String>) -> Self {
        Self {
            remote_past_1s: remote_past_1s.into(),
            recent_past_1s: recent_past_1s.into(),
        }
    }
}

/// Ruleset A: remote past and recent past 1s anchors
#[derive(Debug, Clone, Copy, Default)]
pub struct RulesetA;

impl Ruleset for RulesetA {
    type Anchors = AnchorsA;

    const KIND: super::RulesetKind = super::RulesetKind::A;

    fn extract_root(anchors: &AnchorsA) -> Result<Root, RootError> {
        root::extract_root_a(&anchors.remote_past_1s, &anchors.recent_past_1s)
    }

    fn future(root: &Root) -> [String; 6] {
        FUTURE.generate(root)
    }

    fn recent_past(root: &Root) -> [String; 6] {
        RECENT_PAST.generate(root)
    }

    fn remote_past(root: &Root) -> [String; 6] {
        REMOTE_PAST.generate(root)
    }

    fn imperative(root: &Root) -> [String; 2] {
        IMPERATIVE.generate(root)
    }

    fn seed_anchors(record: &mut VerbRecord, anchors: &AnchorsA) {
        record.set_form(Tense::RemotePast, Actor::S1, anchors.remote_past_1s.as_str());
        record.set_form(Tense::RecentPast, Actor::S1, anchors.recent_past_1s.as_str());
    }
}
