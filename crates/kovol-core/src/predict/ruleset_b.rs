//! Ruleset B
//!
//! Predicts a paradigm from the future 3p form alone. Conditions key on the
//! identity of the last root vowel (`ɛ`, `u`, `i`), on a final `ɛl`, and on
//! final `m` and `g`. Roots are never reduced for being vowel-final; the
//! nasal and velar endings reshape the suffixes instead.
//!
//! Future 3p is the anchor and is never generated.

use super::rules::{slot, Cells, Rule, TenseRules};
use super::Ruleset;
use crate::paradigm::{Actor, Tense, VerbRecord};
use crate::phonology;
use crate::root::{self, Root, RootError};

fn last_vowel_is(root: &Root, v: char) -> bool {
    root.last_vowel() == Some(v)
}

/// Final "ɛl" preceded somewhere by a "u"
fn ul_harmony(root: &Root) -> bool {
    root.last_two() == Some("ɛl") && root.nth_vowel(-2) == Some('u')
}

fn drop_first(suffix: &str, n: usize) -> String {
    phonology::drop_first(suffix, n).to_string()
}

pub static FUTURE: TenseRules<6> = TenseRules {
    name: "future",
    base: ["ɛnim", "ɛniŋ", "iŋ", "ug", "wa", "is"],
    stages: &[&[
        Rule {
            name: "last vowel i or u, or final m",
            when: |r: &Root| last_vowel_is(r, 'i') || last_vowel_is(r, 'u') || r.ends_with("m"),
            apply: |_, c: &mut Cells<6>| {
                c.set_suffix(slot::S1, "inim");
                c.set_suffix(slot::S2, "iniŋ");
            },
        },
        Rule {
            name: "final ɛl",
            when: |r: &Root| r.ends_with("ɛl"),
            apply: |_, c: &mut Cells<6>| {
                c.set_suffix(slot::S1, "im");
                c.set_suffix(slot::S2, "iŋ");
                c.set_suffix(slot::S3, "aŋ");
            },
        },
        Rule {
            name: "last vowel ɛ",
            when: |r: &Root| last_vowel_is(r, 'ɛ'),
            apply: |_, c: &mut Cells<6>| c.map_stems(&[slot::P1, slot::P2], |s| s.replace('ɛ', "o")),
        },
    ]],
};

pub static REMOTE_PAST: TenseRules<6> = TenseRules {
    name: "remote_past",
    base: ["om", "oŋ", "ot", "omuŋg", "omwa", "ɛmind"],
    stages: &[&[
        Rule {
            name: "final ɛl after u",
            when: ul_harmony,
            apply: |_, c: &mut Cells<6>| c.map_all_stems(|s| s.replace("ɛl", "ul")),
        },
        Rule {
            name: "last vowel ɛ",
            when: |r: &Root| last_vowel_is(r, 'ɛ'),
            apply: |_, c: &mut Cells<6>| c.map_all_stems(|s| s.replace('ɛ', "o")),
        },
        Rule {
            name: "last vowel u",
            when: |r: &Root| last_vowel_is(r, 'u'),
            apply: |_, c: &mut Cells<6>| c.map_all_suffixes(|s| s.replace('o', "u")),
        },
    ]],
};

pub static RECENT_PAST: TenseRules<6> = TenseRules {
    name: "recent_past",
    base: ["ogom", "ogoŋ", "ɛge", "oŋg", "agama", "ogond"],
    stages: &[
        &[
            Rule {
                name: "final ɛl after u",
                when: ul_harmony,
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.map_all_stems(|_| r.drop_last(2));
                    c.set_suffixes(&["ugam", "ugoŋ", "uga", "aŋg", "uguma", "ugand"]);
                },
            },
            Rule {
                name: "final ɛl",
                when: |r: &Root| r.ends_with("ɛl"),
                apply: |r: &Root, c: &mut Cells<6>| {
                    let stem = r.drop_last(2);
                    c.map_all_stems(|_| stem.replace('ɛ', "a"));
                    c.set_stem(slot::S2, stem.replace('ɛ', "o"));
                    c.set_suffixes(&["agam", "ogoŋ", "aga", "aŋg", "agama", "agand"]);
                },
            },
            Rule {
                name: "last vowel ɛ",
                when: |r: &Root| last_vowel_is(r, 'ɛ'),
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.map_stems(&[slot::S1, slot::S2, slot::P1, slot::P3], |s| {
                        s.replace('ɛ', "o")
                    });
                    c.set_stem(slot::P2, r.replace("ɛ", "a"));
                },
            },
            Rule {
                name: "last vowel u",
                when: |r: &Root| last_vowel_is(r, 'u'),
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.set_suffixes(&["ugum", "ugoŋ", "uge", "uŋg", "uguma", "ugund"]);
                    if r.ends_with("m") {
                        c.set_suffix(slot::S1, "ogom");
                    }
                },
            },
            Rule {
                name: "last vowel i",
                when: |r: &Root| last_vowel_is(r, 'i'),
                apply: |_, c: &mut Cells<6>| {
                    c.set_suffix(slot::S1, "igom");
                    c.set_suffix(slot::S2, "igoŋ");
                    c.set_suffix(slot::S3, "ige");
                    c.set_suffix(slot::P2, "igima");
                    c.set_suffix(slot::P3, "igond");
                },
            },
        ],
        &[
            Rule {
                name: "final um",
                when: |r: &Root| r.ends_with("um"),
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.map_all_suffixes(|s| drop_first(s, 1));
                    c.map_all_stems(|s| phonology::drop_last(s, 1).to_string());
                    c.set_stem(slot::P1, r.as_str());
                    c.set_suffix(slot::P1, "uŋg");
                },
            },
            Rule {
                name: "final ɛm",
                when: |r: &Root| r.ends_with("ɛm"),
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.map_all_suffixes(|s| drop_first(s, 1));
                    c.map_all_stems(|s| phonology::drop_last(s, 1).to_string());
                    c.set_stem(slot::P1, r.as_str());
                    c.set_suffix(slot::P1, "oŋg");
                },
            },
            Rule {
                name: "final m",
                when: |r: &Root| r.ends_with("m"),
                apply: |r: &Root, c: &mut Cells<6>| {
                    c.map_all_suffixes(|s| drop_first(s, 1));
                    c.map_all_stems(|s| format!("{}ŋ", phonology::drop_last(s, 1)));
                    c.set_stem(slot::P1, r.as_str());
                    c.set_suffix(slot::P1, "oŋg");
                },
            },
            Rule {
                name: "final g",
                when: |r: &Root| r.ends_with("g"),
                apply: |_, c: &mut Cells<6>| {
                    c.map_all_suffixes(|s| drop_first(s, 2));
                    c.set_suffix(slot::P1, "oŋg");
                },
            },
        ],
    ],
};

pub static IMPERATIVE: TenseRules<2> = TenseRules {
    name: "imperative",
    base: ["ɛ", "as"],
    stages: &[&[Rule {
        name: "final g",
        when: |r: &Root| r.ends_with("g"),
        apply: |r: &Root, c: &mut Cells<2>| {
            c.set_suffixes(&["u", "was"]);
            if last_vowel_is(r, 'ɛ') {
                c.map_all_stems(|s| s.replace('ɛ', "a"));
            }
        },
    }]],
};

/// Anchor for ruleset B
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorB {
    pub future_3p: String,
}

impl AnchorB {
    pub fn new(future_3p: impl Into<String>) -> Self {
        Self {
            future_3p: future_3p.into(),
        }
    }
}

/// Ruleset B: future 3p anchor
#[derive(Debug, Clone, Copy, Default)]
pub struct RulesetB;

impl Ruleset for RulesetB {
    type Anchors = AnchorB;

    const KIND: super::RulesetKind = super::RulesetKind::B;

    fn extract_root(anchor: &AnchorB) -> Result<Root, RootError> {
        root::extract_root_b(&anchor.future_3p)
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

    fn seed_anchors(record: &mut VerbRecord, anchor: &AnchorB) {
        record.set_form(Tense::Future, Actor::P3, anchor.future_3p.as_str());
    }
}
