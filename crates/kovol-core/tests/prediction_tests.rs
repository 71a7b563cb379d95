//! End-to-end prediction and comparison tests

use kovol_core::predict::tables;
use kovol_core::{
    compare, extract_root_a, extract_root_b, predict, AnchorB, AnchorForms, AnchorsA, Root,
    Ruleset, RulesetA, RulesetB, RulesetKind, Slot, Tense, VerbRecord,
};
use pretty_assertions::assert_eq;

/// Attested "to put", as transcribed in the field
fn attested_pig() -> VerbRecord {
    VerbRecord::builder("to put")
        .tense(
            Tense::RemotePast,
            ["pigɔm", "pigɔŋ", "pigɔt", "pigomuŋg", "pigomwa", "pigɛmind"],
        )
        .tense(
            Tense::RecentPast,
            ["pigɔm", "pigɔŋ", "pige", "pigɔŋg", "pigima", "pigɔnd"],
        )
        .tense(
            Tense::Future,
            ["piginim", "piginiŋ ig", "pigiŋ", "pigug", "pigwa ig", "pigis"],
        )
        .singular_imperative("pigu")
        .plural_imperative("pigas")
        .tpi("putim")
        .build()
}

#[test]
fn test_every_prediction_has_twenty_forms() {
    let a = RulesetA::predict(&AnchorsA::new("asɔm", "asogɔm"), "to jab").unwrap();
    let b = RulesetB::predict(&AnchorB::new("asis"), "to jab").unwrap();

    for record in [&a, &b] {
        let all = record.all_conjugations();
        assert_eq!(all.len(), Slot::ORDER.len());
        assert!(all.iter().all(|form| !form.is_empty()), "{}", record);
    }
}

#[test]
fn test_comparison_with_self_is_empty() {
    let forms = AnchorForms {
        remote_past_1s: Some("amɔm".into()),
        recent_past_1s: Some("aŋgɔm".into()),
        future_3p: Some("amis".into()),
    };
    for kind in [RulesetKind::A, RulesetKind::B] {
        let record = predict(kind, &forms, "to speak").unwrap();
        assert!(compare(&record, &record).is_empty());
    }
}

#[test]
fn test_root_extraction() {
    assert_eq!(extract_root_a("asɔm", "asogɔm").unwrap().as_str(), "aso");
    assert_eq!(extract_root_b("asis").unwrap().as_str(), "as");
}

#[test]
fn test_ruleset_b_end_to_end() {
    let v = RulesetB::predict(&AnchorB::new("amis"), "to speak").unwrap();
    assert_eq!(
        v.future(),
        ["aminim", "aminiŋ", "amiŋ", "amug", "amwa", "amis"]
    );
    assert_eq!(v.remote_past()[0], "amom");
    assert_eq!(
        v.recent_past(),
        ["aŋgom", "aŋgoŋ", "aŋge", "amoŋg", "aŋgama", "aŋgond"]
    );
    assert_eq!(v.citation(), "amis");
}

#[test]
fn test_ruleset_a_end_to_end() {
    let attested = attested_pig();
    let anchors = AnchorForms::from_record(&attested).for_a().unwrap();

    let mut predicted = RulesetA::predict(&anchors, attested.english()).unwrap();
    assert_eq!(predicted.future()[0], "piginim");
    assert_eq!(predicted.root(), Some("pig"));

    let errors = predicted.compare_with(&attested);
    assert!(errors.is_empty(), "{:?}", errors);
    assert!(predicted.errors().is_empty());
}

#[test]
fn test_uncertain_marker_is_ignored() {
    let predicted = RulesetA::predict(&AnchorsA::new("pigɔm", "pigɔm"), "to put").unwrap();
    let attested = attested_pig();
    assert_eq!(attested.future()[1], "piginiŋ ig");

    let errors = compare(&predicted, &attested);
    assert!(!errors.contains_key(&Slot::new(Tense::Future, kovol_core::Actor::S2)));
    assert!(!errors.contains_key(&Slot::new(Tense::Future, kovol_core::Actor::P2)));
}

#[test]
fn test_comparison_is_replaced_whole() {
    let mut predicted = RulesetA::predict(&AnchorsA::new("pigɔm", "pigɔm"), "to put").unwrap();
    let wrong = VerbRecord::builder("to put").build();

    assert_eq!(predicted.compare_with(&wrong).len(), 20);
    assert!(predicted.compare_with(&attested_pig()).is_empty());
}

#[test]
fn test_vowel_final_roots_never_double_their_vowel() {
    // Roots that fall through to the default branch of every ruleset A table
    for name in ["aso", "kɔlo", "pɛlɛ", "sine"] {
        let root = Root::new(name).unwrap();
        let last = root.last_char().unwrap();
        let doubled = format!("{}{}", last, last);

        let mut forms: Vec<String> = Vec::new();
        forms.extend(tables::a::FUTURE.generate(&root));
        forms.extend(tables::a::RECENT_PAST.generate(&root));
        forms.extend(tables::a::REMOTE_PAST.generate(&root));
        forms.extend(tables::a::IMPERATIVE.generate(&root));

        for form in forms {
            assert!(!form.contains(&doubled), "{} -> {}", name, form);
        }
    }
}
