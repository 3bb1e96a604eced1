//! Golden masking cases from `test-fixtures/golden/masking`.

use std::collections::BTreeMap;

use shroud_core::types::{PersonAliasIndex, RecognizedEntity};
use shroud_engine::{unmask, MaskingEngine};
use test_fixtures::load_masking_cases;

#[test]
fn golden_masking_cases() {
    let engine = MaskingEngine::new();
    let cases = load_masking_cases();
    assert!(cases.len() >= 5, "expected at least 5 golden cases, found {}", cases.len());

    for case in cases {
        let entities: Vec<RecognizedEntity> = case
            .entities
            .iter()
            .map(|e| RecognizedEntity {
                start: e.start,
                end: e.end,
                label: e.label.clone(),
                score: e.score,
            })
            .collect();
        let out = engine.mask_entities(&case.text, &entities, &mut PersonAliasIndex::new());

        assert_eq!(
            out.masked_text, case.expected.masked_text,
            "case '{}': masked text mismatch",
            case.id
        );
        let mapping: BTreeMap<String, String> = out.mapping.to_string_map();
        assert_eq!(mapping, case.expected.mapping, "case '{}': mapping mismatch", case.id);
        let tags: Vec<String> = out.spans.iter().map(|t| t.tag.to_string()).collect();
        assert_eq!(tags, case.expected.tags, "case '{}': tag sequence mismatch", case.id);

        assert_eq!(
            unmask(&out.masked_text, &out.mapping),
            restore_first_seen(&case.text, &out),
            "case '{}': unmask mismatch",
            case.id
        );
    }
}

/// Every span replaced by its tag's first-seen original: what unmasking
/// the masked text must produce.
fn restore_first_seen(text: &str, out: &shroud_core::MaskOutput) -> String {
    let mut result = text.to_string();
    for tagged in out.spans.iter().rev() {
        let original = out.mapping.get(&tagged.tag).unwrap_or_default();
        result.replace_range(tagged.span.start..tagged.span.end, original);
    }
    result
}
