use std::collections::HashMap;

use proptest::prelude::*;
use shroud_core::types::{CanonicalType, PersonAliasIndex, RecognizedEntity};
use shroud_engine::{normalize, MaskingEngine};

fn candidate() -> impl Strategy<Value = (usize, usize, &'static str, f64)> {
    (
        0usize..80,
        1usize..20,
        prop::sample::select(vec!["person", "iban", "sort_code", "date", "city", "bogus"]),
        0.0f64..1.0,
    )
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "John", "Smith", "met", "at", "020 7946 0958", "a@b.co", "SW1A 1AA", "12/03/1990",
            "DOB", ",", "\n", "10.0.0.1", "Zoë", "GB29NWBK60161331926819", "20-45-67",
        ]),
        0..16,
    )
    .prop_map(|words| words.join(" "))
}

fn entities(raw: &[(usize, usize, &'static str, f64)]) -> Vec<RecognizedEntity> {
    raw.iter()
        .map(|(start, len, label, score)| RecognizedEntity::new(*start, start + len, *label, *score))
        .collect()
}

proptest! {
    #[test]
    fn masking_is_deterministic(text in text_strategy(), raw in prop::collection::vec(candidate(), 0..8)) {
        let engine = MaskingEngine::new();
        let ents = entities(&raw);
        let a = engine.mask_entities(&text, &ents, &mut PersonAliasIndex::new());
        let b = engine.mask_entities(&text, &ents, &mut PersonAliasIndex::new());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn spans_are_valid_and_disjoint(text in text_strategy(), raw in prop::collection::vec(candidate(), 0..8)) {
        let out = MaskingEngine::new().mask_entities(&text, &entities(&raw), &mut PersonAliasIndex::new());
        for pair in out.spans.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
        for tagged in &out.spans {
            prop_assert!(tagged.span.start < tagged.span.end && tagged.span.end <= text.len());
            prop_assert_eq!(&text[tagged.span.start..tagged.span.end], tagged.span.original.as_str());
            prop_assert!((0.0..=1.0).contains(&tagged.span.score));
        }
    }

    #[test]
    fn text_outside_spans_survives(text in text_strategy(), raw in prop::collection::vec(candidate(), 0..8)) {
        let out = MaskingEngine::new().mask_entities(&text, &entities(&raw), &mut PersonAliasIndex::new());
        let mut rebuilt = String::new();
        let mut cursor = 0;
        for tagged in &out.spans {
            rebuilt.push_str(&text[cursor..tagged.span.start]);
            rebuilt.push_str(&tagged.tag.to_string());
            cursor = tagged.span.end;
        }
        rebuilt.push_str(&text[cursor..]);
        prop_assert_eq!(rebuilt, out.masked_text);
    }

    #[test]
    fn equal_values_get_equal_tags(text in text_strategy(), raw in prop::collection::vec(candidate(), 0..8)) {
        let out = MaskingEngine::new().mask_entities(&text, &entities(&raw), &mut PersonAliasIndex::new());
        let mut seen: HashMap<(CanonicalType, String), String> = HashMap::new();
        for tagged in out.spans.iter().filter(|t| t.span.label != CanonicalType::Person) {
            let key = (tagged.span.label, normalize(tagged.span.label, &tagged.span.original));
            let tag = tagged.tag.to_string();
            if let Some(previous) = seen.insert(key, tag.clone()) {
                prop_assert_eq!(previous, tag);
            }
        }
    }

    #[test]
    fn card_checksum_is_monotonic(base in 0.0f64..1.0) {
        let valid = shroud_engine::adjust_score(CanonicalType::CreditCardNumber, "4111111111111111", base);
        let invalid = shroud_engine::adjust_score(CanonicalType::CreditCardNumber, "4111111111111112", base);
        prop_assert!(valid > invalid);
    }
}
