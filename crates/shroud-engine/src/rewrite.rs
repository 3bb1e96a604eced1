use shroud_core::types::{Mapping, TaggedSpan};

/// Replace every span with its tag, back to front so earlier offsets stay
/// valid. Spans must not overlap.
pub fn rewrite(text: &str, spans: &[TaggedSpan]) -> String {
    let mut ordered: Vec<&TaggedSpan> = spans.iter().collect();
    ordered.sort_by(|a, b| b.span.start.cmp(&a.span.start));

    let mut result = text.to_string();
    for tagged in ordered {
        let (start, end) = (tagged.span.start, tagged.span.end);
        if end <= result.len() && result.is_char_boundary(start) && result.is_char_boundary(end) {
            result.replace_range(start..end, &tagged.tag.to_string());
        }
    }
    result
}

/// Put original values back in place of their tags. Longer tags go first so
/// `[PERSON_10]` is restored before `[PERSON_1]`.
pub fn unmask(masked: &str, mapping: &Mapping) -> String {
    let mut entries: Vec<(String, &str)> = mapping
        .iter()
        .map(|(tag, original)| (tag.to_string(), original))
        .collect();
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

    let mut result = masked.to_string();
    for (tag, original) in entries {
        result = result.replace(&tag, original);
    }
    result
}
