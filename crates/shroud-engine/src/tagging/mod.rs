//! Placeholder assignment with person aliasing and alias backfill.

pub mod aliases;

use std::collections::{BTreeMap, HashMap};

use shroud_core::types::{
    CanonicalType, Mapping, PersonAliasIndex, PlaceholderTag, ScoreTable, Span, SpanSource,
    TaggedSpan,
};
use shroud_observability::backfill_span;

use crate::normalize::normalize;
use crate::validators::adjust_score;

/// Per-run tag state. PERSON ordinals continue above any tag already held
/// by the threaded alias index.
pub struct TagAssigner<'a> {
    index: &'a mut PersonAliasIndex,
    alias_min_letters: usize,
    counters: BTreeMap<CanonicalType, u32>,
    by_value: HashMap<(CanonicalType, String), PlaceholderTag>,
    mapping: Mapping,
    scores: ScoreTable,
}

impl<'a> TagAssigner<'a> {
    pub fn new(index: &'a mut PersonAliasIndex, alias_min_letters: usize) -> Self {
        let mut counters = BTreeMap::new();
        let carried = index.max_ordinal();
        if carried > 0 {
            counters.insert(CanonicalType::Person, carried);
        }
        Self {
            index,
            alias_min_letters,
            counters,
            by_value: HashMap::new(),
            mapping: Mapping::new(),
            scores: ScoreTable::new(),
        }
    }

    fn mint(&mut self, label: CanonicalType) -> PlaceholderTag {
        let counter = self.counters.entry(label).or_insert(0);
        *counter += 1;
        PlaceholderTag::new(label, *counter)
    }

    /// Tag resolved spans in start order. Each returned span carries its
    /// validator-adjusted score.
    pub fn assign(&mut self, spans: Vec<Span>) -> Vec<TaggedSpan> {
        let mut tagged = Vec::with_capacity(spans.len());
        for span in spans {
            let adjusted = adjust_score(span.label, &span.original, span.score);
            let key = (span.label, normalize(span.label, &span.original));

            let carried = if span.label == CanonicalType::Person {
                self.index.lookup(&key.1)
            } else {
                None
            };
            let existing = carried.or_else(|| self.by_value.get(&key).copied());
            let tag = match existing {
                Some(tag) => tag,
                None => self.mint(span.label),
            };
            self.by_value.entry(key).or_insert(tag);

            if !self.mapping.contains(&tag) {
                let original = self
                    .index
                    .person(&tag)
                    .map_or(span.original.as_str(), |p| p.original.as_str())
                    .to_string();
                self.mapping.insert_first(tag, original);
            }
            self.scores.record_max(tag, adjusted);

            if span.label == CanonicalType::Person {
                for alias in aliases::alias_keys(&span.original, self.alias_min_letters) {
                    self.index.register(alias, tag);
                }
                self.index.record_person(tag, &span.original, adjusted);
            }

            tagged.push(TaggedSpan {
                span: span.with_score(adjusted),
                tag,
            });
        }
        tagged
    }

    /// Sweep the text for further mentions of known person aliases, longest
    /// alias first. Matches overlapping any existing span are skipped.
    /// Returns how many spans were added; `tagged` stays in start order.
    pub fn backfill(&mut self, text: &str, tagged: &mut Vec<TaggedSpan>) -> usize {
        let aliases: Vec<(String, PlaceholderTag)> = self
            .index
            .longest_first()
            .into_iter()
            .map(|(key, tag)| (key.to_string(), tag))
            .collect();
        let _span = backfill_span!(aliases.len()).entered();

        let mut added: Vec<TaggedSpan> = Vec::new();
        for (key, tag) in aliases {
            let Some(re) = aliases::alias_regex(&key) else {
                continue;
            };
            let score = self
                .scores
                .get(&tag)
                .or_else(|| self.index.person(&tag).map(|p| p.score))
                .unwrap_or(0.0);
            for m in re.find_iter(text) {
                let Some(span) = Span::from_text(
                    text,
                    m.start(),
                    m.end(),
                    CanonicalType::Person,
                    score,
                    SpanSource::Alias,
                ) else {
                    continue;
                };
                let clashes = tagged
                    .iter()
                    .chain(added.iter())
                    .any(|t| t.span.overlaps(&span));
                if clashes {
                    continue;
                }
                if !self.mapping.contains(&tag) {
                    let original = self
                        .index
                        .person(&tag)
                        .map_or(span.original.as_str(), |p| p.original.as_str())
                        .to_string();
                    self.mapping.insert_first(tag, original);
                }
                self.scores.record_max(tag, score);
                added.push(TaggedSpan { span, tag });
            }
        }

        let count = added.len();
        if count > 0 {
            tracing::debug!(backfilled = count, "alias backfill added person spans");
        }
        tagged.extend(added);
        tagged.sort_by_key(|t| t.span.start);
        count
    }

    pub fn finish(self) -> (Mapping, ScoreTable) {
        (self.mapping, self.scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, start: usize, end: usize, label: CanonicalType, score: f64) -> Span {
        Span::from_text(text, start, end, label, score, SpanSource::Recognizer).unwrap()
    }

    #[test]
    fn equal_values_share_a_tag() {
        let text = "20-45-67 then 204567 then 40-22-17";
        let mut index = PersonAliasIndex::new();
        let mut assigner = TagAssigner::new(&mut index, 3);
        let tagged = assigner.assign(vec![
            span(text, 0, 8, CanonicalType::UkSortCode, 0.9),
            span(text, 14, 20, CanonicalType::UkSortCode, 0.5),
            span(text, 26, 34, CanonicalType::UkSortCode, 0.9),
        ]);
        let tags: Vec<String> = tagged.iter().map(|t| t.tag.to_string()).collect();
        assert_eq!(tags, vec!["[UK_SORT_CODE_1]", "[UK_SORT_CODE_1]", "[UK_SORT_CODE_2]"]);
        let (mapping, scores) = assigner.finish();
        assert_eq!(mapping.get(&tagged[0].tag), Some("20-45-67"));
        assert!((scores.get(&tagged[0].tag).unwrap() - 0.93).abs() < 1e-9);
    }

    #[test]
    fn person_tokens_alias_later_mentions() {
        let text = "John Smith wrote. Smith agreed.";
        let mut index = PersonAliasIndex::new();
        let mut assigner = TagAssigner::new(&mut index, 3);
        let tagged = assigner.assign(vec![
            span(text, 0, 10, CanonicalType::Person, 0.9),
            span(text, 18, 23, CanonicalType::Person, 0.6),
        ]);
        assert_eq!(tagged[0].tag, tagged[1].tag);
        let (mapping, scores) = assigner.finish();
        assert_eq!(mapping.len(), 1);
        assert_eq!(scores.get(&tagged[0].tag), Some(0.9));
    }

    #[test]
    fn backfill_tags_bare_mentions() {
        let text = "John Smith wrote. Later, john confirmed.";
        let mut index = PersonAliasIndex::new();
        let mut assigner = TagAssigner::new(&mut index, 3);
        let mut tagged = assigner.assign(vec![span(text, 0, 10, CanonicalType::Person, 0.9)]);
        let added = assigner.backfill(text, &mut tagged);
        assert_eq!(added, 1);
        assert_eq!(tagged[1].span.original, "john");
        assert_eq!(tagged[1].span.source, SpanSource::Alias);
        assert_eq!(tagged[1].span.score, 0.9);
        assert_eq!(tagged[1].tag, tagged[0].tag);
    }

    #[test]
    fn carried_index_restores_mapping_and_avoids_collisions() {
        let mut index = PersonAliasIndex::new();
        {
            let text = "Ada Lovelace";
            let mut first = TagAssigner::new(&mut index, 3);
            first.assign(vec![span(text, 0, 12, CanonicalType::Person, 0.8)]);
        }

        let text = "Lovelace met Charles Babbage";
        let mut second = TagAssigner::new(&mut index, 3);
        let tagged = second.assign(vec![
            span(text, 0, 8, CanonicalType::Person, 0.7),
            span(text, 13, 28, CanonicalType::Person, 0.9),
        ]);
        assert_eq!(tagged[0].tag.to_string(), "[PERSON_1]");
        assert_eq!(tagged[1].tag.to_string(), "[PERSON_2]");
        let (mapping, _) = second.finish();
        assert_eq!(mapping.get(&tagged[0].tag), Some("Ada Lovelace"));
    }
}
