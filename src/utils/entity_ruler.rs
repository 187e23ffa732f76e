//! Phrase-table entity matching for search queries.
//!
//! Every pattern is a literal, case-sensitive phrase. A phrase only matches
//! where it is not glued to a neighbouring letter or digit, so "Dubai" does
//! not fire inside "Dubailand" and "villa" does not fire inside "villas".
//!
//! Overlaps are resolved longest-match-wins: candidate spans are ranked by
//! length in characters (longest first, then earliest start, then table
//! order) and a span is kept only if it does not overlap one already kept.
//! The kept spans are returned in text order.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    City,
    Area,
    Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan<'t> {
    pub label: EntityLabel,
    pub text: &'t str,
    /// Byte offsets into the searched text.
    pub start: usize,
    pub end: usize,
}

impl EntitySpan<'_> {
    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn overlaps(&self, other: &EntitySpan<'_>) -> bool {
        self.start < other.end && other.start < self.end
    }
}

pub struct EntityRuler {
    patterns: Vec<(EntityLabel, &'static str)>,
}

const DEFAULT_PATTERNS: &[(EntityLabel, &str)] = &[
    (EntityLabel::City, "Dubai"),
    (EntityLabel::City, "دبي"),
    (EntityLabel::Area, "Dubai Marina"),
    (EntityLabel::Area, "دبي مارينا"),
    (EntityLabel::Area, "JVC"),
    (EntityLabel::Type, "apartment"),
    (EntityLabel::Type, "شقة"),
    (EntityLabel::Type, "villa"),
    (EntityLabel::Type, "فيلا"),
];

/// Built on first use and never mutated afterwards.
pub static ENTITY_RULER: Lazy<EntityRuler> = Lazy::new(|| EntityRuler::new(DEFAULT_PATTERNS));

impl EntityRuler {
    pub fn new(patterns: &[(EntityLabel, &'static str)]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .filter(|(_, phrase)| !phrase.is_empty())
                .copied()
                .collect(),
        }
    }

    pub fn find<'t>(&self, text: &'t str) -> Vec<EntitySpan<'t>> {
        let mut candidates: Vec<EntitySpan<'t>> = self
            .patterns
            .iter()
            .flat_map(|&(label, phrase)| {
                text.match_indices(phrase)
                    .map(move |(start, matched)| EntitySpan {
                        label,
                        text: matched,
                        start,
                        end: start + matched.len(),
                    })
                    .filter(move |span| is_token_aligned(text, span.start, span.end))
            })
            .collect();

        // Stable sort, so equal candidates keep table order.
        candidates.sort_by(|a, b| {
            b.char_len()
                .cmp(&a.char_len())
                .then(a.start.cmp(&b.start))
        });

        let mut kept: Vec<EntitySpan<'t>> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if kept.iter().all(|span| !span.overlaps(&candidate)) {
                kept.push(candidate);
            }
        }

        kept.sort_by_key(|span| span.start);
        kept
    }
}

fn is_token_aligned(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
