//! In-memory suggestion pool.

use crate::lookup::Lookup;
use async_trait::async_trait;
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};
use typeahead_core::LookupError;
use typeahead_core::types::{CaseMatching, MatchMode, Query, Suggestion, SuggestConfig};

/// Filters a fixed list of items.
///
/// A query matches an item when it matches any of its fields: primary label,
/// secondary label, or any tag. In substring mode results keep pool order; in
/// fuzzy mode they are ordered by best field score, ties in pool order.
pub struct LocalPool<T> {
    items: Vec<T>,
    case_matching: CaseMatching,
    match_mode: MatchMode,
}

/// Create operations.
impl<T: Suggestion> LocalPool<T> {
    /// Case-insensitive substring pool.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            case_matching: CaseMatching::Insensitive,
            match_mode: MatchMode::Substring,
        }
    }

    pub fn from_config(items: Vec<T>, config: &SuggestConfig) -> Self {
        Self::new(items)
            .with_case_matching(config.case_matching)
            .with_match_mode(config.match_mode)
    }

    pub fn with_case_matching(mut self, case_matching: CaseMatching) -> Self {
        self.case_matching = case_matching;
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }
}

/// Search operations.
impl<T: Suggestion> LocalPool<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns every matching item. A blank query matches nothing.
    pub fn filter(&self, query: &str) -> Vec<T> {
        let needle = query.trim();
        if needle.is_empty() {
            return Vec::new();
        }

        match self.match_mode {
            MatchMode::Substring => self.filter_substring(needle),
            MatchMode::Fuzzy => self.filter_fuzzy(needle),
        }
    }

    fn filter_substring(&self, needle: &str) -> Vec<T> {
        let sensitive = self.case_matching.is_sensitive_for(needle);
        let needle = if sensitive {
            needle.to_string()
        } else {
            needle.to_lowercase()
        };

        let contains = |field: &str| {
            if sensitive {
                field.contains(needle.as_str())
            } else {
                field.to_lowercase().contains(needle.as_str())
            }
        };

        self.items
            .iter()
            .filter(|item| fields(*item).any(|field| contains(field)))
            .cloned()
            .collect()
    }

    fn filter_fuzzy(&self, needle: &str) -> Vec<T> {
        let case_matching = match self.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };
        let pattern = Pattern::parse(needle, case_matching, Normalization::Smart);
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);
        let mut buf = Vec::new();

        let mut scored: Vec<(u32, usize)> = Vec::new();
        for (position, item) in self.items.iter().enumerate() {
            let mut best: Option<u32> = None;
            for field in fields(item) {
                let score = pattern.score(Utf32Str::new(field, &mut buf), &mut matcher);
                best = best.max(score);
            }
            if let Some(score) = best {
                scored.push((score, position));
            }
        }

        // Stable: equal scores keep pool order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .map(|(_, position)| self.items[position].clone())
            .collect()
    }
}

fn fields<T: Suggestion>(item: &T) -> impl Iterator<Item = &str> {
    [item.primary_label(), item.secondary_label()]
        .into_iter()
        .chain(item.tags().iter().map(String::as_str))
}

#[async_trait]
impl<T: Suggestion> Lookup for LocalPool<T> {
    type Item = T;

    async fn lookup(&self, query: &Query) -> Result<Vec<T>, LookupError> {
        Ok(self.filter(query))
    }
}
