use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_RESULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    Sensitive,
    #[default]
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    Smart,
}

impl CaseMatching {
    /// Resolves `Smart` against a concrete query.
    pub fn is_sensitive_for(self, query: &str) -> bool {
        match self {
            CaseMatching::Sensitive => true,
            CaseMatching::Insensitive => false,
            CaseMatching::Smart => query.chars().any(char::is_uppercase),
        }
    }
}

/// How a local pool matches a query against its fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Substring containment, first matches in pool order.
    #[default]
    Substring,
    /// Fuzzy subsequence matching, best score first.
    Fuzzy,
}

/// Runtime settings for one suggestion engine.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Quiet period after the last keystroke before a lookup fires.
    pub debounce: Duration,
    /// Maximum number of suggestions kept from a lookup result.
    pub result_limit: usize,
    pub case_matching: CaseMatching,
    pub match_mode: MatchMode,
    /// Replace the query with the chosen item's primary label.
    pub fill_query_on_choose: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            result_limit: DEFAULT_RESULT_LIMIT,
            case_matching: CaseMatching::default(),
            match_mode: MatchMode::default(),
            fill_query_on_choose: true,
        }
    }
}
