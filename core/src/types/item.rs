use nutype::nutype;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_ITEM_KEY_LENGTH: usize = 512;

/// Unique identifier of a suggestion within one result set.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_ITEM_KEY_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ItemKey(String);

/// The reduced shape every suggestion exposes to the engine and the local pool.
pub trait Suggestion: Clone + Send + Sync + 'static {
    fn key(&self) -> &str;

    fn primary_label(&self) -> &str;

    fn secondary_label(&self) -> &str;

    /// Extra searchable text beyond the two labels.
    fn tags(&self) -> &[String] {
        &[]
    }
}

/// Normalized record produced by every source.
///
/// `detail` keeps the raw payload the record was built from, for detail views
/// and copy/download of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub key: ItemKey,
    pub primary_label: String,
    #[serde(default)]
    pub secondary_label: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub detail: Value,
}

impl Item {
    pub fn new(
        key: ItemKey,
        primary_label: impl Into<String>,
        secondary_label: impl Into<String>,
    ) -> Self {
        Self {
            key,
            primary_label: primary_label.into(),
            secondary_label: secondary_label.into(),
            tags: Vec::new(),
            detail: Value::Null,
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = detail;
        self
    }
}

impl Suggestion for Item {
    fn key(&self) -> &str {
        self.key.as_str()
    }

    fn primary_label(&self) -> &str {
        &self.primary_label
    }

    fn secondary_label(&self) -> &str {
        &self.secondary_label
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests;
