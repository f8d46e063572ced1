use nutype::nutype;
use std::fmt;

/// Search-box text at a point in time.
///
/// Kept exactly as typed. Use [`Query::is_blank`] to decide whether it
/// warrants a lookup.
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    AsRef,
    Deref,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
))]
pub struct Query(String);

impl Query {
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// True for empty and whitespace-only input.
    pub fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::empty()
    }
}

/// Monotonic sequence number used to tell the latest lookup from stale ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub const ZERO: Self = Self(0);

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A lookup issued when the debounce window closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub query: Query,
    pub issued_at: RequestId,
}
