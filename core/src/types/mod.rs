pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, CaseMatching, HttpConfig, MatchMode, SearchSection,
    SourcesConfig, SuggestConfig,
};

pub(crate) mod item;
pub use item::{Item, ItemKey, ItemKeyError, MAX_ITEM_KEY_LENGTH, Suggestion};

pub(crate) mod query;
pub use query::{Query, RequestId, SuggestionRequest};
