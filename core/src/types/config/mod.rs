mod app;
mod search;

pub use app::{AppConfig, AppConfigError, HttpConfig, SearchSection, SourcesConfig};
pub use search::{CaseMatching, MatchMode, SuggestConfig};
