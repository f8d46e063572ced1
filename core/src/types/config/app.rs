use super::search::{
    CaseMatching, DEFAULT_DEBOUNCE_MS, DEFAULT_RESULT_LIMIT, MatchMode, SuggestConfig,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const MAX_DEBOUNCE_MS: u64 = 5_000;

/// User-facing configuration, persisted as typeahead.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl AppConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("typeahead.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, AppConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.debounce_ms == 0 {
            errors.push("debounce_ms must be at least 1".to_string());
        }

        if self.search.debounce_ms > MAX_DEBOUNCE_MS {
            errors.push(format!("debounce_ms must be at most {MAX_DEBOUNCE_MS}"));
        }

        if self.search.result_limit == 0 {
            errors.push("result_limit must be at least 1".to_string());
        }

        if self.http.timeout_secs == 0 {
            errors.push("timeout_secs must be at least 1".to_string());
        }

        for (name, url) in self.sources.base_urls() {
            if let Err(err) = Url::parse(url) {
                errors.push(format!("{name} is not a valid URL: {err}"));
            }
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let debounce_ms = self.search.debounce_ms;
        let keep_url = |value: &String, default: String| {
            if Url::parse(value).is_ok() {
                value.clone()
            } else {
                default
            }
        };

        Self {
            search: SearchSection {
                debounce_ms: if debounce_ms == 0 || debounce_ms > MAX_DEBOUNCE_MS {
                    defaults.search.debounce_ms
                } else {
                    debounce_ms
                },
                result_limit: if self.search.result_limit == 0 {
                    defaults.search.result_limit
                } else {
                    self.search.result_limit
                },
                ..self.search.clone()
            },
            http: HttpConfig {
                timeout_secs: if self.http.timeout_secs == 0 {
                    defaults.http.timeout_secs
                } else {
                    self.http.timeout_secs
                },
                user_agent: self.http.user_agent.clone(),
            },
            sources: SourcesConfig {
                omdb_api_key: self.sources.omdb_api_key.clone(),
                omdb_url: keep_url(&self.sources.omdb_url, defaults.sources.omdb_url),
                universities_url: keep_url(
                    &self.sources.universities_url,
                    defaults.sources.universities_url,
                ),
                google_books_url: keep_url(
                    &self.sources.google_books_url,
                    defaults.sources.google_books_url,
                ),
                gbif_url: keep_url(&self.sources.gbif_url, defaults.sources.gbif_url),
                poetry_url: keep_url(&self.sources.poetry_url, defaults.sources.poetry_url),
            },
        }
    }

    /// Runtime engine settings derived from the `[search]` table.
    pub fn suggest_config(&self) -> SuggestConfig {
        SuggestConfig {
            debounce: Duration::from_millis(self.search.debounce_ms),
            result_limit: self.search.result_limit,
            case_matching: self.search.case_matching,
            match_mode: self.search.match_mode,
            fill_query_on_choose: self.search.fill_query_on_choose,
        }
    }
}

/// Debounce and matching settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSection {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    #[serde(default)]
    pub case_matching: CaseMatching,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default = "default_true")]
    pub fill_query_on_choose: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            result_limit: default_result_limit(),
            case_matching: CaseMatching::default(),
            match_mode: MatchMode::default(),
            fill_query_on_choose: true,
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

fn default_true() -> bool {
    true
}

/// HTTP client settings for remote sources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("typeahead/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Endpoints and credentials of the remote sources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omdb_api_key: Option<String>,
    #[serde(default = "default_omdb_url")]
    pub omdb_url: String,
    #[serde(default = "default_universities_url")]
    pub universities_url: String,
    #[serde(default = "default_google_books_url")]
    pub google_books_url: String,
    #[serde(default = "default_gbif_url")]
    pub gbif_url: String,
    #[serde(default = "default_poetry_url")]
    pub poetry_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            omdb_api_key: None,
            omdb_url: default_omdb_url(),
            universities_url: default_universities_url(),
            google_books_url: default_google_books_url(),
            gbif_url: default_gbif_url(),
            poetry_url: default_poetry_url(),
        }
    }
}

impl SourcesConfig {
    fn base_urls(&self) -> [(&'static str, &String); 5] {
        [
            ("omdb_url", &self.omdb_url),
            ("universities_url", &self.universities_url),
            ("google_books_url", &self.google_books_url),
            ("gbif_url", &self.gbif_url),
            ("poetry_url", &self.poetry_url),
        ]
    }
}

fn default_omdb_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_universities_url() -> String {
    "http://universities.hipolabs.com/search".to_string()
}

fn default_google_books_url() -> String {
    "https://www.googleapis.com/books/v1/volumes".to_string()
}

fn default_gbif_url() -> String {
    "https://api.gbif.org/v1/species/suggest".to_string()
}

fn default_poetry_url() -> String {
    "https://poetrydb.org/title".to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http client error: {0}")]
    HttpClient(String),
}
