//! Page-specific collaborators: remote endpoints and the normalizers that turn
//! their JSON payloads (or a local pool file) into [`Item`]s.

mod normalize;

pub use normalize::{elements, gbif, google_books, items, omdb, poetry, quotes, universities};

use crate::error::LookupError;
use crate::types::{Item, SourcesConfig};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// A public REST API searched as the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteSource {
    /// OMDb movie search (`?s=`), requires an API key.
    Omdb,
    /// Hipolabs university directory (`?name=`).
    Universities,
    /// Google Books volumes (`?q=`).
    GoogleBooks,
    /// GBIF species name suggest (`?q=`).
    Gbif,
    /// PoetryDB title search (`/<title>`).
    Poetry,
}

impl RemoteSource {
    pub const ALL: [RemoteSource; 5] = [
        RemoteSource::Omdb,
        RemoteSource::Universities,
        RemoteSource::GoogleBooks,
        RemoteSource::Gbif,
        RemoteSource::Poetry,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RemoteSource::Omdb => "omdb",
            RemoteSource::Universities => "universities",
            RemoteSource::GoogleBooks => "books",
            RemoteSource::Gbif => "gbif",
            RemoteSource::Poetry => "poetry",
        }
    }

    /// Configured endpoint for this source.
    pub fn base_url<'a>(self, sources: &'a SourcesConfig) -> &'a str {
        match self {
            RemoteSource::Omdb => &sources.omdb_url,
            RemoteSource::Universities => &sources.universities_url,
            RemoteSource::GoogleBooks => &sources.google_books_url,
            RemoteSource::Gbif => &sources.gbif_url,
            RemoteSource::Poetry => &sources.poetry_url,
        }
    }

    /// Builds the request URL for a query. The query is trimmed first.
    pub fn endpoint(
        self,
        base: &Url,
        query: &str,
        api_key: Option<&str>,
    ) -> Result<Url, LookupError> {
        let query = query.trim();
        let mut url = base.clone();

        match self {
            RemoteSource::Omdb => {
                let mut pairs = url.query_pairs_mut();
                if let Some(key) = api_key {
                    pairs.append_pair("apikey", key);
                }
                pairs.append_pair("s", query);
            }
            RemoteSource::Universities => {
                url.query_pairs_mut().append_pair("name", query);
            }
            RemoteSource::GoogleBooks | RemoteSource::Gbif => {
                url.query_pairs_mut().append_pair("q", query);
            }
            RemoteSource::Poetry => {
                url.path_segments_mut()
                    .map_err(|()| LookupError::Parse(format!("{base} cannot be a base URL")))?
                    .pop_if_empty()
                    .push(query);
            }
        }

        Ok(url)
    }

    /// Normalizes a response body into items.
    pub fn normalize(self, body: &Value) -> Result<Vec<Item>, LookupError> {
        match self {
            RemoteSource::Omdb => omdb(body),
            RemoteSource::Universities => universities(body),
            RemoteSource::GoogleBooks => google_books(body),
            RemoteSource::Gbif => gbif(body),
            RemoteSource::Poetry => poetry(body),
        }
    }
}

impl fmt::Display for RemoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RemoteSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RemoteSource::ALL
            .into_iter()
            .find(|source| source.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = RemoteSource::ALL.iter().map(|s| s.name()).collect();
                format!("unknown source '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// Shape of a local pool file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PoolFormat {
    /// Already-normalized items.
    #[default]
    Items,
    /// Quote records (`quote`/`text`/`content`, `author`, `tags`).
    Quotes,
    /// Periodic table elements (`name`, `symbol`, `number`, `category`).
    Elements,
}

impl PoolFormat {
    pub fn name(self) -> &'static str {
        match self {
            PoolFormat::Items => "items",
            PoolFormat::Quotes => "quotes",
            PoolFormat::Elements => "elements",
        }
    }

    pub fn normalize(self, body: &Value) -> Result<Vec<Item>, LookupError> {
        match self {
            PoolFormat::Items => items(body),
            PoolFormat::Quotes => quotes(body),
            PoolFormat::Elements => elements(body),
        }
    }
}

impl fmt::Display for PoolFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PoolFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [PoolFormat::Items, PoolFormat::Quotes, PoolFormat::Elements]
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown pool format '{s}', expected items, quotes or elements"))
    }
}
