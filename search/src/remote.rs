//! HTTP JSON lookups against the public APIs in [`RemoteSource`].

use crate::lookup::Lookup;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use typeahead_core::LookupError;
use typeahead_core::sources::RemoteSource;
use typeahead_core::types::{AppConfig, AppConfigError, HttpConfig, Item, Query};
use url::Url;

/// Fetches `source`'s endpoint for each query and normalizes the body.
///
/// No retries: a failed fetch is an error for that request only.
pub struct RemoteLookup {
    http: Client,
    source: RemoteSource,
    base_url: Url,
    api_key: Option<String>,
}

impl RemoteLookup {
    pub fn new(source: RemoteSource, base_url: Url, http: Client) -> Self {
        Self {
            http,
            source,
            base_url,
            api_key: None,
        }
    }

    /// Builds the client and endpoint from config.
    pub fn from_config(source: RemoteSource, config: &AppConfig) -> Result<Self, AppConfigError> {
        let base_url = Url::parse(source.base_url(&config.sources))?;
        let lookup = Self::new(source, base_url, http_client(&config.http)?);

        Ok(match (source, &config.sources.omdb_api_key) {
            (RemoteSource::Omdb, Some(key)) => lookup.with_api_key(key.clone()),
            _ => lookup,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn source(&self) -> RemoteSource {
        self.source
    }
}

/// Client with the configured timeout and user agent.
fn http_client(config: &HttpConfig) -> Result<Client, AppConfigError> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|err| AppConfigError::HttpClient(err.to_string()))
}

/// Endpoint without its query string, so API keys stay out of errors and logs.
fn redacted(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[async_trait]
impl Lookup for RemoteLookup {
    type Item = Item;

    async fn lookup(&self, query: &Query) -> Result<Vec<Item>, LookupError> {
        let url = self
            .source
            .endpoint(&self.base_url, query, self.api_key.as_deref())?;
        debug!(source = %self.source, url = %redacted(&url), "fetching suggestions");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| LookupError::Network(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                url: redacted(&url),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| LookupError::Parse(err.without_url().to_string()))?;

        self.source.normalize(&body)
    }
}
