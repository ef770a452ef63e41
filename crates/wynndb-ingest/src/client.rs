//! HTTP client for the item database and the place label list.
//!
//! The item fetch is all-or-nothing: any failure is returned to the caller
//! and the run must abort. The place fetch is best-effort; see
//! [`WynnClient::fetch_location_source`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;
use wynndb_core::AppConfig;

use crate::error::FetchError;
use crate::types::{LocationSource, RawItemMap, RawLocation};

/// Client for the two remote sources a refresh reads from.
pub struct WynnClient {
    client: Client,
    items_url: Url,
    places_url: Url,
}

impl WynnClient {
    /// Creates a client with the given endpoints, request timeout, and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] if either endpoint does not parse.
    /// - [`FetchError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(
        items_url: &str,
        places_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            items_url: parse_url(items_url)?,
            places_url: parse_url(places_url)?,
        })
    }

    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`WynnClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.items_url,
            &config.places_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn items_url(&self) -> &Url {
        &self.items_url
    }

    #[must_use]
    pub fn places_url(&self) -> &Url {
        &self.places_url
    }

    /// Fetches the full item database.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network or TLS failure.
    /// - [`FetchError::UnexpectedStatus`] for any non-2xx status.
    /// - [`FetchError::Deserialize`] if the body is not JSON.
    /// - [`FetchError::UnexpectedShape`] if the body is not a JSON object.
    pub async fn fetch_items(&self) -> Result<RawItemMap, FetchError> {
        match self.get_json(&self.items_url, "item database").await? {
            Value::Object(object) => Ok(RawItemMap::from_object(object)),
            other => Err(FetchError::UnexpectedShape {
                context: "item database".to_owned(),
                reason: format!("expected an object keyed by item name, got {}", kind(&other)),
            }),
        }
    }

    /// Fetches the place label list.
    ///
    /// # Errors
    ///
    /// Same as [`WynnClient::fetch_items`]; [`FetchError::UnexpectedShape`] is
    /// returned when the body is neither an array nor an object of labels.
    pub async fn fetch_places(&self) -> Result<Vec<RawLocation>, FetchError> {
        let body = self.get_json(&self.places_url, "place list").await?;
        RawLocation::list_from_value(&body).ok_or_else(|| FetchError::UnexpectedShape {
            context: "place list".to_owned(),
            reason: format!("expected an array or object of labels, got {}", kind(&body)),
        })
    }

    /// Fetches the place list without failing.
    ///
    /// Any error from [`WynnClient::fetch_places`] is logged as a warning and
    /// reported as [`LocationSource::Unavailable`], so the caller can continue
    /// without enrichment.
    pub async fn fetch_location_source(&self) -> LocationSource {
        match self.fetch_places().await {
            Ok(locations) => {
                tracing::info!(count = locations.len(), "place list fetched");
                LocationSource::Available(locations)
            }
            Err(e) => {
                tracing::warn!(
                    url = %self.places_url,
                    error = %e,
                    "could not fetch place list; location enrichment will be skipped"
                );
                LocationSource::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn get_json(&self, url: &Url, context: &str) -> Result<Value, FetchError> {
        tracing::info!(%url, "fetching {context}");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| FetchError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
