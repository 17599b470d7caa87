#![allow(missing_docs)]

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::KalshiConfig;
use crate::error::{KalshiError, KalshiErrorCode, Result};
use crate::types::MarketQueryOptions;

/// Read-only client for the Kalshi trade API.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent calls.
#[derive(Debug, Clone)]
pub struct KalshiClient {
    http: Client,
    base_url: Url,
}

impl KalshiClient {
    /// Build a client. Uses the production endpoint when `config` or its
    /// `base_url` is absent. No request is sent here.
    pub fn new(config: Option<&KalshiConfig>) -> Result<Self> {
        let fallback = KalshiConfig::default();
        let raw = config.unwrap_or(&fallback).resolved_base_url().to_string();

        let base_url = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| KalshiError::config_error(format!("Invalid Kalshi base URL {raw}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(KalshiError::config_error(format!(
                "Kalshi base URL must be an absolute http(s) URL: {raw}"
            )));
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(KalshiError::config_error(format!(
                "Kalshi base URL must not carry a query or fragment: {raw}"
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                KalshiError::with_cause(
                    KalshiErrorCode::ConfigError,
                    format!("Failed to create HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    // =========================================================================
    // Series / Event Methods
    // =========================================================================

    /// Get a market series by ticker (`GET /series/{ticker}`).
    pub async fn get_series(&self, ticker: &str) -> Result<Value> {
        require_ticker(ticker)?;
        let url = self.endpoint(&["series", ticker], None)?;
        self.fetch_json(url, "Kalshi get series").await
    }

    /// Get an event by ticker (`GET /events/{ticker}`).
    pub async fn get_event(&self, ticker: &str) -> Result<Value> {
        require_ticker(ticker)?;
        let url = self.endpoint(&["events", ticker], None)?;
        self.fetch_json(url, "Kalshi get event").await
    }

    // =========================================================================
    // Market Methods
    // =========================================================================

    /// List markets (`GET /markets`), filtered by whichever options are set.
    pub async fn get_markets(&self, options: &MarketQueryOptions) -> Result<Value> {
        let url = self.endpoint(&["markets"], Some(options))?;
        self.fetch_json(url, "Kalshi get markets").await
    }

    /// Get the orderbook for one market (`GET /markets/{ticker}/orderbook`).
    pub async fn get_orderbook(&self, ticker: &str) -> Result<Value> {
        require_ticker(ticker)?;
        let url = self.endpoint(&["markets", ticker, "orderbook"], None)?;
        self.fetch_json(url, "Kalshi get orderbook").await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn endpoint(&self, segments: &[&str], options: Option<&MarketQueryOptions>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                KalshiError::config_error(format!(
                    "Kalshi base URL cannot take a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        let pairs = options.map(MarketQueryOptions::query_pairs).unwrap_or_default();
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    async fn fetch_json(&self, url: Url, label: &str) -> Result<Value> {
        tracing::debug!(%url, "{label}");

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "{label} failed");
            KalshiError::with_cause(
                KalshiErrorCode::RemoteRequestFailure,
                format!("{label} failed: {e}"),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "{label} returned error status");
            return Err(KalshiError::remote_failure(format!(
                "{label} failed: API returned error: {status}"
            ))
            .with_status(status.as_u16()));
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "{label} returned malformed JSON");
            KalshiError::with_cause(
                KalshiErrorCode::RemoteRequestFailure,
                format!("{label} failed: could not parse response: {e}"),
                e,
            )
            .with_status(status.as_u16())
        })
    }
}

/// `.` and `..` would be normalized away by the URL path and hit another
/// resource, so they are not valid tickers.
pub(crate) fn is_dot_segment(ticker: &str) -> bool {
    matches!(ticker, "." | "..")
}

fn require_ticker(ticker: &str) -> Result<()> {
    if ticker.is_empty() {
        return Err(KalshiError::invalid_argument("ticker is required"));
    }
    if is_dot_segment(ticker) {
        return Err(KalshiError::invalid_argument(format!(
            "ticker must not be {ticker:?}"
        )));
    }
    Ok(())
}
