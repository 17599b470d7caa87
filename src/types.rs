#![allow(missing_docs)]
//! Type definitions for the Kalshi plugin
//!
//! Request-side shapes are strongly typed; response payloads stay as
//! `serde_json::Value` because the Kalshi API owns that schema.

use serde::de::{Error as DeError, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::client::is_dot_segment;
use crate::constants::{MAX_MARKETS_LIMIT, MIN_MARKETS_LIMIT};
use crate::error::{KalshiError, Result};

fn de_limit<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct V;
    impl<'de> Visitor<'de> for V {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "an integer or null")
        }

        fn visit_i64<E: DeError>(self, v: i64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: DeError>(self, v: u64) -> std::result::Result<Self::Value, E> {
            Ok(Some(i64::try_from(v).unwrap_or(i64::MAX)))
        }

        fn visit_f64<E: DeError>(self, v: f64) -> std::result::Result<Self::Value, E> {
            if v.fract() != 0.0 || !v.is_finite() {
                return Err(E::custom(format!("limit must be an integer, got {v}")));
            }
            Ok(Some(v as i64))
        }

        fn visit_none<E: DeError>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: DeError>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(V)
}

/// Filters for `GET /markets`. Absent fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketQueryOptions {
    pub series_ticker: Option<String>,
    pub status: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl MarketQueryOptions {
    /// Present fields as `(key, value)` pairs in query order.
    ///
    /// Empty strings and a zero limit count as absent.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(series_ticker) = self.series_ticker.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("series_ticker", series_ticker.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("status", status.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = self.cursor.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("cursor", cursor.to_string()));
        }
        pairs
    }
}

/// Arguments accepted by the ticker-based tools.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickerInput {
    #[serde(default)]
    pub ticker: Option<String>,
}

impl TickerInput {
    /// Returns the ticker, or an `InvalidArgument` naming `tool` when it is
    /// missing, empty, or a `.`/`..` path segment.
    pub fn require_ticker(self, tool: &str) -> Result<String> {
        match self.ticker {
            Some(ticker) if is_dot_segment(&ticker) => Err(KalshiError::invalid_argument(
                format!("[{tool}] ticker must not be {ticker:?}"),
            )),
            Some(ticker) if !ticker.is_empty() => Ok(ticker),
            _ => Err(KalshiError::invalid_argument(format!(
                "[{tool}] ticker is required"
            ))),
        }
    }
}

/// Arguments accepted by `kalshi_getMarkets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketsInput {
    #[serde(default)]
    pub series_ticker: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_limit")]
    pub limit: Option<i64>,
    #[serde(default)]
    pub cursor: Option<String>,
}

impl MarketsInput {
    /// Range-checks `limit` and converts into client query options.
    pub fn into_options(self, tool: &str) -> Result<MarketQueryOptions> {
        let limit = match self.limit {
            None => None,
            Some(limit) if (MIN_MARKETS_LIMIT..=MAX_MARKETS_LIMIT).contains(&limit) => {
                u32::try_from(limit).ok()
            }
            Some(limit) => {
                return Err(KalshiError::invalid_argument(format!(
                    "[{tool}] limit must be between {MIN_MARKETS_LIMIT} and {MAX_MARKETS_LIMIT}, got {limit}"
                )))
            }
        };

        Ok(MarketQueryOptions {
            series_ticker: self.series_ticker,
            status: self.status,
            limit,
            cursor: self.cursor,
        })
    }
}

/// Result of a tool call: the raw API payload under a single named field.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub field: &'static str,
    pub payload: Value,
}

impl ToolOutput {
    #[must_use]
    pub fn new(field: &'static str, payload: Value) -> Self {
        Self { field, payload }
    }

    #[must_use]
    pub fn into_json(self) -> Value {
        let mut map = Map::with_capacity(1);
        map.insert(self.field.to_string(), self.payload);
        Value::Object(map)
    }
}

impl Serialize for ToolOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, &self.payload)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs_keep_field_order() {
        let options = MarketQueryOptions {
            cursor: Some("abc".to_string()),
            limit: Some(50),
            series_ticker: Some("KXHIGHNY".to_string()),
            status: None,
        };

        let keys: Vec<&str> = options.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["series_ticker", "limit", "cursor"]);
    }

    #[test]
    fn test_query_pairs_skip_empty_values() {
        let options = MarketQueryOptions {
            series_ticker: Some(String::new()),
            status: Some("open".to_string()),
            limit: Some(0),
            cursor: None,
        };

        assert_eq!(options.query_pairs(), vec![("status", "open".to_string())]);
    }

    #[test]
    fn test_ticker_input_required() {
        let input: TickerInput = serde_json::from_value(json!({})).unwrap();
        let err = input.require_ticker("kalshi_getEvent").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message.contains("kalshi_getEvent"));

        let input: TickerInput = serde_json::from_value(json!({ "ticker": "" })).unwrap();
        assert!(input.require_ticker("kalshi_getSeries").is_err());

        let input: TickerInput = serde_json::from_value(json!({ "ticker": "KXHIGHNY" })).unwrap();
        assert_eq!(input.require_ticker("kalshi_getSeries").unwrap(), "KXHIGHNY");
    }

    #[test]
    fn test_ticker_input_rejects_dot_segments() {
        for ticker in [".", ".."] {
            let input: TickerInput = serde_json::from_value(json!({ "ticker": ticker })).unwrap();
            let err = input.require_ticker("kalshi_getOrderbook").unwrap_err();
            assert!(err.is_invalid_argument());
            assert!(err.message.starts_with("[kalshi_getOrderbook]"));
        }
    }

    #[test]
    fn test_markets_input_limit_bounds() {
        let input: MarketsInput = serde_json::from_value(json!({ "limit": 250 })).unwrap();
        assert!(input.into_options("kalshi_getMarkets").unwrap_err().is_invalid_argument());

        let input: MarketsInput = serde_json::from_value(json!({ "limit": 0 })).unwrap();
        assert!(input.into_options("kalshi_getMarkets").is_err());

        let input: MarketsInput = serde_json::from_value(json!({ "limit": 200.0 })).unwrap();
        assert_eq!(
            input.into_options("kalshi_getMarkets").unwrap().limit,
            Some(200)
        );
    }

    #[test]
    fn test_markets_input_rejects_fractional_limit() {
        assert!(serde_json::from_value::<MarketsInput>(json!({ "limit": 12.5 })).is_err());
    }

    #[test]
    fn test_tool_output_wraps_payload() {
        let output = ToolOutput::new("series", json!({ "series": { "ticker": "KXHIGHNY" } }));
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({ "series": { "series": { "ticker": "KXHIGHNY" } } })
        );
        assert_eq!(
            output.into_json(),
            json!({ "series": { "series": { "ticker": "KXHIGHNY" } } })
        );
    }
}
