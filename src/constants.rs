#![allow(missing_docs)]

pub const DEFAULT_KALSHI_API_URL: &str = "https://api.elections.kalshi.com/trade-api/v2";

pub const KALSHI_SERVICE_NAME: &str = "KalshiService";
pub const KALSHI_SERVICE_DESCRIPTION: &str = "Service for querying Kalshi prediction markets";

pub const GET_SERIES_TOOL: &str = "kalshi_getSeries";
pub const GET_MARKETS_TOOL: &str = "kalshi_getMarkets";
pub const GET_EVENT_TOOL: &str = "kalshi_getEvent";
pub const GET_ORDERBOOK_TOOL: &str = "kalshi_getOrderbook";

pub const MIN_MARKETS_LIMIT: i64 = 1;
pub const MAX_MARKETS_LIMIT: i64 = 200;

pub const KALSHI_ENABLED_ENV: &str = "KALSHI_ENABLED";
pub const KALSHI_BASE_URL_ENV: &str = "KALSHI_BASE_URL";
