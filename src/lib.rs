#![allow(missing_docs)]
//! # elizaOS Plugin Kalshi
//!
//! Rust implementation of the Kalshi prediction markets plugin for elizaOS.
//!
//! This crate provides read-only tools over the Kalshi trade API:
//! - `kalshi_getSeries` — a market series by ticker
//! - `kalshi_getMarkets` — markets filtered by series, status and cursor
//! - `kalshi_getEvent` — an event by ticker
//! - `kalshi_getOrderbook` — the orderbook of one market
//!
//! Responses are passed through untouched as `serde_json::Value`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use elizaos_plugin_kalshi::actions::{ToolContext, ToolRegistry, TracingSink};
//! use elizaos_plugin_kalshi::config::KalshiConfig;
//! use elizaos_plugin_kalshi::KalshiService;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = KalshiService::start(&KalshiConfig::default())?;
//!     let ctx = ToolContext::new(&service, &TracingSink);
//!
//!     let output = ToolRegistry::new()
//!         .execute("kalshi_getMarkets", json!({ "series_ticker": "KXHIGHNY", "limit": 5 }), &ctx)
//!         .await?;
//!     println!("{}", output.into_json());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod actions;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod plugin;
pub mod service;
pub mod types;

/// The canonical plugin identifier used by elizaOS to refer to this plugin.
pub const PLUGIN_NAME: &str = "kalshi";

/// The plugin crate version (from `CARGO_PKG_VERSION`).
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short description shown by the host.
pub const PLUGIN_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub use client::KalshiClient;
pub use error::{KalshiError, KalshiErrorCode};
pub use plugin::KalshiPlugin;
pub use service::KalshiService;
