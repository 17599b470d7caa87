#![allow(missing_docs)]
//! Kalshi tools exposed to the host agent.
//!
//! Every tool follows the same steps: resolve the client from the context,
//! validate arguments, post a progress notice, make one API call and wrap
//! the payload under the tool's result field.

mod context;
mod event;
mod markets;
mod orderbook;
mod registry;
mod series;

pub use context::{InfoSink, ToolContext, TracingSink};
pub use event::GetEventTool;
pub use markets::GetMarketsTool;
pub use orderbook::GetOrderbookTool;
pub use registry::ToolRegistry;
pub use series::GetSeriesTool;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::{KalshiError, Result};
use crate::types::ToolOutput;

/// A callable tool backed by one Kalshi API operation.
#[async_trait]
pub trait KalshiTool: Send + Sync {
    /// Unique tool name, e.g. `kalshi_getSeries`.
    fn name(&self) -> &'static str;

    /// Label shown to users, e.g. `Kalshi/getSeries`.
    fn display_name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema for the tool arguments.
    fn input_schema(&self) -> Value;

    async fn execute(&self, args: Value, ctx: &ToolContext<'_>) -> Result<ToolOutput>;
}

impl std::fmt::Debug for dyn KalshiTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KalshiTool")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// Returns all available tools.
pub fn get_tools() -> Vec<Box<dyn KalshiTool>> {
    vec![
        Box::new(GetSeriesTool),
        Box::new(GetMarketsTool),
        Box::new(GetEventTool),
        Box::new(GetOrderbookTool),
    ]
}

/// Decode tool arguments; `null` means "no arguments".
fn parse_args<T: DeserializeOwned + Default>(tool: &str, args: Value) -> Result<T> {
    if args.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(args)
        .map_err(|e| KalshiError::invalid_argument(format!("[{tool}] invalid arguments: {e}")))
}

fn ticker_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "ticker": {
                "type": "string",
                "minLength": 1,
                "description": description,
            }
        },
        "required": ["ticker"],
    })
}
