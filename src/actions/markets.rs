use async_trait::async_trait;
use serde_json::{json, Value};

use super::{parse_args, KalshiTool, ToolContext};
use crate::constants::{GET_MARKETS_TOOL, MAX_MARKETS_LIMIT};
use crate::error::Result;
use crate::types::{MarketsInput, ToolOutput};

/// Lists markets, optionally filtered by series and status, one page at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetMarketsTool;

#[async_trait]
impl KalshiTool for GetMarketsTool {
    fn name(&self) -> &'static str {
        GET_MARKETS_TOOL
    }

    fn display_name(&self) -> &'static str {
        "Kalshi/getMarkets"
    }

    fn description(&self) -> &'static str {
        "Get Kalshi markets with optional filtering by series, status, and pagination."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "series_ticker": {
                    "type": "string",
                    "description": "Filter by series ticker",
                },
                "status": {
                    "type": "string",
                    "description": "Filter by status (e.g., 'open', 'closed')",
                },
                "limit": {
                    "type": "integer",
                    "exclusiveMinimum": 0,
                    "maximum": MAX_MARKETS_LIMIT,
                    "description": "Number of results (default: 100)",
                },
                "cursor": {
                    "type": "string",
                    "description": "Pagination cursor",
                },
            },
        })
    }

    async fn execute(&self, args: Value, ctx: &ToolContext<'_>) -> Result<ToolOutput> {
        let client = ctx.require_client()?;
        let options = parse_args::<MarketsInput>(GET_MARKETS_TOOL, args)?
            .into_options(GET_MARKETS_TOOL)?;

        ctx.info("[kalshiGetMarkets] Fetching markets");
        let markets = client.get_markets(&options).await?;
        Ok(ToolOutput::new("markets", markets))
    }
}
