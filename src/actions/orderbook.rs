use async_trait::async_trait;
use serde_json::Value;

use super::{parse_args, ticker_schema, KalshiTool, ToolContext};
use crate::constants::GET_ORDERBOOK_TOOL;
use crate::error::Result;
use crate::types::{TickerInput, ToolOutput};

/// Fetches resting bids for one market. Kalshi only returns bids; asks are
/// implied by the opposite side's bids.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetOrderbookTool;

#[async_trait]
impl KalshiTool for GetOrderbookTool {
    fn name(&self) -> &'static str {
        GET_ORDERBOOK_TOOL
    }

    fn display_name(&self) -> &'static str {
        "Kalshi/getOrderbook"
    }

    fn description(&self) -> &'static str {
        "Get the orderbook (bids) for a specific Kalshi market."
    }

    fn input_schema(&self) -> Value {
        ticker_schema("Market ticker")
    }

    async fn execute(&self, args: Value, ctx: &ToolContext<'_>) -> Result<ToolOutput> {
        let client = ctx.require_client()?;
        let ticker = parse_args::<TickerInput>(GET_ORDERBOOK_TOOL, args)?
            .require_ticker(GET_ORDERBOOK_TOOL)?;

        ctx.info(&format!("[kalshiGetOrderbook] Fetching orderbook: {ticker}"));
        let orderbook = client.get_orderbook(&ticker).await?;
        Ok(ToolOutput::new("orderbook", orderbook))
    }
}
