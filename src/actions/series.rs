use async_trait::async_trait;
use serde_json::Value;

use super::{parse_args, ticker_schema, KalshiTool, ToolContext};
use crate::constants::GET_SERIES_TOOL;
use crate::error::Result;
use crate::types::{TickerInput, ToolOutput};

/// Looks up a market series (a recurring family of markets) by ticker.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetSeriesTool;

#[async_trait]
impl KalshiTool for GetSeriesTool {
    fn name(&self) -> &'static str {
        GET_SERIES_TOOL
    }

    fn display_name(&self) -> &'static str {
        "Kalshi/getSeries"
    }

    fn description(&self) -> &'static str {
        "Get information about a Kalshi market series by ticker."
    }

    fn input_schema(&self) -> Value {
        ticker_schema("Series ticker (e.g., KXHIGHNY)")
    }

    async fn execute(&self, args: Value, ctx: &ToolContext<'_>) -> Result<ToolOutput> {
        let client = ctx.require_client()?;
        let ticker = parse_args::<TickerInput>(GET_SERIES_TOOL, args)?
            .require_ticker(GET_SERIES_TOOL)?;

        ctx.info(&format!("[kalshiGetSeries] Fetching series: {ticker}"));
        let series = client.get_series(&ticker).await?;
        Ok(ToolOutput::new("series", series))
    }
}
