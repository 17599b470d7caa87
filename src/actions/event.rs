use async_trait::async_trait;
use serde_json::Value;

use super::{parse_args, ticker_schema, KalshiTool, ToolContext};
use crate::constants::GET_EVENT_TOOL;
use crate::error::Result;
use crate::types::{TickerInput, ToolOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct GetEventTool;

#[async_trait]
impl KalshiTool for GetEventTool {
    fn name(&self) -> &'static str {
        GET_EVENT_TOOL
    }

    fn display_name(&self) -> &'static str {
        "Kalshi/getEvent"
    }

    fn description(&self) -> &'static str {
        "Get a specific Kalshi event by ticker."
    }

    fn input_schema(&self) -> Value {
        ticker_schema("Event ticker")
    }

    async fn execute(&self, args: Value, ctx: &ToolContext<'_>) -> Result<ToolOutput> {
        let client = ctx.require_client()?;
        let ticker = parse_args::<TickerInput>(GET_EVENT_TOOL, args)?
            .require_ticker(GET_EVENT_TOOL)?;

        ctx.info(&format!("[kalshiGetEvent] Fetching event: {ticker}"));
        let event = client.get_event(&ticker).await?;
        Ok(ToolOutput::new("event", event))
    }
}
