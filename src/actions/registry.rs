#![allow(missing_docs)]
use std::collections::BTreeMap;

use serde_json::Value;

use super::{get_tools, KalshiTool, ToolContext};
use crate::error::{KalshiError, Result};
use crate::types::ToolOutput;

/// Flat name -> tool lookup.
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Box<dyn KalshiTool>>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::from_tools(get_tools())
    }

    #[must_use]
    pub fn from_tools(tools: Vec<Box<dyn KalshiTool>>) -> Self {
        Self {
            tools: tools.into_iter().map(|t| (t.name(), t)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn KalshiTool> {
        self.tools.get(name).map(|tool| &**tool)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        ctx: &ToolContext<'_>,
    ) -> Result<ToolOutput> {
        let tool = self
            .get(name)
            .ok_or_else(|| KalshiError::invalid_argument(format!("Unknown tool: {name}")))?;
        tool.execute(args, ctx).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TracingSink;

    #[test]
    fn test_registry_names() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), 4);
        assert!(registry.get("kalshi_getOrderbook").is_some());
        assert!(registry.get("kalshi_getTrades").is_none());

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "kalshi_getEvent",
                "kalshi_getMarkets",
                "kalshi_getOrderbook",
                "kalshi_getSeries"
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let registry = ToolRegistry::new();
        let ctx = ToolContext::without_service(&TracingSink);
        let err = registry
            .execute("kalshi_getTrades", Value::Null, &ctx)
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[tokio::test]
    async fn test_missing_service() {
        let registry = ToolRegistry::new();
        let ctx = ToolContext::without_service(&TracingSink);
        let err = registry
            .execute("kalshi_getMarkets", Value::Null, &ctx)
            .await
            .unwrap_err();
        assert_eq!(err.code, crate::error::KalshiErrorCode::ServiceUnavailable);
    }
}
