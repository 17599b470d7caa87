#![allow(missing_docs)]
//! Execution context handed to every tool call.

use crate::client::KalshiClient;
use crate::error::{KalshiError, Result};
use crate::service::KalshiService;

/// Receives the human-readable progress notices tools emit.
pub trait InfoSink: Send + Sync {
    fn info(&self, message: &str);
}

/// Forwards notices to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl InfoSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "kalshi", "{message}");
    }
}

/// Everything a tool needs from its caller, passed explicitly.
#[derive(Clone, Copy)]
pub struct ToolContext<'a> {
    service: Option<&'a KalshiService>,
    sink: &'a dyn InfoSink,
}

impl<'a> ToolContext<'a> {
    #[must_use]
    pub fn new(service: &'a KalshiService, sink: &'a dyn InfoSink) -> Self {
        Self {
            service: Some(service),
            sink,
        }
    }

    /// A context with no Kalshi service registered.
    #[must_use]
    pub fn without_service(sink: &'a dyn InfoSink) -> Self {
        Self {
            service: None,
            sink,
        }
    }

    pub fn require_client(&self) -> Result<&'a KalshiClient> {
        self.service.map(KalshiService::client).ok_or_else(|| {
            KalshiError::service_unavailable(format!(
                "{} is not registered",
                KalshiService::SERVICE_TYPE
            ))
        })
    }

    pub fn info(&self, message: &str) {
        self.sink.info(message);
    }
}

impl std::fmt::Debug for ToolContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("has_service", &self.service.is_some())
            .finish_non_exhaustive()
    }
}
