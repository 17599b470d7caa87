#![allow(missing_docs)]

use crate::client::KalshiClient;
use crate::config::KalshiConfig;
use crate::constants::{KALSHI_SERVICE_DESCRIPTION, KALSHI_SERVICE_NAME};
use crate::error::Result;

/// Service record the host registers and tools resolve their client from.
#[derive(Debug, Clone)]
pub struct KalshiService {
    client: KalshiClient,
}

impl KalshiService {
    pub const SERVICE_TYPE: &'static str = KALSHI_SERVICE_NAME;
    pub const DESCRIPTION: &'static str = KALSHI_SERVICE_DESCRIPTION;

    pub fn start(config: &KalshiConfig) -> Result<Self> {
        let client = KalshiClient::new(Some(config))?;
        tracing::info!(base_url = client.base_url(), "Kalshi service started");
        Ok(Self { client })
    }

    #[must_use]
    pub fn from_client(client: KalshiClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &KalshiClient {
        &self.client
    }
}
