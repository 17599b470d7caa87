#![allow(missing_docs)]
//! Plugin registration.
//!
//! The host implements [`PluginHost`]; [`KalshiPlugin::install`] hands it the
//! tool set and a started [`KalshiService`] when the `kalshi` section is
//! present in the plugin config.

use crate::actions::{get_tools, KalshiTool};
use crate::config::PluginConfig;
use crate::error::Result;
use crate::service::KalshiService;
use crate::{PLUGIN_DESCRIPTION, PLUGIN_NAME, PLUGIN_VERSION};

/// What the plugin needs from the host application.
pub trait PluginHost {
    fn add_tools(&mut self, tools: Vec<Box<dyn KalshiTool>>);

    fn add_service(&mut self, service: KalshiService);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KalshiPlugin;

impl KalshiPlugin {
    pub const NAME: &'static str = PLUGIN_NAME;
    pub const VERSION: &'static str = PLUGIN_VERSION;
    pub const DESCRIPTION: &'static str = PLUGIN_DESCRIPTION;

    /// Register tools and the Kalshi service with `host`.
    ///
    /// Returns `false` and touches nothing when Kalshi is not configured.
    pub fn install(host: &mut dyn PluginHost, config: &PluginConfig) -> Result<bool> {
        let Some(kalshi) = config.kalshi.as_ref() else {
            tracing::debug!("Kalshi config absent; skipping plugin install");
            return Ok(false);
        };

        let service = KalshiService::start(kalshi)?;
        host.add_tools(get_tools());
        host.add_service(service);

        tracing::info!(plugin = Self::NAME, version = Self::VERSION, "Plugin installed");
        Ok(true)
    }
}
