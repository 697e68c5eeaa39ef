use std::sync::Arc;

use axum::Router;
use leadrelay_core::config::{AppConfig, ConfigError, LoadOptions};
use leadrelay_notion::NotionForwarder;
use thiserror::Error;
use tracing::{info, warn};

use crate::{forms, health};

pub struct Application {
    pub config: AppConfig,
    pub router: Router,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client construction failed: {0}")]
    HttpClient(#[source] reqwest::Error),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let forwarder =
        NotionForwarder::from_config(config.notion.clone()).map_err(BootstrapError::HttpClient)?;

    // Missing credentials keep the server up; every forward reports the
    // gap in-band instead.
    if !forwarder.is_configured() {
        warn!(
            event_name = "system.bootstrap.notion_unconfigured",
            "notion credentials are missing; submissions will be accepted but forwarding will fail"
        );
    }

    let router = forms::router(Arc::new(forwarder)).merge(health::router());

    info!(event_name = "system.bootstrap.ready", "application routes assembled");

    Ok(Application { config, router })
}
