//! Health command handler.

use anyhow::{Context, Result};
use tutorlab_core::api::SessionClient;
use tutorlab_core::{config, logging};

pub async fn run(config: &config::Config) -> Result<()> {
    logging::init_stderr(&config.log_filter);

    let client = SessionClient::new(&config.server_url, config.request_timeout())
        .context("create session client")?;
    let health = client
        .health()
        .await
        .with_context(|| format!("backend unreachable at {}", config.server_url))?;

    println!("{} ({})", health.status, health.timestamp);
    Ok(())
}
