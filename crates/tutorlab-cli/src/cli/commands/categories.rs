//! Scoring categories command handler.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table};
use tutorlab_core::api::SessionClient;
use tutorlab_core::{config, logging};

pub async fn run(config: &config::Config) -> Result<()> {
    logging::init_stderr(&config.log_filter);

    let client = SessionClient::new(&config.server_url, config.request_timeout())
        .context("create session client")?;
    let categories = client
        .scoring_categories()
        .await
        .context("fetch scoring categories")?;

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Key", "Category", "Description"]);
    for category in categories {
        table.add_row(vec![category.key, category.label, category.description]);
    }
    println!("{table}");
    Ok(())
}
