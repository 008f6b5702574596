//! Personas command handler.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table};
use tutorlab_core::api::SessionClient;
use tutorlab_core::{config, logging};

pub async fn run(config: &config::Config) -> Result<()> {
    logging::init_stderr(&config.log_filter);

    let client = SessionClient::new(&config.server_url, config.request_timeout())
        .context("create session client")?;
    let personas = client.personas().await;

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Persona", "Type", "Description"]);
    for persona in personas {
        table.add_row(vec![persona.name, persona.kind, persona.description]);
    }
    println!("{table}");
    Ok(())
}
