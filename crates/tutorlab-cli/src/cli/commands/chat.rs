//! Chat command handler.

use anyhow::{Context, Result};
use tutorlab_core::{config, logging};
use tutorlab_tui::SetupPrefill;

pub async fn run(config: config::Config, prefill: SetupPrefill) -> Result<()> {
    // Chat mode logs to a file; stderr would corrupt the alternate screen.
    let _guard = logging::init_file(&config.log_filter).context("init logging")?;

    tutorlab_tui::run_chat(config, prefill)
        .await
        .context("interactive session failed")
}
