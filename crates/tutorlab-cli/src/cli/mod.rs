//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use tutorlab_core::{config, interrupt};
use tutorlab_tui::SetupPrefill;

mod commands;

#[derive(Parser)]
#[command(name = "tutorlab")]
#[command(version)]
#[command(about = "Terminal client for the tutorlab tutor-training service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the backend base URL from config
    #[arg(long, value_name = "URL", global = true)]
    server: Option<String>,

    #[command(flatten)]
    session_args: SessionArgs,
}

/// Session prefill arguments, shared by bare `tutorlab` and `tutorlab chat`.
#[derive(clap::Args, Debug, Clone, Default)]
struct SessionArgs {
    /// Tutor display name (skips the config prefill)
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Math problem to pre-fill on the setup screen
    #[arg(long, value_name = "PROBLEM")]
    problem: Option<String>,

    /// Learner persona to pre-select (e.g. struggling_sam)
    #[arg(long, value_name = "PERSONA")]
    persona: Option<String>,
}

impl From<SessionArgs> for SetupPrefill {
    fn from(args: SessionArgs) -> Self {
        SetupPrefill {
            tutor_name: args.name,
            math_problem: args.problem,
            persona: args.persona,
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Start an interactive tutoring session (default)
    Chat {
        #[command(flatten)]
        session_args: SessionArgs,
    },

    /// List the available learner personas
    Personas,

    /// List the scoring rubric categories
    Categories,

    /// Check that the backend is reachable
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;

    if let Some(server) = cli.server.as_deref() {
        config.server_url = server.trim_end_matches('/').to_string();
    }

    let Cli {
        command,
        server: _,
        session_args,
    } = cli;

    // default to chat mode
    let Some(command) = command else {
        return commands::chat::run(config, session_args.into()).await;
    };

    match command {
        Commands::Chat { session_args } => commands::chat::run(config, session_args.into()).await,
        Commands::Personas => commands::personas::run(&config).await,
        Commands::Categories => commands::categories::run(&config).await,
        Commands::Health => commands::health::run(&config).await,
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
