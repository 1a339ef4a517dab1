use anyhow::{Context, Result};
use clap::Parser;
use promptdeck_core::PromptDeckConfig;
use promptdeck_tui::cli::{self, Cli, Commands};
use promptdeck_tui::tracing_setup::{self, TracingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    if let Some(Commands::Config(args)) = cli.command {
        return cli::run_config(args, &config_path);
    }

    let config = PromptDeckConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config {:?}", config_path))?;

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        log_file: config.log_file(),
    })?;
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    promptdeck_tui::run(config).await
}
