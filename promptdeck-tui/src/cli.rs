use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use promptdeck_core::config::CONFIG_TEMPLATE;
use promptdeck_core::shell::DESCRIPTION;
use promptdeck_core::PromptDeckConfig;

#[derive(Parser, Debug)]
#[command(name = "promptdeck", version, about = DESCRIPTION)]
pub struct Cli {
    /// Config file (default: ~/.promptdeck/config.toml)
    #[arg(long, global = true, env = "PROMPTDECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Config path from --config / $PROMPTDECK_CONFIG, else the default
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(PromptDeckConfig::config_path)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default config template
    Init(InitArgs),
    /// Print the effective configuration as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs, config_path: &Path) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args, config_path),
        ConfigCommands::Show => run_show(config_path),
        ConfigCommands::Path => run_path(config_path),
    }
}

fn run_init(args: InitArgs, config_path: &Path) -> Result<()> {
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

    println!("Created config at: {}", config_path.display());
    Ok(())
}

fn run_show(config_path: &Path) -> Result<()> {
    let config = PromptDeckConfig::load_from(config_path)
        .with_context(|| format!("Failed to load config {:?}", config_path))?;
    let favorites = config.favorites_source().favorites()?;

    let effective = PromptDeckConfig {
        favorites: Some(favorites),
        ..config
    };
    print!("{}", effective.to_toml()?);
    Ok(())
}

fn run_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}
