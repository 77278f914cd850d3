//! `causal-memory`: command-line front end for the causal memory.
//!
//! Usage:
//!   causal-memory link <cause> <cause_type> <effect> <effect_type> [weight]
//!   causal-memory process <text> [feedback]
//!   causal-memory verify <text>
//!   causal-memory innovate <start> <target> [--forbid NODE]...
//!   causal-memory confidence

mod cli;
mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use causal_core::CausalMemoryConfig;

use cli::Cli;

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "CAUSAL_MEMORY_CONFIG";

fn load_config(cli: &Cli) -> Result<CausalMemoryConfig> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let mut config = match path {
        Some(path) => CausalMemoryConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CausalMemoryConfig::default(),
    };
    if let Some(db) = &cli.db {
        config.storage.db_path = Some(db.to_string_lossy().into_owned());
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    causal_observability::init_tracing(&config.observability)?;

    let output = commands::execute(cli.command, &config, cli.json)?;
    println!("{output}");
    Ok(())
}
