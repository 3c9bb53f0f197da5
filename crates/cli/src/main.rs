//! Coffeeshop CLI - inspect and generate frontend environments

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use coffeeshop_core::Variant;
use commands::Commands;
use std::path::PathBuf;
use tracing::{Level, debug, error};

#[derive(Parser)]
#[command(name = "coffeeshop")]
#[command(about = "Inspect and generate Coffeeshop frontend environments")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Environment variant (defaults to the one this binary was built with)
    #[arg(short = 'v', long, global = true, value_enum)]
    variant: Option<VariantArg>,

    /// Config file layered over the built-in environment
    #[arg(short = 'c', long, global = true, env = "COFFEESHOP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.into())?;

    let variant = cli.variant.map_or(Variant::ACTIVE, Variant::from);
    debug!(%variant, "Starting Coffeeshop CLI");

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli
        .command
        .execute(variant, cli.config.as_deref(), &mut stdout)
    {
        error!("Command failed: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    #[value(alias = "dev")]
    Development,
    #[value(alias = "prod")]
    Production,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Development => Variant::Development,
            VariantArg::Production => Variant::Production,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
