//! CLI commands

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use coffeeshop_core::{EnvironmentSettings, ValidateEnvironment, Variant};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved environment
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Load the environment and validate its values
    Check,

    /// Write the built-in environment of a variant to a file
    Generate {
        /// Output file path (.toml or .json)
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Frontend shape (camelCase keys)
    Json,
    /// Config file layout (snake_case keys)
    Toml,
}

impl Commands {
    pub fn execute(
        self,
        variant: Variant,
        config_file: Option<&Path>,
        out: &mut impl Write,
    ) -> Result<()> {
        match self {
            Self::Show { format } => {
                let env = config::load_environment(variant, config_file)?;
                let rendered = match format {
                    OutputFormat::Json => env.to_json_pretty()?,
                    OutputFormat::Toml => EnvironmentSettings::from(&env).to_toml()?,
                };
                writeln!(out, "{}", rendered.trim_end())?;
            }
            Self::Check => {
                let env = config::load_environment(variant, config_file)?;
                env.validate().context("environment is invalid")?;
                info!(variant = %env.variant(), "Environment is valid");
                writeln!(
                    out,
                    "{} environment OK (api: {}, tenant: {})",
                    env.variant(),
                    env.api_server_url,
                    env.auth0.tenant_host()
                )?;
            }
            Self::Generate { output } => {
                config::generate_environment_file(variant, &output)?;
                writeln!(out, "Wrote {variant} environment to {}", output.display())?;
            }
        }
        Ok(())
    }
}
