//! Environment loading and generation for CLI commands

use anyhow::{Context, Result};
use coffeeshop_core::{Environment, EnvironmentLoader, EnvironmentSettings, Variant};
use std::path::Path;
use tracing::info;

/// Load the environment the CLI operates on
pub fn load_environment(variant: Variant, file: Option<&Path>) -> Result<Environment> {
    let mut loader = EnvironmentLoader::new().variant(variant);
    if let Some(path) = file {
        loader = loader.file(path);
    }
    loader.load().with_context(|| match file {
        Some(path) => format!("failed to load environment from {}", path.display()),
        None => format!("failed to load {variant} environment"),
    })
}

/// Write the built-in record of a variant as a config file
pub fn generate_environment_file<P: AsRef<Path>>(variant: Variant, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    EnvironmentSettings::from(&Environment::for_variant(variant))
        .write_to_file(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(variant = %variant, path = %path.display(), "Generated environment file");
    Ok(())
}
