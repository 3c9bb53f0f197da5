//! Layered loading of an environment
//!
//! The built-in record of a variant is the lowest layer. A config file and
//! `COFFEESHOP_*` environment variables can override individual fields
//! without rebuilding the frontend.

use crate::{Auth0Config, Environment, Error, Result, Variant};
use config::{Config, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix of environment variables read by the loader
pub const ENV_PREFIX: &str = "COFFEESHOP";

/// File schema of an environment.
///
/// Keys are snake_case so they survive the loader's case folding; this is
/// also the layout written by [`EnvironmentSettings::write_to_file`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSettings {
    pub production: bool,
    pub api_server_url: String,
    pub auth0: Auth0Settings,
}

/// File schema of the Auth0 section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth0Settings {
    pub domain: String,
    pub audience: String,
    pub client_id: String,
    pub callback_url: String,
}

impl From<&Environment> for EnvironmentSettings {
    fn from(env: &Environment) -> Self {
        Self {
            production: env.production,
            api_server_url: env.api_server_url.clone(),
            auth0: Auth0Settings {
                domain: env.auth0.domain.clone(),
                audience: env.auth0.audience.clone(),
                client_id: env.auth0.client_id.clone(),
                callback_url: env.auth0.callback_url.clone(),
            },
        }
    }
}

impl From<EnvironmentSettings> for Environment {
    fn from(settings: EnvironmentSettings) -> Self {
        Self {
            production: settings.production,
            api_server_url: settings.api_server_url,
            auth0: Auth0Config {
                domain: settings.auth0.domain,
                audience: settings.auth0.audience,
                client_id: settings.auth0.client_id,
                callback_url: settings.auth0.callback_url,
            },
        }
    }
}

impl EnvironmentSettings {
    /// Render as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to a file, picking the format from its extension.
    ///
    /// Only `.toml` and `.json` are written, so the file can be loaded back.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => self.to_toml()?,
            Some(other) => {
                return Err(Error::invalid(
                    "path",
                    format!("unsupported extension '.{other}', use .toml or .json"),
                ));
            }
            None => {
                return Err(Error::invalid(
                    "path",
                    "missing file extension, use .toml or .json",
                ));
            }
        };
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "Wrote environment settings");
        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Builds an [`Environment`] from layered sources
#[derive(Debug, Clone, Default)]
pub struct EnvironmentLoader {
    variant: Variant,
    file: Option<PathBuf>,
    env_vars: Option<Map<String, String>>,
    skip_env: bool,
}

impl EnvironmentLoader {
    /// Loader starting from the build-time variant
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from another variant's built-in record
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Layer a config file over the built-in record. The file must exist.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Read overrides from this map instead of the process environment
    #[must_use]
    pub fn env_vars(mut self, vars: Map<String, String>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    /// Ignore environment variable overrides entirely
    #[must_use]
    pub fn without_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Resolve all layers into an environment.
    ///
    /// Values are not validated; see [`crate::ValidateEnvironment`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value has the wrong type
    pub fn load(&self) -> Result<Environment> {
        let defaults = EnvironmentSettings::from(&Environment::for_variant(self.variant));
        debug!(variant = %self.variant, "Loading environment");

        let mut builder = Config::builder().add_source(Config::try_from(&defaults)?);

        if let Some(path) = &self.file {
            debug!(path = %path.display(), "Adding environment file");
            builder = builder.add_source(File::from(path.as_path()));
        }

        if !self.skip_env {
            builder = builder.add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(self.env_vars.clone()),
            );
        }

        let settings: EnvironmentSettings = builder.build()?.try_deserialize()?;
        let env = Environment::from(settings);
        debug!(
            production = env.production,
            api_server_url = %env.api_server_url,
            "Environment loaded"
        );
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_only() {
        let env = EnvironmentLoader::new()
            .variant(Variant::Production)
            .without_env()
            .load()
            .unwrap();
        assert_eq!(env, Environment::for_variant(Variant::Production));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = temp_file(
            ".toml",
            r#"
api_server_url = "https://api.coffeeshop.test"

[auth0]
client_id = "abc123"
"#,
        );

        let env = EnvironmentLoader::new()
            .variant(Variant::Development)
            .file(file.path())
            .without_env()
            .load()
            .unwrap();

        assert_eq!(env.api_server_url, "https://api.coffeeshop.test");
        assert_eq!(env.auth0.client_id, "abc123");
        assert_eq!(env.auth0.domain, "oak06.eu");
        assert!(!env.production);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = temp_file(
            ".json",
            r#"{"api_server_url": "https://from-file.test", "auth0": {"audience": "file"}}"#,
        );

        let env = EnvironmentLoader::new()
            .variant(Variant::Development)
            .file(file.path())
            .env_vars(vars(&[
                ("COFFEESHOP_API_SERVER_URL", "https://from-env.test"),
                ("COFFEESHOP_AUTH0__CALLBACK_URL", "https://app.test/callback"),
                ("COFFEESHOP_PRODUCTION", "true"),
                ("UNRELATED", "ignored"),
            ]))
            .load()
            .unwrap();

        assert_eq!(env.api_server_url, "https://from-env.test");
        assert_eq!(env.auth0.callback_url, "https://app.test/callback");
        assert_eq!(env.auth0.audience, "file");
        assert!(env.production);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = EnvironmentLoader::new()
            .file("/nonexistent/coffeeshop.toml")
            .without_env()
            .load();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let file = temp_file(".toml", "production = \"sometimes\"\n");
        let result = EnvironmentLoader::new()
            .file(file.path())
            .without_env()
            .load();
        assert!(result.is_err());
    }

    #[test]
    fn test_loader_does_not_validate() {
        let file = temp_file(".yaml", "api_server_url: not a url\n");
        let env = EnvironmentLoader::new()
            .file(file.path())
            .without_env()
            .load()
            .unwrap();
        assert_eq!(env.api_server_url, "not a url");
    }

    #[test]
    fn test_env_strings_kept_verbatim() {
        let env = EnvironmentLoader::new()
            .variant(Variant::Development)
            .env_vars(vars(&[
                ("COFFEESHOP_AUTH0__CLIENT_ID", "007"),
                ("COFFEESHOP_AUTH0__AUDIENCE", "1e3"),
                ("COFFEESHOP_API_SERVER_URL", "12345"),
            ]))
            .load()
            .unwrap();

        assert_eq!(env.auth0.client_id, "007");
        assert_eq!(env.auth0.audience, "1e3");
        assert_eq!(env.api_server_url, "12345");
        assert!(!env.production);
    }

    #[test]
    fn test_written_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = EnvironmentSettings::from(&Environment::for_variant(Variant::Production));
        settings.auth0.audience = "https://written".to_string();

        for name in ["env.toml", "env.json"] {
            let path = dir.path().join(name);
            settings.write_to_file(&path).unwrap();

            let env = EnvironmentLoader::new()
                .variant(Variant::Development)
                .file(&path)
                .without_env()
                .load()
                .unwrap();
            assert!(env.production);
            assert_eq!(env.auth0.audience, "https://written");
        }
    }

    #[test]
    fn test_yaml_output_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let settings = EnvironmentSettings::from(Environment::current());
        let result = settings.write_to_file(dir.path().join("env.yaml"));
        assert!(matches!(result, Err(Error::Invalid { field: "path", .. })));
    }

    #[test]
    fn test_unknown_or_missing_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let settings = EnvironmentSettings::from(Environment::current());

        for name in ["env.conf", "env"] {
            let path = dir.path().join(name);
            let result = settings.write_to_file(&path);
            assert!(matches!(result, Err(Error::Invalid { field: "path", .. })));
            assert!(!path.exists());
        }
    }
}
