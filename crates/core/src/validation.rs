//! Opt-in validation of environment values
//!
//! Loading never validates. Malformed values otherwise surface only when the
//! HTTP or auth client first uses them.

use crate::{Auth0Config, Environment, Result};

/// Trait for checking an environment before handing it to consumers
pub trait ValidateEnvironment {
    /// Returns Ok(()) if valid, or an error naming the first bad field
    fn validate(&self) -> Result<()>;
}

impl ValidateEnvironment for Environment {
    fn validate(&self) -> Result<()> {
        validators::validate_url(&self.api_server_url, "api_server_url")?;
        self.auth0.validate()
    }
}

impl ValidateEnvironment for Auth0Config {
    fn validate(&self) -> Result<()> {
        validators::validate_not_empty(&self.domain, "auth0.domain")?;
        validators::validate_no_scheme(&self.domain, "auth0.domain")?;
        validators::validate_not_empty(&self.audience, "auth0.audience")?;
        validators::validate_not_empty(&self.client_id, "auth0.client_id")?;
        validators::validate_url(&self.callback_url, "auth0.callback_url")
    }
}

/// Common validation helpers
pub mod validators {
    use crate::{Error, Result};

    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field: &'static str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::invalid(field, "cannot be empty"));
        }
        Ok(())
    }

    /// Validate URL format
    pub fn validate_url(value: &str, field: &'static str) -> Result<()> {
        url::Url::parse(value).map_err(|source| Error::InvalidUrl { field, source })?;
        Ok(())
    }

    /// Validate that a host-like value carries no URL scheme
    pub fn validate_no_scheme(value: &str, field: &'static str) -> Result<()> {
        if value.contains("://") {
            return Err(Error::invalid(field, "expected a domain, not a URL"));
        }
        Ok(())
    }
}
