//! The environment record handed to the frontend's HTTP and auth clients

use crate::{Error, Result, Variant};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

const API_SERVER_URL: &str = "http://127.0.0.1:5000";
const AUTH0_DOMAIN: &str = "oak06.eu";
const AUTH0_AUDIENCE: &str = "https://coffeeshop";
const AUTH0_CLIENT_ID: &str = "Dam8BQ1cR2E3rUJ0QUcxULxIkPbIlFN3";
const AUTH0_CALLBACK_URL: &str = "http://localhost:8100";

/// Hosted Auth0 tenants live under this suffix
const AUTH0_HOST_SUFFIX: &str = ".auth0.com";

static CURRENT: Lazy<Environment> = Lazy::new(|| Environment::for_variant(Variant::ACTIVE));

/// Frontend environment
///
/// Serializes to the shape the frontend consumes:
///
/// ```json
/// {
///   "production": false,
///   "apiServerUrl": "http://127.0.0.1:5000",
///   "auth0": { "url": "...", "audience": "...", "clientId": "...", "callbackURL": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Environment {
    /// Build variant flag, not interpreted here
    pub production: bool,

    /// Base URL of the backend API
    pub api_server_url: String,

    /// Identity provider parameters
    pub auth0: Auth0Config,
}

/// Auth0 parameters used to initialise the auth client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Config {
    /// Tenant domain prefix, e.g. `oak06.eu`
    #[serde(rename = "url")]
    pub domain: String,

    /// API identifier issued tokens must target
    pub audience: String,

    /// Public client identifier of the registered application
    #[serde(rename = "clientId")]
    pub client_id: String,

    /// Where the identity provider redirects after login
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl Environment {
    /// The record selected at build time.
    ///
    /// Initialised on first access and shared for the rest of the process.
    pub fn current() -> &'static Self {
        &CURRENT
    }

    /// Built-in record for a variant
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            production: variant.is_production(),
            api_server_url: API_SERVER_URL.to_string(),
            auth0: Auth0Config {
                domain: AUTH0_DOMAIN.to_string(),
                audience: AUTH0_AUDIENCE.to_string(),
                client_id: AUTH0_CLIENT_ID.to_string(),
                callback_url: AUTH0_CALLBACK_URL.to_string(),
            },
        }
    }

    /// Variant implied by the `production` flag
    pub fn variant(&self) -> Variant {
        Variant::from(self.production)
    }

    /// Parse a record in the frontend shape
    ///
    /// # Errors
    ///
    /// Returns an error if a field is missing, unknown or of the wrong type
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve an API path against `api_server_url`.
    ///
    /// A leading slash is ignored so the base path is kept, i.e.
    /// `http://host/api` + `/drinks` gives `http://host/api/drinks`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or cannot carry a path
    pub fn api_url(&self, path: &str) -> Result<Url> {
        let mut base = Url::parse(&self.api_server_url).map_err(|source| Error::InvalidUrl {
            field: "api_server_url",
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::invalid(
                "api_server_url",
                "URL cannot be used as a base",
            ));
        }
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        base.join(path.trim_start_matches('/'))
            .map_err(|source| Error::InvalidUrl {
                field: "api_server_url",
                source,
            })
    }
}

impl Auth0Config {
    /// Host name of the tenant, expanding a bare domain prefix
    pub fn tenant_host(&self) -> String {
        let domain = self.domain.trim().trim_end_matches('/');
        if domain.ends_with(AUTH0_HOST_SUFFIX) {
            domain.to_string()
        } else {
            format!("{domain}{AUTH0_HOST_SUFFIX}")
        }
    }

    /// Issuer URL tokens from this tenant carry
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_host())
    }
}
