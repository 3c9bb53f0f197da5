//! Coffeeshop frontend environment
//!
//! A flat, immutable record carrying the API base URL and the Auth0
//! parameters the frontend's HTTP and auth clients are initialised with.
//! Which variant is compiled in is chosen by the `production` feature.

pub mod environment;
pub mod error;
pub mod settings;
pub mod validation;
pub mod variant;

pub use environment::{Auth0Config, Environment};
pub use error::{Error, Result};
pub use settings::{Auth0Settings, ENV_PREFIX, EnvironmentLoader, EnvironmentSettings};
pub use validation::ValidateEnvironment;
pub use variant::Variant;
