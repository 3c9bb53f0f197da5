//! Build variants of the frontend environment

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which flavour of the environment a build carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Development,
    Production,
}

impl Variant {
    /// Variant selected when this crate was compiled.
    ///
    /// Building with the `production` feature swaps in the production record.
    pub const ACTIVE: Self = if cfg!(feature = "production") {
        Self::Production
    } else {
        Self::Development
    };

    /// Both variants, development first
    pub const ALL: [Self; 2] = [Self::Development, Self::Production];

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::ACTIVE
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

impl From<bool> for Variant {
    fn from(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }
}
