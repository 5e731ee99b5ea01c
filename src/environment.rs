//! Build environment selection
//!
//! The environment is resolved exactly once per invocation and then passed by value to
//! every component that needs it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variables consulted, in order, when resolving the environment
pub const ENVIRONMENT_VARS: [&str; 2] = ["PACKPLAN_ENV", "NODE_ENV"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Folds any raw value into an environment. Only the exact value `production`
    /// selects production.
    pub fn from_value(value: &str) -> Self {
        match value {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Resolves the environment from `PACKPLAN_ENV`, then `NODE_ENV`. Empty values count
    /// as unset.
    pub fn from_env() -> Self {
        ENVIRONMENT_VARS
            .iter()
            .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing, used for explicit CLI values where a typo should be reported
impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!(
                "Invalid environment: {}. Valid options: development, production",
                other
            )),
        }
    }
}
