//! Client configuration: which domain and API version requests go to.
//!
//! Defaults target production (`mysitoo.com`, `v2`). Host programs can embed
//! `ClientConfig` in their own serde config or read it from the environment.

use serde::Deserialize;

pub const DEFAULT_DOMAIN: &str = "mysitoo.com";
pub const DEFAULT_API_VERSION: &str = "v2";

/// Where requests are sent: `https://api{suffix}.{domain}/{api_version}/...`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub domain: String,
    pub api_version: String,
}

impl ClientConfig {
    /// Read `SITOO_API_DOMAIN` and `SITOO_API_VERSION`, falling back to the
    /// defaults for anything unset or empty.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            domain: env_or("SITOO_API_DOMAIN", defaults.domain),
            api_version: env_or("SITOO_API_VERSION", defaults.api_version),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}
