use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_cookie_days() -> i64 {
    7
}

/// Connection settings for the clinic REST backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_days")]
    pub cookie_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_days: default_cookie_days(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field defaults, so a missing or incomplete file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub session: SessionConfig,
}
