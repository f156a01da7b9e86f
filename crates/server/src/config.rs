use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Safe to call
/// multiple times — only the first call has effect.
///
/// If the file is missing or unparseable the defaults apply. The
/// `CLINIC_BACKEND_URL` env var overrides the configured backend URL.
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("[config] Failed to parse {CONFIG_PATH}: {e} — using defaults");
                AppConfig::default()
            }),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}) — using defaults");
                AppConfig::default()
            }
        };
        if let Ok(url) = std::env::var("CLINIC_BACKEND_URL") {
            if !url.is_empty() {
                config.backend.base_url = url;
            }
        }
        eprintln!("[config] Backend: {}", config.backend.base_url);
        config
    });
}

/// Get the loaded configuration. Returns defaults if `load_config()` hasn't
/// been called yet (safe fallback).
pub fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
