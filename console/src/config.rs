// console/src/config.rs

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings for the admin console.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub session_file: String,
    /// Where `/` lands when a session marker is present: "dashboard" or
    /// "login" depending on the deployment.
    pub landing_page: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            api_base_url: "http://localhost:3000".to_string(),
            session_file: ".admin_session.json".to_string(),
            landing_page: "dashboard".to_string(),
        }
    }
}

// Wrapper matching the 'console:' key in console_config.yaml.
#[derive(Debug, Deserialize)]
struct ConsoleConfigWrapper {
    console: ConsoleConfig,
}

/// Loads `console_config.yaml` next to the crate manifest, falling back to
/// defaults when the file does not exist. `CONSOLE_API_BASE_URL` overrides
/// the configured base URL either way.
pub fn load_console_config(config_file_path: Option<PathBuf>) -> Result<ConsoleConfig> {
    let default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("console_config.yaml");
    let path = config_file_path.unwrap_or(default_path);

    let mut config = if path.exists() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read console config file {}", path.display()))?;
        let wrapper: ConsoleConfigWrapper = serde_yaml2::from_str(&raw)
            .with_context(|| format!("Failed to parse console config file {}", path.display()))?;
        wrapper.console
    } else {
        ConsoleConfig::default()
    };

    if let Ok(base_url) = env::var("CONSOLE_API_BASE_URL") {
        config.api_base_url = base_url;
    }

    Ok(config)
}
