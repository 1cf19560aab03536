use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_PAGE_SIZE;

/// Default config file path.
pub const CONFIG_PATH: &str = "config.toml";

/// Top-level application config deserialized from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub account: AccountConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// Account credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Bearer token sent on every API request.
    pub auth_token: String,
}

/// Runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Page size for match listings when the CLI isn't given one.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Load config from the given TOML file path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Write config to the given TOML file path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_when_section_missing() {
        let config: AppConfig = toml::from_str("[account]\nauth_token = \"t\"\n").unwrap();
        assert_eq!(config.settings.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.account.auth_token, "t");
    }

    #[test]
    fn round_trip() {
        let config: AppConfig =
            toml::from_str("[account]\nauth_token = \"t\"\n\n[settings]\npage_size = 5\n").unwrap();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.settings.page_size, 5);
    }
}
