// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

pub fn default_listing_url() -> String {
    "http://localhost:5328/api/schools".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_listing_url")]
    pub listing_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        // Explicitly detect missing file so callers (onboarding) can behave accordingly.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Helper to detect whether an anyhow::Error indicates that the config
    /// file was missing, as opposed to a syntax or permission error.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        log::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Get the path string using an explicit context.
    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn test_round_trip() {
        let ctx = TestContext::new();
        let cfg = Config {
            listing_url: "https://schools.example.org/api/schools".to_string(),
        };
        cfg.save(&ctx).unwrap();

        let loaded = Config::load(&ctx).unwrap();
        assert_eq!(loaded.listing_url, cfg.listing_url);
    }

    #[test]
    fn test_missing_config_detected() {
        let ctx = TestContext::new();
        let err = Config::load(&ctx).unwrap_err();
        assert!(Config::is_missing_config_error(&err));
    }

    #[test]
    fn test_parse_error_is_not_missing() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        std::fs::write(&path, "listing_url = [not toml").unwrap();

        let err = Config::load(&ctx).unwrap_err();
        assert!(!Config::is_missing_config_error(&err));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.listing_url, default_listing_url());
    }
}
