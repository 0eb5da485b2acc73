use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{KvPeekError, Result};

/// Tool configuration, loaded from `config.toml`.
///
/// Every field has a sensible default so kvpeek works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Accounts endpoint of the Cloudflare v4 API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upper bound on key-listing pages fetched for one namespace.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// How many suggestions the picker shows at once.
    #[serde(default = "default_prompt_limit")]
    pub prompt_limit: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_api_base_url() -> String {
    "https://api.cloudflare.com/client/v4/accounts".to_string()
}

fn default_max_pages() -> usize {
    10_000
}

fn default_prompt_limit() -> usize {
    10
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            max_pages: default_max_pages(),
            prompt_limit: default_prompt_limit(),
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            KvPeekError::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// `$HOME/.config/kvpeek/config.toml`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("kvpeek")
                .join("config.toml"),
        )
    }

    fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(KvPeekError::ConfigError(
                "api_base_url cannot be empty".into(),
            ));
        }
        if self.max_pages == 0 {
            return Err(KvPeekError::ConfigError(
                "max_pages must be at least 1".into(),
            ));
        }
        if self.prompt_limit == 0 {
            return Err(KvPeekError::ConfigError(
                "prompt_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(
            s.api_base_url,
            "https://api.cloudflare.com/client/v4/accounts"
        );
        assert_eq!(s.max_pages, 10_000);
        assert_eq!(s.prompt_limit, 10);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(settings.prompt_limit, 10);
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        let config = r#"
api_base_url = "http://127.0.0.1:8787/accounts"
max_pages = 50
prompt_limit = 20
"#;
        fs::write(&path, config).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.api_base_url, "http://127.0.0.1:8787/accounts");
        assert_eq!(settings.max_pages, 50);
        assert_eq!(settings.prompt_limit, 20);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "max_pages = 3\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.max_pages, 3);
        assert_eq!(settings.prompt_limit, 10);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "not valid {{toml").unwrap();

        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn load_rejects_zero_limits() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        fs::write(&path, "max_pages = 0\n").unwrap();
        assert!(Settings::load(&path).is_err());

        fs::write(&path, "prompt_limit = 0\n").unwrap();
        assert!(Settings::load(&path).is_err());
    }
}
