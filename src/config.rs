use crate::keymap::Keymap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Marker file written once the first screen has rendered data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_file: Option<PathBuf>,
    /// Where and how to reach the forum
    #[serde(default)]
    pub forum: ForumConfig,
    /// Keyboard shortcuts (preset + overrides)
    #[serde(default)]
    pub keymap: Keymap,
}

/// Forum connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumConfig {
    /// Forum root, e.g. `https://ethereum-magicians.org`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Discourse API key (sent as `Api-Key`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Discourse API username (sent as `Api-Username`)
    #[serde(default = "default_api_username")]
    pub api_username: String,
    /// Deployed gateway serving `/api/discourse/...`; takes precedence over `base_url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_url: Option<String>,
    /// Controls how long proxied responses may be reused
    #[serde(default)]
    pub deployment: Deployment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    Development,
    #[default]
    Production,
}

impl Deployment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Deployment::Development),
            "production" | "prod" => Some(Deployment::Production),
            _ => None,
        }
    }
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_username: default_api_username(),
            gateway_url: None,
            deployment: Deployment::default(),
        }
    }
}

impl ForumConfig {
    /// Revalidation window for proxied responses.
    pub fn revalidate_window(&self) -> Duration {
        match self.deployment {
            Deployment::Development => Duration::from_secs(10),
            Deployment::Production => Duration::from_secs(60),
        }
    }

    /// True when some proxy can actually reach the forum.
    pub fn is_reachable(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.gateway_url) || (set(&self.base_url) && set(&self.api_key))
    }
}

fn default_api_username() -> String {
    "system".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            ready_file: None,
            forum: ForumConfig::default(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or create (and save) the default one
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;

            if config.forum.api_username.trim().is_empty() {
                config.forum.api_username = default_api_username();
            }
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions (it may hold an API key)
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Apply `DISCOURSE_*` / `FORUMDECK_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup (the process environment in practice).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("DISCOURSE_BASE_URL") {
            self.forum.base_url = Some(url);
        }
        if let Some(key) = get("DISCOURSE_API_KEY") {
            self.forum.api_key = Some(key);
        }
        if let Some(user) = get("DISCOURSE_API_USERNAME") {
            self.forum.api_username = user;
        }
        if let Some(url) = get("FORUMDECK_GATEWAY_URL") {
            self.forum.gateway_url = Some(url);
        }
        if let Some(deployment) = get("FORUMDECK_ENV").and_then(|v| Deployment::parse(&v)) {
            self.forum.deployment = deployment;
        }
        if get("NO_COLOR").is_some() {
            self.theme = "nocolor".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.forum.api_username, "system");
        assert_eq!(config.forum.deployment, Deployment::Production);
        assert!(!config.forum.is_reachable());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.forum.base_url = Some("https://forum.example.org".to_string());
        config.forum.deployment = Deployment::Development;
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.forum, config.forum);
        assert_eq!(loaded.forum.revalidate_window(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_file_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            ("DISCOURSE_BASE_URL", "https://forum.example.org"),
            ("DISCOURSE_API_KEY", "abc"),
            ("DISCOURSE_API_USERNAME", ""),
            ("FORUMDECK_ENV", "dev"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).map(|v| (*v).to_string()));

        assert_eq!(config.forum.base_url.as_deref(), Some("https://forum.example.org"));
        // Blank values are ignored
        assert_eq!(config.forum.api_username, "system");
        assert_eq!(config.forum.deployment, Deployment::Development);
        assert!(config.forum.is_reachable());
    }
}
