use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Display configuration for the entrance screen.
///
/// Everything here is presentation data supplied by the operator composing
/// the entrance into a deployment: the destination core identity, branding
/// text, logo references, and the simulated scan timings. None of it is
/// credential material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Destination core name (e.g. "Phoenix")
    #[serde(default = "default_core_name")]
    pub core_name: String,
    /// Destination core role line (e.g. "Advanced Clinical Node")
    #[serde(default = "default_core_role")]
    pub core_role: String,
    /// Core logo reference (path to an image asset); falls back to the
    /// bundled default when unset
    pub core_logo: Option<String>,
    /// Investor/endorsement logo reference; no fallback, placeholder slots
    /// render when unset
    pub investor_logo: Option<String>,
    /// Suite name shown in the branding block
    #[serde(default = "default_system_name")]
    pub system_name: String,
    /// Strapline under the suite name
    #[serde(default = "default_portal_description")]
    pub portal_description: String,
    /// Simulated biometric scan duration in milliseconds
    #[serde(default = "default_scan_delay_ms")]
    pub scan_delay_ms: u64,
    /// Success-to-handoff transition duration in milliseconds
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,
    /// UI theme ("dark", "light", or "nocolor")
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_core_name() -> String {
    "Phoenix".to_string()
}

fn default_core_role() -> String {
    "Advanced Clinical Node".to_string()
}

fn default_system_name() -> String {
    "Polaris Medico".to_string()
}

fn default_portal_description() -> String {
    "Secure Healthcare Portal".to_string()
}

fn default_scan_delay_ms() -> u64 {
    3500
}

fn default_transition_delay_ms() -> u64 {
    2000
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            core_name: default_core_name(),
            core_role: default_core_role(),
            core_logo: None,
            investor_logo: None,
            system_name: default_system_name(),
            portal_description: default_portal_description(),
            scan_delay_ms: default_scan_delay_ms(),
            transition_delay_ms: default_transition_delay_ms(),
            theme: default_theme(),
        }
    }
}

impl Config {
    /// Load configuration from file or create it with defaults
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // Set secure permissions (600: owner read/write only)
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

    /// Simulated scan duration
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    /// Success-to-handoff transition duration
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.system_name, "Polaris Medico");
        assert_eq!(config.portal_description, "Secure Healthcare Portal");
        assert_eq!(config.scan_delay_ms, 3500);
        assert_eq!(config.transition_delay_ms, 2000);
        assert!(config.core_logo.is_none());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.core_name = "Helios".to_string();
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.core_name, "Helios");
        assert_eq!(loaded.system_name, config.system_name);
    }

    #[test]
    fn test_partial_config_gets_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "core_name = \"Aurora\"\n").unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.core_name, "Aurora");
        assert_eq!(loaded.scan_delay_ms, 3500);
        assert_eq!(loaded.theme, "dark");
    }
}
