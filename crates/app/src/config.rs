use std::path::PathBuf;

use clap::Args;
use engine::{DEFAULT_CONFIG_DIR, ScanPolicy};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/commodity.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root folder of the vault.
    pub vault: PathBuf,
    /// Configuration folder inside the vault.
    pub config_dir: String,
    /// Where settings and wallet live. Defaults to the plugin data file
    /// inside the configuration folder.
    pub settings_path: Option<PathBuf>,
    pub level: String,
    pub skip_unreadable: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vault: PathBuf::from("."),
            config_dir: DEFAULT_CONFIG_DIR.to_string(),
            settings_path: None,
            level: "info".to_string(),
            skip_unreadable: false,
        }
    }
}

impl AppConfig {
    pub fn settings_path(&self) -> PathBuf {
        self.settings_path.clone().unwrap_or_else(|| {
            self.vault
                .join(&self.config_dir)
                .join("plugins")
                .join("commodity")
                .join("data.json")
        })
    }

    pub fn scan_policy(&self) -> ScanPolicy {
        if self.skip_unreadable {
            ScanPolicy::SkipUnreadable
        } else {
            ScanPolicy::Strict
        }
    }
}

/// Command line overrides, applied on top of the file and the environment.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override the vault folder.
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,
    /// Override the configuration folder name inside the vault.
    #[arg(long, global = true)]
    pub config_dir: Option<String>,
    /// Override the settings file path.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
    /// Override the log level (e.g. debug).
    #[arg(long, global = true)]
    pub level: Option<String>,
    /// Skip notes that cannot be read instead of failing.
    #[arg(long, global = true)]
    pub skip_unreadable: bool,
}

pub fn load(overrides: &Overrides) -> Result<AppConfig> {
    let config_path = overrides.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("COMMODITY").try_parsing(true));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(vault) = &overrides.vault {
        settings.vault = vault.clone();
    }
    if let Some(config_dir) = &overrides.config_dir {
        settings.config_dir = config_dir.clone();
    }
    if let Some(path) = &overrides.settings {
        settings.settings_path = Some(path.clone());
    }
    if let Some(level) = &overrides.level {
        settings.level = level.clone();
    }
    if overrides.skip_unreadable {
        settings.skip_unreadable = true;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn default_settings_path_is_inside_config_dir() {
        let config = AppConfig {
            vault: PathBuf::from("/notes"),
            ..AppConfig::default()
        };
        assert_eq!(
            config.settings_path(),
            PathBuf::from("/notes/.obsidian/plugins/commodity/data.json")
        );
        assert_eq!(config.scan_policy(), ScanPolicy::Strict);
    }

    #[test]
    fn file_values_are_overridden_by_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("commodity.toml");
        fs::write(
            &path,
            "vault = \"/from/file\"\nlevel = \"debug\"\nskip_unreadable = false\n",
        )
        .unwrap();

        let overrides = Overrides {
            config: Some(path.to_string_lossy().into_owned()),
            vault: Some(PathBuf::from("/from/flag")),
            skip_unreadable: true,
            ..Overrides::default()
        };
        let config = load(&overrides).unwrap();
        assert_eq!(config.vault, PathBuf::from("/from/flag"));
        assert_eq!(config.level, "debug");
        assert_eq!(config.config_dir, ".obsidian");
        assert_eq!(config.scan_policy(), ScanPolicy::SkipUnreadable);
    }
}
