//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shown in the header as `Author/{author}`
    #[serde(default = "default_author")]
    pub author: String,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_port() -> u16 {
    3000
}

fn default_author() -> String {
    "unknown".to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON device array. The bundled sample catalog is used when unset.
    pub path: Option<PathBuf>,
}

pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "device-catalog", "device-catalog")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_dir())
}

pub fn load_config_from(config_dir: &std::path::Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 3000)?
        .set_default("author", default_author())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (DEVCAT_PORT, DEVCAT_CATALOG__PATH, etc.)
        .add_source(
            ::config::Environment::with_prefix("DEVCAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["DEVCAT_PORT", "DEVCAT_AUTHOR", "DEVCAT_CATALOG__PATH"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.author, "unknown");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    #[serial]
    fn test_file_then_env_override() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "port = 8080\nauthor = \"ops\"\n\n[catalog]\npath = \"/srv/devices.json\"\n",
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.author, "ops");
        assert_eq!(
            config.catalog.path.as_deref(),
            Some(std::path::Path::new("/srv/devices.json"))
        );

        std::env::set_var("DEVCAT_PORT", "9090");
        std::env::set_var("DEVCAT_AUTHOR", "jane");
        let config = load_config_from(dir.path()).unwrap();
        clear_env();

        assert_eq!(config.port, 9090);
        assert_eq!(config.author, "jane");
    }
}
