use crate::data::DEFAULT_REGION;
use crate::storage::{default_data_dir, CONFIG_FILENAME};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub data_dir: Option<PathBuf>,
    pub config_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub log_level: String,
    pub default_region: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub storage: StorageSettings,
    pub app: AppSettings,
}

impl Settings {
    /// Defaults, then `config/ikisky.{toml,json,...}` if present, then
    /// `IKISKY__SECTION__KEY` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("storage.config_file", CONFIG_FILENAME)?
            .set_default("app.log_level", "info")?
            .set_default("app.default_region", DEFAULT_REGION)?
            .add_source(File::with_name("config/ikisky").required(false))
            .add_source(Environment::with_prefix("IKISKY").separator("__"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    pub fn config_path(&self) -> PathBuf {
        let dir = match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir(),
        };
        dir.join(&self.storage.config_file)
    }
}

fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    if settings.storage.config_file.trim().is_empty() {
        return Err(ConfigError::Message(
            "storage.config_file must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const DATA_DIR_VAR: &str = "IKISKY__STORAGE__DATA_DIR";
    const REGION_VAR: &str = "IKISKY__APP__DEFAULT_REGION";
    const CONFIG_FILE_VAR: &str = "IKISKY__STORAGE__CONFIG_FILE";

    #[test]
    #[serial]
    fn test_defaults() {
        env::remove_var(DATA_DIR_VAR);
        env::remove_var(REGION_VAR);
        env::remove_var(CONFIG_FILE_VAR);

        let settings = Settings::new().unwrap();
        assert_eq!(settings.storage.config_file, "vpn_config.json");
        assert_eq!(settings.storage.data_dir, None);
        assert_eq!(settings.app.default_region, "USA");
        assert_eq!(settings.app.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        let dir = tempfile::tempdir().unwrap();
        env::set_var(DATA_DIR_VAR, dir.path());
        env::set_var(REGION_VAR, "JAPAN");
        env::remove_var(CONFIG_FILE_VAR);

        let settings = Settings::new();

        env::remove_var(DATA_DIR_VAR);
        env::remove_var(REGION_VAR);

        let settings = settings.unwrap();
        assert_eq!(settings.app.default_region, "JAPAN");
        assert_eq!(settings.config_path(), dir.path().join("vpn_config.json"));
    }
}
