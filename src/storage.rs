use crate::error::AppError;
use chrono::Local;
use directories::ProjectDirs;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub const CONFIG_FILENAME: &str = "vpn_config.json";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The single persisted configuration entry. Both fields are absent until
/// the first successful save.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq, Clone)]
pub struct ConfigRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub created_at: Option<String>,
}

/// A timestamp of the wrong type is dropped rather than failing the record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_string)))
}

impl ConfigRecord {
    pub fn new(config: impl Into<String>) -> Self {
        Self {
            config: Some(config.into()),
            created_at: Some(Local::now().format(TIMESTAMP_FORMAT).to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.config.as_deref().map_or(true, str::is_empty)
    }
}

pub fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ikisky", "IKISKY") {
        let data_dir = proj_dirs.data_dir();
        if !data_dir.exists() {
            let _ = fs::create_dir_all(data_dir);
        }
        return data_dir.to_path_buf();
    }

    std::env::current_dir().unwrap_or_default()
}

pub fn default_config_path() -> PathBuf {
    default_data_dir().join(CONFIG_FILENAME)
}

/// Single-slot, file-backed storage for the pasted VPN configuration.
///
/// Reads never fail: a missing or unreadable file is the same as no
/// configuration. Writes report failure so the caller can ask the user to
/// try again.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    record: ConfigRecord,
}

impl ConfigStore {
    /// Opens the store at `path` and loads whatever is already there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            record: ConfigRecord::default(),
        };
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &ConfigRecord {
        &self.record
    }

    /// Re-reads the backing file, replacing the in-memory record.
    pub fn load(&mut self) -> &ConfigRecord {
        self.record = read_record(&self.path);
        &self.record
    }

    pub fn try_save(&mut self, config: &str) -> Result<(), AppError> {
        let record = ConfigRecord::new(config);
        to_pretty_json(&record)
            .map_err(io::Error::other)
            .and_then(|json| fs::write(&self.path, json))
            .map_err(|source| AppError::SaveFailed {
                path: self.path.clone(),
                source,
            })?;
        info!("Saved configuration to {:?}", self.path);
        self.record = record;
        Ok(())
    }

    /// Replaces the stored record. Returns `false` if the file could not be
    /// written, in which case the previous record stays loaded.
    pub fn save(&mut self, config: &str) -> bool {
        match self.try_save(config) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save config at {:?}: {}", self.path, e);
                false
            }
        }
    }

    pub fn has_config(&self) -> bool {
        !self.record.is_empty()
    }

    pub fn get_config(&self) -> &str {
        self.record.config.as_deref().unwrap_or_default()
    }

    pub fn created_at(&self) -> Option<&str> {
        self.record.created_at.as_deref()
    }
}

fn read_record(path: &Path) -> ConfigRecord {
    match fs::read_to_string(path) {
        Ok(contents) => match parse_record(&contents) {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to parse config at {:?}: {}", path, e);
                ConfigRecord::default()
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => ConfigRecord::default(),
        Err(e) => {
            error!("Failed to read config at {:?}: {}", path, e);
            ConfigRecord::default()
        }
    }
}

fn parse_record(contents: &str) -> Result<ConfigRecord, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("expected a JSON object"));
    }
    serde_json::from_value(value)
}

fn to_pretty_json(record: &ConfigRecord) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_empty() {
        assert!(ConfigRecord::default().is_empty());
        assert!(ConfigRecord {
            config: Some(String::new()),
            created_at: None
        }
        .is_empty());
        assert!(!ConfigRecord::new("abc").is_empty());
    }

    #[test]
    fn test_timestamp_shape() {
        let record = ConfigRecord::new("vpn-configuration-payload-123");
        let ts = record.created_at.unwrap();
        assert_eq!(ts.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_pretty_json_uses_four_spaces_and_keeps_unicode() {
        let record = ConfigRecord {
            config: Some("конфиг-vless://ключ".to_string()),
            created_at: Some("2026-01-01 10:00:00".to_string()),
        };
        let json = String::from_utf8(to_pretty_json(&record).unwrap()).unwrap();
        assert!(json.contains("\n    \"config\": \"конфиг-vless://ключ\""));
        assert!(json.contains("\n    \"created_at\": \"2026-01-01 10:00:00\""));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let record = parse_record(r#"{"config": "abcdefghijk", "extra": 1}"#).unwrap();
        assert_eq!(record.config.as_deref(), Some("abcdefghijk"));
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn test_non_string_config_is_rejected() {
        assert!(parse_record(r#"{"config": 42}"#).is_err());
        assert!(parse_record(r#"["config"]"#).is_err());
        assert!(parse_record("\"config\"").is_err());
        assert!(parse_record(r#"{"config": null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_timestamp_keeps_config() {
        for created_at in ["1700000000", r#"{"at": 1}"#, "null", "[]"] {
            let json = format!(
                r#"{{"config": "vpn-configuration-payload-123", "created_at": {}}}"#,
                created_at
            );
            let record = parse_record(&json).unwrap();
            assert_eq!(record.config.as_deref(), Some("vpn-configuration-payload-123"));
            assert_eq!(record.created_at, None);
        }
    }

    #[test]
    fn test_store_reports_config_with_malformed_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vpn_config.json");
        fs::write(
            &path,
            r#"{"config": "vpn-configuration-payload-123", "created_at": 1700000000}"#,
        )
        .unwrap();

        let store = ConfigStore::open(&path);
        assert!(store.has_config());
        assert_eq!(store.get_config(), "vpn-configuration-payload-123");
        assert_eq!(store.created_at(), None);
    }

    #[test]
    fn test_write_failure_is_a_save_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::open(dir.path().join("missing").join("vpn_config.json"));
        let err = store.try_save("vpn-configuration-payload-123").unwrap_err();
        assert!(matches!(err, AppError::SaveFailed { .. }));
        assert_eq!(err.user_friendly_message(), "Failed to save configuration");
    }
}
