//! Grouped key/value settings persisted as JSON or YAML.
//!
//! Values are kept as text in the attribute codec's canonical form, so a
//! settings file reads the same way item attributes do:
//!
//! ```yaml
//! PDFExport:
//!   PaperName: A4
//!   PaperSize: "595:842"
//!   MarginLeft: "10.0000"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{decode, encode, Value, ValueType};
use crate::error::GraphAttrError;

/// Settings grouped by section name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    groups: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    fn for_path(path: &Path) -> Result<Self, GraphAttrError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(SettingsFormat::Json),
            Some("yaml") | Some("yml") => Ok(SettingsFormat::Yaml),
            _ => Err(GraphAttrError::UnsupportedFormat(format!(
                "settings file '{}' (supported: .json, .yaml, .yml)",
                path.display()
            ))),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from `path`. A missing file yields empty settings.
    pub fn load(path: &Path) -> Result<Self, GraphAttrError> {
        let format = SettingsFormat::for_path(path)?;

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "settings file not found, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(GraphAttrError::Io(err)),
        };

        Self::from_str_with(&content, format).map_err(|message| GraphAttrError::SettingsParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Writes settings to `path`, choosing the format by extension.
    pub fn save(&self, path: &Path) -> Result<(), GraphAttrError> {
        let format = SettingsFormat::for_path(path)?;
        let content = match format {
            SettingsFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            SettingsFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
        }
        .map_err(|message| GraphAttrError::SettingsWrite {
            path: path.to_path_buf(),
            message,
        })?;

        fs::write(path, content).map_err(GraphAttrError::Io)?;
        debug!(path = %path.display(), groups = self.groups.len(), "settings saved");
        Ok(())
    }

    fn from_str_with(content: &str, format: SettingsFormat) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        match format {
            SettingsFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            SettingsFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Returns the raw text stored under `group`/`key`.
    pub fn value(&self, group: &str, key: &str) -> Option<&str> {
        self.groups
            .get(group)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Decodes the text under `group`/`key` as `tag`, if present.
    pub fn typed_value(&self, group: &str, key: &str, tag: ValueType) -> Option<Value> {
        self.value(group, key).map(|text| decode(text, tag))
    }

    pub fn set_value(&mut self, group: &str, key: &str, text: impl Into<String>) {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), text.into());
    }

    /// Stores `value` in its canonical text form.
    pub fn set_typed_value(&mut self, group: &str, key: &str, value: &Value) {
        self.set_value(group, key, encode(value, None));
    }

    pub fn group(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.groups.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut settings = Settings::new();
        settings.set_typed_value("Group", "Flag", &Value::Bool(true));
        settings.set_value("Group", "Name", "abc");
        assert_eq!(settings.value("Group", "Flag"), Some("true"));
        assert_eq!(
            settings.typed_value("Group", "Flag", ValueType::Bool),
            Some(Value::Bool(true))
        );
        assert_eq!(settings.value("Group", "Missing"), None);
        assert_eq!(settings.value("Other", "Name"), None);
        assert_eq!(settings.group("Group").map(|g| g.len()), Some(2));
    }

    #[test]
    fn test_json_and_yaml_roundtrip() {
        let mut settings = Settings::new();
        settings.set_value("PDFExport", "PaperName", "A4");
        settings.set_value("PDFExport", "PaperSize", "595:842");

        let dir = tempfile::tempdir().expect("temp dir");
        for name in ["s.json", "s.yaml"] {
            let path = dir.path().join(name);
            settings.save(&path).expect("save");
            assert_eq!(Settings::load(&path).expect("load"), settings);
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = Settings::load(&dir.path().join("absent.yaml")).expect("load");
        assert!(settings.is_empty());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = Settings::load(Path::new("settings.ini")).unwrap_err();
        assert!(matches!(err, GraphAttrError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").expect("write");
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, GraphAttrError::SettingsParse { .. }));
    }
}
