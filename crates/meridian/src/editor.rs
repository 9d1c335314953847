//! Component configuration editor.
//!
//! Bootstrap never blindly overwrites a component's configuration file: it
//! loads whatever is already deployed, overlays the freshly rendered
//! sections key by key, and saves strict pretty JSON. Keys outside the
//! rendered sections survive the update.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub struct ConfigEditor {
    path: PathBuf,
    doc: Map<String, Value>,
}

impl ConfigEditor {
    /// Open a configuration file, parsing it when present.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let doc = if path.is_file() {
            let data = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("Malformed config file {}", path.display()))?
        } else {
            Map::new()
        };
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set a single `section/key` value.
    pub fn set(&mut self, section: &str, key: &str, value: Value) {
        let entry = self
            .doc
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Some(obj) = entry.as_object_mut() {
            obj.insert(key.to_string(), value);
        }
    }

    /// Look up a `section/key` value.
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.doc.get(section)?.as_object()?.get(key)
    }

    /// Overlay rendered sections onto the document. Returns the applied
    /// `section/key` pairs in application order.
    pub fn apply_sections(&mut self, sections: &Map<String, Value>) -> Vec<String> {
        let mut applied = Vec::new();
        for (section, values) in sections {
            let Some(values) = values.as_object() else {
                continue;
            };
            for (key, value) in values {
                self.set(section, key, value.clone());
                applied.push(format!("{}/{}", section, key));
            }
        }
        applied
    }

    /// Save the document as strict pretty JSON with a trailing newline.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let mut data = serde_json::to_string_pretty(&self.doc)?;
        data.push('\n');
        std::fs::write(&self.path, data)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let editor = ConfigEditor::open(dir.path().join("engine.conf")).unwrap();
        assert!(editor.get("db", "host").is_none());
    }

    #[test]
    fn set_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.conf");

        let mut editor = ConfigEditor::open(&path).unwrap();
        editor.set("db", "host", json!("localhost"));
        editor.set("db", "port", json!("3306"));
        editor.save().unwrap();

        let reopened = ConfigEditor::open(&path).unwrap();
        assert_eq!(reopened.get("db", "port"), Some(&json!("3306")));
    }

    #[test]
    fn apply_preserves_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.conf");
        std::fs::write(&path, r#"{"custom": {"keep": "yes"}, "db": {"host": "old"}}"#).unwrap();

        let mut editor = ConfigEditor::open(&path).unwrap();
        let sections = json!({"db": {"host": "new", "port": "3306"}});
        let applied = editor.apply_sections(sections.as_object().unwrap());
        editor.save().unwrap();

        assert_eq!(applied, ["db/host", "db/port"]);
        let reopened = ConfigEditor::open(&path).unwrap();
        assert_eq!(reopened.get("custom", "keep"), Some(&json!("yes")));
        assert_eq!(reopened.get("db", "host"), Some(&json!("new")));
    }

    #[test]
    fn saved_output_ends_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.conf");
        let mut editor = ConfigEditor::open(&path).unwrap();
        editor.set("admin", "user", json!("meridian"));
        editor.save().unwrap();
        let data = std::fs::read_to_string(&path).unwrap();
        assert!(data.ends_with('\n'));
    }
}
