//! The answer document model.
//!
//! An [`AnswerSet`] is the installer's input: four named sections, each a
//! flat mapping from configuration key to configuration value. Every value
//! is text, even when it looks numeric (ports) or boolean — the consumers
//! decide how to interpret them. The document shape is strict: all four
//! sections must be present exactly once and no other top-level key is
//! accepted.

use crate::error::AnswersError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// One section of an answer document: unordered key/value pairs, keys
/// unique within the section. `BTreeMap` keeps serialization deterministic
/// so re-serializing a parsed document is byte-identical.
pub type Section = BTreeMap<String, String>;

/// The four components an answer document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionName {
    Engine,
    Portal,
    Client,
    Socket,
}

impl SectionName {
    /// All sections in canonical (serialization and bootstrap) order.
    pub const ALL: [SectionName; 4] = [
        SectionName::Engine,
        SectionName::Portal,
        SectionName::Client,
        SectionName::Socket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Engine => "engine",
            SectionName::Portal => "portal",
            SectionName::Client => "client",
            SectionName::Socket => "socket",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionName {
    type Err = AnswersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "engine" => Ok(SectionName::Engine),
            "portal" => Ok(SectionName::Portal),
            "client" => Ok(SectionName::Client),
            "socket" => Ok(SectionName::Socket),
            other => Err(AnswersError::UnknownSection(other.to_string())),
        }
    }
}

/// A complete answer document.
///
/// Created once as installer defaults, read wholesale by the bootstrap
/// tooling, never mutated in place by anything described here. Field order
/// matches the component bootstrap order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerSet {
    pub engine: Section,
    pub portal: Section,
    pub client: Section,
    pub socket: Section,
}

impl AnswerSet {
    /// Parse a strict JSON answer document.
    pub fn from_json_str(data: &str) -> Result<Self, AnswersError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Serialize as pretty strict JSON. Deterministic: section order is
    /// fixed and keys within a section are sorted.
    pub fn to_json_string(&self) -> String {
        // Serialization of string maps cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load an answer document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AnswersError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| AnswersError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Save the document as strict pretty JSON with a trailing newline.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AnswersError> {
        let path = path.as_ref();
        let mut data = self.to_json_string();
        data.push('\n');
        std::fs::write(path, data).map_err(|source| AnswersError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn section(&self, name: SectionName) -> &Section {
        match name {
            SectionName::Engine => &self.engine,
            SectionName::Portal => &self.portal,
            SectionName::Client => &self.client,
            SectionName::Socket => &self.socket,
        }
    }

    pub fn section_mut(&mut self, name: SectionName) -> &mut Section {
        match name {
            SectionName::Engine => &mut self.engine,
            SectionName::Portal => &mut self.portal,
            SectionName::Client => &mut self.client,
            SectionName::Socket => &mut self.socket,
        }
    }

    /// Look up a single value.
    pub fn get(&self, name: SectionName, key: &str) -> Option<&str> {
        self.section(name).get(key).map(String::as_str)
    }

    /// Set a single value, returning the previous one if any.
    pub fn set(
        &mut self,
        name: SectionName,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.section_mut(name).insert(key.into(), value.into())
    }

    /// Iterate sections in canonical order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionName, &Section)> {
        SectionName::ALL.iter().map(move |name| (*name, self.section(*name)))
    }

    /// Overlay this document on the built-in defaults: every key present
    /// here wins, everything else comes from the defaults. Mirrors how the
    /// installer merges a user-supplied answer file over the shipped one.
    pub fn overlaid_on_defaults(&self) -> AnswerSet {
        let mut merged = crate::defaults::default_document();
        for (name, section) in self.sections() {
            for (key, value) in section {
                merged.set(name, key.clone(), value.clone());
            }
        }
        merged
    }
}
