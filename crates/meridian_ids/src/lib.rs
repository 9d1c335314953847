//! Typed identifier wrappers for Meridian.
//!
//! Group identifiers travel through answer files and rendered component
//! configuration as plain UUID strings. The wrappers here keep the
//! well-known installer groups in one place instead of scattering literal
//! UUIDs across crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The placeholder for a group that has not been assigned yet.
pub const UNASSIGNED_GROUP: &str = "00000000-0000-0000-0000-000000000000";

/// Well-known group for service accounts.
pub const SERVICE_GROUP: &str = "99999999-9999-9999-9999-999999999999";

/// Well-known group for regular accounts.
pub const DEFAULT_GROUP: &str = "11111111-1111-1111-1111-111111111111";

/// Error returned when parsing a UUID-backed identifier fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid group ID: {0}")]
pub struct IdParseError(#[from] uuid::Error);

/// UUID-backed group identifier.
///
/// Stored as the canonical hyphenated string so it serializes exactly the
/// way it appears in answer files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Generate a fresh random group identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The zero-UUID placeholder denoting an unassigned administrative group.
    pub fn unassigned() -> Self {
        Self(UNASSIGNED_GROUP.to_string())
    }

    /// The well-known service accounts group.
    pub fn service() -> Self {
        Self(SERVICE_GROUP.to_string())
    }

    /// The well-known default accounts group.
    pub fn default_group() -> Self {
        Self(DEFAULT_GROUP.to_string())
    }

    /// Parse a group identifier, validating UUID syntax.
    pub fn parse(value: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(value)?;
        Ok(Self(value.to_string()))
    }

    /// Whether this is the unassigned placeholder.
    pub fn is_unassigned(&self) -> bool {
        self.0 == UNASSIGNED_GROUP
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::unassigned()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GroupId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
