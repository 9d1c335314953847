//! Cross-section endpoint consistency.
//!
//! Nothing in the document format enforces that `portal.engine_host` agrees
//! with the engine's own bind address; a drifted answer file still parses.
//! The report here is the advisory check the installer runs before it
//! provisions anything, so an operator sees the misconfiguration instead of
//! four components pointing at different endpoints.

use crate::document::{AnswerSet, SectionName};
use std::fmt;

/// A reference to one logical service endpoint that disagrees with the
/// owning section's authoritative value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDrift {
    /// The section that owns the endpoint.
    pub authority: SectionName,
    /// The authoritative key in that section.
    pub authority_key: &'static str,
    /// The authoritative value.
    pub expected: String,
    /// The section holding the drifted reference.
    pub section: SectionName,
    /// The drifted key.
    pub key: &'static str,
    /// The value actually found.
    pub found: String,
}

impl fmt::Display for EndpointDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} is \"{}\" but {}.{} is \"{}\"",
            self.section, self.key, self.found, self.authority, self.authority_key, self.expected
        )
    }
}

/// (authority section, authoritative key, referencing section, reference key)
const ENDPOINT_REFERENCES: &[(SectionName, &str, SectionName, &str)] = &[
    // Engine API endpoint, referenced by portal and socket.
    (SectionName::Engine, "api_host", SectionName::Portal, "engine_host"),
    (SectionName::Engine, "api_port", SectionName::Portal, "engine_port"),
    (SectionName::Engine, "api_host", SectionName::Socket, "engine_host"),
    (SectionName::Engine, "api_port", SectionName::Socket, "engine_port"),
    // Portal endpoint, referenced by the engine.
    (SectionName::Portal, "portal_host", SectionName::Engine, "portal_host"),
    (SectionName::Portal, "portal_port", SectionName::Engine, "portal_port"),
    // Socket endpoint, referenced by engine and portal.
    (SectionName::Socket, "socket_host", SectionName::Engine, "socket_host"),
    (SectionName::Socket, "socket_port", SectionName::Engine, "socket_port"),
    (SectionName::Socket, "socket_host", SectionName::Portal, "socket_host"),
    (SectionName::Socket, "socket_port", SectionName::Portal, "socket_port"),
];

/// Compare every endpoint reference against its authoritative value.
///
/// Missing keys on either side are skipped: a partial document is not a
/// drifted one.
pub fn consistency_report(doc: &AnswerSet) -> Vec<EndpointDrift> {
    let mut drifts = Vec::new();
    for &(authority, authority_key, section, key) in ENDPOINT_REFERENCES {
        let (Some(expected), Some(found)) = (doc.get(authority, authority_key), doc.get(section, key))
        else {
            continue;
        };
        if expected != found {
            drifts.push(EndpointDrift {
                authority,
                authority_key,
                expected: expected.to_string(),
                section,
                key,
                found: found.to_string(),
            });
        }
    }
    drifts
}
