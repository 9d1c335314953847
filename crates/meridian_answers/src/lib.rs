//! Installer answer documents for Meridian.
//!
//! An answer file carries the default connection parameters (hosts, ports,
//! credentials, admin identifiers) for the four platform components:
//! `engine`, `portal`, `client` and `socket`. The document is pure
//! declarative data; this crate models its strict shape, the built-in
//! defaults, and the advisory cross-section consistency report the
//! bootstrap tooling runs before provisioning.

pub mod consistency;
pub mod defaults;
pub mod document;
pub mod error;

pub use consistency::{consistency_report, EndpointDrift};
pub use defaults::default_document;
pub use document::{AnswerSet, Section, SectionName};
pub use error::AnswersError;
