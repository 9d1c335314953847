//! Meridian bootstrap library.
//!
//! Everything the `meridian` binary does lives here so integration tests
//! can drive the bootstrap flow with scripted input and explicit paths.

pub mod bootstrap;
pub mod editor;
pub mod paths;
pub mod projects;
pub mod prompt;
pub mod secrets;

pub use bootstrap::{run_bootstrap, BootstrapOptions};
pub use editor::ConfigEditor;
pub use prompt::{Prompter, StdinPrompter};
