//! The bootstrap flow.
//!
//! Bootstrapping a component collects its prompt responses (answer file
//! first, interactive input second), renders the component's configuration
//! sections, and applies them to the deployed config file through the
//! editor. With no component flags the whole platform is bootstrapped in
//! canonical order.

use crate::editor::ConfigEditor;
use crate::paths::component_conf_path;
use crate::projects;
use crate::prompt::{collect_responses, Prompter};
use anyhow::{Context, Result};
use meridian_answers::{consistency_report, AnswerSet, SectionName};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Components to bootstrap; empty means all four.
    pub components: Vec<SectionName>,
    /// Optional answer file pre-seeding prompt responses.
    pub answers_path: Option<PathBuf>,
    /// Non-interactive: take defaults, fail on required prompts.
    pub use_defaults: bool,
    /// Directory receiving the per-component config files.
    pub conf_dir: PathBuf,
}

/// Run the bootstrap flow for the selected components.
pub fn run_bootstrap(opts: &BootstrapOptions, prompter: &mut dyn Prompter) -> Result<()> {
    let answers = load_answers(opts.answers_path.as_deref());

    let components: Vec<SectionName> = if opts.components.is_empty() {
        SectionName::ALL.to_vec()
    } else {
        opts.components.clone()
    };

    for name in components {
        bootstrap_component(name, &answers, opts, prompter)
            .with_context(|| format!("Bootstrap failed for component {name}"))?;
    }

    info!("Bootstrap complete");
    Ok(())
}

/// Read the optional answer file.
///
/// Unreadable or malformed files are logged and ignored so an interactive
/// run can still proceed; `answers validate` is the strict path.
fn load_answers(path: Option<&Path>) -> AnswerSet {
    let Some(path) = path else {
        return AnswerSet::default();
    };
    match AnswerSet::load(path) {
        Ok(doc) => {
            info!("Loaded answer file: {}", path.display());
            for drift in consistency_report(&doc) {
                warn!("Endpoint drift in answer file: {drift}");
            }
            doc
        }
        Err(err) => {
            warn!("Could not read answer file: {err}");
            AnswerSet::default()
        }
    }
}

fn bootstrap_component(
    name: SectionName,
    answers: &AnswerSet,
    opts: &BootstrapOptions,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    info!("Running bootstrap for component: {name}");

    let plan = projects::prompt_plan(name);
    let responses = collect_responses(plan, answers.section(name), prompter, opts.use_defaults)?;
    let sections = projects::render_config(name, &responses);

    let conf_path = component_conf_path(&opts.conf_dir, name);
    let mut editor = ConfigEditor::open(&conf_path)?;
    for applied in editor.apply_sections(&sections) {
        info!("[{}] Set key value for \"{applied}\"", conf_path.display());
    }
    editor.save()?;

    info!("Applied updated {name} configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_answers::default_document;

    struct NoInput;

    impl Prompter for NoInput {
        fn read_text(&mut self, _prompt: &str) -> Result<String> {
            anyhow::bail!("unexpected prompt")
        }

        fn read_password(&mut self, _prompt: &str) -> Result<String> {
            anyhow::bail!("unexpected prompt")
        }
    }

    #[test]
    fn missing_answer_file_falls_back_to_empty_document() {
        let doc = load_answers(Some(Path::new("/nonexistent/answers.json")));
        assert_eq!(doc, AnswerSet::default());
    }

    #[test]
    fn defaults_only_run_fails_on_missing_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let opts = BootstrapOptions {
            components: vec![SectionName::Engine],
            answers_path: None,
            use_defaults: true,
            conf_dir: dir.path().to_path_buf(),
        };
        let err = run_bootstrap(&opts, &mut NoInput).unwrap_err();
        assert!(format!("{err:#}").contains("db_user_password"));
    }

    #[test]
    fn client_bootstrap_needs_no_input_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let opts = BootstrapOptions {
            components: vec![SectionName::Client],
            answers_path: None,
            use_defaults: true,
            conf_dir: dir.path().to_path_buf(),
        };
        run_bootstrap(&opts, &mut NoInput).unwrap();
        assert!(dir.path().join("client.conf").is_file());
    }

    #[test]
    fn answer_file_drives_full_unattended_bootstrap() {
        let dir = tempfile::tempdir().unwrap();
        let answers_path = dir.path().join("answers.json");
        default_document().save(&answers_path).unwrap();

        let conf_dir = dir.path().join("conf");
        let opts = BootstrapOptions {
            components: Vec::new(),
            answers_path: Some(answers_path),
            use_defaults: true,
            conf_dir: conf_dir.clone(),
        };
        run_bootstrap(&opts, &mut NoInput).unwrap();

        for name in SectionName::ALL {
            assert!(
                conf_dir.join(format!("{name}.conf")).is_file(),
                "missing config for {name}"
            );
        }
    }
}
