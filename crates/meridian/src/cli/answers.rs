//! The `answers` command: inspect, generate and validate answer files.

use anyhow::{bail, Context, Result};
use meridian_answers::{consistency_report, default_document, AnswerSet};
use meridian_ids::GroupId;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, clap::Subcommand)]
pub enum AnswersAction {
    /// Print the effective answer document
    Show {
        /// Answer file to show (built-in defaults when omitted)
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default answer file
    Init {
        /// Destination path
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate an answer file strictly
    Validate {
        /// Answer file to validate
        path: PathBuf,
    },
}

pub fn run(action: AnswersAction) -> Result<()> {
    match action {
        AnswersAction::Show { file, json } => show(file, json),
        AnswersAction::Init { path, force } => init(path, force),
        AnswersAction::Validate { path } => validate(path),
    }
}

fn show(file: Option<PathBuf>, json: bool) -> Result<()> {
    let doc = match file {
        Some(path) => AnswerSet::load(&path)?,
        None => default_document(),
    };

    if json {
        println!("{}", doc.to_json_string());
        return Ok(());
    }

    for (name, section) in doc.sections() {
        println!("[{}]", name);
        for (key, value) in section {
            println!("  {} = {}", key, value);
        }
        println!();
    }
    Ok(())
}

fn init(path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Refusing to overwrite {}; pass --force to replace it",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    default_document().save(&path)?;
    info!("Wrote default answer file: {}", path.display());
    Ok(())
}

fn validate(path: PathBuf) -> Result<()> {
    let doc = AnswerSet::load(&path)?;

    for (name, section) in doc.sections() {
        if let Some(group) = section.get("admin_group") {
            let group = GroupId::parse(group)
                .with_context(|| format!("{name}.admin_group is not a valid UUID"))?;
            if group.is_unassigned() {
                info!("{name}.admin_group is the unassigned placeholder");
            }
        }
    }

    let drifts = consistency_report(&doc);
    for drift in &drifts {
        warn!("Endpoint drift: {drift}");
    }

    if drifts.is_empty() {
        info!("Answer file is valid: {}", path.display());
    } else {
        info!(
            "Answer file is structurally valid with {} endpoint drift(s): {}",
            drifts.len(),
            path.display()
        );
    }
    Ok(())
}
