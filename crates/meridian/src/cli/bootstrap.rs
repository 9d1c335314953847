//! The `bootstrap` command.

use anyhow::{Context, Result};
use meridian::bootstrap::{run_bootstrap, BootstrapOptions};
use meridian::paths;
use meridian::prompt::StdinPrompter;
use meridian_answers::SectionName;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, clap::Args)]
pub struct BootstrapArgs {
    /// Bootstrap the API engine
    #[arg(short = 'e', long)]
    pub engine: bool,

    /// Bootstrap the web portal
    #[arg(short = 'p', long)]
    pub portal: bool,

    /// Bootstrap the API client
    #[arg(short = 'c', long)]
    pub client: bool,

    /// Bootstrap the socket proxy
    #[arg(short = 's', long)]
    pub socket: bool,

    /// Answer file pre-seeding prompt responses
    #[arg(short = 'a', long, env = "MERIDIAN_ANSWERS")]
    pub answers: Option<PathBuf>,

    /// Non-interactive: take defaults, fail on prompts without one
    #[arg(long)]
    pub use_defaults: bool,
}

impl BootstrapArgs {
    fn selected_components(&self) -> Vec<SectionName> {
        let flags = [
            (self.engine, SectionName::Engine),
            (self.portal, SectionName::Portal),
            (self.client, SectionName::Client),
            (self.socket, SectionName::Socket),
        ];
        flags
            .into_iter()
            .filter_map(|(selected, name)| selected.then_some(name))
            .collect()
    }
}

pub fn run(args: BootstrapArgs) -> Result<()> {
    info!("Meridian bootstrap utility");
    info!(
        "Sets up configuration for a new installation as quickly as possible; \
         an answer file skips the interactive prompts."
    );

    paths::ensure_meridian_home().context("Failed to create Meridian home directory")?;
    let conf_dir = paths::ensure_conf_dir().context("Failed to create config directory")?;

    let opts = BootstrapOptions {
        components: args.selected_components(),
        answers_path: args.answers,
        use_defaults: args.use_defaults,
        conf_dir,
    };

    run_bootstrap(&opts, &mut StdinPrompter)
}
