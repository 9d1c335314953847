//! Meridian bootstrap utility.
//!
//! Gets a new Meridian installation up and running: collects connection
//! parameters for the engine, portal, client and socket components (from an
//! answer file or interactive prompts) and writes their configuration
//! files. Also ships helpers for inspecting and validating answer files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "meridian", about = "Bootstrap utility for the Meridian platform")]
struct Cli {
    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bootstrap platform components (all four when no flags are given)
    Bootstrap(cli::bootstrap::BootstrapArgs),

    /// Inspect and validate installer answer files
    Answers {
        #[command(subcommand)]
        action: cli::answers::AnswersAction,
    },

    /// Show current configuration and paths
    Config(cli::config::ConfigArgs),
}

fn command_wants_json(command: &Commands) -> bool {
    match command {
        Commands::Bootstrap(_) => false,
        Commands::Answers { action } => match action {
            cli::answers::AnswersAction::Show { json, .. } => *json,
            _ => false,
        },
        Commands::Config(args) => args.json,
    }
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Bootstrap(args) => cli::bootstrap::run(args),
        Commands::Answers { action } => cli::answers::run(action),
        Commands::Config(args) => cli::config::run(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let json_mode = command_wants_json(&cli.command);
    let default_filter = if cli.verbose {
        "meridian=debug,meridian_answers=debug"
    } else {
        "meridian=info,meridian_answers=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let mut _log_guard: Option<tracing_appender::non_blocking::WorkerGuard> = None;
    let file_layer = match meridian::paths::ensure_logs_dir() {
        Ok(log_dir) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, "meridian.log");
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            _log_guard = Some(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_filter(env_filter.clone()),
            )
        }
        Err(err) => {
            eprintln!("Warning: failed to create logs directory: {}", err);
            None
        }
    };

    // Console output moves to stderr in JSON mode so stdout stays machine-readable.
    let console_writer = if json_mode {
        tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr)
    } else {
        tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stdout)
    };
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(console_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:?}", err);
            ExitCode::from(1)
        }
    }
}
