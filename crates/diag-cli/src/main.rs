//! `diag-bundle`: create, list, poll, and download cluster diagnostics bundles.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use diag_client::{Bundle, Collection, NodeSelector, System};
use diag_core::config::{CliOverrides, DiagConfig};
use diag_core::errors::{DiagError, DiagErrorCode};
use diag_core::tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "diag-bundle", version, about = "Cluster diagnostics bundle client")]
struct Cli {
    /// Path to a TOML config file (defaults to ./diag.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Cluster root URL.
    #[arg(long, global = true, env = "DCOS_URL")]
    cluster_url: Option<String>,

    /// Access token. Falls back to the variable named by `cluster.token_env`.
    #[arg(long, global = true, env = "DCOS_ACS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Download write chunk size in bytes.
    #[arg(long, global = true)]
    chunk_size: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start generating a new bundle and print its name.
    Create {
        /// Node to include; repeat for several. Defaults to all nodes.
        #[arg(long = "node")]
        nodes: Vec<String>,
    },
    /// Print the name of every bundle the cluster lists.
    List {
        /// Also print the node and remote path of each bundle.
        #[arg(long)]
        long: bool,
    },
    /// Print the remote file name of a bundle, or `pending`.
    Status { name: String },
    /// Download a finished bundle.
    Download { name: String, destination: PathBuf },
    /// Poll until a bundle is ready, optionally downloading it.
    Wait {
        name: String,
        /// Delay between polls.
        #[arg(long, default_value_t = 5)]
        interval_secs: u64,
        /// Give up after this many polls.
        #[arg(long, default_value_t = 120)]
        max_attempts: u32,
        /// Download to this path once ready.
        #[arg(long)]
        download: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<DiagError>() {
                Some(diag) => eprintln!("error [{}]: {err:#}", diag.error_code()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let overrides = CliOverrides {
        cluster_url: cli.cluster_url.clone(),
        token: cli.token.clone(),
        log_level: cli.log_level.clone(),
        chunk_size: cli.chunk_size,
    };
    let config = DiagConfig::load(cli.config.as_deref(), Some(&overrides))
        .map_err(DiagError::from)
        .context("loading configuration")?;

    if config.observability.json_logs {
        tracing_setup::init_tracing_json(&config.observability.log_level);
    } else {
        tracing_setup::init_tracing(&config.observability.log_level);
    }

    let system = System::from_config(&config)?;
    let diagnostics = system.diagnostics();

    match cli.command {
        Command::Create { nodes } => {
            let selector = if nodes.is_empty() {
                NodeSelector::default()
            } else {
                NodeSelector::nodes(nodes)
            };
            let bundle = diagnostics.create(selector)?;
            println!("{}", bundle.name());
        }
        Command::List { long } => {
            if long {
                for descriptor in diagnostics.descriptors()? {
                    println!(
                        "{}\t{}\t{}",
                        descriptor.bundle_name(),
                        descriptor.node,
                        descriptor.file_name
                    );
                }
            } else {
                for bundle in diagnostics.all()? {
                    println!("{}", bundle.name());
                }
            }
        }
        Command::Status { name } => match diagnostics.get(name).status()? {
            Some(file_name) => println!("{file_name}"),
            None => println!("pending"),
        },
        Command::Download { name, destination } => {
            let written = diagnostics.get(name).download(&destination)?;
            println!("{written} bytes written to {}", destination.display());
        }
        Command::Wait {
            name,
            interval_secs,
            max_attempts,
            download,
        } => {
            let bundle = diagnostics.get(name);
            let file_name = wait_until_ready(&bundle, Duration::from_secs(interval_secs), max_attempts)?;
            println!("{file_name}");
            if let Some(destination) = download {
                let written = bundle.download(&destination)?;
                println!("{written} bytes written to {}", destination.display());
            }
        }
    }
    Ok(())
}

/// Re-poll `status()` with a fixed delay until the bundle reports a file name.
fn wait_until_ready(bundle: &Bundle<'_>, interval: Duration, max_attempts: u32) -> Result<String> {
    for attempt in 1..=max_attempts {
        if let Some(file_name) = bundle.status()? {
            tracing::info!(bundle = bundle.name(), attempt, "bundle ready");
            return Ok(file_name);
        }
        tracing::debug!(bundle = bundle.name(), attempt, max_attempts, "bundle still pending");
        if attempt < max_attempts {
            thread::sleep(interval);
        }
    }
    bail!(
        "bundle {} not ready after {max_attempts} attempts",
        bundle.name()
    )
}
