//! xray stats CLI
//!
//! Queries the stats service of a running proxy core and writes the results
//! as JSON files.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{stats, traffic};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// xray stats CLI
#[derive(Parser)]
#[command(name = "xstats")]
#[command(author, version, about = "Dump xray stats service results to JSON files", long_about = None)]
pub struct Cli {
    /// Settings file (TOML, YAML or JSON)
    #[arg(long, env = "XSTATS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Connect with TLS instead of plaintext
    #[arg(long)]
    pub tls: bool,

    /// Connection timeout in seconds (waits indefinitely if unset)
    #[arg(long, value_name = "SECS")]
    pub connect_timeout: Option<u64>,

    /// Per-call timeout in seconds (waits indefinitely if unset)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format for the summary printed after writing
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write system stats and all counters (sysStats.json, stats.json)
    Stats {
        /// API server address, like 127.0.0.1:10085
        #[arg(long, short)]
        server: Option<String>,

        /// Directory the JSON files are written to
        #[arg(long, short)]
        output_dir: Option<PathBuf>,
    },

    /// Write user, inbound and outbound traffic counters (trafficStats.json)
    Traffic {
        /// API server address, like 127.0.0.1:10085
        #[arg(long, short)]
        server: Option<String>,

        /// User email
        #[arg(long, default_value = "")]
        user: String,

        /// Inbound tag
        #[arg(long, default_value = "")]
        inbound: String,

        /// Outbound tag
        #[arg(long, default_value = "")]
        outbound: String,

        /// Directory the JSON file is written to
        #[arg(long, short)]
        output_dir: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)));

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let settings = config::Settings::load(cli.config.as_deref())?;
    let client_config = settings.client_config(cli.tls, cli.connect_timeout, cli.timeout);
    debug!(?client_config, "Transport configured");

    match cli.command {
        Commands::Stats { server, output_dir } => {
            let server = settings.server(server)?;
            let output_dir = settings.output_dir(output_dir);
            stats::write_stats(&server, &output_dir, &client_config, cli.format).await?;
        }
        Commands::Traffic {
            server,
            user,
            inbound,
            outbound,
            output_dir,
        } => {
            let server = settings.server(server)?;
            let output_dir = settings.output_dir(output_dir);
            let target = stats_lib::TrafficTarget::new(user, inbound, outbound);
            traffic::write_traffic(&server, &target, &output_dir, &client_config, cli.format)
                .await?;
        }
    }

    Ok(())
}
