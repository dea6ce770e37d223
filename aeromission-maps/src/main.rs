#![warn(clippy::pedantic)]
#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]

use std::path::PathBuf;

use aeromission_maps::OutputFormat;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[clap(version, about)]
struct Options {
    /// Log debug output unless `RUST_LOG` is set.
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Render all built-in mission lists.
    Build {
        /// Directory to write the mission files into.
        #[clap(long, default_value = "assets/missions")]
        out_dir: PathBuf,
        #[clap(long, value_enum, default_value_t)]
        format:  OutputFormat,
    },
    /// Render a mission list from its JSON representation.
    FromJson {
        input:  PathBuf,
        output: PathBuf,
        #[clap(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Dump a built-in mission list as JSON.
    ToJson { name: String, output: PathBuf },
    /// Write the JSON schema of mission lists.
    Schema {
        output: PathBuf,
        /// Compress the output with gzip.
        #[clap(long)]
        gzip:   bool,
    },
}

fn main() -> Result<()> {
    let options = <Options as clap::Parser>::parse();

    let default_filter = if options.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match options.command {
        Command::Build { out_dir, format } => aeromission_maps::build_assets(&out_dir, format),
        Command::FromJson { input, output, format } => {
            aeromission_maps::from_json(&input, &output, format)
        }
        Command::ToJson { name, output } => aeromission_maps::to_json(&name, &output),
        Command::Schema { output, gzip } => aeromission_maps::json_schema(&output, gzip),
    }
}
