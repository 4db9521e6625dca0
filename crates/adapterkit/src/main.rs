// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! adapterkit - inspect convention-based adapter discovery.
//!
//! Shows which declared dependencies a resolver would consider, without
//! loading any of them.

mod inspect;

use std::path::PathBuf;
use std::process::ExitCode;

use adapterkit_manifest::{reader_for, ManifestKind};
use clap::{Parser, Subcommand};

/// adapterkit - convention-based adapter discovery.
#[derive(Parser, Debug)]
#[command(name = "adapterkit", version, about, long_about = None)]
struct Cli {
    /// Manifest to read dependencies from (overrides `discovery.manifest_path`).
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Manifest format; detected from the file name when omitted.
    #[arg(long, global = true)]
    kind: Option<ManifestKind>,

    /// Configuration file to load instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the packages gathering would load for a domain.
    Candidates {
        #[arg(long)]
        domain: String,
    },
    /// Show the package resolving `name` would load.
    Match {
        #[arg(long)]
        domain: String,
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        adapter_type: Option<String>,
    },
    /// Print the export names tried for an adapter, in priority order.
    Variants {
        name: String,
        #[arg(long = "type")]
        adapter_type: Option<String>,
    },
    /// Show whether exports qualify for a type and the key each is gathered under.
    Keys {
        #[arg(long = "type")]
        adapter_type: String,
        #[arg(required = true)]
        exports: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => adapterkit_config::load_and_validate_path(path),
        None => adapterkit_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            adapterkit_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log.level);

    let manifest = cli
        .manifest
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.discovery.manifest_path));
    let kind = cli.kind.unwrap_or_else(|| ManifestKind::detect(&manifest));
    tracing::debug!(manifest = %manifest.display(), %kind, "using manifest");

    let result = match cli.command {
        Commands::Candidates { domain } => {
            let reader = reader_for(kind, &manifest);
            inspect::candidates(reader.as_ref(), &domain, &config.discovery.settings())
        }
        Commands::Match {
            domain,
            name,
            adapter_type,
        } => {
            let reader = reader_for(kind, &manifest);
            inspect::named_match(reader.as_ref(), &domain, &name, adapter_type.as_deref())
        }
        Commands::Variants { name, adapter_type } => {
            Ok(inspect::variants(&name, adapter_type.as_deref()))
        }
        Commands::Keys {
            adapter_type,
            exports,
        } => Ok(inspect::keys(&adapter_type, &exports)),
    };

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("adapterkit={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_match_command() {
        let cli = Cli::parse_from([
            "adapterkit",
            "--manifest",
            "Cargo.toml",
            "match",
            "--domain",
            "token-registry",
            "--name",
            "redis",
            "--type",
            "engine",
        ]);
        assert_eq!(cli.manifest, Some(PathBuf::from("Cargo.toml")));
        match cli.command {
            Commands::Match {
                domain,
                name,
                adapter_type,
            } => {
                assert_eq!(domain, "token-registry");
                assert_eq!(name, "redis");
                assert_eq!(adapter_type.as_deref(), Some("engine"));
            }
            other => panic!("expected match command, got {other:?}"),
        }
    }

    #[test]
    fn parses_manifest_kind() {
        let cli = Cli::parse_from(["adapterkit", "--kind", "cargo", "candidates", "--domain", "x"]);
        assert_eq!(cli.kind, Some(ManifestKind::Cargo));
    }
}
