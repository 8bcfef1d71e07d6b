// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quire - resolve a site configuration through its plugins.
//!
//! This is the binary entry point for the `quire` CLI.

mod catalog;
mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Quire - resolve a site configuration through its plugins.
#[derive(Parser, Debug)]
#[command(name = "quire", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the config, run its plugins and print a summary.
    Check {
        /// Config file to read instead of ./quire.toml.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the plugins and print the final config and integrations as JSON.
    Resolve {
        /// Config file to read instead of ./quire.toml.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the built-in plugins.
    Plugins,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let code = match cli.command {
        Commands::Check { config } => resolve::run_check(config.as_deref()).await,
        Commands::Resolve { config } => resolve::run_resolve(config.as_deref()).await,
        Commands::Plugins => {
            catalog::print_plugins();
            0
        }
    };

    std::process::exit(code);
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// `QUIRE_LOG` takes precedence over `RUST_LOG`.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("QUIRE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("quire=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_check_with_config_path() {
        let cli = Cli::try_parse_from(["quire", "check", "--config", "site/quire.toml"]).unwrap();
        match cli.command {
            Commands::Check { config } => {
                assert_eq!(config, Some(PathBuf::from("site/quire.toml")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["quire"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
