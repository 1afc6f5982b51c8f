// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Switchyard - component discovery, scoring, and integration.
//!
//! This is the binary entry point.

mod commands;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Switchyard - discover, score, and integrate components.
#[derive(Parser, Debug)]
#[command(name = "switchyard", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load configured components and list the registry.
    List,
    /// Search the built-in component catalog by name or type.
    Catalog {
        /// Case-insensitive substring; lists everything when omitted.
        query: Option<String>,
    },
    /// Find the configured component that best matches a request.
    Match {
        /// Requested component type.
        #[arg(long = "type", value_name = "TYPE")]
        component_type: String,
        /// Requested version or version requirement (e.g. `^1.2`).
        #[arg(long)]
        version: String,
        /// Interface the component should provide (repeatable).
        #[arg(long = "interface", value_name = "NAME")]
        interfaces: Vec<String>,
    },
    /// Load component manifests through the registry and integration manager.
    Load {
        /// Component manifest files (TOML).
        #[arg(required = true, value_name = "MANIFEST")]
        manifests: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => switchyard_config::load_and_validate_path(path),
        None => switchyard_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            switchyard_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.runtime.log_level);
    tracing::debug!(runtime = config.runtime.name.as_str(), "configuration loaded");

    let use_color = !cli.plain && std::io::stdout().is_terminal();
    let result = match cli.command {
        Some(Commands::List) => commands::run_list(&config, use_color),
        Some(Commands::Catalog { query }) => {
            commands::run_catalog(query.as_deref().unwrap_or_default(), use_color)
        }
        Some(Commands::Match {
            component_type,
            version,
            interfaces,
        }) => commands::run_match(&config, &component_type, &version, &interfaces, use_color),
        Some(Commands::Load { manifests }) => commands::run_load(&config, &manifests, use_color),
        None => {
            println!("switchyard: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("switchyard: {}", commands::error_chain(&e));
        std::process::exit(1);
    }
}

/// Install the process-wide fmt subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("switchyard={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
