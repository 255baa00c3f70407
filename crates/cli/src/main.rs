// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dpac: DevPod custom driver for the Apple `container` CLI.
//!
//! DevPod invokes one subcommand per driver verb and speaks JSON over
//! stdout; stderr is captured as log lines. Keeping stdout clean is part
//! of the protocol, so all diagnostics go through tracing to stderr.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod exit_error;

use exit_error::ExitError;

#[derive(Parser)]
#[command(name = "dpac", version, about = "DevPod custom driver for the Apple container CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Locate the dev container for a workspace and print its details
    ///
    /// Prints nothing when no container matches; DevPod reads empty
    /// output as "not found".
    Find {
        /// Workspace identifier (container id, id prefix, or label value)
        container_id: Option<String>,
    },
    /// Execute a command inside the container (DevPod's exec channel)
    #[command(name = "command")]
    Exec {
        /// Container identifier
        container_id: String,
    },
    /// Create and start the dev container from DEVCONTAINER_RUN_OPTIONS
    Run {
        /// Container name (DevPod workspace id)
        container_id: String,
    },
    /// Start a stopped container
    Start {
        /// Container identifier
        container_id: String,
    },
    /// Stop a running container
    Stop {
        /// Container identifier
        container_id: String,
    },
    /// Delete a container, running or not
    Delete {
        /// Container identifier
        container_id: String,
    },
    /// Print container logs
    Logs {
        /// Container identifier
        container_id: String,
    },
    /// Print the target architecture
    Arch,
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(err) = dispatch(cli.command) {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn dispatch(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Find { container_id } => commands::find::run(container_id.as_deref().unwrap_or("")),
        Command::Exec { container_id } => commands::exec::run(&container_id),
        Command::Run { container_id } => commands::run::run(&container_id),
        Command::Start { container_id } => commands::lifecycle::start(&container_id),
        Command::Stop { container_id } => commands::lifecycle::stop(&container_id),
        Command::Delete { container_id } => commands::lifecycle::delete(&container_id),
        Command::Logs { container_id } => commands::lifecycle::logs(&container_id),
        Command::Arch => commands::lifecycle::arch(),
    }
}

/// Diagnostics to stderr only; stdout belongs to the driver protocol.
fn init_logging() {
    let filter = EnvFilter::try_from_env("DPAC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
