//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `cmdsrv-client`.
#[derive(Debug, Parser)]
#[command(name = "cmdsrv-client", version, about = "Send commands to a cmdsrv server")]
pub struct Cli {
    /// Raise the log filter to debug.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute a command on the remote server and print the response.
    Exec {
        /// Absolute URL of the server's command endpoint.
        endpoint: String,
        /// JSON request body, e.g. `{"cmd":["ls","-a","-l"]}`.
        request: String,
    },
    /// Query the server's health endpoint.
    Status {
        /// Base URL of the server.
        base_url: String,
    },
    /// Query the server's version endpoint.
    Version {
        /// Base URL of the server.
        base_url: String,
    },
}
