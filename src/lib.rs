//! Client library and CLI for the cmdsrv remote command-execution service.
//!
//! The wire contract lives in [`protocol`], the transport-polymorphic
//! capability in [`ports`], and the `reqwest`-backed implementation in
//! [`adapters`]. The remaining modules are CLI glue.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod ports;
pub mod protocol;

pub use error::Error;
pub use protocol::{CommandRequest, CommandResponse};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Help and version requests print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => return Err(err.to_string()),
        Err(err) => {
            print!("{err}");
            return Ok(());
        }
    };
    let _ = dotenvy::dotenv();
    logging::init(cli.verbose);
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["cmdsrv-client", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_missing_arguments() {
        let result = run(["cmdsrv-client", "exec"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_rejects_malformed_request_before_any_network_io() {
        // Nothing listens at this endpoint; parsing fails first.
        let result = run(["cmdsrv-client", "exec", "http://127.0.0.1:1/cmd", "{}"]);
        let message = result.unwrap_err();
        assert!(message.contains("malformed payload"));
    }
}
