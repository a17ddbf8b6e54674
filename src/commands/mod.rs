//! Command dispatch and handlers.

pub mod exec;
pub mod status;
pub mod version;

use std::future::Future;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Exec { endpoint, request } => exec::run(endpoint, request),
        Command::Status { base_url } => status::run(base_url),
        Command::Version { base_url } => version::run(base_url),
    }
}

/// Run a client future to completion on a fresh current-thread runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("failed to start async runtime: {err}"))?;
    Ok(runtime.block_on(future))
}
