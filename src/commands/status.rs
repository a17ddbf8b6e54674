//! The `status` subcommand: server health probe.

use reqwest::Client;

use crate::adapters::http::server_status;

/// Queries `<base_url>/status` and prints the reported state.
///
/// # Errors
///
/// Returns an error string when the server answers with a non-success
/// status or cannot be reached.
pub fn run(base_url: &str) -> Result<(), String> {
    let client = Client::new();
    let body = super::block_on(server_status(&client, base_url))?
        .map_err(|err| err.to_string())?;
    println!("{body}");
    Ok(())
}
