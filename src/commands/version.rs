//! The `version` subcommand: server version probe.

use reqwest::Client;

use crate::adapters::http::server_version;

/// Queries `<base_url>/version` and prints the reported build info.
///
/// # Errors
///
/// Returns an error string when the server answers with a non-success
/// status or cannot be reached.
pub fn run(base_url: &str) -> Result<(), String> {
    let client = Client::new();
    let body = super::block_on(server_version(&client, base_url))?
        .map_err(|err| err.to_string())?;
    println!("{body}");
    Ok(())
}
