//! The `exec` subcommand: one command round trip.

use crate::adapters::http::HttpCommandClient;
use crate::ports::client::CommandClient;
use crate::protocol::CommandRequest;

/// Executes the JSON `request` against `endpoint` and prints the
/// response JSON on stdout.
///
/// The request is parsed and validated before any network I/O, so a
/// malformed payload never reaches the wire.
///
/// # Errors
///
/// Returns an error string when the request is malformed, the server
/// rejects it, or the transport fails.
pub fn run(endpoint: &str, request: &str) -> Result<(), String> {
    let request = CommandRequest::from_json(request).map_err(|err| err.to_string())?;
    let client = HttpCommandClient::new(endpoint).map_err(|err| err.to_string())?;

    let response =
        super::block_on(client.execute(&request))?.map_err(|err| err.to_string())?;

    let json = response.to_json().map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}
