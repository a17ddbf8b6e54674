//! Error taxonomy for the cmdsrv client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures a command round trip can end in.
///
/// Each variant is terminal for the call that produced it — the client
/// never retries on its own. Callers match on the variant to tell "my
/// payload was invalid" from "the server rejected it" from "I could not
/// reach the server".
#[derive(Debug, Error)]
pub enum Error {
    /// JSON text did not match the expected request or response shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The server replied, but with a non-success status.
    ///
    /// The body is carried verbatim and never parsed as a response.
    #[error("server returned status [{status}] for request [{request}], body [{body}]")]
    RemoteExecution {
        /// HTTP status the server answered with.
        status: StatusCode,
        /// Joined string form of the request that was sent.
        request: String,
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// The connection failed before a status was obtained.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}
