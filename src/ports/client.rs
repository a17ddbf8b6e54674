//! Command-execution client port.

use std::future::Future;
use std::pin::Pin;

use crate::error::Error;
use crate::protocol::{CommandRequest, CommandResponse};

/// Boxed future type alias used by [`CommandClient`] to keep the trait dyn-compatible.
pub type ExecuteFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CommandResponse, Error>> + Send + 'a>>;

/// Executes command requests against a remote command server.
///
/// Abstracting the transport lets callers inject an already-configured
/// HTTP session (TLS, proxies, pooling, logging filters) without
/// touching the data contract, and swap in a stub for tests.
pub trait CommandClient: Send + Sync {
    /// Performs exactly one request/response round trip.
    ///
    /// The future resolves once the full response body has been read;
    /// there is no partial or streaming delivery of output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RemoteExecution`] when the server answers with
    /// a non-success status, [`Error::Transport`] when the connection
    /// fails before a status is obtained, and
    /// [`Error::MalformedPayload`] when a body cannot be marshalled.
    fn execute(&self, request: &CommandRequest) -> ExecuteFuture<'_>;
}
