//! HTTP adapter for the [`CommandClient`] port backed by `reqwest`.

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

use crate::error::Error;
use crate::ports::client::{CommandClient, ExecuteFuture};
use crate::protocol::{CommandRequest, CommandResponse};

/// HTTP client for a cmdsrv command endpoint.
///
/// The underlying [`Client`] is injected so the caller controls TLS,
/// proxies, and connection pooling independently of the data contract.
/// [`HttpCommandClient::new`] builds a default client that does not
/// follow redirects — a 3xx answer surfaces as a remote error rather
/// than being transparently retried against the redirect target.
pub struct HttpCommandClient {
    client: Client,
    endpoint: String,
}

impl HttpCommandClient {
    /// Creates a client for `endpoint` with redirects disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, Error> {
        let client = Client::builder().redirect(Policy::none()).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Creates a client around an already-configured [`Client`].
    ///
    /// The injected client's redirect policy applies as-is.
    #[must_use]
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }

    /// The command endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CommandClient for HttpCommandClient {
    fn execute(&self, request: &CommandRequest) -> ExecuteFuture<'_> {
        let payload = request.to_json();
        let request_str = request.to_string();

        Box::pin(async move {
            let payload = payload?;
            info!(
                endpoint = %self.endpoint,
                request = %request_str,
                "posting command request"
            );

            let response = self
                .client
                .post(&self.endpoint)
                .header(CONTENT_TYPE, "application/json")
                .body(payload)
                .send()
                .await?;

            let status = response.status();
            info!(request = %request_str, status = %status.as_u16(), "received status");

            // Read the body on every path so the pooled connection is
            // drained and released regardless of the status.
            let body = response.text().await?;

            if status != StatusCode::OK {
                error!(
                    request = %request_str,
                    status = %status.as_u16(),
                    body = %body,
                    "command request rejected"
                );
                return Err(Error::RemoteExecution { status, request: request_str, body });
            }

            debug!(body = %body, "response body received");
            CommandResponse::from_json(&body)
        })
    }
}

/// Queries the server's `/status` health endpoint and returns its body.
///
/// # Errors
///
/// Returns [`Error::RemoteExecution`] on a non-success status and
/// [`Error::Transport`] when the connection fails.
pub async fn server_status(client: &Client, base_url: &str) -> Result<String, Error> {
    probe(client, base_url, "status").await
}

/// Queries the server's `/version` endpoint and returns its body.
///
/// # Errors
///
/// Returns [`Error::RemoteExecution`] on a non-success status and
/// [`Error::Transport`] when the connection fails.
pub async fn server_version(client: &Client, base_url: &str) -> Result<String, Error> {
    probe(client, base_url, "version").await
}

async fn probe(client: &Client, base_url: &str, path: &str) -> Result<String, Error> {
    let url = format!("{}/{path}", base_url.trim_end_matches('/'));
    debug!(url = %url, "probing server");

    let response = client.get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(Error::RemoteExecution {
            status,
            request: format!("GET /{path}"),
            body,
        });
    }
    Ok(body)
}
