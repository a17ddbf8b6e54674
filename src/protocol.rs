//! Wire data contract for the cmdsrv command-execution protocol.
//!
//! Two value types cross the wire: [`CommandRequest`] going out and
//! [`CommandResponse`] coming back. Both marshal to the exact JSON
//! shapes the server speaks and compare structurally.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A command to execute on the remote server.
///
/// The first element of the command line is the executable name; the
/// remaining elements are its arguments, passed through without any
/// shell interpretation or quoting. Two requests with the same ordered
/// command line are equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CommandRequest {
    cmd: Vec<String>,
}

impl CommandRequest {
    /// Creates a request from an ordered command line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] when the command line is
    /// empty — a request must always name an executable.
    pub fn new<I, S>(cmd: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cmd: Vec<String> = cmd.into_iter().map(Into::into).collect();
        if cmd.is_empty() {
            return Err(Error::MalformedPayload("cmd must not be empty".into()));
        }
        Ok(Self { cmd })
    }

    /// The ordered command line: executable first, then its arguments.
    #[must_use]
    pub fn cmd(&self) -> &[String] {
        &self.cmd
    }

    /// Serializes the request to its wire form: `{"cmd":[...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] when serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|err| Error::MalformedPayload(err.to_string()))
    }

    /// Parses a request from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] when the text is not valid
    /// JSON, the `cmd` key is missing, an element is not a string, or
    /// the command line is empty.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let request: Self =
            serde_json::from_str(text).map_err(|err| Error::MalformedPayload(err.to_string()))?;
        if request.cmd.is_empty() {
            return Err(Error::MalformedPayload("cmd must not be empty".into()));
        }
        Ok(request)
    }
}

/// Joined string form of the command line, e.g. `ls -a -l`.
impl fmt::Display for CommandRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cmd.join(" "))
    }
}

/// The outcome of a command execution reported by the server.
///
/// The server echoes the command it ran. The echo is carried as-is —
/// a server that canonicalizes the command line may report something
/// other than what was requested, and the client never compares the
/// two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandResponse {
    /// The command the server reports having executed.
    pub cmd: Vec<String>,
    /// Process exit code; negative or sentinel values are server-defined.
    pub retval: i32,
    /// Captured standard output; empty when the process wrote none.
    #[serde(default)]
    pub stdout: String,
    /// Captured standard error; empty when the process wrote none.
    #[serde(default)]
    pub stderr: String,
}

impl CommandResponse {
    /// The echoed command joined into a single string.
    #[must_use]
    pub fn cmd_joined(&self) -> String {
        self.cmd.join(" ")
    }

    /// Serializes the response to its four-key wire form.
    ///
    /// Empty output fields serialize as `""`, never as absent keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] when serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|err| Error::MalformedPayload(err.to_string()))
    }

    /// Parses a response from its JSON wire form.
    ///
    /// `cmd` and `retval` are required; absent `stdout`/`stderr` keys
    /// deserialize as empty strings. Unknown extra keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] when the text is not valid
    /// JSON or a required field is missing or mistyped.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|err| Error::MalformedPayload(err.to_string()))
    }
}
