//! Transport adapters implementing the port traits.

pub mod http;

pub use http::HttpCommandClient;
