//! Typed client for the PingAccess administrative REST API.
//!
//! # Overview
//! Every call goes through one engine: an `Operation` (method, path, query
//! parameters) plus an optional JSON body becomes a `Request`, which is sent
//! once over the configured `Transport` and either fills a typed target or
//! yields a classified `ApiError`.
//!
//! # Design
//! - `Config` is built once and shared read-only; it owns the transport.
//! - `Request` is per call and never reused.
//! - Resource services (`Client::agents()`, `Client::sites()`, ...) only
//!   describe operations; they contain no I/O logic of their own.
//! - Logging uses `tracing`. Install a subscriber to see it; set
//!   `Config::with_debug(true)` for full wire dumps.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod operation;
pub mod request;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::Client;
pub use config::{Config, ConfigFile};
pub use error::{ApiError, FailureResponse};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use operation::{Operation, PathTemplate};
pub use request::{build_request, Request, ResponseTarget};
pub use services::Outcome;
pub use transport::UreqTransport;
