//! Client configuration.
//!
//! # Design
//! `Config` is built once and shared read-only by every request; it owns the
//! transport behind an `Arc`, so cloning a `Config` shares the connection
//! pool. Logging goes through `tracing`: the application installs the
//! subscriber, `debug` only decides whether full wire dumps are emitted.
//!
//! `ConfigFile` is the serde mirror for applications that keep settings on
//! disk. The SDK never reads files or the environment itself.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::http::Transport;
use crate::transport::UreqTransport;

/// Connection settings and behaviour flags shared by all calls.
#[derive(Clone)]
pub struct Config {
    pub(crate) endpoint: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) debug: bool,
    pub(crate) mask_authorization: bool,
    pub(crate) transport: Arc<dyn Transport>,
}

impl Config {
    /// `endpoint` includes the admin context, e.g.
    /// `https://localhost:9000/pa-admin-api/v3`. A trailing `/` is dropped.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            username: String::new(),
            password: String::new(),
            debug: false,
            mask_authorization: true,
            transport: Arc::new(UreqTransport::new()),
        }
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_mask_authorization(mut self, mask: bool) -> Self {
        self.mask_authorization = mask;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn mask_authorization(&self) -> bool {
        self.mask_authorization
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"********")
            .field("debug", &self.debug)
            .field("mask_authorization", &self.mask_authorization)
            .finish_non_exhaustive()
    }
}

/// Deserializable form of `Config`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_mask_authorization")]
    pub mask_authorization: bool,
    /// Global deadline for one round trip. Unset means no deadline.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_mask_authorization() -> bool {
    true
}

impl ConfigFile {
    pub fn into_config(self) -> Config {
        let transport = match self.timeout_secs {
            Some(secs) => UreqTransport::with_timeout(Duration::from_secs(secs)),
            None => UreqTransport::new(),
        };
        Config::new(&self.endpoint)
            .with_credentials(&self.username, &self.password)
            .with_debug(self.debug)
            .with_mask_authorization(self.mask_authorization)
            .with_transport(Arc::new(transport))
    }
}
