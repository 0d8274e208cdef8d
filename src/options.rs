//! Client configuration.
//!
//! A [`ClientOptions`] value is passed explicitly into every facade
//! constructor. There is no process-wide singleton; two facades built from
//! different options never observe each other's state.

use std::time::Duration;

const API_BASE_URL: &str = "https://api.calwire.dev";
const SCHEDULER_BASE_URL: &str = "https://scheduler.calwire.dev";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which remote server family a facade talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Server {
    /// The main resource API (calendars).
    #[default]
    Api,
    /// The scheduler management API (scheduling pages).
    Scheduler,
}

/// Connection settings shared by all operations of one facade: access token,
/// server selection, and per-request timeout.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    access_token: String,
    server: Server,
    base_url_override: Option<String>,
    timeout: Duration,
}

impl ClientOptions {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            server: Server::Api,
            base_url_override: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_server(mut self, server: Server) -> Self {
        self.server = server;
        self
    }

    /// Point all requests at a different base URL. Mostly useful for tests
    /// and self-hosted deployments; takes precedence over [`Server`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn server(&self) -> Server {
        self.server
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> &str {
        if let Some(ref url) = self.base_url_override {
            return url;
        }
        match self.server {
            Server::Api => API_BASE_URL,
            Server::Scheduler => SCHEDULER_BASE_URL,
        }
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
