//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use taskboard::domain::ports::{AccessLogSink, NoOpAccessLog};
use taskboard::inbound::http::state::HttpState;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: HttpState,
    pub(crate) access_log: Arc<dyn AccessLogSink>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Construct a server configuration that discards access log entries.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state,
            access_log: Arc::new(NoOpAccessLog),
            clock: Arc::new(DefaultClock),
        }
    }

    /// Attach the sink receiving one entry per request.
    #[must_use]
    pub fn with_access_log(mut self, sink: Arc<dyn AccessLogSink>) -> Self {
        self.access_log = sink;
        self
    }

    /// Replace the clock used to timestamp access log entries.
    /// Replace the clock used for access log timestamps.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(
            dead_code,
            reason = "Exercised by tests that pin access log timestamps"
        )
    )]
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
