use crate::constants::{BAUD_RATE, CHUNK_WAIT, DEFAULT_WAIT, POLL_TIMEOUT, READ_IDLE_WAIT, TERMINATOR};
use crate::error::AdapterError;
use crate::transport::{SerialTransport, Transport};
use std::time::Duration;

/// Tunables of a [`Session`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub baud_rate: u32,
    pub terminator: u8,
    /// Response window for simple commands
    pub wait: Duration,
    /// Response window for each write chunk
    pub chunk_wait: Duration,
    /// Idle window of the read handshake
    pub read_idle: Duration,
    /// Longest a single read on the link may block
    pub poll_timeout: Duration,
    /// Log every command and response at info level
    pub debug: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            baud_rate: BAUD_RATE,
            terminator: TERMINATOR,
            wait: DEFAULT_WAIT,
            chunk_wait: CHUNK_WAIT,
            read_idle: READ_IDLE_WAIT,
            poll_timeout: POLL_TIMEOUT,
            debug: false,
        }
    }
}

/// A conversation with one adapter.
///
/// Owns the bound endpoint and the timing configuration; every protocol
/// operation is a method on the session. Operations take the transport for
/// the duration of a single command and release it before returning, so a
/// session never has more than one command in flight.
pub struct Session<T: Transport = SerialTransport> {
    pub(crate) transport: T,
    pub(crate) endpoint: Option<String>,
    pub(crate) config: SessionConfig,
}

impl Session<SerialTransport> {
    /// A session over the host's serial ports with default timing.
    pub fn new() -> Self {
        Self::with_transport(SerialTransport, SessionConfig::default())
    }
}

impl Default for Session<SerialTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Session<T> {
    pub fn with_transport(transport: T, config: SessionConfig) -> Self {
        Self {
            transport,
            endpoint: None,
            config,
        }
    }

    /// The endpoint selected by discovery, if any.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Binds a known endpoint without running discovery.
    pub fn bind(&mut self, endpoint: impl Into<String>) {
        self.endpoint = Some(endpoint.into());
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn set_wait(&mut self, wait: Duration) {
        self.config.wait = wait;
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    pub(crate) fn bound_endpoint(&self) -> Result<&str, AdapterError> {
        self.endpoint.as_deref().ok_or(AdapterError::NoAdapterBound)
    }
}
