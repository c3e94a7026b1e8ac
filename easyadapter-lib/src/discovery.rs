use crate::constants::{DEVICE_TOKEN_PREFIX, MAX_BOARD};
use crate::deadline::Deadline;
use crate::error::AdapterError;
use crate::session::Session;
use crate::transport::{Link, Transport};
use bytes::BytesMut;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

const PROBE_COMMAND: &str = "device?";

impl<T: Transport> Session<T> {
    /// Finds the endpoint running `easy_adapter_<board>` firmware and binds it.
    ///
    /// Every candidate is opened, probed and closed again in enumeration
    /// order; the first match wins. When nothing matches the error is
    /// [`AdapterError::PermissionDenied`] if any candidate was held by another
    /// process, otherwise [`AdapterError::DeviceNotFound`].
    pub fn discover(&mut self, board: u8) -> Result<String, AdapterError> {
        if board > MAX_BOARD {
            return Err(AdapterError::InvalidArgument(format!(
                "board {board} out of range 0..={MAX_BOARD}"
            )));
        }
        let token = format!("{DEVICE_TOKEN_PREFIX}{board}");
        let mut denied = Vec::new();

        for endpoint in self.transport.endpoints()? {
            match self.probe_endpoint(&endpoint, token.as_bytes()) {
                Ok(true) => {
                    info!("Found {} at port {}", token, endpoint);
                    self.endpoint = Some(endpoint.clone());
                    return Ok(endpoint);
                }
                Ok(false) => debug!(endpoint = %endpoint, "No {} on port", token),
                Err(AdapterError::PermissionDenied { endpoints }) => {
                    warn!(endpoint = %endpoint, "Port in use by another process");
                    denied.extend(endpoints);
                }
                Err(e) => debug!(endpoint = %endpoint, error = %e, "Skipping port"),
            }
        }

        if denied.is_empty() {
            Err(AdapterError::DeviceNotFound { board })
        } else {
            Err(AdapterError::PermissionDenied { endpoints: denied })
        }
    }

    /// [`Session::discover`] followed by [`Session::enter_m2m`].
    pub fn init(&mut self, board: u8) -> Result<String, AdapterError> {
        let endpoint = self.discover(board)?;
        self.enter_m2m()?;
        Ok(endpoint)
    }

    /// Sends the identification query and collects the reply for the full
    /// session wait. The probe line is preceded by a terminator to flush any
    /// partial line the adapter may be holding.
    fn probe_endpoint(&self, endpoint: &str, token: &[u8]) -> Result<bool, AdapterError> {
        let mut link = self.transport.open(endpoint, self.config.baud_rate, self.config.poll_timeout)?;
        let term = self.config.terminator;
        let mut probe = Vec::with_capacity(PROBE_COMMAND.len() + 2);
        probe.push(term);
        probe.extend_from_slice(PROBE_COMMAND.as_bytes());
        probe.push(term);
        self.log_traffic("tx", &probe);
        link.write_all(&probe)?;

        let mut buffer = BytesMut::new();
        let mut chunk = [0u8; 256];
        let deadline = Deadline::after(self.config.wait);
        while !deadline.expired() {
            let n = link.read_available(&mut chunk)?;
            if n == 0 {
                thread::sleep(Duration::from_millis(1));
                continue;
            }
            buffer.extend_from_slice(&chunk[..n]);
        }
        self.log_traffic("rx", &buffer);
        Ok(contains(&buffer, token))
    }
}

pub(crate) fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}
