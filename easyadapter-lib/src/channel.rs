//! Command channel: one ASCII command line out, one byte response back.

use crate::deadline::Deadline;
use crate::error::AdapterError;
use crate::response::{ResponseCode, classify, printable};
use crate::session::Session;
use crate::transport::{Link, Transport};
use bytes::{Bytes, BytesMut};
use std::thread;
use std::time::Duration;
use tracing::{info, trace, warn};

const READ_CHUNK: usize = 512;

/// Sleep between empty polls.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

impl<T: Transport> Session<T> {
    /// Sends `cmd` and returns every byte that arrives within the session
    /// wait. The response is not classified.
    pub fn send(&self, cmd: &str) -> Result<Bytes, AdapterError> {
        let (buffer, _) = self.exchange(cmd, self.config.wait, |_: &[u8]| None::<()>)?;
        Ok(buffer)
    }

    /// Sends `cmd` and waits up to `wait` for the first marker byte.
    ///
    /// A response with no marker by the deadline is a
    /// [`AdapterError::Timeout`] carrying the command and the raw bytes seen.
    pub fn send_and_confirm(&self, cmd: &str, wait: Duration) -> Result<ResponseCode, AdapterError> {
        let (buffer, code) = self.exchange(cmd, wait, classify)?;
        match code {
            Some(code) => Ok(code),
            None => {
                warn!(command = cmd, response = %printable(&buffer), "No response marker before deadline");
                Err(AdapterError::Timeout {
                    command: cmd.to_string(),
                    response: printable(&buffer),
                })
            }
        }
    }

    /// [`Session::send_and_confirm`] with the session's default wait.
    pub fn confirm(&self, cmd: &str) -> Result<ResponseCode, AdapterError> {
        self.send_and_confirm(cmd, self.config.wait)
    }

    /// Opens the bound endpoint, writes one command line and accumulates the
    /// response until `stop` yields a value or `wait` elapses. The link is
    /// closed on every return path.
    fn exchange<R>(
        &self,
        cmd: &str,
        wait: Duration,
        mut stop: impl FnMut(&[u8]) -> Option<R>,
    ) -> Result<(Bytes, Option<R>), AdapterError> {
        let mut link = self.open_bound()?;
        self.write_line(&mut link, cmd)?;

        let mut buffer = BytesMut::with_capacity(64);
        let mut chunk = [0u8; READ_CHUNK];
        let deadline = Deadline::after(wait);
        let mut outcome = None;
        while !deadline.expired() {
            let n = link.read_available(&mut chunk)?;
            if n == 0 {
                thread::sleep(POLL_INTERVAL);
                continue;
            }
            buffer.extend_from_slice(&chunk[..n]);
            if let Some(found) = stop(&buffer[..]) {
                outcome = Some(found);
                break;
            }
        }
        self.log_traffic("rx", &buffer);
        Ok((buffer.freeze(), outcome))
    }

    /// Opens the bound endpoint with stale input discarded.
    pub(crate) fn open_bound(&self) -> Result<T::Link, AdapterError> {
        let endpoint = self.bound_endpoint()?;
        let mut link = self.transport.open(endpoint, self.config.baud_rate, self.config.poll_timeout)?;
        link.discard_input()?;
        Ok(link)
    }

    pub(crate) fn write_line(&self, link: &mut T::Link, cmd: &str) -> Result<(), AdapterError> {
        let mut line = Vec::with_capacity(cmd.len() + 1);
        line.extend_from_slice(cmd.as_bytes());
        line.push(self.config.terminator);
        self.log_traffic("tx", &line);
        link.write_all(&line)
    }

    pub(crate) fn log_traffic(&self, direction: &str, data: &[u8]) {
        if self.config.debug {
            info!(direction, bytes = hex::encode(data), text = %printable(data), "Adapter traffic");
        } else {
            trace!(direction, bytes = hex::encode(data), "Adapter traffic");
        }
    }
}
