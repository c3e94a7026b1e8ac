//! I2C read: program address and length, then pull the data back with the
//! interactive `&` acknowledgement handshake.

use crate::constants::{MAX_READ, READ_ACK};
use crate::deadline::Deadline;
use crate::error::AdapterError;
use crate::response::{Marker, ResponseCode, printable};
use crate::session::Session;
use crate::transport::{Link, Transport};
use crate::write::{check_address, check_count};
use bytes::BytesMut;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

const RECV_COMMAND: &str = "recv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cReadRequest {
    pub address: u8,
    pub count: usize,
}

impl I2cReadRequest {
    pub fn new(address: u8, count: usize) -> Self {
        Self { address, count }
    }
}

/// Decodes the body of a completed `recv` exchange.
///
/// Marker bytes and ASCII whitespace are dropped; what remains must be an
/// even number of hex digits.
pub fn decode_payload(raw: &[u8]) -> Result<Vec<u8>, AdapterError> {
    let digits: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|&b| b != u8::from(Marker::Continue) && b != u8::from(Marker::Ok) && !b.is_ascii_whitespace())
        .collect();
    Ok(hex::decode(digits)?)
}

impl<T: Transport> Session<T> {
    /// Reads `req.count` bytes from the I2C target at `req.address`.
    pub fn i2c_read(&self, req: &I2cReadRequest) -> Result<Vec<u8>, AdapterError> {
        check_address(req.address)?;
        check_count(req.count, MAX_READ)?;
        debug!(address = req.address, count = req.count, "I2C read");

        self.program_step(&format!("addr:0x{:02x}", req.address))?;
        self.program_step(&format!("bytes:{}", req.count))?;

        let raw = self.receive()?;
        let data = decode_payload(&raw)?;
        if data.len() != req.count {
            return Err(AdapterError::DecodeError(format!(
                "expected {} bytes, decoded {}",
                req.count,
                data.len()
            )));
        }
        info!(address = req.address, bytes = hex::encode(&data), "I2C read complete");
        Ok(data)
    }

    /// Runs the `recv` handshake. The deadline is an idle window restarted on
    /// every arrival, and only the most recent byte drives the exchange.
    fn receive(&self) -> Result<BytesMut, AdapterError> {
        let mut link = self.open_bound()?;
        self.write_line(&mut link, RECV_COMMAND)?;

        let mut buffer = BytesMut::with_capacity(64);
        let mut chunk = [0u8; 256];
        let mut deadline = Deadline::after(self.config.read_idle);
        let mut acks = 0usize;
        loop {
            if deadline.expired() {
                self.log_traffic("rx", &buffer);
                warn!(acks, response = %printable(&buffer), "Read handshake went idle");
                return Err(AdapterError::Timeout {
                    command: RECV_COMMAND.to_string(),
                    response: printable(&buffer),
                });
            }
            let n = link.read_available(&mut chunk)?;
            if n == 0 {
                thread::sleep(Duration::from_millis(1));
                continue;
            }
            buffer.extend_from_slice(&chunk[..n]);
            deadline.restart();

            let Some(&last) = buffer.last() else { continue };
            match Marker::try_from(last) {
                Ok(Marker::Continue) => {
                    link.write_all(&[READ_ACK])?;
                    acks += 1;
                }
                Ok(Marker::Ok) => break,
                Ok(Marker::Error) => {
                    self.log_traffic("rx", &buffer);
                    return Err(AdapterError::TransmitError {
                        command: RECV_COMMAND.to_string(),
                        expected: ResponseCode::Complete,
                        actual: ResponseCode::GeneralError,
                    });
                }
                Ok(Marker::ProtocolError) => {
                    self.log_traffic("rx", &buffer);
                    return Err(AdapterError::ProtocolError {
                        command: RECV_COMMAND.to_string(),
                    });
                }
                Err(_) => {}
            }
        }
        self.log_traffic("rx", &buffer);
        debug!(acks, "Read handshake complete");
        Ok(buffer)
    }
}
