//! I2C write: program address and length, then stream the payload in
//! 16-token lines under a stop-and-wait handshake.

use crate::constants::{CHUNK_TOKENS, MAX_I2C_ADDRESS, MAX_WRITE};
use crate::error::AdapterError;
use crate::response::ResponseCode;
use crate::session::Session;
use crate::transport::Transport;
use tracing::{debug, info, warn};

/// One I2C write transaction.
///
/// The first byte is kept apart from the rest because it is commonly a
/// register or command byte of the target device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I2cWriteRequest {
    pub address: u8,
    pub first: u8,
    pub payload: Vec<u8>,
    /// Keep the bus (no stop condition) for a following repeated start
    pub hold: bool,
}

impl I2cWriteRequest {
    pub fn new(address: u8, first: u8, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            address,
            first,
            payload: payload.into(),
            hold: false,
        }
    }

    /// Splits a flat buffer into first byte and remainder.
    pub fn from_bytes(address: u8, data: &[u8]) -> Result<Self, AdapterError> {
        let (&first, rest) = data
            .split_first()
            .ok_or_else(|| AdapterError::InvalidArgument("write needs at least one byte".to_string()))?;
        Ok(Self::new(address, first, rest))
    }

    pub fn with_hold(mut self, hold: bool) -> Self {
        self.hold = hold;
        self
    }

    /// Bytes on the wire, first byte included.
    pub fn len(&self) -> usize {
        1 + self.payload.len()
    }

    /// A write always carries at least the first byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn validate(&self) -> Result<(), AdapterError> {
        check_address(self.address)?;
        check_count(self.len(), MAX_WRITE)
    }
}

/// One `send` line and the marker that must acknowledge it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub line: String,
    pub expect: ResponseCode,
}

/// Progress of a write transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteState {
    AddrPending,
    LenPending,
    Sending { chunk: usize },
    Done,
    Failed,
}

/// Renders the payload of `req` as `send` lines of at most 16 hex tokens.
///
/// Only the line after which no payload remains expects `.`; every other
/// line expects `&`. This holds for payloads that end exactly on a line
/// boundary too.
pub fn plan_chunks(req: &I2cWriteRequest) -> Vec<Chunk> {
    let tokens: Vec<u8> = std::iter::once(req.first).chain(req.payload.iter().copied()).collect();
    let verb = if req.hold { "send+hold" } else { "send" };
    let groups = tokens.chunks(CHUNK_TOKENS);
    let last = groups.len() - 1;

    groups
        .enumerate()
        .map(|(i, group)| {
            let hex = group.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ");
            let line = if i == 0 { format!("{verb} {hex}") } else { hex };
            let expect = if i == last {
                ResponseCode::Complete
            } else {
                ResponseCode::Continue
            };
            Chunk { line, expect }
        })
        .collect()
}

pub(crate) fn check_address(address: u8) -> Result<(), AdapterError> {
    if address > MAX_I2C_ADDRESS {
        return Err(AdapterError::InvalidArgument(format!(
            "address 0x{address:02x} is not a 7-bit I2C address"
        )));
    }
    Ok(())
}

pub(crate) fn check_count(count: usize, max: usize) -> Result<(), AdapterError> {
    if count == 0 || count > max {
        return Err(AdapterError::InvalidArgument(format!(
            "transfer of {count} bytes outside 1..={max}"
        )));
    }
    Ok(())
}

impl<T: Transport> Session<T> {
    /// Writes `req` to the I2C bus. Aborts on the first data line that is
    /// not acknowledged as expected; nothing is retried.
    pub fn i2c_write(&self, req: &I2cWriteRequest) -> Result<(), AdapterError> {
        req.validate()?;
        let mut state = WriteState::AddrPending;
        debug!(?state, address = req.address, len = req.len(), "I2C write");

        self.program_step(&format!("addr:0x{:02x}", req.address))?;
        state = WriteState::LenPending;
        debug!(?state);
        self.program_step(&format!("bytes:{}", req.len()))?;

        let chunks = plan_chunks(req);
        for (i, chunk) in chunks.iter().enumerate() {
            state = WriteState::Sending { chunk: i };
            debug!(?state, line = %chunk.line, expect = %chunk.expect);
            if let Err(e) = self.send_chunk(chunk) {
                state = WriteState::Failed;
                warn!(?state, error = %e, "I2C write aborted");
                return Err(e);
            }
        }

        state = WriteState::Done;
        info!(?state, address = req.address, bytes = req.len(), chunks = chunks.len(), "I2C write complete");
        Ok(())
    }

    fn send_chunk(&self, chunk: &Chunk) -> Result<(), AdapterError> {
        let actual = self.send_and_confirm(&chunk.line, self.config.chunk_wait)?;
        if actual == chunk.expect {
            return Ok(());
        }
        if actual == ResponseCode::ProtocolError {
            return Err(AdapterError::ProtocolError {
                command: chunk.line.clone(),
            });
        }
        Err(AdapterError::TransmitError {
            command: chunk.line.clone(),
            expected: chunk.expect,
            actual,
        })
    }

    /// Sends an address or length programming command. A wrong marker or a
    /// missing one is reported but does not stop the transaction; transport
    /// failures still do.
    pub(crate) fn program_step(&self, cmd: &str) -> Result<(), AdapterError> {
        match self.confirm(cmd) {
            Ok(ResponseCode::Complete) => Ok(()),
            Ok(code) => {
                warn!(command = cmd, %code, "Unexpected response, continuing");
                Ok(())
            }
            Err(e @ AdapterError::Timeout { .. }) => {
                warn!(command = cmd, error = %e, "No confirmation, continuing");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
