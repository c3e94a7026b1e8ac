use crate::devices;
use crate::error::AdapterError;
use crate::response::ResponseCode;
use crate::session::Session;
use crate::transport::Transport;
use crate::write::check_address;
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::{debug, info};

/// An address that acknowledged a probe during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanHit {
    pub address: u8,
    pub names: Vec<&'static str>,
}

impl<T: Transport> Session<T> {
    /// Probes one I2C address. `Ok(false)` means the adapter answered and
    /// nothing acknowledged the address.
    pub fn try_address(&self, address: u8) -> Result<bool, AdapterError> {
        check_address(address)?;
        let cmd = format!("tryaddr:0x{address:02x}");
        match self.confirm(&cmd)? {
            ResponseCode::Complete => Ok(true),
            ResponseCode::ProtocolError | ResponseCode::Continue => Ok(false),
            actual => Err(AdapterError::TransmitError {
                command: cmd,
                expected: ResponseCode::Complete,
                actual,
            }),
        }
    }

    /// Probes every address in `range` and returns those present.
    pub fn scan(&self, range: RangeInclusive<u8>) -> Result<Vec<ScanHit>, AdapterError> {
        let mut hits = Vec::new();
        for address in range {
            if self.try_address(address)? {
                let names = devices::names_for(address);
                debug!(address, ?names, "Address acknowledged");
                hits.push(ScanHit { address, names });
            }
        }
        info!("Scan found {} device(s)", hits.len());
        Ok(hits)
    }
}
