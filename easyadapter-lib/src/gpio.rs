use crate::discovery::contains;
use crate::error::AdapterError;
use crate::response::{Marker, ResponseCode, printable};
use crate::session::Session;
use crate::transport::Transport;
use strum_macros::Display;
use tracing::debug;

/// Logic level of an adapter GPIO pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Level {
    #[strum(to_string = "0")]
    Low,
    #[strum(to_string = "1")]
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl<T: Transport> Session<T> {
    /// Drives adapter pin `pin` to `level`.
    pub fn io_write(&self, pin: u8, level: Level) -> Result<(), AdapterError> {
        let cmd = format!("iowrite:{pin},{level}");
        match self.confirm(&cmd)? {
            ResponseCode::Complete => {
                debug!(pin, %level, "GPIO set");
                Ok(())
            }
            actual => Err(AdapterError::TransmitError {
                command: cmd,
                expected: ResponseCode::Complete,
                actual,
            }),
        }
    }

    /// Samples adapter pin `pin`. The adapter answers `0.` or `1.`.
    pub fn io_read(&self, pin: u8) -> Result<Level, AdapterError> {
        let cmd = format!("ioread:{pin}");
        let response = self.send(&cmd)?;
        let invalid = || AdapterError::InvalidResponse {
            command: cmd.clone(),
            response: printable(&response),
        };
        if !response.contains(&u8::from(Marker::Ok)) {
            return Err(invalid());
        }
        if contains(&response, b"0.") {
            Ok(Level::Low)
        } else if contains(&response, b"1.") {
            Ok(Level::High)
        } else {
            Err(invalid())
        }
    }
}
