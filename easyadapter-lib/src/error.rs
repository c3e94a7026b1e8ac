use crate::response::ResponseCode;
use std::io;
use thiserror::Error;

/// The primary error type for the `easyadapter-lib` library.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("No easy_adapter selected. Run discovery first")]
    NoAdapterBound,

    #[error("Permission denied opening {}. Close any serial console using the port", .endpoints.join(", "))]
    PermissionDenied { endpoints: Vec<String> },

    #[error("No easy_adapter_{board} device found")]
    DeviceNotFound { board: u8 },

    #[error("Timeout: sent '{command}' but received {response:?}")]
    Timeout { command: String, response: String },

    #[error("Protocol error after '{command}'. Does the I2C device exist?")]
    ProtocolError { command: String },

    #[error("Error sending '{command}': expected {expected} but received {actual}")]
    TransmitError {
        command: String,
        expected: ResponseCode,
        actual: ResponseCode,
    },

    #[error("Malformed hex payload: {0}")]
    DecodeError(String),

    #[error("Invalid response to '{command}': {response:?}")]
    InvalidResponse { command: String, response: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<hex::FromHexError> for AdapterError {
    fn from(e: hex::FromHexError) -> Self {
        AdapterError::DecodeError(e.to_string())
    }
}

impl AdapterError {
    /// True when the adapter answered but the I2C target did not.
    pub fn is_target_absent(&self) -> bool {
        matches!(self, AdapterError::ProtocolError { .. })
    }

    /// True when the adapter itself could not be reached.
    pub fn is_adapter_unreachable(&self) -> bool {
        matches!(
            self,
            AdapterError::NoAdapterBound | AdapterError::DeviceNotFound { .. } | AdapterError::PermissionDenied { .. }
        )
    }
}
