use crate::constants::M2M_OFF_TEXT;
use crate::discovery::contains;
use crate::error::AdapterError;
use crate::response::{Marker, printable};
use crate::session::Session;
use crate::transport::Transport;
use tracing::info;

const M2M_ON: &str = "m2m_resp:1";
const M2M_OFF: &str = "m2m_resp:0";

impl<T: Transport> Session<T> {
    /// Switches the adapter to machine-parseable single-marker responses.
    pub fn enter_m2m(&self) -> Result<(), AdapterError> {
        let response = self.send(M2M_ON)?;
        if !response.contains(&u8::from(Marker::Ok)) {
            return Err(AdapterError::InvalidResponse {
                command: M2M_ON.to_string(),
                response: printable(&response),
            });
        }
        info!("M2M mode on");
        Ok(())
    }

    /// Returns the adapter to human-readable responses.
    pub fn exit_m2m(&self) -> Result<(), AdapterError> {
        let response = self.send(M2M_OFF)?;
        if !contains(&response, M2M_OFF_TEXT.as_bytes()) {
            return Err(AdapterError::InvalidResponse {
                command: M2M_OFF.to_string(),
                response: printable(&response),
            });
        }
        info!("M2M mode off");
        Ok(())
    }
}
