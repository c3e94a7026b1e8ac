use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::Display;

/// Single-byte outcome markers emitted by the adapter in M2M mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Display)]
#[repr(u8)]
pub enum Marker {
    /// `.`
    #[strum(to_string = ".")]
    Ok = 0x2E,
    /// `&`
    #[strum(to_string = "&")]
    Continue = 0x26,
    /// `~`
    #[strum(to_string = "~")]
    ProtocolError = 0x7E,
    /// `X`
    #[strum(to_string = "X")]
    Error = 0x58,
}

/// Classified outcome of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResponseCode {
    #[strum(to_string = "Complete(.)")]
    Complete,
    #[strum(to_string = "Continue(&)")]
    Continue,
    #[strum(to_string = "ProtocolError(~)")]
    ProtocolError,
    #[strum(to_string = "GeneralError")]
    GeneralError,
}

impl From<Marker> for ResponseCode {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Ok => ResponseCode::Complete,
            Marker::Continue => ResponseCode::Continue,
            Marker::ProtocolError => ResponseCode::ProtocolError,
            Marker::Error => ResponseCode::GeneralError,
        }
    }
}

/// Returns the first marker byte found in `buf`, scanning front to back.
///
/// Later markers never override an earlier one, so a `~` followed by `.` is
/// still a protocol error.
pub fn first_marker(buf: &[u8]) -> Option<Marker> {
    buf.iter().find_map(|&b| Marker::try_from(b).ok())
}

/// Classifies a response buffer by its first marker byte.
pub fn classify(buf: &[u8]) -> Option<ResponseCode> {
    first_marker(buf).map(ResponseCode::from)
}

/// Renders raw response bytes for diagnostics, keeping control bytes visible.
pub(crate) fn printable(buf: &[u8]) -> String {
    buf.escape_ascii().to_string()
}
