//! Host-side driver for the easy_adapter serial-to-I2C bridge.
//!
//! A [`Session`] binds to one adapter found by [`Session::discover`], switches
//! it to machine-readable responses and then runs I2C writes, reads, address
//! probes and GPIO commands over the adapter's ASCII line protocol.

pub mod channel;
pub mod constants;
pub mod deadline;
pub mod devices;
pub mod discovery;
pub mod error;
pub mod gpio;
pub mod hexdump;
pub mod mode;
pub mod probe;
pub mod read;
pub mod response;
pub mod session;
pub mod transport;
pub mod write;

pub use error::AdapterError;
pub use gpio::Level;
pub use probe::ScanHit;
pub use read::I2cReadRequest;
pub use response::ResponseCode;
pub use session::{Session, SessionConfig};
pub use transport::{Link, PortInfo, SerialTransport, Transport};
pub use write::I2cWriteRequest;
