// Wire-level constants for the easy_adapter line protocol

use std::ops::RangeInclusive;
use std::time::Duration;

/// Fixed serial baud rate of the adapter firmware
pub const BAUD_RATE: u32 = 115_200;

/// Line terminator appended to every command (carriage return)
pub const TERMINATOR: u8 = b'\r';

/// Default wait for simple commands
pub const DEFAULT_WAIT: Duration = Duration::from_millis(500);

/// Wait applied to each chunk of a write transfer
pub const CHUNK_WAIT: Duration = Duration::from_millis(2000);

/// Idle window of the read handshake, restarted on every received byte
pub const READ_IDLE_WAIT: Duration = Duration::from_millis(500);

/// Per-read timeout of the underlying serial port
pub const POLL_TIMEOUT: Duration = Duration::from_millis(20);

/// Hex tokens carried by a single `send` line
pub const CHUNK_TOKENS: usize = 16;

/// Largest write the adapter can buffer (its write index is a single byte)
pub const MAX_WRITE: usize = 255;

/// Largest read; the receive buffer holds 256 bytes
pub const MAX_READ: usize = 256;

/// Highest adapter instance selectable by the board strap pins
pub const MAX_BOARD: u8 = 7;

/// Highest 7-bit I2C address
pub const MAX_I2C_ADDRESS: u8 = 0x7F;

/// Address range probed by a bus scan (reserved addresses excluded)
pub const SCAN_RANGE: RangeInclusive<u8> = 0x08..=0x77;

/// Prefix of the discovery token, followed by the board number
pub const DEVICE_TOKEN_PREFIX: &str = "easy_adapter_";

/// Literal the adapter prints when leaving M2M mode
pub const M2M_OFF_TEXT: &str = "M2M response off";

/// Host acknowledgement requesting the next read chunk
pub const READ_ACK: u8 = b'&';
