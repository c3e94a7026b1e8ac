use crate::error::AdapterError;
use serde::Serialize;
use serialport::{ClearBuffer, SerialPort, SerialPortInfo, SerialPortType};
use std::io::{self, Read, Write};
use std::time::Duration;
use tracing::debug;

/// Source of byte-stream endpoints that may host an adapter.
pub trait Transport {
    type Link: Link;

    /// Names of the endpoints currently available, in enumeration order.
    fn endpoints(&self) -> Result<Vec<String>, AdapterError>;

    /// Opens `endpoint`. A single read on the link blocks for at most
    /// `poll_timeout`. An endpoint held exclusively by another process
    /// must fail with [`AdapterError::PermissionDenied`].
    fn open(&self, endpoint: &str, baud_rate: u32, poll_timeout: Duration) -> Result<Self::Link, AdapterError>;
}

/// An open duplex connection. Dropping the link closes it.
pub trait Link {
    fn write_all(&mut self, data: &[u8]) -> Result<(), AdapterError>;

    /// Reads whatever is available right now without blocking past the
    /// per-read poll timeout. Returns 0 when nothing arrived.
    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, AdapterError>;

    /// Drops any bytes already buffered on the input side.
    fn discard_input(&mut self) -> Result<(), AdapterError>;
}

/// Summary of a serial port, as listed by the operating system.
#[derive(Debug, Clone, Serialize)]
pub struct PortInfo {
    pub port_name: String,
    pub port_type: String,
    pub vid: Option<u16>,
    pub pid: Option<u16>,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub product: Option<String>,
}

impl From<SerialPortInfo> for PortInfo {
    fn from(info: SerialPortInfo) -> Self {
        let (port_type, vid, pid, serial_number, manufacturer, product) = match info.port_type {
            SerialPortType::UsbPort(usb) => (
                "USB".to_string(),
                Some(usb.vid),
                Some(usb.pid),
                usb.serial_number,
                usb.manufacturer,
                usb.product,
            ),
            SerialPortType::PciPort => ("PCI".to_string(), None, None, None, None, None),
            SerialPortType::BluetoothPort => ("Bluetooth".to_string(), None, None, None, None, None),
            SerialPortType::Unknown => ("Unknown".to_string(), None, None, None, None, None),
        };
        Self {
            port_name: info.port_name,
            port_type,
            vid,
            pid,
            serial_number,
            manufacturer,
            product,
        }
    }
}

/// [`Transport`] over the host's serial ports.
#[derive(Debug, Clone, Default)]
pub struct SerialTransport;

impl SerialTransport {
    pub fn list_ports() -> Result<Vec<PortInfo>, AdapterError> {
        Ok(serialport::available_ports()?.into_iter().map(PortInfo::from).collect())
    }
}

impl Transport for SerialTransport {
    type Link = SerialLink;

    fn endpoints(&self) -> Result<Vec<String>, AdapterError> {
        Ok(serialport::available_ports()?
            .into_iter()
            .map(|p| p.port_name)
            .collect())
    }

    fn open(&self, endpoint: &str, baud_rate: u32, poll_timeout: Duration) -> Result<SerialLink, AdapterError> {
        let port = serialport::new(endpoint, baud_rate)
            .timeout(poll_timeout)
            .open()
            .map_err(|e| {
                if port_in_use(&e) {
                    AdapterError::PermissionDenied {
                        endpoints: vec![endpoint.to_string()],
                    }
                } else {
                    AdapterError::Serial(e)
                }
            })?;
        debug!(endpoint, baud_rate, "Opened serial port");
        Ok(SerialLink { port })
    }
}

/// Open failures that mean another process owns the port.
fn port_in_use(e: &serialport::Error) -> bool {
    if e.kind() == serialport::ErrorKind::Io(io::ErrorKind::PermissionDenied) {
        return true;
    }
    let description = e.description.to_ascii_lowercase();
    description.contains("busy") || description.contains("access is denied") || description.contains("permission")
}

pub struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl Link for SerialLink {
    fn write_all(&mut self, data: &[u8]) -> Result<(), AdapterError> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, AdapterError> {
        let available = self.port.bytes_to_read()? as usize;
        if available == 0 {
            return Ok(0);
        }
        let to_read = available.min(buf.len());
        match self.port.read(&mut buf[..to_read]) {
            Ok(n) => Ok(n),
            Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn discard_input(&mut self) -> Result<(), AdapterError> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }
}
