//! Simulated adapters for integration tests

// Shared across test files - not every helper is used by every file
#![allow(dead_code)]

use easyadapter_lib::{AdapterError, Link, Session, SessionConfig, Transport};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

#[allow(unused_imports)]
pub use easyadapter_lib::ResponseCode;

/// What sits behind a simulated endpoint.
pub enum Behavior {
    /// easy_adapter firmware in the given board slot
    Adapter(SimAdapter),
    /// Held open by another process
    Busy,
    /// Fails to open for any other reason
    Broken,
    /// Opens, accepts everything, never answers
    Silent,
    /// Answers each command line with the reply of the first matching prefix
    Scripted(Vec<(&'static str, &'static [u8])>),
}

pub struct SimPort {
    pub name: String,
    pub behavior: Behavior,
    pub opens: usize,
    pub is_open: bool,
    /// Read timeout requested by the most recent open
    pub poll_timeout: Option<Duration>,
    pub lines: Vec<String>,
    out: VecDeque<u8>,
    line: Vec<u8>,
}

#[derive(Default)]
pub struct SimBus {
    pub ports: Vec<SimPort>,
    /// Times a port was opened while another one was still open
    pub overlapping_opens: usize,
}

#[derive(Clone, Default)]
pub struct SimTransport {
    pub bus: Rc<RefCell<SimBus>>,
}

impl SimTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(self, name: &str, behavior: Behavior) -> Self {
        self.bus.borrow_mut().ports.push(SimPort {
            name: name.to_string(),
            behavior,
            opens: 0,
            is_open: false,
            poll_timeout: None,
            lines: Vec::new(),
            out: VecDeque::new(),
            line: Vec::new(),
        });
        self
    }

    fn index(&self, name: &str) -> usize {
        self.bus
            .borrow()
            .ports
            .iter()
            .position(|p| p.name == name)
            .expect("unknown simulated port")
    }

    pub fn opens(&self, name: &str) -> usize {
        self.bus.borrow().ports[self.index(name)].opens
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.bus.borrow().ports[self.index(name)].is_open
    }

    pub fn poll_timeout(&self, name: &str) -> Option<Duration> {
        self.bus.borrow().ports[self.index(name)].poll_timeout
    }

    pub fn lines(&self, name: &str) -> Vec<String> {
        self.bus.borrow().ports[self.index(name)].lines.clone()
    }

    pub fn overlapping_opens(&self) -> usize {
        self.bus.borrow().overlapping_opens
    }

    /// Queues bytes on the port as if left over from an earlier exchange.
    pub fn inject_stale(&self, name: &str, bytes: &[u8]) {
        let idx = self.index(name);
        self.bus.borrow_mut().ports[idx].out.extend(bytes);
    }

    pub fn with_adapter<R>(&self, name: &str, f: impl FnOnce(&mut SimAdapter) -> R) -> R {
        let idx = self.index(name);
        let mut bus = self.bus.borrow_mut();
        match &mut bus.ports[idx].behavior {
            Behavior::Adapter(adapter) => f(adapter),
            _ => panic!("{name} is not a simulated adapter"),
        }
    }
}

impl Transport for SimTransport {
    type Link = SimLink;

    fn endpoints(&self) -> Result<Vec<String>, AdapterError> {
        Ok(self.bus.borrow().ports.iter().map(|p| p.name.clone()).collect())
    }

    fn open(&self, endpoint: &str, _baud_rate: u32, poll_timeout: Duration) -> Result<SimLink, AdapterError> {
        let idx = self.index(endpoint);
        let mut bus = self.bus.borrow_mut();
        if bus.ports.iter().any(|p| p.is_open) {
            bus.overlapping_opens += 1;
        }
        let port = &mut bus.ports[idx];
        match port.behavior {
            Behavior::Busy => Err(AdapterError::PermissionDenied {
                endpoints: vec![endpoint.to_string()],
            }),
            Behavior::Broken => Err(AdapterError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such device",
            ))),
            _ => {
                port.opens += 1;
                port.is_open = true;
                port.poll_timeout = Some(poll_timeout);
                Ok(SimLink {
                    bus: Rc::clone(&self.bus),
                    idx,
                })
            }
        }
    }
}

pub struct SimLink {
    bus: Rc<RefCell<SimBus>>,
    idx: usize,
}

impl Link for SimLink {
    fn write_all(&mut self, data: &[u8]) -> Result<(), AdapterError> {
        let mut bus = self.bus.borrow_mut();
        let port = &mut bus.ports[self.idx];
        for &b in data {
            port.feed(b);
        }
        Ok(())
    }

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, AdapterError> {
        let mut bus = self.bus.borrow_mut();
        let out = &mut bus.ports[self.idx].out;
        let n = out.len().min(buf.len());
        for (slot, b) in buf.iter_mut().zip(out.drain(..n)) {
            *slot = b;
        }
        Ok(n)
    }

    fn discard_input(&mut self) -> Result<(), AdapterError> {
        self.bus.borrow_mut().ports[self.idx].out.clear();
        Ok(())
    }
}

impl Drop for SimLink {
    fn drop(&mut self) {
        self.bus.borrow_mut().ports[self.idx].is_open = false;
    }
}

impl SimPort {
    fn feed(&mut self, b: u8) {
        if let Behavior::Adapter(adapter) = &mut self.behavior {
            if adapter.awaiting_ack {
                adapter.on_ack(b, &mut self.out);
                return;
            }
        }
        if b != b'\r' {
            self.line.push(b);
            return;
        }
        let line = String::from_utf8_lossy(&self.line).into_owned();
        self.line.clear();
        self.lines.push(line.clone());
        match &mut self.behavior {
            Behavior::Adapter(adapter) => adapter.process_line(&line, &mut self.out),
            Behavior::Scripted(replies) => {
                if let Some((_, reply)) = replies.iter().find(|(prefix, _)| line.starts_with(prefix)) {
                    self.out.extend(reply.iter());
                }
            }
            _ => {}
        }
    }
}

/// Line-protocol model of the adapter firmware.
pub struct SimAdapter {
    pub board: u8,
    pub m2m: bool,
    pub present: HashSet<u8>,
    pub memory: HashMap<u8, Vec<u8>>,
    pub gpio: HashMap<u8, u8>,
    pub acks: usize,
    pub held: bool,
    /// Bytes per `recv` segment before an `&` is emitted
    pub recv_chunk: usize,
    /// Text emitted after every hex token of a `recv`
    pub recv_separator: &'static str,
    /// Emit `&` after a final segment that ends exactly on the chunk size
    pub ack_final_chunk: bool,
    addr: u8,
    expected: usize,
    sending: bool,
    hold: bool,
    pending: Vec<u8>,
    awaiting_ack: bool,
    recv_data: Vec<u8>,
    recv_pos: usize,
}

impl SimAdapter {
    pub fn new(board: u8) -> Self {
        Self {
            board,
            m2m: false,
            present: HashSet::new(),
            memory: HashMap::new(),
            gpio: HashMap::new(),
            acks: 0,
            held: false,
            recv_chunk: 16,
            recv_separator: " ",
            ack_final_chunk: true,
            addr: 0,
            expected: 0,
            sending: false,
            hold: false,
            pending: Vec::new(),
            awaiting_ack: false,
            recv_data: Vec::new(),
            recv_pos: 0,
        }
    }

    pub fn with_device(mut self, address: u8, contents: &[u8]) -> Self {
        self.present.insert(address);
        self.memory.insert(address, contents.to_vec());
        self
    }

    pub fn compact_reads(mut self, chunk: usize) -> Self {
        self.recv_chunk = chunk;
        self.recv_separator = "";
        self.ack_final_chunk = false;
        self
    }

    fn reply(&self, out: &mut VecDeque<u8>, marker: u8, text: &str) {
        if self.m2m {
            out.push_back(marker);
        } else {
            out.extend(text.bytes());
        }
    }

    fn process_line(&mut self, line: &str, out: &mut VecDeque<u8>) {
        let mut tokens = line.split(' ').filter(|t| !t.is_empty());

        if !self.sending {
            let Some(cmd) = tokens.next() else {
                self.reply(out, b'X', "Unknown command: \n");
                return;
            };
            match cmd {
                "device?" => {
                    out.extend(format!("easy_adapter_{}\n\r", self.board).bytes());
                    self.expected = 0;
                    self.pending.clear();
                    return;
                }
                "m2m_resp:1" => {
                    self.m2m = true;
                    out.push_back(b'.');
                    return;
                }
                "m2m_resp:0" => {
                    self.m2m = false;
                    out.extend(b"M2M response off\n".iter());
                    return;
                }
                "recv" => {
                    self.start_recv(out);
                    return;
                }
                "send" | "send+hold" => {
                    if self.expected == 0 {
                        out.extend(b"No bytes expected\n".iter());
                        return;
                    }
                    self.sending = true;
                    self.hold = cmd == "send+hold";
                    self.pending.clear();
                }
                _ => {
                    if let Some(hex) = cmd.strip_prefix("addr:0x") {
                        self.addr = u8::from_str_radix(hex, 16).unwrap_or(0);
                        self.reply(out, b'.', "I2C address set\n");
                    } else if let Some(n) = cmd.strip_prefix("bytes:") {
                        self.expected = n.parse().unwrap_or(0);
                        self.reply(out, b'.', "Expecting bytes\n");
                    } else if let Some(hex) = cmd.strip_prefix("tryaddr:0x") {
                        let addr = u8::from_str_radix(hex, 16).unwrap_or(0xFF);
                        let marker = if self.present.contains(&addr) { b'.' } else { b'~' };
                        self.reply(out, marker, "tryaddr done\n");
                    } else if let Some(args) = cmd.strip_prefix("iowrite:") {
                        let (pin, level) = args.split_once(',').unwrap_or(("0", "0"));
                        self.gpio.insert(pin.parse().unwrap_or(0), level.parse().unwrap_or(0));
                        self.reply(out, b'.', "GPIO set\n");
                    } else if let Some(pin) = cmd.strip_prefix("ioread:") {
                        let level = self.gpio.get(&pin.parse().unwrap_or(0)).copied().unwrap_or(0);
                        out.extend(format!("{level}.").bytes());
                    } else {
                        self.reply(out, b'X', "Unknown command\n");
                    }
                    return;
                }
            }
        }

        for token in tokens {
            let Ok(b) = u8::from_str_radix(token, 16) else {
                self.sending = false;
                self.reply(out, b'X', "Invalid byte\n");
                return;
            };
            self.pending.push(b);
            if self.pending.len() == self.expected {
                self.sending = false;
                self.expected = 0;
                if self.present.contains(&self.addr) {
                    self.memory.insert(self.addr, std::mem::take(&mut self.pending));
                    self.held = self.hold;
                    out.push_back(b'.');
                } else {
                    self.pending.clear();
                    out.push_back(b'~');
                }
                return;
            }
        }
        self.reply(out, b'&', "Remaining bytes expected\n");
    }

    fn start_recv(&mut self, out: &mut VecDeque<u8>) {
        if self.expected == 0 {
            out.extend(b"No bytes expected\n".iter());
            return;
        }
        if !self.present.contains(&self.addr) {
            out.push_back(b'~');
            return;
        }
        let mut data = self.memory.get(&self.addr).cloned().unwrap_or_default();
        data.resize(self.expected, 0);
        self.recv_data = data;
        self.recv_pos = 0;
        self.emit_segment(out);
    }

    fn emit_segment(&mut self, out: &mut VecDeque<u8>) {
        let end = (self.recv_pos + self.recv_chunk).min(self.recv_data.len());
        for b in &self.recv_data[self.recv_pos..end] {
            out.extend(format!("{b:02X}{}", self.recv_separator).bytes());
        }
        self.recv_pos = end;
        let more = self.recv_pos < self.recv_data.len();
        let full = self.recv_pos % self.recv_chunk == 0;
        if more || (full && self.ack_final_chunk) {
            out.push_back(b'&');
            self.awaiting_ack = true;
        } else {
            out.push_back(b'.');
        }
    }

    fn on_ack(&mut self, b: u8, out: &mut VecDeque<u8>) {
        self.awaiting_ack = false;
        match b {
            b'&' => {
                self.acks += 1;
                if self.recv_pos < self.recv_data.len() {
                    self.emit_segment(out);
                } else {
                    out.push_back(b'.');
                }
            }
            b'X' => out.push_back(b'.'),
            _ => out.push_back(b'X'),
        }
    }
}

/// Routes library logs to the test harness; `RUST_LOG=trace` shows traffic.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn fast_config() -> SessionConfig {
    SessionConfig {
        wait: Duration::from_millis(60),
        chunk_wait: Duration::from_millis(120),
        read_idle: Duration::from_millis(60),
        ..SessionConfig::default()
    }
}

/// A session bound to a single M2M-mode adapter on `sim0`.
pub fn adapter_session(mut adapter: SimAdapter) -> (Session<SimTransport>, SimTransport) {
    init_tracing();
    adapter.m2m = true;
    let transport = SimTransport::new().with_port("sim0", Behavior::Adapter(adapter));
    let mut session = Session::with_transport(transport.clone(), fast_config());
    session.bind("sim0");
    (session, transport)
}
