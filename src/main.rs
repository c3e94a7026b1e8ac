use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use easyadapter_lib::constants::SCAN_RANGE;
use easyadapter_lib::{
    I2cReadRequest, I2cWriteRequest, Level, ScanHit, SerialTransport, Session, SessionConfig, devices, hexdump,
};

/// Drive an I2C bus through an easy_adapter on a serial port.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Adapter instance (0-7) selected by its strap pins.
    #[arg(short, long, default_value_t = 0, global = true)]
    board: u8,
    /// Use this serial port instead of searching for the adapter.
    #[arg(short, long, global = true)]
    port: Option<String>,
    /// Response wait for simple commands, in milliseconds.
    #[arg(long, default_value_t = 500, global = true)]
    wait_ms: u64,
    /// Log every command and response.
    #[arg(long, global = true)]
    debug: bool,
    /// Optional path to a file to write logs to, in addition to the console.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List serial ports.
    Ports,
    /// Locate the adapter and print its port.
    Find,
    /// Show parts known to use an address.
    Lookup {
        #[arg(value_parser = parse_number)]
        address: u8,
    },
    /// Show addresses of parts whose name contains a term.
    Search { term: String },
    #[command(flatten)]
    Adapter(AdapterCommand),
}

/// Commands that talk to a connected adapter in M2M mode.
#[derive(Subcommand, Debug)]
enum AdapterCommand {
    /// Probe every I2C address and print the ones that answer.
    Scan {
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Write bytes to an I2C device.
    Write {
        /// 7-bit address (0x-prefixed hex or decimal).
        #[arg(value_parser = parse_number)]
        address: u8,
        /// First byte, usually a register or command (hex).
        #[arg(value_parser = parse_hex_byte)]
        first: u8,
        /// Remaining bytes (hex).
        #[arg(value_parser = parse_hex_byte)]
        data: Vec<u8>,
        /// Hold the bus afterwards for a repeated start.
        #[arg(long)]
        hold: bool,
    },
    /// Read bytes from an I2C device and dump them.
    Read {
        /// 7-bit address (0x-prefixed hex or decimal).
        #[arg(value_parser = parse_number)]
        address: u8,
        /// Number of bytes to read.
        count: usize,
    },
    /// Set an adapter GPIO pin.
    GpioSet {
        pin: u8,
        /// 0 or 1.
        #[arg(value_parser = clap::value_parser!(u8).range(0..=1))]
        level: u8,
    },
    /// Read an adapter GPIO pin.
    GpioGet { pin: u8 },
    /// Return the adapter to human-readable responses.
    M2mOff,
}

fn parse_number(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

fn parse_hex_byte(s: &str) -> Result<u8, String> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u8::from_str_radix(digits, 16).map_err(|e| format!("invalid hex byte '{s}': {e}"))
}

fn setup_logging(log_file_path: Option<PathBuf>, verbosity: &Verbosity<InfoLevel>) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    let (file_layer, guard) = if let Some(ref path) = log_file_path {
        let log_file =
            File::create(path).with_context(|| format!("Failed to create log file at: {:?}", path))?;
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(log_file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .with_target(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(path) = log_file_path {
        info!("Logging to file: {:?}", path);
    }
    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logging(cli.log_file.clone(), &cli.verbose)?;

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        process::exit(1);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Ports => {
            let ports = SerialTransport::list_ports().context("Failed to list serial ports")?;
            if ports.is_empty() {
                info!("No serial ports found.");
            }
            for port in ports {
                write!(out, "{} ({})", port.port_name, port.port_type)?;
                if let (Some(vid), Some(pid)) = (port.vid, port.pid) {
                    write!(out, " {:04x}:{:04x}", vid, pid)?;
                }
                if let Some(product) = port.product {
                    write!(out, " {}", product)?;
                }
                writeln!(out)?;
            }
        }
        Command::Lookup { address } => {
            for name in devices::names_for(address) {
                writeln!(out, "0x{:02x}: {}", address, name)?;
            }
        }
        Command::Search { term } => {
            let addresses = devices::addresses_matching(&term);
            if addresses.is_empty() {
                bail!("No known device matches '{}'", term);
            }
            for address in addresses {
                writeln!(out, "0x{:02x}", address)?;
            }
        }
        Command::Find => {
            let mut session = new_session(&cli.port, cli.wait_ms, cli.debug);
            writeln!(out, "{}", find_endpoint(&mut session, cli.board)?)?;
        }
        Command::Adapter(command) => {
            let session = connect(&cli.port, cli.board, cli.wait_ms, cli.debug)?;
            run_on_adapter(&session, command, &mut out)?;
        }
    }
    Ok(())
}

fn new_session(port: &Option<String>, wait_ms: u64, debug: bool) -> Session {
    let config = SessionConfig {
        wait: Duration::from_millis(wait_ms),
        debug,
        ..SessionConfig::default()
    };
    let mut session = Session::with_transport(SerialTransport, config);
    if let Some(port) = port {
        session.bind(port.clone());
    }
    session
}

/// The `--port` endpoint when given, otherwise the discovered one.
fn find_endpoint(session: &mut Session, board: u8) -> Result<String> {
    match session.endpoint() {
        Some(port) => Ok(port.to_string()),
        None => Ok(session.discover(board)?),
    }
}

/// Binds the adapter (given port or discovery) and switches it to M2M mode.
fn connect(port: &Option<String>, board: u8, wait_ms: u64, debug: bool) -> Result<Session> {
    let mut session = new_session(port, wait_ms, debug);
    if session.endpoint().is_none() {
        session.discover(board)?;
    }
    session.enter_m2m().context("Failed to enter M2M mode")?;
    Ok(session)
}

fn run_on_adapter(session: &Session, command: AdapterCommand, out: &mut impl Write) -> Result<()> {
    match command {
        AdapterCommand::Scan { json } => {
            let hits = session.scan(SCAN_RANGE)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &hits)?;
                writeln!(out)?;
            } else {
                print_scan_grid(&hits, out)?;
                for hit in &hits {
                    writeln!(out, "0x{:02x}: {}", hit.address, hit.names.join(", "))?;
                }
            }
        }
        AdapterCommand::Write {
            address,
            first,
            data,
            hold,
        } => {
            let req = I2cWriteRequest::new(address, first, data).with_hold(hold);
            session.i2c_write(&req)?;
            info!("Wrote {} byte(s) to 0x{:02x}", req.len(), address);
        }
        AdapterCommand::Read { address, count } => {
            let data = session.i2c_read(&I2cReadRequest::new(address, count))?;
            hexdump::print_data(&data, out)?;
        }
        AdapterCommand::GpioSet { pin, level } => {
            session.io_write(pin, Level::from(level == 1))?;
        }
        AdapterCommand::GpioGet { pin } => {
            let level = session.io_read(pin)?;
            writeln!(out, "{}", level)?;
        }
        AdapterCommand::M2mOff => session.exit_m2m()?,
    }
    Ok(())
}

/// Prints scan results in the layout of `i2cdetect`.
fn print_scan_grid(hits: &[ScanHit], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "     0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f")?;
    for row in (0x00..=0x70u8).step_by(0x10) {
        write!(out, "{:02x}:", row)?;
        for address in row..row + 0x10 {
            if address > *SCAN_RANGE.end() {
                break;
            }
            if !SCAN_RANGE.contains(&address) {
                write!(out, "   ")?;
            } else if hits.iter().any(|h| h.address == address) {
                write!(out, " {:02x}", address)?;
            } else {
                write!(out, " --")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
