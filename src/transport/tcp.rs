//! # TCP Transport
//!
//! Raw-socket printing to network label printers, conventionally on
//! port 9100. One send operation owns one outbound socket for the
//! duration of one attempt; nothing is pooled or kept alive between
//! sends.
//!
//! ## Attempt Lifecycle
//!
//! 1. Connect with the endpoint's connect timeout.
//! 2. Write the full stream in chunks (large rasters can overflow the
//!    printer's receive buffer if shoved down in one write).
//! 3. Hold the socket open briefly and accumulate anything the printer
//!    sends back (advisory only; most models stay silent).
//! 4. Shut the socket down.
//!
//! Each attempt runs straight-line and resolves exactly once, at its
//! single return. The outer loop ([`retry`](super::retry)) classifies
//! the failure, sleeps the class-specific backoff, and tries again
//! until the [`RetryPolicy`] is exhausted.

use std::io::{Read, Write};
use std::net::{Ipv4Addr, Shutdown, SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;

use crate::error::PrintError;
use crate::printer::{PrinterEndpoint, RetryPolicy};

use super::retry::retry;
use super::{SendReceipt, Transport};

/// Chunk size for writes (bytes).
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds).
const CHUNK_DELAY_MS: u64 = 2;

/// How long to listen for a response after writing (milliseconds).
const SETTLE_WAIT_MS: u64 = 1000;

/// # Network Printer Transport
///
/// Connects per send, retries per its [`RetryPolicy`], and never holds
/// a socket between operations.
///
/// ## Example
///
/// ```no_run
/// use etiqueta::printer::{PrinterEndpoint, RetryPolicy};
/// use etiqueta::protocol::commands;
/// use etiqueta::transport::{TcpTransport, Transport};
///
/// let endpoint = PrinterEndpoint::new("192.168.1.50");
/// let mut transport = TcpTransport::new(RetryPolicy::default());
/// let receipt = transport.send(&endpoint, &commands::init())?;
/// println!("sent in {} attempt(s)", receipt.attempts);
/// # Ok::<(), etiqueta::error::PrintError>(())
/// ```
pub struct TcpTransport {
    policy: RetryPolicy,
    settle_wait: Duration,
}

impl TcpTransport {
    /// Create a transport with the given retry policy.
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            settle_wait: Duration::from_millis(SETTLE_WAIT_MS),
        }
    }

    /// Shorten the post-write settle window. Mainly for tests; the
    /// default gives a slow printer time to push back status bytes.
    pub fn set_settle_wait(&mut self, wait: Duration) {
        self.settle_wait = wait;
    }

    fn socket_addr(endpoint: &PrinterEndpoint) -> Result<SocketAddr, PrintError> {
        let ip: Ipv4Addr = endpoint.host.parse().map_err(|_| {
            PrintError::Validation(format!(
                "host {:?} is not a valid IPv4 address",
                endpoint.host
            ))
        })?;
        Ok(SocketAddr::from((ip, endpoint.port)))
    }

    fn connect(endpoint: &PrinterEndpoint) -> Result<TcpStream, PrintError> {
        let addr = Self::socket_addr(endpoint)?;
        let stream = TcpStream::connect_timeout(&addr, endpoint.connect_timeout())
            .map_err(|e| classify_connect_error(e, endpoint))?;
        Ok(stream)
    }

    /// One full attempt: connect, write, settle, close.
    fn attempt(&self, endpoint: &PrinterEndpoint, bytes: &[u8]) -> Result<usize, PrintError> {
        let stream = Self::connect(endpoint)?;
        let addr = endpoint.addr();

        stream
            .set_write_timeout(Some(endpoint.idle_timeout()))
            .map_err(|e| PrintError::Unknown {
                addr: addr.clone(),
                source: e,
            })?;
        stream
            .set_read_timeout(Some(self.settle_wait))
            .map_err(|e| PrintError::Unknown {
                addr: addr.clone(),
                source: e,
            })?;

        write_chunked(&stream, bytes, endpoint)?;

        // Settle window: collect whatever the printer sends back. A
        // timeout here is the normal case, not a failure.
        let mut received = 0usize;
        let mut buf = [0u8; 256];
        let mut reader = &stream;
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => received += n,
                Err(e)
                    if matches!(
                        e.kind(),
                        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                    ) =>
                {
                    break;
                }
                Err(_) => break,
            }
        }

        let _ = stream.shutdown(Shutdown::Both);
        Ok(received)
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, endpoint: &PrinterEndpoint, bytes: &[u8]) -> Result<SendReceipt, PrintError> {
        let addr = endpoint.addr();
        log::debug!("sending {} bytes to {}", bytes.len(), addr);

        let (attempts, bytes_received) =
            retry(&self.policy, &addr, || self.attempt(endpoint, bytes))?;
        Ok(SendReceipt {
            attempts,
            bytes_received,
        })
    }

    fn probe(&mut self, endpoint: &PrinterEndpoint) -> Result<(), PrintError> {
        let stream = Self::connect(endpoint)?;
        let _ = stream.shutdown(Shutdown::Both);
        Ok(())
    }
}

/// Classify a connect-stage OS error into the retry taxonomy.
fn classify_connect_error(e: std::io::Error, endpoint: &PrinterEndpoint) -> PrintError {
    use std::io::ErrorKind;

    let addr = endpoint.addr();
    match e.kind() {
        ErrorKind::ConnectionRefused => PrintError::Refused { addr, source: e },
        ErrorKind::TimedOut | ErrorKind::WouldBlock => PrintError::ConnectTimeout {
            addr,
            timeout: endpoint.connect_timeout(),
        },
        ErrorKind::HostUnreachable => PrintError::HostUnreachable { addr, source: e },
        ErrorKind::NetworkUnreachable => PrintError::NetworkUnreachable { addr, source: e },
        ErrorKind::NotFound => PrintError::NotFound { addr, source: e },
        _ => PrintError::Unknown { addr, source: e },
    }
}

/// Write in chunks with a small delay, so large rasters don't outrun
/// the printer's receive buffer.
fn write_chunked(
    mut stream: &TcpStream,
    bytes: &[u8],
    endpoint: &PrinterEndpoint,
) -> Result<(), PrintError> {
    let chunk_delay = Duration::from_millis(CHUNK_DELAY_MS);
    let chunked = bytes.len() > CHUNK_SIZE;

    for chunk in bytes.chunks(CHUNK_SIZE) {
        stream
            .write_all(chunk)
            .map_err(|e| classify_write_error(e, endpoint))?;
        if chunked {
            thread::sleep(chunk_delay);
        }
    }

    stream
        .flush()
        .map_err(|e| classify_write_error(e, endpoint))
}

/// A write that stalls past the idle timeout is an idle-timeout; any
/// other write failure is terminal for the whole send.
fn classify_write_error(e: std::io::Error, endpoint: &PrinterEndpoint) -> PrintError {
    use std::io::ErrorKind;

    let addr = endpoint.addr();
    match e.kind() {
        ErrorKind::TimedOut | ErrorKind::WouldBlock => PrintError::IdleTimeout {
            addr,
            timeout: endpoint.idle_timeout(),
        },
        _ => PrintError::Write { addr, source: e },
    }
}

// ============================================================================
// TESTS
// ============================================================================
