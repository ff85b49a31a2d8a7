//! # Printer Transport Layer
//!
//! The encoder produces bytes; a [`Transport`] moves them to a printer. This
//! crate ships two transports and leaves device-specific ones (USB, serial,
//! TCP port 9100, Bluetooth) to the caller:
//!
//! - [`MemoryTransport`]: records deliveries, can be scripted to fail
//! - [`WriterTransport`]: any `io::Write`, with chunked writes
//!
//! Retrying is a transport concern: see [`deliver_with_retry`].
//!
//! ## Example
//!
//! ```
//! use rollcode::transport::{deliver_with_retry, MemoryTransport, RetryPolicy};
//! use rollcode::{Aggregator, JobBuffer, ProtocolId};
//!
//! let printer = Aggregator::new(ProtocolId::EscPos);
//! let mut job = JobBuffer::new();
//! job.push(printer.control()?.init());
//!
//! let mut transport = MemoryTransport::new();
//! deliver_with_retry(&mut transport, &job, &RetryPolicy::default())?;
//! assert_eq!(transport.deliveries(), &[vec![0x1B_u8, 0x40]]);
//! # Ok::<(), rollcode::RollcodeError>(())
//! ```

pub mod retry;

pub use retry::{deliver_with_retry, RetryPolicy};

use std::collections::VecDeque;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::error::TransportError;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Something that carries job bytes to a printer.
pub trait Transport {
    /// Deliver one complete job.
    fn deliver(&mut self, bytes: &[u8]) -> Result<(), TransportError>;
}

// ============================================================================
// MEMORY TRANSPORT
// ============================================================================

/// Records every successful delivery.
///
/// Failures queued with [`fail_next`](MemoryTransport::fail_next) are
/// returned by the following `deliver` calls, in order, before any delivery
/// succeeds again.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    deliveries: Vec<Vec<u8>>,
    failures: VecDeque<TransportError>,
    attempts: usize,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an error for the next delivery attempt.
    pub fn fail_next(&mut self, err: TransportError) {
        self.failures.push_back(err);
    }

    pub fn deliveries(&self) -> &[Vec<u8>] {
        &self.deliveries
    }

    /// Attempts made, failed ones included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl Transport for MemoryTransport {
    fn deliver(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.attempts += 1;
        if let Some(err) = self.failures.pop_front() {
            return Err(err);
        }
        self.deliveries.push(bytes.to_vec());
        Ok(())
    }
}

// ============================================================================
// WRITER TRANSPORT
// ============================================================================

/// # Writer Transport
///
/// Delivers to any [`Write`]: a device file, a `TcpStream` on port 9100, a
/// `Vec<u8>` in tests.
///
/// Large jobs are written in chunks so slow links (Bluetooth SPP, serial) do
/// not overflow the printer's input buffer. The writer is flushed after every
/// delivery.
///
/// A failure after some bytes already reached the writer is reported as
/// [`TransportError::partial_write`], which is not retryable: resending the
/// job would repeat its beginning.
///
/// ```no_run
/// use std::net::TcpStream;
/// use rollcode::transport::{Transport, WriterTransport};
///
/// let stream = TcpStream::connect("192.168.1.50:9100")?;
/// let mut transport = WriterTransport::new(stream);
/// transport.deliver(b"^XA^FDHello^FS^XZ")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct WriterTransport<W: Write> {
    writer: W,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl<W: Write> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::ZERO,
        }
    }

    /// Set the chunk size for large writes. Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is none.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WriterTransport<W> {
    /// Write all of `chunk`, counting accepted bytes into `written`.
    fn write_chunk(&mut self, chunk: &[u8], written: &mut usize) -> io::Result<()> {
        let mut offset = 0;
        while offset < chunk.len() {
            match self.writer.write(&chunk[offset..]) {
                Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero)),
                Ok(n) => {
                    offset += n;
                    *written += n;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn write_job(&mut self, bytes: &[u8], written: &mut usize) -> io::Result<()> {
        let mut chunks = bytes.chunks(self.chunk_size).peekable();
        while let Some(chunk) = chunks.next() {
            self.write_chunk(chunk, written)?;
            if chunks.peek().is_some() && !self.chunk_delay.is_zero() {
                thread::sleep(self.chunk_delay);
            }
        }
        self.writer.flush()
    }
}

impl<W: Write> Transport for WriterTransport<W> {
    fn deliver(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let mut written = 0;
        self.write_job(bytes, &mut written).map_err(|err| match written {
            0 => TransportError::from_io(err),
            n => TransportError::partial_write(n, err),
        })
    }
}
