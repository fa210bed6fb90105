//! A length-framed byte stream encrypted with [`CfbMode`].
//!
//! [`StreamWriter`] and [`StreamReader`] wrap any `std::io::{Write, Read}`
//! byte sink/source — a file, a `TcpStream`, an in-memory buffer — rather
//! than inventing a bespoke I/O abstraction, matching how the rest of
//! this crate works directly against byte slices and `std` types. The
//! wire format (a 4-byte little-endian length header followed by raw CFB
//! ciphertext) is fixed by an external peer implementation this crate
//! must interoperate with.

use std::io::{self, Read, Write};

use crate::modes::CfbMode;

/// Buffers plaintext in memory and, on [`StreamWriter::close`], emits a
/// 4-byte little-endian length header followed by the CFB-encrypted
/// payload to the wrapped writer.
///
/// Dropping a `StreamWriter` without calling `close` discards the
/// buffered plaintext without ever writing it — `close` is mandatory to
/// produce output.
pub struct StreamWriter<W: Write> {
    inner: W,
    cfb: CfbMode,
    buffer: Vec<u8>,
    closed: bool,
}

impl<W: Write> StreamWriter<W> {
    /// Wrap `inner`, encrypting with `cfb`. `cfb`'s IV should already be
    /// set to whatever the peer expects before the first byte is
    /// written.
    pub fn new(inner: W, cfb: CfbMode) -> Self {
        Self {
            inner,
            cfb,
            buffer: Vec::new(),
            closed: false,
        }
    }

    /// Encrypt and emit every buffered byte: a 4-byte little-endian
    /// length header, then the CFB ciphertext. Idempotent — calling this
    /// more than once after the first successful call is a no-op.
    pub fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }

        let len = self.buffer.len() as u32;
        self.inner.write_all(&len.to_le_bytes())?;

        let mut ciphertext = vec![0u8; self.buffer.len()];
        self.cfb
            .encrypt(&self.buffer, &mut ciphertext)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        self.inner.write_all(&ciphertext)?;
        self.inner.flush()?;

        self.closed = true;
        Ok(())
    }
}

impl<W: Write> Write for StreamWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads a length-framed, CFB-encrypted payload produced by a
/// [`StreamWriter`] (or a compatible peer) from the wrapped reader.
pub struct StreamReader<R: Read> {
    inner: R,
    cfb: CfbMode,
    remaining: Option<usize>,
}

impl<R: Read> StreamReader<R> {
    /// Wrap `inner`, decrypting with `cfb`. `cfb`'s IV should already be
    /// set to whatever the peer used for the matching `StreamWriter`.
    pub fn new(inner: R, cfb: CfbMode) -> Self {
        Self {
            inner,
            cfb,
            remaining: None,
        }
    }

    fn ensure_header(&mut self) -> io::Result<()> {
        if self.remaining.is_none() {
            let mut header = [0u8; 4];
            self.inner.read_exact(&mut header)?;
            self.remaining = Some(u32::from_le_bytes(header) as usize);
        }
        Ok(())
    }
}

impl<R: Read> Read for StreamReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.ensure_header()?;

        let remaining = self.remaining.expect("ensure_header always sets remaining");
        if remaining == 0 {
            return Ok(0);
        }

        let want = buf.len().min(remaining);
        if want == 0 {
            return Ok(0);
        }

        let mut ciphertext = vec![0u8; want];
        self.inner.read_exact(&mut ciphertext)?;

        self.cfb
            .decrypt(&ciphertext, &mut buf[..want])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

        self.remaining = Some(remaining - want);
        Ok(want)
    }
}
