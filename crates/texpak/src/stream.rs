//! Byte-stream abstraction consumed by the container reader.
//!
//! The reader only needs three capabilities from its source: a blocking
//! `read`, an all-or-nothing `read_exact`, and a readability check. Anything
//! that can provide those can feed the decoder.
//!
//! # Implementations
//!
//! - [`MemoryStream`]: an owned byte buffer with a cursor
//! - [`ReaderStream`]: adapter for any [`std::io::Read`], e.g. a file

use std::io;

/// A readable source of container bytes.
///
/// The reader issues at most one read call at a time and never seeks, so a
/// plain forward-only source is sufficient.
pub trait Stream {
    /// Read up to `buf.len()` bytes, returning how many were obtained.
    /// Returning 0 means the stream is exhausted.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Whether the stream can currently be read from.
    fn is_readable(&self) -> bool {
        true
    }

    /// Fill `buf` completely, failing with [`io::ErrorKind::UnexpectedEof`]
    /// if the stream runs out first.
    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let count = self.read(&mut buf[filled..])?;
            if count == 0 {
                return Err(io::ErrorKind::UnexpectedEof.into());
            }
            filled += count;
        }
        Ok(())
    }
}

/// An in-memory stream over an owned byte buffer.
#[derive(Debug, Clone)]
pub struct MemoryStream {
    data: Vec<u8>,
    position: usize,
}

impl MemoryStream {
    /// Create a stream positioned at the start of `data`.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            position: 0,
        }
    }

    /// Current read position in bytes.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}

impl Stream for MemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let count = buf.len().min(self.remaining());
        buf[..count].copy_from_slice(&self.data[self.position..self.position + count]);
        self.position += count;
        Ok(count)
    }
}

/// Adapter exposing any [`io::Read`] as a [`Stream`].
#[derive(Debug)]
pub struct ReaderStream<R> {
    inner: R,
}

impl<R: io::Read> ReaderStream<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap back into the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: io::Read> Stream for ReaderStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_stream_read() {
        let mut stream = MemoryStream::new(vec![1, 2, 3, 4, 5]);
        let mut buf = [0u8; 3];
        assert_eq!(stream.read(&mut buf).unwrap(), 3);
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(stream.position(), 3);
        assert_eq!(stream.remaining(), 2);

        // A read past the end returns what is left.
        assert_eq!(stream.read(&mut buf).unwrap(), 2);
        assert_eq!(buf[..2], [4, 5]);
        assert_eq!(stream.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_memory_stream_read_exact() {
        let mut stream = MemoryStream::new(vec![1, 2, 3, 4]);
        let mut buf = [0u8; 4];
        stream.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn test_read_exact_fails_on_short_stream() {
        let mut stream = MemoryStream::new(vec![1, 2]);
        let mut buf = [0u8; 4];
        let err = stream.read_exact(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_reader_stream_adapts_io_read() {
        let cursor = std::io::Cursor::new(vec![9, 8, 7]);
        let mut stream = ReaderStream::new(cursor);
        let mut buf = [0u8; 3];
        stream.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [9, 8, 7]);
    }
}
