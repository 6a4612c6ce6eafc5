//! Request body payloads.

use std::fmt;
use std::io::{self, Read};
use std::sync::Arc;

use bytes::Bytes;

/// A byte-producing request payload.
///
/// A body is owned by the request it is attached to and consumed exactly
/// once by the transport. Streaming payloads cannot be re-read; transports
/// that retry must re-acquire the body through the closure installed by the
/// `get_body` option.
pub enum Body {
    /// An in-memory payload.
    Bytes(Bytes),
    /// A streaming payload, read on dispatch.
    Reader(Box<dyn Read + Send>),
}

impl Body {
    /// A body over in-memory bytes.
    pub fn bytes(content: impl Into<Bytes>) -> Self {
        Body::Bytes(content.into())
    }

    /// A body over a UTF-8 string.
    pub fn text(content: impl Into<String>) -> Self {
        Body::Bytes(Bytes::from(content.into().into_bytes()))
    }

    /// A body streamed from `reader` on dispatch.
    pub fn reader(reader: impl Read + Send + 'static) -> Self {
        Body::Reader(Box::new(reader))
    }

    /// Payload length, when known without consuming the payload.
    pub fn content_length(&self) -> Option<u64> {
        match self {
            Body::Bytes(bytes) => Some(bytes.len() as u64),
            Body::Reader(_) => None,
        }
    }

    /// Drain a streaming payload into memory, leaving the body holding the
    /// buffered bytes, and return them.
    ///
    /// In-memory payloads are returned as-is. This is how the `dump` option
    /// snapshots a body without consuming it.
    pub fn buffer(&mut self) -> io::Result<&Bytes> {
        if let Body::Reader(reader) = self {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf)?;
            *self = Body::Bytes(buf.into());
        }
        match self {
            Body::Bytes(bytes) => Ok(bytes),
            Body::Reader(_) => unreachable!("streaming body was just buffered"),
        }
    }

    /// Consume the body, draining a streaming payload into memory.
    pub fn into_bytes(self) -> io::Result<Bytes> {
        match self {
            Body::Bytes(bytes) => Ok(bytes),
            Body::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Ok(buf.into())
            }
        }
    }

    /// Consume the body into a reader over its payload.
    pub fn into_reader(self) -> Box<dyn Read + Send> {
        match self {
            Body::Bytes(bytes) => Box::new(io::Cursor::new(bytes)),
            Body::Reader(reader) => reader,
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Body::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

impl From<Bytes> for Body {
    fn from(content: Bytes) -> Self {
        Body::Bytes(content)
    }
}

impl From<Vec<u8>> for Body {
    fn from(content: Vec<u8>) -> Self {
        Body::Bytes(content.into())
    }
}

impl From<String> for Body {
    fn from(content: String) -> Self {
        Body::text(content)
    }
}

impl From<&'static str> for Body {
    fn from(content: &'static str) -> Self {
        Body::Bytes(Bytes::from_static(content.as_bytes()))
    }
}

/// A closure able to reproduce the request body, installed by the `get_body`
/// option for transports that retry after consuming the original payload.
pub type GetBody = Arc<dyn Fn() -> io::Result<Body> + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_replaces_reader_with_bytes() {
        let mut body = Body::reader(io::Cursor::new(b"streamed".to_vec()));
        assert_eq!(body.content_length(), None);
        assert_eq!(&body.buffer().unwrap()[..], b"streamed");
        assert_eq!(body.content_length(), Some(8));
        // A second buffering observes the same bytes.
        assert_eq!(&body.buffer().unwrap()[..], b"streamed");
    }

    #[test]
    fn into_bytes_drains_reader() {
        let body = Body::reader(io::Cursor::new(b"abc".to_vec()));
        assert_eq!(&body.into_bytes().unwrap()[..], b"abc");
    }

    #[test]
    fn into_reader_round_trips_bytes() {
        let mut out = Vec::new();
        Body::text("hello").into_reader().read_to_end(&mut out).unwrap();
        assert_eq!(out, b"hello");
    }
}
