//! The transport boundary and the process-wide default slot.
//!
//! A transport is anything that can take a fully-built [`Request`] and
//! produce a response: an HTTP client integration (see the
//! `reqpipe-backend-ureq` crate) or a test double. The library hands the
//! request over and returns the transport's response and error unchanged.
//!
//! The `Any*` traits type-erase transports so they can live behind trait
//! objects in [`Client`](crate::Client) and in the default slot; they are
//! implemented automatically and backend authors never implement them
//! directly.

use std::fmt;
use std::io;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{Error, Result};
use crate::request::Request;

/// A dispatcher able to send a built request.
pub trait Transport: Send + Sync + 'static {
    /// The response type this transport produces.
    type Response: Response;

    /// Textual description of this transport for diagnostics.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transport")
    }

    /// Send a fully-built request and return the response.
    ///
    /// The request's context carries the deadline and cancellation signal
    /// the transport is expected to honour. Build errors never reach this
    /// method; dispatch errors are returned to the caller unchanged.
    fn send(&self, request: Request) -> Result<Self::Response>;
}

/// An HTTP response produced by a [`Transport`].
///
/// Extends `io::Read` so the body can be streamed. The content-reading
/// methods take `&mut self` for object safety; the facade
/// [`Response`](crate::Response) consumes itself so they run at most once.
pub trait Response: io::Read + Send + 'static {
    /// Textual description of this response for diagnostics.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Response")
    }

    /// HTTP status code.
    fn status(&self) -> u16;

    /// Content length of the body, when known.
    fn content_length(&self) -> Option<u64>;

    /// All values of the named header.
    fn get_header(&self, name: &str) -> Result<Vec<String>>;

    /// Read the full response body as text.
    fn text(&mut self) -> Result<String>;

    /// Read the full response body as bytes.
    fn bytes(&mut self) -> Result<Vec<u8>>;
}

/// Type-erased [`Transport`]. Implemented automatically; do not implement
/// directly.
pub trait AnyTransport: Send + Sync {
    /// Textual description of this transport for diagnostics.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Send a fully-built request and return a boxed response.
    fn send(&self, request: Request) -> Result<Box<dyn AnyResponse>>;
}

/// Type-erased [`Response`]. Implemented automatically; do not implement
/// directly.
pub trait AnyResponse: io::Read + Send {
    /// Textual description of this response for diagnostics.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// HTTP status code.
    fn status(&self) -> u16;

    /// Content length of the body, when known.
    fn content_length(&self) -> Option<u64>;

    /// All values of the named header.
    fn get_header(&self, name: &str) -> Result<Vec<String>>;

    /// Read the full response body as text.
    fn text(&mut self) -> Result<String>;

    /// Read the full response body as bytes.
    fn bytes(&mut self) -> Result<Vec<u8>>;
}

impl<T: Transport> AnyTransport for T {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Transport::describe(self, f)
    }

    fn send(&self, request: Request) -> Result<Box<dyn AnyResponse>> {
        Ok(Box::new(Transport::send(self, request)?))
    }
}

impl<R: Response> AnyResponse for R {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Response::describe(self, f)
    }

    fn status(&self) -> u16 {
        Response::status(self)
    }

    fn content_length(&self) -> Option<u64> {
        Response::content_length(self)
    }

    fn get_header(&self, name: &str) -> Result<Vec<String>> {
        Response::get_header(self, name)
    }

    fn text(&mut self) -> Result<String> {
        Response::text(self)
    }

    fn bytes(&mut self) -> Result<Vec<u8>> {
        Response::bytes(self)
    }
}

static DEFAULT: RwLock<Option<Arc<dyn AnyTransport>>> = RwLock::new(None);

/// Replace the process-wide default transport used by [`crate::send`] and
/// the method shims.
///
/// The slot is a deliberate singleton. Set it once during initialization,
/// before spawning workers that dispatch through it; library code should
/// prefer an explicit [`Client`](crate::Client) and leave the global alone.
pub fn set_default(transport: impl Transport) {
    let mut slot = DEFAULT.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Arc::new(transport));
}

/// The current default transport, or [`Error::NoTransport`] if none has
/// been registered.
pub(crate) fn default() -> Result<Arc<dyn AnyTransport>> {
    DEFAULT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(Error::NoTransport)
}
