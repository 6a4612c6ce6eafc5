//! The response handed back from a transport.

use std::fmt;
use std::io;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::transport::AnyResponse;

/// An HTTP response returned by a transport, unchanged.
///
/// The library does not decode responses; this type only forwards to the
/// transport's own response object. Content readers consume the response,
/// so each body is read at most once.
pub struct Response {
    inner: Box<dyn AnyResponse>,
}

impl Response {
    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    /// Content length of the body, when the transport knows it.
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// All values of the named header, as reported by the transport.
    pub fn get_header(&self, name: &str) -> Result<Vec<String>> {
        self.inner.get_header(name)
    }

    /// Read the full response body as text.
    pub fn text(mut self) -> Result<String> {
        self.inner.text()
    }

    /// Read the full response body as bytes.
    pub fn bytes(mut self) -> Result<Vec<u8>> {
        AnyResponse::bytes(&mut *self.inner)
    }

    /// Read the full response body and deserialize it as JSON.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_slice(&self.bytes()?)?)
    }

    /// Consume the response into a reader over the body stream.
    pub fn into_read(self) -> impl io::Read {
        self.inner
    }
}

impl From<Box<dyn AnyResponse>> for Response {
    fn from(inner: Box<dyn AnyResponse>) -> Self {
        Self { inner }
    }
}

struct ResponseDebug<'a> {
    inner: &'a dyn AnyResponse,
}

impl fmt::Debug for ResponseDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.describe(f)
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status())
            .field("content_length", &self.content_length())
            .field("inner", &ResponseDebug { inner: &*self.inner })
            .finish()
    }
}
