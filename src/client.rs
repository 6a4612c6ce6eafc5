//! A bound pair of transport and base pipeline.

use std::fmt;
use std::sync::Arc;

use http::Method;
use url::Url;

use crate::error::Result;
use crate::option::{Opt, Pipeline};
use crate::request::Request;
use crate::response::Response;
use crate::transport::{AnyTransport, Transport};

/// Requests a client seeds start from this URL; the base pipeline's `url`
/// option is expected to replace it.
const SEED_URL: &str = "http://localhost/";

/// A reusable dispatcher: a transport bound to a base option pipeline that
/// runs before every call's own options.
///
/// The base pipeline typically carries a `url(...)` option plus shared
/// headers; call-site options are appended after it, so on last-writer-wins
/// fields the call site wins. A client is immutable after construction,
/// cheap to clone, holds no per-request state, and is safe for concurrent
/// use if its transport is.
///
/// ```
/// use std::io;
/// use reqpipe::transport::{Response as TransportResponse, Transport};
/// use reqpipe::{bearer_auth, query, url, Client, Request};
///
/// struct NoContent;
///
/// impl io::Read for NoContent {
///     fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
///         Ok(0)
///     }
/// }
///
/// impl TransportResponse for NoContent {
///     fn status(&self) -> u16 {
///         204
///     }
///     fn content_length(&self) -> Option<u64> {
///         Some(0)
///     }
///     fn get_header(&self, _name: &str) -> reqpipe::Result<Vec<String>> {
///         Ok(Vec::new())
///     }
///     fn text(&mut self) -> reqpipe::Result<String> {
///         Ok(String::new())
///     }
///     fn bytes(&mut self) -> reqpipe::Result<Vec<u8>> {
///         Ok(Vec::new())
///     }
/// }
///
/// struct Discard;
///
/// impl Transport for Discard {
///     type Response = NoContent;
///     fn send(&self, _request: Request) -> reqpipe::Result<NoContent> {
///         Ok(NoContent)
///     }
/// }
///
/// # fn main() -> reqpipe::Result<()> {
/// let client = Client::new(Discard, (url("https://api.example.com"), bearer_auth("token")));
/// let response = client.get(query("page", "10"))?;
/// assert_eq!(response.status(), 204);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn AnyTransport>,
    base: Pipeline,
}

impl Client {
    /// Bind `transport` and a base option pipeline.
    ///
    /// `base` is usually a tuple of options or a [`Pipeline`].
    pub fn new(transport: impl Transport, base: impl Opt + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            base: Pipeline::new().with(base),
        }
    }

    /// Build a request from the base pipeline plus `opts`, then dispatch it
    /// through this client's transport.
    ///
    /// Build errors and dispatch errors are both surfaced; a request that
    /// failed to build is never dispatched.
    pub fn send(&self, method: &str, opts: impl Opt) -> Result<Response> {
        let request = self.build(method, opts)?;
        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");
        Ok(self.transport.send(request)?.into())
    }

    /// Build a request from the base pipeline plus `opts` without
    /// dispatching it.
    pub fn build(&self, method: &str, opts: impl Opt) -> Result<Request> {
        let method: Method = method.parse()?;
        let url = Url::parse(SEED_URL)?;
        let request = self.base.apply(Request::new(method, url))?;
        opts.apply(request)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct TransportDebug<'a>(&'a dyn AnyTransport);

        impl fmt::Debug for TransportDebug<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.describe(f)
            }
        }

        f.debug_struct("Client")
            .field("transport", &TransportDebug(&*self.transport))
            .field("base", &self.base)
            .finish()
    }
}
