//! Composable option pipelines for building and dispatching HTTP requests.
//!
//! ## Overview
//!
//! Reqpipe expresses an outbound HTTP request as an ordered sequence of
//! small, independent modifiers called options. Each option adjusts one
//! facet of the request (URL, headers, body, context), and the library
//! applies them in order with fail-fast error reporting, then either hands
//! the built [`Request`] back or dispatches it through a [`Transport`].
//!
//! The library never performs I/O of its own: connection handling, TLS,
//! redirects, retries, and response decoding all belong to the transport.
//! Any HTTP client can act as a transport by implementing one `send`
//! method; the `reqpipe-backend-ureq` crate ships one backed by `ureq`.
//!
//! ## Building requests
//!
//! Options are plain values. Pass them as a tuple, or package them in a
//! [`Pipeline`] to reuse across calls:
//!
//! ```
//! use reqpipe::{bearer_auth, body_json, new, query};
//!
//! # fn main() -> reqpipe::Result<()> {
//! let request = new("POST", "https://api.example.com/search", (
//!     bearer_auth("some-token"),
//!     query("limit", "10"),
//!     body_json(serde_json::json!({"q": "cereal"})),
//! ))?;
//!
//! assert_eq!(request.url.as_str(), "https://api.example.com/search?limit=10");
//! assert_eq!(request.headers["authorization"], "Bearer some-token");
//! # Ok(())
//! # }
//! ```
//!
//! Options apply in order: scalar fields take the last writer, multi-valued
//! fields (headers, query, cookies) append. A [`Pipeline`] is itself an
//! option, so request fragments compose:
//!
//! ```
//! use reqpipe::{header, new, pipeline, user_agent};
//!
//! # fn main() -> reqpipe::Result<()> {
//! let preamble = pipeline![user_agent("cereal-bot/1.0"), header("X-Team", "breakfast")];
//! let request = new("GET", "https://api.example.com", (preamble, header("X-Call", "1")))?;
//! assert!(request.headers.contains_key("x-team"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Dispatching
//!
//! [`Client`] binds a transport to a base pipeline applied before every
//! call's own options. The free functions [`send`] and the per-method shims
//! ([`get`], [`post`], ...) go through the process-wide default transport
//! instead, which must be installed first via [`transport::set_default`];
//! prefer an explicit [`Client`] outside of application setup code.

#![deny(missing_docs)]

mod body;
mod client;
mod context;
mod error;
mod methods;
mod multipart;
mod option;
mod options;
mod request;
mod response;
pub mod transport;
mod values;

pub use body::{Body, GetBody};
pub use client::Client;
pub use context::{CancelToken, Context};
pub use error::{Error, Result};
pub use methods::*;
pub use multipart::{FilePart, MultipartForm};
pub use option::{apply, Opt, Pipeline};
pub use options::*;
pub use request::Request;
pub use response::Response;
pub use transport::Transport;
pub use values::Values;

pub use url::Url;

use http::Method;

/// Build a request from `method` and `base_url`, then apply `opts` in
/// order.
///
/// Method and URL parse failures are returned verbatim. Option failures are
/// wrapped with the failing option's zero-based index and abort the build;
/// the partial request is discarded.
pub fn new(method: &str, base_url: &str, opts: impl Opt) -> Result<Request> {
    let method: Method = method.parse()?;
    let url = Url::parse(base_url)?;
    apply(Request::new(method, url), opts)
}

/// Build a request and dispatch it through the process-wide default
/// transport.
///
/// Fails with [`Error::NoTransport`] when no default transport has been
/// installed. Build errors are never dispatched; dispatch errors come back
/// from the transport unchanged.
pub fn send(method: &str, base_url: &str, opts: impl Opt) -> Result<Response> {
    let request = new(method, base_url, opts)?;
    let transport = transport::default()?;
    tracing::debug!(method = %request.method, url = %request.url, "dispatching request via default transport");
    Ok(transport.send(request)?.into())
}
