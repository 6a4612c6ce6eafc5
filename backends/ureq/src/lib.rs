//! A blocking [`reqpipe`] transport backed by [`ureq`].
//!
//! The transport hands each built request to a shared [`ureq::Agent`].
//! Request bodies are buffered before hand-off; connection handling, TLS,
//! timeouts, and redirect policy are all the agent's, configured through
//! [`UreqTransport::with_agent`].

#![deny(missing_docs)]

mod response;

use std::fmt;

use http::header::{HeaderValue, HOST};
use reqpipe::transport::Transport;
use reqpipe::Request;

pub use response::UreqResponse;

/// A [`reqpipe::transport::Transport`] dispatching through a [`ureq::Agent`].
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// A transport over a default agent with HTTP-status-as-error disabled,
    /// so non-2xx responses come back as responses rather than errors.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// A transport over a caller-configured agent.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }

    /// Install a fresh transport as the process-wide default, so the
    /// `reqpipe` free functions dispatch through ureq.
    ///
    /// Call once during program initialization.
    pub fn register() {
        reqpipe::transport::set_default(Self::new());
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    type Response = UreqResponse;

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UreqTransport")
    }

    fn send(&self, request: Request) -> reqpipe::Result<UreqResponse> {
        let request = into_http(request)?;
        let response = self
            .agent
            .run(request)
            .map_err(|e| reqpipe::Error::Transport(Box::new(e)))?;
        UreqResponse::new(response)
    }
}

/// Translate a built [`Request`] into the `http::Request` the agent runs.
///
/// The body is buffered into memory; ureq frames it itself, so the
/// transfer-encoding list is left to the agent.
fn into_http(mut request: Request) -> reqpipe::Result<http::Request<Vec<u8>>> {
    let body = match request.body.take() {
        Some(body) => body.into_bytes()?.to_vec(),
        None => Vec::new(),
    };

    let mut http_request = http::Request::builder()
        .method(request.method.clone())
        .uri(request.url.as_str())
        .body(body)
        .map_err(|e| reqpipe::Error::Transport(e.into()))?;

    *http_request.headers_mut() = request.headers;
    if let Some(host) = &request.host {
        let value = HeaderValue::try_from(host.as_str())?;
        http_request.headers_mut().insert(HOST, value);
    }

    Ok(http_request)
}
