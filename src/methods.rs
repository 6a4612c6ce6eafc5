//! Per-method entry points over [`new`](crate::new), [`send`](crate::send),
//! and [`Client`].
//!
//! Three entry points per standard HTTP method: build a request, dispatch
//! through the default transport, and dispatch through a client. All are
//! single-line delegations.

use crate::client::Client;
use crate::error::Result;
use crate::option::Opt;
use crate::request::Request;
use crate::response::Response;
use crate::{new, send};

/// Build a new GET request.
pub fn new_get(url: &str, opts: impl Opt) -> Result<Request> {
    new("GET", url, opts)
}

/// Make a GET request through the default transport.
pub fn get(url: &str, opts: impl Opt) -> Result<Response> {
    send("GET", url, opts)
}

/// Build a new HEAD request.
pub fn new_head(url: &str, opts: impl Opt) -> Result<Request> {
    new("HEAD", url, opts)
}

/// Make a HEAD request through the default transport.
pub fn head(url: &str, opts: impl Opt) -> Result<Response> {
    send("HEAD", url, opts)
}

/// Build a new POST request.
pub fn new_post(url: &str, opts: impl Opt) -> Result<Request> {
    new("POST", url, opts)
}

/// Make a POST request through the default transport.
pub fn post(url: &str, opts: impl Opt) -> Result<Response> {
    send("POST", url, opts)
}

/// Build a new PUT request.
pub fn new_put(url: &str, opts: impl Opt) -> Result<Request> {
    new("PUT", url, opts)
}

/// Make a PUT request through the default transport.
pub fn put(url: &str, opts: impl Opt) -> Result<Response> {
    send("PUT", url, opts)
}

/// Build a new PATCH request.
pub fn new_patch(url: &str, opts: impl Opt) -> Result<Request> {
    new("PATCH", url, opts)
}

/// Make a PATCH request through the default transport.
pub fn patch(url: &str, opts: impl Opt) -> Result<Response> {
    send("PATCH", url, opts)
}

/// Build a new DELETE request.
pub fn new_delete(url: &str, opts: impl Opt) -> Result<Request> {
    new("DELETE", url, opts)
}

/// Make a DELETE request through the default transport.
pub fn delete(url: &str, opts: impl Opt) -> Result<Response> {
    send("DELETE", url, opts)
}

/// Build a new CONNECT request.
pub fn new_connect(url: &str, opts: impl Opt) -> Result<Request> {
    new("CONNECT", url, opts)
}

/// Make a CONNECT request through the default transport.
pub fn connect(url: &str, opts: impl Opt) -> Result<Response> {
    send("CONNECT", url, opts)
}

/// Build a new OPTIONS request.
pub fn new_options(url: &str, opts: impl Opt) -> Result<Request> {
    new("OPTIONS", url, opts)
}

/// Make an OPTIONS request through the default transport.
pub fn options(url: &str, opts: impl Opt) -> Result<Response> {
    send("OPTIONS", url, opts)
}

/// Build a new TRACE request.
pub fn new_trace(url: &str, opts: impl Opt) -> Result<Request> {
    new("TRACE", url, opts)
}

/// Make a TRACE request through the default transport.
pub fn trace(url: &str, opts: impl Opt) -> Result<Response> {
    send("TRACE", url, opts)
}

impl Client {
    /// Make a GET request through this client.
    pub fn get(&self, opts: impl Opt) -> Result<Response> {
        self.send("GET", opts)
    }

    /// Make a HEAD request through this client.
    pub fn head(&self, opts: impl Opt) -> Result<Response> {
        self.send("HEAD", opts)
    }

    /// Make a POST request through this client.
    pub fn post(&self, opts: impl Opt) -> Result<Response> {
        self.send("POST", opts)
    }

    /// Make a PUT request through this client.
    pub fn put(&self, opts: impl Opt) -> Result<Response> {
        self.send("PUT", opts)
    }

    /// Make a PATCH request through this client.
    pub fn patch(&self, opts: impl Opt) -> Result<Response> {
        self.send("PATCH", opts)
    }

    /// Make a DELETE request through this client.
    pub fn delete(&self, opts: impl Opt) -> Result<Response> {
        self.send("DELETE", opts)
    }

    /// Make a CONNECT request through this client.
    pub fn connect(&self, opts: impl Opt) -> Result<Response> {
        self.send("CONNECT", opts)
    }

    /// Make an OPTIONS request through this client.
    pub fn options(&self, opts: impl Opt) -> Result<Response> {
        self.send("OPTIONS", opts)
    }

    /// Make a TRACE request through this client.
    pub fn trace(&self, opts: impl Opt) -> Result<Response> {
        self.send("TRACE", opts)
    }
}
