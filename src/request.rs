//! The in-memory request record that options operate on.

use std::fmt;
use std::io::Write;

use http::{header, HeaderMap, Method};
use url::Url;

use crate::body::{Body, GetBody};
use crate::context::Context;
use crate::error::Result;
use crate::multipart::MultipartForm;
use crate::values::Values;

/// The mutable HTTP request record an option pipeline builds.
///
/// Fields are public: the bundled options read and write them directly, and
/// custom options are expected to do the same. The method is fixed at seed
/// time and never altered by options. Once the pipeline completes, the
/// request passes to the caller or the transport and this library no longer
/// touches it.
pub struct Request {
    /// HTTP method, fixed when the request is seeded.
    pub method: Method,
    /// Target URL. URL options replace it wholesale or edit its parts.
    pub url: Url,
    /// `Host:` header override, distinct from `url`'s host.
    pub host: Option<String>,
    /// Request headers: case-insensitive, multi-valued, append-ordered
    /// within each key.
    pub headers: HeaderMap,
    /// Trailer headers, sent after the body.
    pub trailers: HeaderMap,
    /// Request payload, consumed exactly once by the transport.
    pub body: Option<Body>,
    /// Closure able to reproduce the body for transports that retry.
    pub get_body: Option<GetBody>,
    /// Parsed form fields.
    pub form: Values,
    /// Parsed POST/PUT body form fields.
    pub post_form: Values,
    /// Structured multipart form, when one has been attached.
    pub multipart: Option<MultipartForm>,
    /// Transfer encodings, outermost first.
    pub transfer_encoding: Vec<String>,
    /// Deadline, cancellation signal, and opaque values for this dispatch.
    pub context: Context,
}

impl Request {
    /// Seed a request from a method and a parsed URL, with no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            host: None,
            headers: HeaderMap::new(),
            trailers: HeaderMap::new(),
            body: None,
            get_body: None,
            form: Values::new(),
            post_form: Values::new(),
            multipart: None,
            transfer_encoding: Vec::new(),
            context: Context::new(),
        }
    }

    /// The value dispatch should place on the `Host:` line: the override if
    /// set, otherwise the URL's host, with the port when the URL carries one.
    pub fn host_header(&self) -> String {
        if let Some(host) = &self.host {
            return host.clone();
        }
        match self.url.port() {
            Some(port) => format!("{}:{port}", self.url.host_str().unwrap_or_default()),
            None => self.url.host_str().unwrap_or_default().to_owned(),
        }
    }

    /// Render the wire-format snapshot of this request: start-line, `Host:`
    /// line, headers, blank line, then the body bytes.
    ///
    /// A streaming body is buffered into the request first, so dispatch
    /// still observes the payload afterwards. A `Host` entry in the header
    /// map is skipped in favour of the dedicated `Host:` line.
    pub fn dump(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match self.url.query() {
            Some(query) => write!(out, "{} {}?{} HTTP/1.1\r\n", self.method, self.url.path(), query)?,
            None => write!(out, "{} {} HTTP/1.1\r\n", self.method, self.url.path())?,
        }
        write!(out, "Host: {}\r\n", self.host_header())?;
        for (name, value) in &self.headers {
            if name == &header::HOST {
                continue;
            }
            write!(out, "{name}: ")?;
            out.extend_from_slice(value.as_bytes());
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(b"\r\n");
        if let Some(body) = &mut self.body {
            out.extend_from_slice(body.buffer()?);
        }
        Ok(out)
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("host", &self.host)
            .field("headers", &self.headers)
            .field("trailers", &self.trailers)
            .field("body", &self.body)
            .field("has_get_body", &self.get_body.is_some())
            .field("form", &self.form)
            .field("post_form", &self.post_form)
            .field("multipart", &self.multipart)
            .field("transfer_encoding", &self.transfer_encoding)
            .field("context", &self.context)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(method: &str, url: &str) -> Request {
        Request::new(method.parse().unwrap(), Url::parse(url).unwrap())
    }

    #[test]
    fn host_header_prefers_override() {
        let mut request = seed("GET", "https://a.com/x");
        assert_eq!(request.host_header(), "a.com");
        request.host = Some("b.org:8080".to_owned());
        assert_eq!(request.host_header(), "b.org:8080");
    }

    #[test]
    fn host_header_keeps_url_port() {
        let request = seed("GET", "http://a.com:8080/x");
        assert_eq!(request.host_header(), "a.com:8080");
    }

    #[test]
    fn dump_renders_start_line_host_and_body() {
        let mut request = seed("GET", "https://breakfast.com/api/cereals");
        request.body = Some(Body::text("Part of a complete breakfast."));
        let wire = request.dump().unwrap();
        assert_eq!(
            wire,
            b"GET /api/cereals HTTP/1.1\r\nHost: breakfast.com\r\n\r\nPart of a complete breakfast."
        );
    }

    #[test]
    fn dump_includes_query_and_headers() {
        let mut request = seed("POST", "https://a.com/search?q=1");
        request
            .headers
            .append(header::ACCEPT, "application/json".parse().unwrap());
        let wire = String::from_utf8(request.dump().unwrap()).unwrap();
        assert!(wire.starts_with("POST /search?q=1 HTTP/1.1\r\n"));
        assert!(wire.contains("Host: a.com\r\n"));
        assert!(wire.contains("accept: application/json\r\n"));
        assert!(wire.ends_with("\r\n\r\n"));
    }

    #[test]
    fn dump_leaves_body_readable() {
        let mut request = seed("POST", "https://a.com/");
        request.body = Some(Body::reader(std::io::Cursor::new(b"payload".to_vec())));
        request.dump().unwrap();
        let body = request.body.take().unwrap().into_bytes().unwrap();
        assert_eq!(&body[..], b"payload");
    }
}
