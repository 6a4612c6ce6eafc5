use std::fmt;
use std::io::{self, Read};

use http::header::HeaderName;
use http::HeaderMap;
use reqpipe::transport::Response;

/// A response from the ureq agent, buffered in full.
pub struct UreqResponse {
    status: u16,
    headers: HeaderMap,
    body: io::Cursor<Vec<u8>>,
}

impl UreqResponse {
    pub(crate) fn new(mut response: http::Response<ureq::Body>) -> reqpipe::Result<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| reqpipe::Error::Transport(Box::new(e)))?;
        Ok(Self {
            status,
            headers,
            body: io::Cursor::new(body),
        })
    }
}

impl Read for UreqResponse {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.body.read(buf)
    }
}

impl Response for UreqResponse {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UreqResponse(status: {})", self.status)
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn content_length(&self) -> Option<u64> {
        Some(self.body.get_ref().len() as u64)
    }

    fn get_header(&self, name: &str) -> reqpipe::Result<Vec<String>> {
        let name = HeaderName::try_from(name)?;
        Ok(self
            .headers
            .get_all(&name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect())
    }

    fn text(&mut self) -> reqpipe::Result<String> {
        let bytes = Response::bytes(self)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn bytes(&mut self) -> reqpipe::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.body.read_to_end(&mut out)?;
        Ok(out)
    }
}
