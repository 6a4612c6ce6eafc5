//! The request-snapshot debugging option.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::error::Result;
use crate::option::Opt;
use crate::request::Request;

/// Write the wire-format snapshot of the request, as it stands at this
/// position in the pipeline, to `writer`.
///
/// The rendering is the exact wire form: start-line, `Host:` line, headers,
/// a blank line, then the body bytes. A streaming body is buffered into the
/// request rather than consumed, so dispatch still sees the payload.
pub fn dump<W>(writer: W) -> impl Opt
where
    W: Write + Send + 'static,
{
    let writer = Mutex::new(writer);
    move |mut request: Request| -> Result<Request> {
        let rendered = request.dump()?;
        let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&rendered)?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::option::apply;
    use crate::options::{body_string, header};

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn seed(url: &str) -> Request {
        Request::new(http::Method::GET, url::Url::parse(url).unwrap())
    }

    #[test]
    fn dump_snapshots_at_its_position() {
        let sink = SharedSink::default();
        let request = apply(
            seed("https://breakfast.com/api/cereals"),
            (
                body_string("Part of a complete breakfast."),
                dump(sink.clone()),
                header("X-After", "not in the dump"),
            ),
        )
        .unwrap();

        let captured = sink.0.lock().unwrap().clone();
        assert_eq!(
            String::from_utf8(captured).unwrap(),
            "GET /api/cereals HTTP/1.1\r\nHost: breakfast.com\r\n\r\nPart of a complete breakfast."
        );
        // The header added after the dump is on the request, not the snapshot.
        assert!(request.headers.contains_key("X-After"));
        // The body survives the snapshot.
        assert_eq!(
            &request.body.unwrap().into_bytes().unwrap()[..],
            b"Part of a complete breakfast."
        );
    }
}
