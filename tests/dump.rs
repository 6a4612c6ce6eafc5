//! Wire-format rendering of request snapshots.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use reqpipe::{body_string, dump, header, new};

/// A `Write` sink the test can read back after the option consumes it.
#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    fn contents(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn dump_renders_the_exact_wire_form() {
    let sink = SharedSink::default();
    new(
        "GET",
        "https://breakfast.com/api/cereals",
        (body_string("Part of a complete breakfast."), dump(sink.clone())),
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(sink.contents()).unwrap(),
        "GET /api/cereals HTTP/1.1\r\n\
         Host: breakfast.com\r\n\
         \r\n\
         Part of a complete breakfast."
    );
}

#[test]
fn dump_includes_query_and_headers() {
    let sink = SharedSink::default();
    new(
        "GET",
        "https://breakfast.com/api/cereals?page=2",
        (header("Accept", "application/json"), dump(sink.clone())),
    )
    .unwrap();

    let wire = String::from_utf8(sink.contents()).unwrap();
    assert!(wire.starts_with("GET /api/cereals?page=2 HTTP/1.1\r\n"), "got: {wire}");
    assert!(wire.contains("Host: breakfast.com\r\n"), "got: {wire}");
    assert!(wire.contains("accept: application/json\r\n"), "got: {wire}");
    assert!(wire.ends_with("\r\n\r\n"), "got: {wire}");
}

#[test]
fn dump_does_not_consume_the_body() {
    let sink = SharedSink::default();
    let mut request = new(
        "POST",
        "https://breakfast.com/api/cereals",
        (
            body_string("Part of a complete breakfast."),
            dump(sink.clone()),
        ),
    )
    .unwrap();

    let body = request.body.take().unwrap().into_bytes().unwrap();
    assert_eq!(&body[..], b"Part of a complete breakfast.");
}

#[test]
fn failing_sink_aborts_the_pipeline_with_io_error() {
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink is broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let err = new(
        "GET",
        "https://breakfast.com",
        (dump(Broken),),
    )
    .unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("failed to apply option 0:"), "got: {message}");
    assert!(message.contains("sink is broken"), "got: {message}");
}
