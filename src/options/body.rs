//! Options that replace the request body.
//!
//! Every option here takes last-writer-wins semantics on the body itself.
//! The encoding options also append a matching `Content-Type`; append, not
//! overwrite, so a later `content_type` option still wins.

use std::io::{self, Read};
use std::sync::{Arc, Mutex, PoisonError};

use bytes::Bytes;
use serde::Serialize;

use crate::body::{Body, GetBody};
use crate::error::{Error, Result};
use crate::option::Opt;
use crate::options::header::content_type;
use crate::request::Request;
use crate::values::Values;

/// Replace the request body with `body`.
///
/// The payload is handed over on the first application; a second
/// application fails, since a stream cannot be re-read. Use [`body_bytes`]
/// or [`get_body`] when the option must be reusable.
pub fn body(body: Body) -> impl Opt {
    let slot = Mutex::new(Some(body));
    move |mut request: Request| -> Result<Request> {
        let body = slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or_else(|| {
                Error::Io(io::Error::other("request body was already handed to an earlier request"))
            })?;
        request.body = Some(body);
        Ok(request)
    }
}

/// Replace the request body with a streaming reader.
pub fn body_reader(reader: impl Read + Send + 'static) -> impl Opt {
    body(Body::reader(reader))
}

/// Replace the request body with in-memory bytes.
pub fn body_bytes(content: impl Into<Bytes>) -> impl Opt {
    let content = content.into();
    move |mut request: Request| -> Result<Request> {
        request.body = Some(Body::Bytes(content.clone()));
        Ok(request)
    }
}

/// Replace the request body with a string payload.
pub fn body_string(content: impl Into<String>) -> impl Opt {
    body_bytes(Bytes::from(content.into().into_bytes()))
}

/// URL-encode `pairs`, append the urlencoded `Content-Type`, and replace the
/// body.
///
/// Encoding is key-sorted and stable; spaces become `+`.
pub fn body_form<I, K, V>(pairs: I) -> impl Opt
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let values: Values = pairs.into_iter().collect();
    move |request: Request| -> Result<Request> {
        let request =
            content_type(mime::APPLICATION_WWW_FORM_URLENCODED.as_ref()).apply(request)?;
        body_string(values.encode()).apply(request)
    }
}

/// JSON-encode `value`, append `Content-Type: application/json`, and replace
/// the body.
///
/// The payload carries a trailing newline. Encoding happens on every
/// application, so the option observes the captured value as it is at that
/// moment; an encoding failure aborts the pipeline.
pub fn body_json<T>(value: T) -> impl Opt
where
    T: Serialize + Send + Sync,
{
    move |request: Request| -> Result<Request> {
        let mut payload = serde_json::to_vec(&value)?;
        payload.push(b'\n');
        let request = content_type(mime::APPLICATION_JSON.as_ref()).apply(request)?;
        body_bytes(payload).apply(request)
    }
}

/// XML-encode `value`, append `Content-Type: application/xml`, and replace
/// the body.
///
/// No XML declaration is emitted. An encoding failure aborts the pipeline.
pub fn body_xml<T>(value: T) -> impl Opt
where
    T: Serialize + Send + Sync,
{
    move |request: Request| -> Result<Request> {
        let payload = quick_xml::se::to_string(&value)?;
        let request = content_type("application/xml").apply(request)?;
        body_string(payload).apply(request)
    }
}

/// Install a closure that can reproduce the request body, for transports
/// that retry after consuming the original payload.
pub fn get_body<F>(f: F) -> impl Opt
where
    F: Fn() -> io::Result<Body> + Send + Sync + 'static,
{
    let f: GetBody = Arc::new(f);
    move |mut request: Request| -> Result<Request> {
        request.get_body = Some(Arc::clone(&f));
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;

    use super::*;
    use crate::option::apply;

    fn seed() -> Request {
        Request::new(
            http::Method::POST,
            url::Url::parse("https://example.com").unwrap(),
        )
    }

    fn body_text(request: &mut Request) -> String {
        let bytes = request.body.as_mut().unwrap().buffer().unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn body_form_encodes_and_types() {
        let mut request = apply(seed(), (body_form([("name", "Grape Nuts")]),)).unwrap();
        assert_eq!(body_text(&mut request), "name=Grape+Nuts");
        assert_eq!(
            request.headers.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn body_json_appends_newline() {
        let mut request =
            apply(seed(), (body_json(serde_json::json!({"something": "here"})),)).unwrap();
        assert_eq!(body_text(&mut request), "{\"something\":\"here\"}\n");
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn later_content_type_wins_over_encoder() {
        let request = apply(
            seed(),
            (body_json(serde_json::json!({})), content_type("application/vnd.api+json")),
        )
        .unwrap();
        let values: Vec<_> = request.headers.get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values, ["application/json", "application/vnd.api+json"]);
    }

    #[test]
    fn streaming_body_cannot_be_reapplied() {
        let opt = body_reader(io::Cursor::new(b"once".to_vec()));
        let first = opt.apply(seed()).unwrap();
        assert!(first.body.is_some());
        let err = opt.apply(seed()).unwrap_err();
        assert!(err.to_string().contains("already handed"));
    }

    #[test]
    fn body_options_replace_prior_bodies() {
        let mut request =
            apply(seed(), (body_string("first"), body_string("second"))).unwrap();
        assert_eq!(body_text(&mut request), "second");
    }

    #[test]
    fn get_body_installs_reacquire_closure() {
        let request = apply(
            seed(),
            (get_body(|| Ok(Body::text("fresh"))),),
        )
        .unwrap();
        let fresh = (request.get_body.unwrap())().unwrap();
        assert_eq!(&fresh.into_bytes().unwrap()[..], b"fresh");
    }
}
