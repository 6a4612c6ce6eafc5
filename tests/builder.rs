//! Seed scenarios: building requests from method, URL, and options.

use reqpipe::{
    basic_auth, bearer_auth, body_form, body_json, host, new, path, query, scheme, Error,
};
use serde::{Serialize, Serializer};

/// Serializes like a value no encoder supports, mirroring the error shape of
/// encoding a channel.
struct Chan;

impl Serialize for Chan {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(serde::ser::Error::custom("unsupported type: chan struct {}"))
    }
}

fn body_bytes(request: &mut reqpipe::Request) -> Vec<u8> {
    request.body.as_mut().unwrap().buffer().unwrap().to_vec()
}

#[test]
fn post_with_auth_query_and_json_body() {
    let mut request = new(
        "POST",
        "https://example.com",
        (
            bearer_auth("t"),
            query("limit", "10"),
            body_json(serde_json::json!({"k": "v"})),
        ),
    )
    .unwrap();

    assert_eq!(request.method, "POST");
    assert_eq!(request.url.host_str(), Some("example.com"));
    assert_eq!(request.url.query(), Some("limit=10"));
    assert_eq!(request.headers["authorization"], "Bearer t");
    assert_eq!(request.headers["content-type"], "application/json");
    assert_eq!(body_bytes(&mut request), b"{\"k\":\"v\"}\n");
}

#[test]
fn scheme_host_and_path_rewrite_the_seed_url() {
    let request = new(
        "POST",
        "https://example.com",
        (scheme("https"), host("httpbin.org"), path(["/post"])),
    )
    .unwrap();

    assert_eq!(request.url.as_str(), "https://httpbin.org/post");
    assert_eq!(request.host.as_deref(), Some("httpbin.org"));
}

#[test]
fn path_joins_cleanly_onto_the_current_path() {
    let request = new(
        "GET",
        "https://a.com/api/",
        (path(["/cereals", "1234/variants", "frosted"]),),
    )
    .unwrap();

    assert_eq!(request.url.path(), "/api/cereals/1234/variants/frosted");
}

#[test]
fn form_body_is_urlencoded_and_typed() {
    let mut request = new(
        "POST",
        "https://e.com",
        (body_form([("name", "Grape Nuts")]),),
    )
    .unwrap();

    assert_eq!(body_bytes(&mut request), b"name=Grape+Nuts");
    assert_eq!(
        request.headers["content-type"],
        "application/x-www-form-urlencoded"
    );
}

#[test]
fn json_encode_failure_reports_option_index_and_cause() {
    let err = new("POST", "https://e.com", (body_json(Chan),)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("failed to apply option 0"), "got: {message}");
    assert!(message.contains("unsupported type"), "got: {message}");
}

#[test]
fn invalid_method_fails_verbatim_at_seed() {
    let err = new("lol what", "https://e.com", ()).unwrap_err();
    assert!(matches!(err, Error::InvalidMethod(_)));
}

#[test]
fn invalid_base_url_fails_verbatim_at_seed() {
    let err = new("GET", "not a url", ()).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn basic_auth_sets_the_canonical_header() {
    let request = new("GET", "https://a.com", (basic_auth("u", "p"),)).unwrap();
    assert_eq!(request.headers["authorization"], "Basic dTpw");
}

#[test]
fn empty_options_return_the_seed_unchanged() {
    let request = new("GET", "https://a.com/api", ()).unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url.as_str(), "https://a.com/api");
    assert!(request.headers.is_empty());
    assert!(request.body.is_none());
}
