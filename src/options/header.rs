//! Options over request headers: append, named shims, auth, cookies.

use base64::prelude::{Engine as _, BASE64_STANDARD};
use http::header::{
    HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, REFERER, USER_AGENT,
};

use crate::error::Result;
use crate::option::Opt;
use crate::request::Request;

/// Append one header, keeping any existing values for the name.
pub fn header(name: impl Into<String>, value: impl Into<String>) -> impl Opt {
    let name = name.into();
    let value = value.into();
    move |mut request: Request| -> Result<Request> {
        let name = HeaderName::try_from(name.as_str())?;
        let value = HeaderValue::try_from(value.as_str())?;
        request.headers.append(name, value);
        Ok(request)
    }
}

/// Bulk-append headers, preserving pair order.
pub fn headers<I, K, V>(pairs: I) -> impl Opt
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let pairs: Vec<(String, String)> = pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect();
    move |mut request: Request| -> Result<Request> {
        for (name, value) in &pairs {
            let name = HeaderName::try_from(name.as_str())?;
            let value = HeaderValue::try_from(value.as_str())?;
            request.headers.append(name, value);
        }
        Ok(request)
    }
}

fn named(name: HeaderName, value: String) -> impl Opt {
    move |mut request: Request| -> Result<Request> {
        let value = HeaderValue::try_from(value.as_str())?;
        request.headers.append(&name, value);
        Ok(request)
    }
}

/// Append an `Accept` header.
pub fn accept(value: impl Into<String>) -> impl Opt {
    named(ACCEPT, value.into())
}

/// Append a `Content-Type` header.
pub fn content_type(value: impl Into<String>) -> impl Opt {
    named(CONTENT_TYPE, value.into())
}

/// Append a `Referer` header.
pub fn referer(value: impl Into<String>) -> impl Opt {
    named(REFERER, value.into())
}

/// Append a `User-Agent` header.
pub fn user_agent(value: impl Into<String>) -> impl Opt {
    named(USER_AGENT, value.into())
}

/// Append an `Authorization` header.
pub fn authorization(value: impl Into<String>) -> impl Opt {
    named(AUTHORIZATION, value.into())
}

/// Set the canonical `Authorization: Basic <base64(user:pass)>` header,
/// replacing any previous `Authorization` value.
pub fn basic_auth(username: impl Into<String>, password: impl Into<String>) -> impl Opt {
    let credentials = BASE64_STANDARD.encode(format!("{}:{}", username.into(), password.into()));
    let value = format!("Basic {credentials}");
    move |mut request: Request| -> Result<Request> {
        request
            .headers
            .insert(AUTHORIZATION, HeaderValue::try_from(value.as_str())?);
        Ok(request)
    }
}

/// Append an `Authorization: Token <token>` header.
pub fn token_auth(token: impl Into<String>) -> impl Opt {
    named(AUTHORIZATION, format!("Token {}", token.into()))
}

/// Append an `Authorization: Bearer <token>` header.
pub fn bearer_auth(token: impl Into<String>) -> impl Opt {
    named(AUTHORIZATION, format!("Bearer {}", token.into()))
}

/// Append one cookie pair to the `Cookie` header.
///
/// Pairs accumulate into a single `"; "`-joined header entry, in option
/// order.
pub fn cookie(name: impl Into<String>, value: impl Into<String>) -> impl Opt {
    let pair = format!("{}={}", name.into(), value.into());
    move |mut request: Request| -> Result<Request> {
        let entry = match request.headers.get(COOKIE) {
            Some(existing) => {
                format!("{}; {pair}", String::from_utf8_lossy(existing.as_bytes()))
            }
            None => pair.clone(),
        };
        request
            .headers
            .insert(COOKIE, HeaderValue::try_from(entry.as_str())?);
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::apply;

    fn seed() -> Request {
        Request::new(
            http::Method::GET,
            url::Url::parse("https://example.com").unwrap(),
        )
    }

    #[test]
    fn basic_auth_encodes_credentials() {
        let request = apply(seed(), (basic_auth("someone", "hunter12"),)).unwrap();
        assert_eq!(
            request.headers.get(AUTHORIZATION).unwrap(),
            "Basic c29tZW9uZTpodW50ZXIxMg=="
        );
    }

    #[test]
    fn basic_auth_replaces_earlier_authorization() {
        let request = apply(seed(), (bearer_auth("stale"), basic_auth("u", "p"))).unwrap();
        let values: Vec<_> = request.headers.get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values, ["Basic dTpw"]);
    }

    #[test]
    fn header_lookups_are_case_insensitive() {
        let request = apply(seed(), (header("X-Trace-Id", "asdf"),)).unwrap();
        assert_eq!(request.headers.get("x-trace-id").unwrap(), "asdf");
    }

    #[test]
    fn invalid_header_name_fails_the_option() {
        let err = apply(seed(), (header("bad name", "v"),)).unwrap_err();
        assert!(err.to_string().starts_with("failed to apply option 0:"));
    }

    #[test]
    fn cookies_accumulate_into_one_entry() {
        let request = apply(
            seed(),
            (cookie("some-cookie", "some-value"), cookie("flavor", "frosted")),
        )
        .unwrap();
        assert_eq!(
            request.headers.get(COOKIE).unwrap(),
            "some-cookie=some-value; flavor=frosted"
        );
    }
}
