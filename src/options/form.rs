//! Options over parsed form fields, multipart forms, trailers, and
//! transfer encodings.

use http::header::{HeaderName, HeaderValue};

use crate::error::Result;
use crate::multipart::MultipartForm;
use crate::option::Opt;
use crate::request::Request;
use crate::values::Values;

/// Replace the request's parsed form fields.
pub fn form<I, K, V>(pairs: I) -> impl Opt
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let values: Values = pairs.into_iter().collect();
    move |mut request: Request| -> Result<Request> {
        request.form = values.clone();
        Ok(request)
    }
}

/// Append one parsed form field.
pub fn form_value(key: impl Into<String>, value: impl Into<String>) -> impl Opt {
    let key = key.into();
    let value = value.into();
    move |mut request: Request| -> Result<Request> {
        request.form.append(key.clone(), value.clone());
        Ok(request)
    }
}

/// Replace the request's parsed POST/PUT body form fields.
pub fn post_form<I, K, V>(pairs: I) -> impl Opt
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let values: Values = pairs.into_iter().collect();
    move |mut request: Request| -> Result<Request> {
        request.post_form = values.clone();
        Ok(request)
    }
}

/// Append one parsed POST/PUT body form field.
pub fn post_form_value(key: impl Into<String>, value: impl Into<String>) -> impl Opt {
    let key = key.into();
    let value = value.into();
    move |mut request: Request| -> Result<Request> {
        request.post_form.append(key.clone(), value.clone());
        Ok(request)
    }
}

/// Replace the structured multipart form.
pub fn multipart_form(form: MultipartForm) -> impl Opt {
    move |mut request: Request| -> Result<Request> {
        request.multipart = Some(form.clone());
        Ok(request)
    }
}

/// Append one plain value to the multipart form, attaching an empty form
/// first when none is present.
pub fn multipart_form_value(key: impl Into<String>, value: impl Into<String>) -> impl Opt {
    let key = key.into();
    let value = value.into();
    move |mut request: Request| -> Result<Request> {
        request
            .multipart
            .get_or_insert_with(MultipartForm::new)
            .values
            .append(key.clone(), value.clone());
        Ok(request)
    }
}

/// Bulk-append trailer headers, preserving pair order.
pub fn trailer<I, K, V>(pairs: I) -> impl Opt
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
            request.trailers.append(name, value);
        }
        Ok(request)
    }
}

/// Append one trailer header.
pub fn trailer_header(name: impl Into<String>, value: impl Into<String>) -> impl Opt {
    let name = name.into();
    let value = value.into();
    move |mut request: Request| -> Result<Request> {
        let name = HeaderName::try_from(name.as_str())?;
        let value = HeaderValue::try_from(value.as_str())?;
        request.trailers.append(name, value);
        Ok(request)
    }
}

/// Replace the transfer-encoding list.
pub fn transfer_encoding<I, S>(encodings: I) -> impl Opt
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let encodings: Vec<String> = encodings.into_iter().map(Into::into).collect();
    move |mut request: Request| -> Result<Request> {
        request.transfer_encoding = encodings.clone();
        Ok(request)
    }
}

/// Append one transfer encoding to the list.
pub fn transfer_encoding_append(encoding: impl Into<String>) -> impl Opt {
    let encoding = encoding.into();
    move |mut request: Request| -> Result<Request> {
        request.transfer_encoding.push(encoding.clone());
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::apply;

    fn seed() -> Request {
        Request::new(
            http::Method::POST,
            url::Url::parse("https://example.com").unwrap(),
        )
    }

    #[test]
    fn form_replaces_and_form_value_appends() {
        let request = apply(
            seed(),
            (
                form([("old", "gone")]),
                form([("kind", "cereal")]),
                form_value("kind", "granola"),
            ),
        )
        .unwrap();
        assert!(request.form.get("old").is_none());
        assert_eq!(request.form.get_all("kind"), ["cereal", "granola"]);
    }

    #[test]
    fn multipart_value_creates_form_on_demand() {
        let request = apply(seed(), (multipart_form_value("kind", "cereal"),)).unwrap();
        assert_eq!(request.multipart.unwrap().values.get("kind"), Some("cereal"));
    }

    #[test]
    fn transfer_encoding_replaces_then_appends() {
        let request = apply(
            seed(),
            (
                transfer_encoding(["gzip", "chunked"]),
                transfer_encoding_append("identity"),
            ),
        )
        .unwrap();
        assert_eq!(request.transfer_encoding, ["gzip", "chunked", "identity"]);
    }

    #[test]
    fn trailers_append_in_order() {
        let request = apply(
            seed(),
            (
                trailer([("X-Checksum", "abc")]),
                trailer_header("X-Checksum", "def"),
            ),
        )
        .unwrap();
        let values: Vec<_> = request.trailers.get_all("X-Checksum").iter().collect();
        assert_eq!(values, ["abc", "def"]);
    }
}
