//! Options over the request URL: replacement, parts, path joining, query.

use url::Url;

use crate::error::{Error, Result};
use crate::option::Opt;
use crate::request::Request;

/// URL userinfo: a username with an optional password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Userinfo {
    username: String,
    password: Option<String>,
}

impl Userinfo {
    /// Userinfo carrying a username only.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: None,
        }
    }

    /// Userinfo carrying a username and a password.
    pub fn with_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
        }
    }
}

/// Parse `url` and replace the request URL entirely.
///
/// A parse failure aborts the pipeline.
pub fn url(url: impl Into<String>) -> impl Opt {
    let url = url.into();
    move |mut request: Request| -> Result<Request> {
        request.url = Url::parse(&url)?;
        Ok(request)
    }
}

/// Replace the request URL with a pre-parsed value.
pub fn raw_url(url: Url) -> impl Opt {
    move |mut request: Request| -> Result<Request> {
        request.url = url.clone();
        Ok(request)
    }
}

/// Set the URL scheme.
pub fn scheme(scheme: impl Into<String>) -> impl Opt {
    let scheme = scheme.into();
    move |mut request: Request| -> Result<Request> {
        request
            .url
            .set_scheme(&scheme)
            .map_err(|()| Error::UrlComponent("scheme"))?;
        Ok(request)
    }
}

/// Set the URL host, and the request's `Host:` override to match.
///
/// `host` may carry a port (`"example.com:8080"`); both URL host and port
/// are updated, and the override keeps the combined form.
pub fn host(host: impl Into<String>) -> impl Opt {
    let host = host.into();
    move |mut request: Request| -> Result<Request> {
        let (name, port) = match host.rsplit_once(':') {
            Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) && !port.is_empty() => {
                (name, Some(port))
            }
            _ => (host.as_str(), None),
        };
        request.url.set_host(Some(name))?;
        if let Some(port) = port {
            let port: u16 = port.parse().map_err(|_| Error::UrlComponent("port"))?;
            request
                .url
                .set_port(Some(port))
                .map_err(|()| Error::UrlComponent("port"))?;
        }
        request.host = Some(host.clone());
        Ok(request)
    }
}

/// Set the URL userinfo.
pub fn user(user: Userinfo) -> impl Opt {
    move |mut request: Request| -> Result<Request> {
        request
            .url
            .set_username(&user.username)
            .map_err(|()| Error::UrlComponent("username"))?;
        request
            .url
            .set_password(user.password.as_deref())
            .map_err(|()| Error::UrlComponent("password"))?;
        Ok(request)
    }
}

/// Set the URL userinfo to a bare username.
pub fn username(username: impl Into<String>) -> impl Opt {
    user(Userinfo::new(username))
}

/// Set the URL userinfo to a username/password pair.
pub fn user_password(username: impl Into<String>, password: impl Into<String>) -> impl Opt {
    user(Userinfo::with_password(username, password))
}

/// Join `segments` onto the current URL path.
///
/// Joining is clean: repeated slashes collapse, `.` and `..` resolve, and
/// the result is always anchored at `/`.
pub fn path<I, S>(segments: I) -> impl Opt
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
    move |mut request: Request| -> Result<Request> {
        let joined = join_path(request.url.path(), &segments);
        request.url.set_path(&joined);
        Ok(request)
    }
}

/// Append one key/value pair to the URL query.
///
/// The URL's encoded query string is recomputed immediately, so later
/// options observe the new state.
pub fn query(key: impl Into<String>, value: impl Into<String>) -> impl Opt {
    let key = key.into();
    let value = value.into();
    move |mut request: Request| -> Result<Request> {
        request.url.query_pairs_mut().append_pair(&key, &value);
        Ok(request)
    }
}

/// Bulk-append key/value pairs to the URL query, preserving pair order.
pub fn queries<I, K, V>(pairs: I) -> impl Opt
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
        let mut serializer = request.url.query_pairs_mut();
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
        drop(serializer);
        Ok(request)
    }
}

/// Clean path join: splits every segment on `/`, drops empty and `.` parts,
/// resolves `..`, and anchors the result at `/`.
fn join_path(base: &str, segments: &[String]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in std::iter::once(base).chain(segments.iter().map(String::as_str)) {
        for part in segment.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                part => parts.push(part),
            }
        }
    }
    let mut joined = String::with_capacity(1 + parts.iter().map(|p| p.len() + 1).sum::<usize>());
    joined.push('/');
    joined.push_str(&parts.join("/"));
    joined
}
