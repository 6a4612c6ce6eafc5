//! Error types for request building and dispatch.

use thiserror::Error;

/// The errors produced while building or dispatching a request.
///
/// Seed errors (method and URL parsing) and the causes of option failures
/// are surfaced verbatim from the underlying parsers and encoders. When an
/// option fails inside a pipeline, the error is wrapped in [`Error::Option`]
/// carrying the zero-based index of the failing option.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The seed method is not a lexically valid HTTP method.
    #[error(transparent)]
    InvalidMethod(#[from] http::method::InvalidMethod),
    /// A URL failed to parse.
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
    /// A header name was rejected by the header map.
    #[error(transparent)]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),
    /// A header value was rejected by the header map.
    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    /// The URL rejected a component replacement, e.g. a scheme change the
    /// URL cannot represent.
    #[error("cannot set {0} on this URL")]
    UrlComponent(&'static str),
    /// An option failed while the pipeline was applying it.
    #[error("failed to apply option {index}: {source}")]
    Option {
        /// Zero-based position of the failing option in its pipeline.
        index: usize,
        /// The failure the option reported.
        source: Box<Error>,
    },
    /// JSON body encoding failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// XML body encoding failed.
    #[error(transparent)]
    Xml(#[from] quick_xml::SeError),
    /// An I/O failure from a body reader or a dump sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// No process-wide default transport has been registered.
    #[error("no default transport registered; call `transport::set_default` at startup or use a `Client`")]
    NoTransport,
    /// The transport failed to carry out the dispatch.
    #[error("{0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

/// A `Result` alias where the `Err` case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
