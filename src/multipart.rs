//! Structured multipart form data.

use bytes::Bytes;

use crate::values::Values;

/// A structured `multipart/form-data` payload: plain text fields plus file
/// parts, carried on the request for the transport to encode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    /// Plain text fields.
    pub values: Values,
    /// File parts, in attachment order.
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain text field.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.append(key, value);
        self
    }

    /// Append a file part.
    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }
}

/// One file attachment of a [`MultipartForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    /// Field name the part is filed under.
    pub name: String,
    /// Client-side file name, if any.
    pub filename: Option<String>,
    /// MIME type of the content.
    pub content_type: String,
    /// Raw content bytes.
    pub content: Bytes,
}

impl FilePart {
    /// A part named `name` holding `content`, typed `application/octet-stream`.
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: mime::APPLICATION_OCTET_STREAM.to_string(),
            content: content.into(),
        }
    }

    /// Set the client-side file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the MIME type of the content.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}
