//! The option catalog: one constructor per request facet.
//!
//! Every constructor returns an `impl Opt` capturing its inputs by value,
//! so options are plain values that can be stored, cloned into pipelines,
//! and applied any number of times. Scalar facets take last-writer-wins
//! semantics; multi-valued facets (headers, query, cookies, trailers)
//! append and never clear earlier values.

mod body;
mod context;
mod dump;
mod form;
mod header;
mod url;

pub use body::{
    body, body_bytes, body_form, body_json, body_reader, body_string, body_xml, get_body,
};
pub use context::{context, context_value};
pub use dump::dump;
pub use form::{
    form, form_value, multipart_form, multipart_form_value, post_form, post_form_value, trailer,
    trailer_header, transfer_encoding, transfer_encoding_append,
};
pub use header::{
    accept, authorization, basic_auth, bearer_auth, content_type, cookie, header, headers, referer,
    token_auth, user_agent,
};
pub use self::url::{
    host, path, queries, query, raw_url, scheme, url, user, user_password, username, Userinfo,
};
