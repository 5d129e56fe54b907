//! Dashboard routes with their id segments percent-encoded.
//!
//! Ids come from the backend or from a decoded request path, so they may hold
//! `/`, `?`, `#` or control characters. Everything that builds a link, a form
//! action, a `Location` header or a backend path goes through [`segment`].

use std::borrow::Cow;

use crate::export::ExportFormat;

/// One path segment, percent-encoded (unreserved characters are kept).
pub fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

pub fn content(id: &str) -> String {
    format!("/content/{}", segment(id))
}

pub fn refresh(id: &str) -> String {
    format!("{}/refresh", content(id))
}

pub fn delete(id: &str) -> String {
    format!("{}/delete", content(id))
}

pub fn export(id: &str, format: ExportFormat) -> String {
    format!("{}/export/{format}", content(id))
}

pub fn share(share_id: &str) -> String {
    format!("/share/{}", segment(share_id))
}

pub fn confirm_delete(id: &str) -> String {
    format!("/?confirm_delete={}", segment(id))
}
