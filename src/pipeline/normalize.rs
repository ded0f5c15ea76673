//! Content normalisation: rewrite a payload into the form scanners expect.
//!
//! Phone cameras act on QR payloads by scheme: `https://` opens a browser,
//! `mailto:` a mail composer, `tel:` the dialler. Bare `example.com` or
//! `paul@example.com` would only be shown as text, so the matching scheme is
//! prepended once. Prefix checks are case-insensitive, which makes the
//! operation idempotent. Nothing else is validated: a malformed `WIFI:`
//! string is passed to the encoder untouched.

use crate::pipeline::classify::{has_http_scheme, ContentType};

/// Prefix `s` with `scheme` unless it already starts with it (any case).
fn ensure_prefix(s: &str, scheme: &str) -> String {
    let present = s
        .get(..scheme.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(scheme));
    if present {
        s.to_string()
    } else {
        format!("{scheme}{s}")
    }
}

/// Produce the exact payload that gets encoded (and printed in the PDF).
///
/// Surrounding whitespace is trimmed for every type.
pub fn normalize(content: &str, content_type: ContentType) -> String {
    let c = content.trim();
    match content_type {
        ContentType::Url if has_http_scheme(c) => c.to_string(),
        ContentType::Url => format!("https://{c}"),
        ContentType::Email => ensure_prefix(c, "mailto:"),
        ContentType::Phone => ensure_prefix(c, "tel:"),
        ContentType::Wifi | ContentType::Text | ContentType::Other => c.to_string(),
    }
}
