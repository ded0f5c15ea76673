//! Content classification: guess what kind of payload a free-form string is.
//!
//! ## Rule order
//!
//! Several shapes overlap (a `WIFI:` payload can contain `@`, a `tel:` number
//! is also phone-shaped, `mailto:` addresses are also email-shaped), so the
//! checks run as an ordered list and the first match wins:
//!
//! 1. `WIFI:` prefix (any case)            → [`ContentType::Wifi`]
//! 2. `http://`, `https://` or `www.`      → [`ContentType::Url`]
//! 3. `mailto:` prefix                     → [`ContentType::Email`]
//! 4. `local@domain.tld`, single `@`       → [`ContentType::Email`]
//! 5. `tel:` prefix                        → [`ContentType::Phone`]
//! 6. optional `+`, then 7+ of `0-9 -()`   → [`ContentType::Phone`]
//! 7. anything else                        → [`ContentType::Text`]
//!
//! Rule 6 also matches long numeric IDs and dates like `2024 01 15`. That is
//! intentional; narrowing it would change which payloads get a `tel:` prefix.

use crate::error::QrArchiveError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a payload represents, which decides its canonical encoded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Url,
    Email,
    Phone,
    Wifi,
    Text,
    /// Accepted as an explicit override only; [`classify`] never returns it.
    Other,
}

impl ContentType {
    /// All variants, in CLI listing order.
    pub const ALL: [ContentType; 6] = [
        ContentType::Url,
        ContentType::Text,
        ContentType::Email,
        ContentType::Phone,
        ContentType::Wifi,
        ContentType::Other,
    ];

    /// Lowercase name as accepted by `--type`.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Url => "url",
            ContentType::Email => "email",
            ContentType::Phone => "phone",
            ContentType::Wifi => "wifi",
            ContentType::Text => "text",
            ContentType::Other => "other",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = QrArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| QrArchiveError::UnknownContentType(s.to_string()))
    }
}

// ── Patterns ─────────────────────────────────────────────────────────────────

static RE_HTTP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());
static RE_WWW: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^www\.").unwrap());
static RE_MAILTO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^mailto:").unwrap());
static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
static RE_TEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^tel:").unwrap());
static RE_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{7,}$").unwrap());

/// Does `s` start with an `http://` or `https://` scheme (any case)?
pub(crate) fn has_http_scheme(s: &str) -> bool {
    RE_HTTP.is_match(s)
}

fn is_wifi(s: &str) -> bool {
    s.get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case("WIFI:"))
}

fn is_url(s: &str) -> bool {
    has_http_scheme(s) || RE_WWW.is_match(s)
}

fn is_mailto(s: &str) -> bool {
    RE_MAILTO.is_match(s)
}

fn is_bare_email(s: &str) -> bool {
    RE_EMAIL.is_match(s)
}

fn is_tel(s: &str) -> bool {
    RE_TEL.is_match(s)
}

fn is_phone_shaped(s: &str) -> bool {
    RE_PHONE.is_match(s)
}

/// Ordered detection rules; the first predicate that matches decides.
const RULES: &[(fn(&str) -> bool, ContentType)] = &[
    (is_wifi, ContentType::Wifi),
    (is_url, ContentType::Url),
    (is_mailto, ContentType::Email),
    (is_bare_email, ContentType::Email),
    (is_tel, ContentType::Phone),
    (is_phone_shaped, ContentType::Phone),
];

/// Classify a payload. Total: anything unrecognised is [`ContentType::Text`].
///
/// Surrounding whitespace is ignored.
pub fn classify(content: &str) -> ContentType {
    let c = content.trim();
    RULES
        .iter()
        .find(|(matches, _)| matches(c))
        .map(|&(_, ty)| ty)
        .unwrap_or(ContentType::Text)
}
