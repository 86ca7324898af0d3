//! URL normalization.
//!
//! Turns a URL into the [`CanonicalKey`] it is routed by and the
//! [`QueryParams`] handed to the factory.
//!
//! | input                                  | key                   | query                         |
//! |----------------------------------------|-----------------------|-------------------------------|
//! | `abc://123.com/x1?page=10&index=20`    | `abc://123.com/x1`    | `{page: 10, index: 20}`       |
//! | `abc://123.com/x1?flag`                | `abc://123.com/x1`    | `{}`                          |
//! | `abc://123.com/x1`                     | `abc://123.com/x1`    | none                          |
//! | `/x1?page=10`                          | none                  | none                          |

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use regex::Regex;
use std::sync::LazyLock;
use tinyroute_core::{CanonicalKey, QueryParams};
use url::Url;

static PERCENT_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").expect("percent escape pattern is valid"));

/// Everything outside the characters allowed in a URL query.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// A URL split into its routing parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// `scheme://host/path`.
    pub key: CanonicalKey,
    /// Decoded query; `None` when the URL has no `?` component.
    pub query: Option<QueryParams>,
}

/// Split `raw` into canonical key and query.
///
/// Returns `None` unless `raw` parses as a URL with both a scheme and a
/// non-empty host.
pub fn normalize(raw: &str) -> Option<Normalized> {
    let url = Url::parse(raw).ok()?;
    let key = key_of(&url)?;
    Some(Normalized {
        key,
        query: url.query().map(parse_query),
    })
}

/// The canonical key of `raw`, if it has one.
pub fn canonical_key(raw: &str) -> Option<CanonicalKey> {
    Url::parse(raw).ok().as_ref().and_then(key_of)
}

/// The query parameters of `raw`, if it parses and has a query.
pub fn query(raw: &str) -> Option<QueryParams> {
    Url::parse(raw).ok()?.query().map(parse_query)
}

/// Build a [`Url`] from user-facing text.
///
/// Text that already contains `%XX` escapes is parsed as-is so nothing gets
/// escaped twice. Anything else is percent-encoded first.
pub fn to_url(raw: &str) -> Option<Url> {
    if PERCENT_ESCAPE.is_match(raw) {
        return Url::parse(raw).ok();
    }
    let encoded = utf8_percent_encode(raw, QUERY_ENCODE_SET).to_string();
    Url::parse(&encoded).ok()
}

fn key_of(url: &Url) -> Option<CanonicalKey> {
    let host = url.host_str().filter(|host| !host.is_empty())?;
    Some(CanonicalKey::new(format!(
        "{}://{}{}",
        url.scheme(),
        host,
        url.path()
    )))
}

/// `name=value` pairs split on `&`.
///
/// Items without `=` and items that do not decode to UTF-8 are skipped.
/// `+` is kept as-is.
fn parse_query(query: &str) -> QueryParams {
    query
        .split('&')
        .filter_map(|item| {
            let (name, value) = item.split_once('=')?;
            let name = percent_decode_str(name).decode_utf8().ok()?;
            let value = percent_decode_str(value).decode_utf8().ok()?;
            Some((name.into_owned(), value.into_owned()))
        })
        .collect()
}
