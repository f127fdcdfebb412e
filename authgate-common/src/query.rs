//! Query parameter lookup on a full page address

use std::borrow::Cow;

use regex::Regex;
use thiserror::Error;

/// A query value that cannot be percent-decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("malformed percent escape at byte {0}")]
    MalformedEscape(usize),

    #[error("decoded value is not valid UTF-8")]
    InvalidUtf8,
}

/// Look up `name` in the query string of `href`.
///
/// Returns `Ok(None)` when the parameter is absent, `Ok(Some(""))` when it is
/// present without a value (`?a`, `?a=`, `?a&b=1`), and otherwise the value
/// with `+` turned into a space and percent escapes decoded. A `%` not
/// followed by two hex digits, or escapes that decode to invalid UTF-8, are
/// errors.
///
/// Matching is on the raw text of `href`: the first `?name` or `&name`
/// wins, and a fragment ends the value.
pub fn get_url_parameter(href: &str, name: &str) -> Result<Option<String>, QueryError> {
    let pattern = format!(r"[?&]{}(=([^&#]*)|&|#|$)", regex::escape(name));
    // escaped input always yields a valid pattern
    let Ok(re) = Regex::new(&pattern) else {
        return Ok(None);
    };

    let Some(caps) = re.captures(href) else {
        return Ok(None);
    };
    let raw = match caps.get(2) {
        Some(value) if !value.as_str().is_empty() => value.as_str(),
        _ => return Ok(Some(String::new())),
    };

    let spaced = raw.replace('+', " ");
    decode_component(&spaced).map(Some)
}

fn decode_component(input: &str) -> Result<String, QueryError> {
    let bytes = input.as_bytes();
    let mut pos = 0;
    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'%') {
        let at = pos + offset;
        let well_formed = bytes
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(QueryError::MalformedEscape(at));
        }
        pos = at + 3;
    }

    urlencoding::decode(input)
        .map(Cow::into_owned)
        .map_err(|_| QueryError::InvalidUtf8)
}
