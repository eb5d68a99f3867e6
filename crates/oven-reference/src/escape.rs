//! HTML entity escaping.
//!
//! [`escape`] is applied to text, attribute names and attribute values during
//! rendering. [`unescape`] is its inverse and also understands numeric
//! references and a set of common named entities.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Pattern for matching numeric and named character references.
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]*);")
        .expect("invalid entity regex")
});

/// Escape reserved characters and both quote styles.
///
/// Non-ASCII text is left intact.
///
/// # Examples
///
/// ```
/// use oven_reference::escape;
///
/// assert_eq!(escape(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// assert_eq!(escape("it's"), "it&#039;s");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(ch),
        }
    }
    Cow::Owned(result)
}

/// Decode character references produced by [`escape`] and friends.
///
/// Unknown named entities and references to invalid code points are kept
/// verbatim.
///
/// # Examples
///
/// ```
/// use oven_reference::unescape;
///
/// assert_eq!(unescape("a &lt; b &amp;&amp; c"), "a < b && c");
/// assert_eq!(unescape("&#x263A;&nbsp;&bogus;"), "\u{263a}\u{a0}&bogus;");
/// ```
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    ENTITY_PATTERN.replace_all(text, |caps: &regex::Captures| {
        let body = &caps[1];
        let decoded = match body.strip_prefix('#') {
            Some(numeric) => decode_numeric(numeric),
            None => named_entity(body).map(String::from),
        };
        decoded.unwrap_or_else(|| caps[0].to_owned())
    })
}

/// Decode a numeric reference body (`65` or `x41`).
fn decode_numeric(body: &str) -> Option<String> {
    let code = match body.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => body.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(String::from)
}

/// Map an entity name to its replacement text.
fn named_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        // Reserved characters
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",

        // Spacing and punctuation
        "nbsp" => "\u{00a0}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "laquo" => "\u{00ab}",
        "raquo" => "\u{00bb}",
        "bull" => "\u{2022}",
        "hellip" => "\u{2026}",
        "middot" => "\u{00b7}",

        // Symbols
        "copy" => "\u{00a9}",
        "reg" => "\u{00ae}",
        "trade" => "\u{2122}",
        "deg" => "\u{00b0}",
        "sect" => "\u{00a7}",
        "para" => "\u{00b6}",
        "times" => "\u{00d7}",
        "divide" => "\u{00f7}",
        "plusmn" => "\u{00b1}",

        // Currency
        "euro" => "\u{20ac}",
        "pound" => "\u{00a3}",
        "yen" => "\u{00a5}",
        "cent" => "\u{00a2}",

        _ => return None,
    })
}
