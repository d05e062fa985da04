//! CSRF cookie retrieval.
//!
//! Django issues the anti-forgery token as a cookie; other page scripts
//! echo it back in request headers. This module only parses it out of the
//! raw `document.cookie` string.

use std::borrow::Cow;

/// Look up a cookie by name in a raw `document.cookie` string.
///
/// Entries are `;`-separated `key=value` pairs with optional surrounding
/// whitespace; values are percent-encoded. The first matching entry wins.
/// Returns `None` when the cookie store is empty or the name is absent.
pub fn get_cookie(cookie_str: &str, name: &str) -> Option<String> {
    if cookie_str.is_empty() {
        return None;
    }

    for entry in cookie_str.split(';') {
        let entry = entry.trim();
        if let Some(value) = entry
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
        {
            return Some(decode_value(value));
        }
    }
    None
}

/// Percent-decode a cookie value, falling back to the raw text when the
/// encoding is malformed.
fn decode_value(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(Cow::Borrowed(decoded)) => decoded.to_string(),
        Ok(Cow::Owned(decoded)) => decoded,
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_cookie_among_others() {
        assert_eq!(
            get_cookie("a=1; csrftoken=XYZ123; b=2", "csrftoken").as_deref(),
            Some("XYZ123")
        );
    }

    #[test]
    fn test_empty_store_returns_none() {
        assert_eq!(get_cookie("", "csrftoken"), None);
    }

    #[test]
    fn test_missing_name_returns_none() {
        assert_eq!(get_cookie("a=1; b=2", "csrftoken"), None);
    }

    #[test]
    fn test_name_must_match_whole_key() {
        // Neither a longer key with the same suffix nor one with the same
        // prefix may match.
        assert_eq!(get_cookie("xcsrftoken=nope", "csrftoken"), None);
        assert_eq!(get_cookie("csrftokenx=nope", "csrftoken"), None);
    }

    #[test]
    fn test_value_is_percent_decoded() {
        assert_eq!(
            get_cookie("csrftoken=a%3Db", "csrftoken").as_deref(),
            Some("a=b")
        );
    }

    #[test]
    fn test_malformed_encoding_falls_back_to_raw() {
        assert_eq!(
            get_cookie("csrftoken=%FF%FE", "csrftoken").as_deref(),
            Some("%FF%FE")
        );
    }

    #[test]
    fn test_entries_are_trimmed() {
        assert_eq!(
            get_cookie("a=1;   csrftoken=tok  ; b=2", "csrftoken").as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            get_cookie("csrftoken=first; csrftoken=second", "csrftoken").as_deref(),
            Some("first")
        );
    }

    #[test]
    fn test_empty_value_is_present_but_empty() {
        assert_eq!(get_cookie("csrftoken=", "csrftoken").as_deref(), Some(""));
    }
}
