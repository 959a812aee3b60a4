//! Description text cleanup

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    /// Legacy entities browsers accept without the closing semicolon
    static ref BARE_ENTITY: Regex = Regex::new(r"&(amp|lt|gt|quot|nbsp);?").unwrap();
}

/// Plain single-line text from an API description
///
/// Decodes HTML entities (including bare `&amp`-style legacy forms), turns each
/// line break into a space, resolves a double-escaped apostrophe left over
/// after decoding and drops characters XML cannot carry.
pub fn sanitize_description(raw: Option<&str>) -> String {
    let terminated = terminate_bare_entities(raw.unwrap_or_default());
    let decoded = html_escape::decode_html_entities(terminated.as_ref());

    let single_line = decoded
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace("&#x27;", "'");

    xml_safe(&single_line).into_owned()
}

/// Text with every character outside the XML 1.0 `Char` production removed
pub fn xml_safe(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}' => true,
        _ => false,
    }
}

fn terminate_bare_entities(text: &str) -> Cow<'_, str> {
    BARE_ENTITY.replace_all(text, |caps: &Captures| format!("&{};", &caps[1]))
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
