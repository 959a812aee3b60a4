//! Tests for description cleanup

use crate::sanitize::{sanitize_description, xml_safe};

#[test]
fn test_decodes_entities() {
    assert_eq!(
        sanitize_description(Some("&quot;Dark Magician&quot; &amp; &lt;Dark Magician Girl&gt;")),
        "\"Dark Magician\" & <Dark Magician Girl>"
    );
}

#[test]
fn test_decodes_numeric_apostrophes() {
    assert_eq!(
        sanitize_description(Some("Your opponent&#39;s monster&#x27;s ATK")),
        "Your opponent's monster's ATK"
    );
}

#[test]
fn test_double_escaped_apostrophe() {
    assert_eq!(sanitize_description(Some("Kaiba&amp;#x27;s dragon")), "Kaiba's dragon");
}

#[test]
fn test_newlines_become_spaces() {
    assert_eq!(
        sanitize_description(Some(
            "Cannot be Normal Summoned.\r\nMust be Special Summoned.\nOnce per turn."
        )),
        "Cannot be Normal Summoned. Must be Special Summoned. Once per turn."
    );
}

#[test]
fn test_plain_text_unchanged() {
    let text = "The ultimate wizard in terms of attack and defense.";
    assert_eq!(sanitize_description(Some(text)), text);
}

#[test]
fn test_idempotent_on_output() {
    let once = sanitize_description(Some("A &amp; B\nC"));
    assert_eq!(sanitize_description(Some(&once)), once);
}

#[test]
fn test_missing_description() {
    assert_eq!(sanitize_description(None), "");
}

#[test]
fn test_lone_carriage_return_becomes_space() {
    assert_eq!(sanitize_description(Some("Flip\rSummon")), "Flip Summon");
}

#[test]
fn test_bare_legacy_entities_decoded() {
    assert_eq!(sanitize_description(Some("Fire &amp Ice")), "Fire & Ice");
    assert_eq!(sanitize_description(Some("ATK &lt 1000")), "ATK < 1000");
}

#[test]
fn test_unknown_entity_left_alone() {
    assert_eq!(sanitize_description(Some("&notanentity;")), "&notanentity;");
}

#[test]
fn test_control_characters_dropped() {
    assert_eq!(sanitize_description(Some("Kuri\u{1}boh\u{8}")), "Kuriboh");
}

#[test]
fn test_mixed_breaks_entities_and_controls() {
    assert_eq!(
        sanitize_description(Some("a\rb &amp c &notanentity; \u{1}x")),
        "a b & c &notanentity; x"
    );
}

#[test]
fn test_xml_safe_keeps_valid_characters() {
    let text = "tab\there\nline \u{1F409} \u{FFFD}";
    assert!(matches!(xml_safe(text), std::borrow::Cow::Borrowed(_)));
    assert_eq!(xml_safe(text), text);
}

#[test]
fn test_xml_safe_removes_invalid_characters() {
    assert_eq!(xml_safe("a\u{0}b\u{1F}c\u{FFFE}d\u{B}"), "abcd");
}
