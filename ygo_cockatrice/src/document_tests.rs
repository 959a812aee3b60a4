//! Tests for document assembly

use crate::document::{assemble, build_document, catalog, CATALOG_NAME, SCHEMA_LOCATION};
use crate::identifier::IdGenerator;
use serde_json::json;
use ygo_common::RecordError;

fn records() -> Vec<serde_json::Value> {
    vec![
        json!({
            "id": 89631139,
            "name": "Blue-Eyes White Dragon",
            "type": "Normal Monster",
            "level": 8,
            "atk": 3000,
            "def": 2500,
            "card_images": [
                { "id": 89631139, "image_url": "http://example/bewd.jpg" },
                { "id": 89631140, "image_url": "http://example/bewd2.jpg" }
            ]
        }),
        json!({
            "id": 55144522,
            "name": "Pot of Greed",
            "type": "Spell Card",
            "card_images": [{ "id": 55144522, "image_url": "http://example/pot.jpg" }]
        }),
        json!({
            "id": 40640057,
            "name": "Kuriboh",
            "type": "Effect Monster",
            "card_images": []
        }),
    ]
}

#[test]
fn test_single_catalog_entry() {
    let doc = assemble(Vec::new());

    assert_eq!(doc.sets, vec![catalog()]);
    assert_eq!(doc.sets[0].name, CATALOG_NAME);
    assert!(doc.cards.is_empty());
}

#[test]
fn test_root_attributes() {
    let attrs = assemble(Vec::new()).root_attributes();

    assert_eq!(attrs[0], ("version", "4"));
    assert_eq!(attrs[1].0, "xmlns:xsi");
    assert_eq!(attrs[2], ("xsi:schemaLocation", SCHEMA_LOCATION));
}

#[test]
fn test_cards_keep_input_order() {
    let doc = build_document(records(), &IdGenerator::default()).unwrap();
    let names: Vec<&str> = doc.cards.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, vec!["Blue-Eyes White Dragon", "Pot of Greed", "Kuriboh"]);
    assert_eq!(doc.set_entry_count(), 3);
}

#[test]
fn test_build_is_reproducible() {
    let ids = IdGenerator::default();
    assert_eq!(
        build_document(records(), &ids).unwrap(),
        build_document(records(), &ids).unwrap()
    );
}

#[test]
fn test_bad_record_fails_whole_document() {
    let mut input = records();
    input.insert(1, json!({ "id": 1, "name": "Broken" }));

    let err = build_document(input, &IdGenerator::default()).unwrap_err();
    assert!(matches!(err, RecordError::MissingImages { index: 1, .. }));
}
