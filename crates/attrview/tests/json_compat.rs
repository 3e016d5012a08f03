//! Tests for the persisted JSON shape of values

use attrview::prelude::*;
use attrview::{parse_values, AssetType};
use pretty_assertions::assert_eq;

/// A row of stored cells as written by the application
const STORED_ROW: &str = r#"[
  {"id":"v1","keyID":"k1","blockID":"b1","type":"block","block":{"id":"b1","content":"Groceries","created":1700000000000,"updated":1700000500000}},
  {"id":"v2","keyID":"k2","blockID":"b1","type":"number","number":{"content":12.5,"isNotEmpty":true,"format":"euro","formattedContent":"€12,50"}},
  {"id":"v3","keyID":"k3","blockID":"b1","type":"select","mSelect":[{"content":"Done","color":"4"}]},
  {"id":"v4","keyID":"k4","blockID":"b1","type":"mAsset","mAsset":[{"type":"image","name":"receipt","content":"assets/receipt.png"}]},
  {"id":"v5","keyID":"k5","blockID":"b1","type":"checkbox","checkbox":{"checked":true}},
  {"id":"v6","keyID":"k6","blockID":"b1","type":"relation","relation":{"contents":["Shop A","Shop B"],"blockIDs":["s1","s2"]}},
  {"id":"v7","keyID":"k7","blockID":"b1","type":"rollup","rollup":{"contents":["3"]}},
  {"id":"v8","keyID":"k8","blockID":"b1","type":"email","isDetached":true,"email":{"content":"a@example.com"}}
]"#;

#[test]
fn test_render_stored_row() {
    let values = parse_values(STORED_ROW).unwrap();
    let rendered: Vec<String> = values.iter().map(Value::render).collect();
    assert_eq!(
        rendered,
        vec![
            "Groceries",
            "€12,50",
            "Done",
            "assets/receipt.png",
            "√",
            "Shop A Shop B",
            "3",
            "a@example.com",
        ]
    );

    assert_eq!(values[3].key_type(), Some(KeyType::MultiAsset));
    match &values[3].data {
        ValueData::MultiAsset(assets) => assert_eq!(assets[0].asset_type, AssetType::Image),
        other => panic!("unexpected data {other:?}"),
    }
    assert!(values[7].is_detached);
}

#[test]
fn test_round_trip_preserves_shape() {
    let input: Vec<serde_json::Value> = serde_json::from_str(STORED_ROW).unwrap();
    let values = parse_values(STORED_ROW).unwrap();

    for (expected, value) in input.iter().zip(&values) {
        let written: serde_json::Value = serde_json::from_str(&value.to_json_string()).unwrap();
        assert_eq!(&written, expected);
    }
}

#[test]
fn test_single_value_document() {
    let values = parse_values(r#"{"type":"text","text":{"content":" hi "}}"#).unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].render(), "hi");
}

#[test]
fn test_integral_numbers_have_no_fraction() {
    let value = Value::new("n", "k", "r", ValueNumber::new(3.0));
    assert_eq!(
        value.to_json_string(),
        r#"{"id":"n","keyID":"k","blockID":"r","type":"number","number":{"content":3,"isNotEmpty":true,"format":"","formattedContent":"3"}}"#
    );
}

#[test]
fn test_clone_shares_nothing() {
    let values = parse_values(STORED_ROW).unwrap();
    let original = values[5].clone();
    let mut copy = original.clone();

    if let ValueData::Relation(Some(relation)) = &mut copy.data {
        relation.contents.push("Shop C".into());
        relation.block_ids.clear();
    }

    assert_eq!(original, values[5]);
    assert_eq!(original.render(), "Shop A Shop B");
    assert_eq!(copy.render(), "Shop A Shop B Shop C");
}
