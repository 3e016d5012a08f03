//! Attribute view cell values

mod kind;
mod payload;
mod wire;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use kind::KeyType;
pub use payload::{
    AssetType, ValueAsset, ValueBlock, ValueCheckbox, ValueEmail, ValuePhone, ValueRelation,
    ValueRollup, ValueSelect, ValueTemplate, ValueText, ValueUrl,
};

use crate::date::{ValueCreated, ValueDate, ValueUpdated};
use crate::error::Result;
use crate::number::ValueNumber;
use crate::CHECKED_MARK;
use wire::ValueWire;

/// Typed content of a cell
///
/// The variant is the cell's kind. Single-payload kinds carry an `Option`
/// because stored cells may lack their payload; such cells render as empty.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueData {
    /// Primary-key cell bound to a block
    Block(Option<ValueBlock>),
    Text(Option<ValueText>),
    Number(Option<ValueNumber>),
    Date(Option<ValueDate>),
    /// Single select; only the first option is rendered
    Select(Vec<ValueSelect>),
    MultiSelect(Vec<ValueSelect>),
    Url(Option<ValueUrl>),
    Email(Option<ValueEmail>),
    Phone(Option<ValuePhone>),
    MultiAsset(Vec<ValueAsset>),
    Template(Option<ValueTemplate>),
    Created(Option<ValueCreated>),
    Updated(Option<ValueUpdated>),
    Checkbox(Option<ValueCheckbox>),
    Relation(Option<ValueRelation>),
    Rollup(Option<ValueRollup>),
    /// A kind this crate does not know; keeps the raw `type` string
    Unsupported(String),
}

impl ValueData {
    /// An empty payload of the given kind
    pub fn empty(kind: KeyType) -> Self {
        match kind {
            KeyType::Block => ValueData::Block(None),
            KeyType::Text => ValueData::Text(None),
            KeyType::Number => ValueData::Number(None),
            KeyType::Date => ValueData::Date(None),
            KeyType::Select => ValueData::Select(Vec::new()),
            KeyType::MultiSelect => ValueData::MultiSelect(Vec::new()),
            KeyType::Url => ValueData::Url(None),
            KeyType::Email => ValueData::Email(None),
            KeyType::Phone => ValueData::Phone(None),
            KeyType::MultiAsset => ValueData::MultiAsset(Vec::new()),
            KeyType::Template => ValueData::Template(None),
            KeyType::Created => ValueData::Created(None),
            KeyType::Updated => ValueData::Updated(None),
            KeyType::Checkbox => ValueData::Checkbox(None),
            KeyType::Relation => ValueData::Relation(None),
            KeyType::Rollup => ValueData::Rollup(None),
        }
    }

    /// The kind, or `None` for [`ValueData::Unsupported`]
    pub fn key_type(&self) -> Option<KeyType> {
        Some(match self {
            ValueData::Block(_) => KeyType::Block,
            ValueData::Text(_) => KeyType::Text,
            ValueData::Number(_) => KeyType::Number,
            ValueData::Date(_) => KeyType::Date,
            ValueData::Select(_) => KeyType::Select,
            ValueData::MultiSelect(_) => KeyType::MultiSelect,
            ValueData::Url(_) => KeyType::Url,
            ValueData::Email(_) => KeyType::Email,
            ValueData::Phone(_) => KeyType::Phone,
            ValueData::MultiAsset(_) => KeyType::MultiAsset,
            ValueData::Template(_) => KeyType::Template,
            ValueData::Created(_) => KeyType::Created,
            ValueData::Updated(_) => KeyType::Updated,
            ValueData::Checkbox(_) => KeyType::Checkbox,
            ValueData::Relation(_) => KeyType::Relation,
            ValueData::Rollup(_) => KeyType::Rollup,
            ValueData::Unsupported(_) => return None,
        })
    }

    /// The persisted `type` string
    pub fn type_name(&self) -> &str {
        match self {
            ValueData::Unsupported(name) => name,
            other => other.key_type().map_or("", |k| k.as_str()),
        }
    }

    /// Display string of this content
    pub fn render(&self) -> String {
        match self {
            ValueData::Block(p) => p.as_ref().map(|b| b.content.clone()).unwrap_or_default(),
            ValueData::Text(p) => p
                .as_ref()
                .map(|t| t.content.trim().to_string())
                .unwrap_or_default(),
            ValueData::Number(p) => p
                .as_ref()
                .map(|n| n.formatted_content.clone())
                .unwrap_or_default(),
            ValueData::Date(p) => p
                .as_ref()
                .map(|d| d.formatted_content.clone())
                .unwrap_or_default(),
            ValueData::Select(options) => options
                .first()
                .map(|o| o.content.clone())
                .unwrap_or_default(),
            ValueData::MultiSelect(options) => join(options.iter().map(|o| o.content.as_str())),
            ValueData::Url(p) => p.as_ref().map(|u| u.content.clone()).unwrap_or_default(),
            ValueData::Email(p) => p.as_ref().map(|e| e.content.clone()).unwrap_or_default(),
            ValueData::Phone(p) => p.as_ref().map(|t| t.content.clone()).unwrap_or_default(),
            ValueData::MultiAsset(assets) => join(assets.iter().map(|a| a.content.as_str())),
            ValueData::Template(p) => p
                .as_ref()
                .map(|t| t.content.trim().to_string())
                .unwrap_or_default(),
            ValueData::Created(p) => p
                .as_ref()
                .map(|c| c.formatted_content.clone())
                .unwrap_or_default(),
            ValueData::Updated(p) => p
                .as_ref()
                .map(|u| u.formatted_content.clone())
                .unwrap_or_default(),
            ValueData::Checkbox(p) => match p {
                Some(c) if c.checked => CHECKED_MARK.to_string(),
                _ => String::new(),
            },
            ValueData::Relation(p) => p
                .as_ref()
                .map(|r| join(r.contents.iter().map(String::as_str)))
                .unwrap_or_default(),
            ValueData::Rollup(p) => p
                .as_ref()
                .map(|r| join(r.contents.iter().map(String::as_str)))
                .unwrap_or_default(),
            ValueData::Unsupported(_) => String::new(),
        }
    }
}

fn join<'a, I: Iterator<Item = &'a str>>(parts: I) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

macro_rules! impl_from_payload {
    ($($payload:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for ValueData {
                fn from(p: $payload) -> Self {
                    ValueData::$variant(Some(p))
                }
            }
        )*
    };
}

impl_from_payload! {
    ValueBlock => Block,
    ValueText => Text,
    ValueNumber => Number,
    ValueDate => Date,
    ValueUrl => Url,
    ValueEmail => Email,
    ValuePhone => Phone,
    ValueTemplate => Template,
    ValueCreated => Created,
    ValueUpdated => Updated,
    ValueCheckbox => Checkbox,
    ValueRelation => Relation,
    ValueRollup => Rollup,
}

impl From<Vec<ValueAsset>> for ValueData {
    fn from(assets: Vec<ValueAsset>) -> Self {
        ValueData::MultiAsset(assets)
    }
}

/// One cell of an attribute view
///
/// Cloning is a deep copy: every payload owns its strings and lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ValueWire", into = "ValueWire")]
pub struct Value {
    /// Cell identifier
    pub id: String,
    /// Column identifier
    pub key_id: String,
    /// Row identifier
    pub block_id: String,
    /// The cell is not bound to a live document block
    pub is_detached: bool,
    pub data: ValueData,
}

impl Value {
    pub fn new<I, K, B, D>(id: I, key_id: K, block_id: B, data: D) -> Self
    where
        I: Into<String>,
        K: Into<String>,
        B: Into<String>,
        D: Into<ValueData>,
    {
        Self {
            id: id.into(),
            key_id: key_id.into(),
            block_id: block_id.into(),
            is_detached: false,
            data: data.into(),
        }
    }

    pub fn with_detached(mut self, detached: bool) -> Self {
        self.is_detached = detached;
        self
    }

    /// The cell's kind, or `None` for an unrecognized type
    pub fn key_type(&self) -> Option<KeyType> {
        self.data.key_type()
    }

    /// Display string of the cell; never fails, missing payloads render as ""
    pub fn render(&self) -> String {
        self.data.render()
    }

    /// Rollup payload, if this is a rollup cell that has one
    pub fn rollup_mut(&mut self) -> Option<&mut ValueRollup> {
        match &mut self.data {
            ValueData::Rollup(Some(r)) => Some(r),
            _ => None,
        }
    }

    /// Number payload, if this is a number cell that has one
    pub fn number_mut(&mut self) -> Option<&mut ValueNumber> {
        match &mut self.data {
            ValueData::Number(Some(n)) => Some(n),
            _ => None,
        }
    }

    /// Persisted JSON form; empty if serialization fails
    pub fn to_json_string(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to serialize value {:?}: {e}", self.id);
                String::new()
            }
        }
    }

    /// Decode a value from its persisted JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::NumberFormat;
    use pretty_assertions::assert_eq;

    fn cell<D: Into<ValueData>>(data: D) -> Value {
        Value::new(
            "20240101000000-aaaaaaa",
            "20240101000000-kkkkkkk",
            "20240101000000-bbbbbbb",
            data,
        )
    }

    #[test]
    fn test_missing_payloads_render_empty() {
        for kind in KeyType::ALL {
            let value = cell(ValueData::empty(kind));
            assert_eq!(value.render(), "", "kind {kind}");
            assert_eq!(value.key_type(), Some(kind));
        }
    }

    #[test]
    fn test_render_text_trims() {
        let v = cell(ValueText {
            content: "  hello \n".into(),
        });
        assert_eq!(v.render(), "hello");

        let v = cell(ValueTemplate {
            content: "\tsum: 3 ".into(),
        });
        assert_eq!(v.render(), "sum: 3");
    }

    #[test]
    fn test_render_block_keeps_whitespace() {
        let v = cell(ValueBlock {
            id: "b".into(),
            content: " Title ".into(),
            created: 1,
            updated: 2,
        });
        assert_eq!(v.render(), " Title ");
    }

    #[test]
    fn test_render_selects() {
        let options = vec![ValueSelect::new("Todo", "1"), ValueSelect::new("Urgent", "2")];
        assert_eq!(cell(ValueData::Select(options.clone())).render(), "Todo");
        assert_eq!(cell(ValueData::MultiSelect(options)).render(), "Todo Urgent");
    }

    #[test]
    fn test_render_assets() {
        let assets = vec![
            ValueAsset::new(AssetType::Image, "a.png", "assets/a.png"),
            ValueAsset::new(AssetType::File, "b.pdf", "assets/b.pdf"),
        ];
        assert_eq!(cell(assets).render(), "assets/a.png assets/b.pdf");
    }

    #[test]
    fn test_render_checkbox() {
        assert_eq!(cell(ValueCheckbox { checked: true }).render(), "√");
        assert_eq!(cell(ValueCheckbox { checked: false }).render(), "");
    }

    #[test]
    fn test_render_relation_and_rollup() {
        let relation = ValueRelation {
            contents: vec!["Alpha".into(), "Beta".into()],
            block_ids: vec!["id-a".into(), "id-b".into()],
        };
        assert_eq!(cell(relation.clone()).render(), "Alpha Beta");
        assert_eq!(
            relation.links().collect::<Vec<_>>(),
            vec![("id-a", "Alpha"), ("id-b", "Beta")]
        );

        assert_eq!(cell(ValueRollup::new(["1", "2", ""])).render(), "1 2 ");
        assert_eq!(cell(ValueRelation::default()).render(), "");
    }

    #[test]
    fn test_render_number_uses_cache() {
        let mut v = cell(ValueNumber::new_formatted(0.25, NumberFormat::Percent));
        assert_eq!(v.render(), "25%");
        v.number_mut().unwrap().content = 0.5;
        assert_eq!(v.to_string(), "25%");
        v.number_mut().unwrap().format_number();
        assert_eq!(v.to_string(), "50%");
    }

    #[test]
    fn test_unsupported_renders_empty() {
        let v = Value::from_json(r#"{"id":"x","type":"lineNumber"}"#).unwrap();
        assert_eq!(v.key_type(), None);
        assert_eq!(v.data, ValueData::Unsupported("lineNumber".into()));
        assert_eq!(v.render(), "");
        assert_eq!(v.to_json_string(), r#"{"id":"x","type":"lineNumber"}"#);
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let v = cell(ValueText {
            content: "hi".into(),
        });
        assert_eq!(
            v.to_json_string(),
            r#"{"id":"20240101000000-aaaaaaa","keyID":"20240101000000-kkkkkkk","blockID":"20240101000000-bbbbbbb","type":"text","text":{"content":"hi"}}"#
        );

        let detached = Value::new("", "", "", ValueData::Select(Vec::new())).with_detached(true);
        assert_eq!(detached.to_json_string(), r#"{"type":"select","isDetached":true}"#);
    }

    #[test]
    fn test_json_select_shares_key() {
        let v = cell(ValueData::Select(vec![ValueSelect::new("A", "3")]));
        let json = v.to_json_string();
        assert!(json.contains(r#""type":"select""#));
        assert!(json.contains(r#""mSelect":[{"content":"A","color":"3"}]"#));
        assert_eq!(Value::from_json(&json).unwrap(), v);
    }

    #[test]
    fn test_json_decode_relation_with_nulls() {
        let v = Value::from_json(
            r#"{"id":"r","type":"relation","relation":{"contents":null,"blockIDs":null}}"#,
        )
        .unwrap();
        assert_eq!(v.data, ValueData::Relation(Some(ValueRelation::default())));
        assert_eq!(v.render(), "");
    }

    #[test]
    fn test_json_ignores_mismatched_payload() {
        let v = Value::from_json(r#"{"type":"number","text":{"content":"oops"}}"#).unwrap();
        assert_eq!(v.data, ValueData::Number(None));
        assert_eq!(v.render(), "");
    }

    #[test]
    fn test_json_rejects_malformed() {
        assert!(Value::from_json("{").is_err());
        assert!(Value::from_json(r#"{"type":"number","number":"12"}"#).is_err());
    }

    #[test]
    fn test_json_of_non_finite_number_is_empty() {
        for content in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(cell(ValueNumber::new(content)).to_json_string(), "");
        }

        let json = cell(ValueNumber::new(-0.0)).to_json_string();
        assert!(json.contains(r#""content":-0,"#), "{json}");
        assert_eq!(Value::from_json(&json).unwrap().render(), "-0");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = cell(ValueRollup::new(["1", "2"]));
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.rollup_mut().unwrap().contents.push("3".into());
        assert_eq!(original.render(), "1 2");
        assert_eq!(copy.render(), "1 2 3");
    }
}
