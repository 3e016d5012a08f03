//! Persisted JSON shape of a [`Value`]
//!
//! The stored form is a flat object with the discriminator in `type` and one
//! optional field per payload kind. [`Value`] converts to and from it so the
//! in-memory model can be a sum type while the JSON stays field-for-field
//! compatible.

use serde::{Deserialize, Serialize};

use super::payload::null_as_default;
use super::{
    KeyType, Value, ValueAsset, ValueBlock, ValueCheckbox, ValueData, ValueEmail, ValuePhone,
    ValueRelation, ValueRollup, ValueSelect, ValueTemplate, ValueText, ValueUrl,
};
use crate::date::{ValueCreated, ValueDate, ValueUpdated};
use crate::number::ValueNumber;

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ValueWire {
    #[serde(skip_serializing_if = "String::is_empty")]
    id: String,
    #[serde(rename = "keyID", skip_serializing_if = "String::is_empty")]
    key_id: String,
    #[serde(rename = "blockID", skip_serializing_if = "String::is_empty")]
    block_id: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    key_type: String,
    #[serde(skip_serializing_if = "is_false")]
    is_detached: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    block: Option<ValueBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<ValueText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<ValueNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<ValueDate>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    m_select: Vec<ValueSelect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<ValueUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<ValueEmail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<ValuePhone>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    m_asset: Vec<ValueAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<ValueTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<ValueCreated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<ValueUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checkbox: Option<ValueCheckbox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relation: Option<ValueRelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rollup: Option<ValueRollup>,
}

impl ValueWire {
    /// JSON keys of every payload present
    fn present_payloads(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        let mut push = |present: bool, key: &'static str| {
            if present {
                keys.push(key);
            }
        };
        push(self.block.is_some(), "block");
        push(self.text.is_some(), "text");
        push(self.number.is_some(), "number");
        push(self.date.is_some(), "date");
        push(!self.m_select.is_empty(), "mSelect");
        push(self.url.is_some(), "url");
        push(self.email.is_some(), "email");
        push(self.phone.is_some(), "phone");
        push(!self.m_asset.is_empty(), "mAsset");
        push(self.template.is_some(), "template");
        push(self.created.is_some(), "created");
        push(self.updated.is_some(), "updated");
        push(self.checkbox.is_some(), "checkbox");
        push(self.relation.is_some(), "relation");
        push(self.rollup.is_some(), "rollup");
        keys
    }
}

impl From<ValueWire> for Value {
    fn from(wire: ValueWire) -> Self {
        let kind = KeyType::parse(&wire.key_type);

        let stray: Vec<_> = wire
            .present_payloads()
            .into_iter()
            .filter(|key| kind.map_or(true, |k| k.payload_key() != *key))
            .collect();
        if !stray.is_empty() {
            log::debug!(
                "value {:?} of type {:?} carries payloads {:?} that do not match its type",
                wire.id,
                wire.key_type,
                stray
            );
        }

        let data = match kind {
            Some(KeyType::Block) => ValueData::Block(wire.block),
            Some(KeyType::Text) => ValueData::Text(wire.text),
            Some(KeyType::Number) => ValueData::Number(wire.number),
            Some(KeyType::Date) => ValueData::Date(wire.date),
            Some(KeyType::Select) => ValueData::Select(wire.m_select),
            Some(KeyType::MultiSelect) => ValueData::MultiSelect(wire.m_select),
            Some(KeyType::Url) => ValueData::Url(wire.url),
            Some(KeyType::Email) => ValueData::Email(wire.email),
            Some(KeyType::Phone) => ValueData::Phone(wire.phone),
            Some(KeyType::MultiAsset) => ValueData::MultiAsset(wire.m_asset),
            Some(KeyType::Template) => ValueData::Template(wire.template),
            Some(KeyType::Created) => ValueData::Created(wire.created),
            Some(KeyType::Updated) => ValueData::Updated(wire.updated),
            Some(KeyType::Checkbox) => ValueData::Checkbox(wire.checkbox),
            Some(KeyType::Relation) => ValueData::Relation(wire.relation),
            Some(KeyType::Rollup) => ValueData::Rollup(wire.rollup),
            None => ValueData::Unsupported(wire.key_type),
        };

        Value {
            id: wire.id,
            key_id: wire.key_id,
            block_id: wire.block_id,
            is_detached: wire.is_detached,
            data,
        }
    }
}

impl From<Value> for ValueWire {
    fn from(value: Value) -> Self {
        let mut wire = ValueWire {
            id: value.id,
            key_id: value.key_id,
            block_id: value.block_id,
            key_type: value.data.type_name().to_string(),
            is_detached: value.is_detached,
            ..Default::default()
        };

        match value.data {
            ValueData::Block(p) => wire.block = p,
            ValueData::Text(p) => wire.text = p,
            ValueData::Number(p) => wire.number = p,
            ValueData::Date(p) => wire.date = p,
            ValueData::Select(list) | ValueData::MultiSelect(list) => wire.m_select = list,
            ValueData::Url(p) => wire.url = p,
            ValueData::Email(p) => wire.email = p,
            ValueData::Phone(p) => wire.phone = p,
            ValueData::MultiAsset(list) => wire.m_asset = list,
            ValueData::Template(p) => wire.template = p,
            ValueData::Created(p) => wire.created = p,
            ValueData::Updated(p) => wire.updated = p,
            ValueData::Checkbox(p) => wire.checkbox = p,
            ValueData::Relation(p) => wire.relation = p,
            ValueData::Rollup(p) => wire.rollup = p,
            ValueData::Unsupported(_) => {}
        }
        wire
    }
}
