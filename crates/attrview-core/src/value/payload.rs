//! Payload types of the non-numeric, non-temporal cell kinds

use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot of the block a primary-key cell points at
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueBlock {
    pub id: String,
    pub content: String,
    pub created: i64,
    pub updated: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueText {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueUrl {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueEmail {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuePhone {
    pub content: String,
}

/// Output of a template column, evaluated elsewhere
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueTemplate {
    pub content: String,
}

/// One option of a select or multi-select cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueSelect {
    pub content: String,
    pub color: String,
}

impl ValueSelect {
    pub fn new<C: Into<String>, K: Into<String>>(content: C, color: K) -> Self {
        Self {
            content: content.into(),
            color: color.into(),
        }
    }
}

/// Kind of an asset attached to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssetType {
    #[default]
    File,
    Image,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::File => "file",
            AssetType::Image => "image",
        }
    }

    /// Unknown asset types are treated as plain files
    pub fn from_wire(s: &str) -> Self {
        match s {
            "image" => AssetType::Image,
            "file" => AssetType::File,
            other => {
                log::debug!("unknown asset type {other:?}, treating as file");
                AssetType::File
            }
        }
    }
}

wire_string_enum!(AssetType);

/// A file or image attached to an asset cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueAsset {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub name: String,
    pub content: String,
}

impl ValueAsset {
    pub fn new<N, C>(asset_type: AssetType, name: N, content: C) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            asset_type,
            name: name.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueCheckbox {
    pub checked: bool,
}

/// Links to rows of another table
///
/// `contents` and `block_ids` are parallel: entry `i` of `contents` is the
/// rendered primary key of the row `block_ids[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueRelation {
    #[serde(deserialize_with = "null_as_default")]
    pub contents: Vec<String>,
    #[serde(rename = "blockIDs", deserialize_with = "null_as_default")]
    pub block_ids: Vec<String>,
}

impl ValueRelation {
    /// Pairs of (block id, rendered content)
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.block_ids
            .iter()
            .map(String::as_str)
            .zip(self.contents.iter().map(String::as_str))
    }
}

/// Rendered values gathered from related cells
///
/// Before aggregation `contents` holds one entry per related cell; an
/// aggregating operator collapses it to a single summary entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueRollup {
    #[serde(deserialize_with = "null_as_default")]
    pub contents: Vec<String>,
}

impl ValueRollup {
    pub fn new<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            contents: contents.into_iter().map(Into::into).collect(),
        }
    }
}

/// Persisted lists may be `null`; read them as empty
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
