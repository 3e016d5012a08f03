//! Cell kind discriminators

use std::fmt;

/// The kind of an attribute view column, and therefore of its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Block,
    Text,
    Number,
    Date,
    Select,
    MultiSelect,
    Url,
    Email,
    Phone,
    MultiAsset,
    Template,
    Created,
    Updated,
    Checkbox,
    Relation,
    Rollup,
}

impl KeyType {
    pub const ALL: [KeyType; 16] = [
        KeyType::Block,
        KeyType::Text,
        KeyType::Number,
        KeyType::Date,
        KeyType::Select,
        KeyType::MultiSelect,
        KeyType::Url,
        KeyType::Email,
        KeyType::Phone,
        KeyType::MultiAsset,
        KeyType::Template,
        KeyType::Created,
        KeyType::Updated,
        KeyType::Checkbox,
        KeyType::Relation,
        KeyType::Rollup,
    ];

    /// The persisted `type` string
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Block => "block",
            KeyType::Text => "text",
            KeyType::Number => "number",
            KeyType::Date => "date",
            KeyType::Select => "select",
            KeyType::MultiSelect => "mSelect",
            KeyType::Url => "url",
            KeyType::Email => "email",
            KeyType::Phone => "phone",
            KeyType::MultiAsset => "mAsset",
            KeyType::Template => "template",
            KeyType::Created => "created",
            KeyType::Updated => "updated",
            KeyType::Checkbox => "checkbox",
            KeyType::Relation => "relation",
            KeyType::Rollup => "rollup",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }

    /// JSON key under which this kind's payload is stored
    ///
    /// Single and multi select share `mSelect`.
    pub fn payload_key(&self) -> &'static str {
        match self {
            KeyType::Select => "mSelect",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_type_strings() {
        for kind in KeyType::ALL {
            assert_eq!(KeyType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(KeyType::parse("lineNumber"), None);
        assert_eq!(KeyType::Select.payload_key(), "mSelect");
        assert_eq!(KeyType::MultiAsset.payload_key(), "mAsset");
    }
}
