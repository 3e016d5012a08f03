//! # attrview-core
//!
//! Core data structures for attribute view (database table) cells.
//!
//! This crate provides:
//! - [`Value`] and [`ValueData`] - one cell and its typed payload
//! - [`ValueNumber`] and [`NumberFormat`] - numbers with currency/percent/comma rendering
//! - [`ValueDate`], [`ValueCreated`], [`ValueUpdated`] - timestamps, ranges and durations
//! - [`LocaleFormatter`] and [`Humanizer`] - the locale-dependent formatting seams
//! - [`round`], [`round_up`], [`round_down`] - precision helpers
//!
//! ## Example
//!
//! ```rust
//! use attrview_core::{NumberFormat, Value, ValueNumber};
//!
//! let number = ValueNumber::new_formatted(1234.5, NumberFormat::Commas);
//! let value = Value::new("cell", "column", "row", number);
//! assert_eq!(value.render(), "1,234.5");
//! ```

/// Implements `Serialize`/`Deserialize` for a string-valued enum through its
/// `as_str` and `from_wire` methods. Unknown strings decode leniently.
macro_rules! wire_string_enum {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(<$ty>::from_wire(&s))
            }
        }
    };
}

pub mod config;
pub mod date;
pub mod error;
pub mod humanize;
pub mod locale;
pub mod number;
pub mod round;
pub mod value;

// Re-exports for convenience
pub use config::{FormatContext, Lang, TimeZoneSetting};
pub use date::{
    CreatedFormat, DateFormat, UpdatedFormat, ValueCreated, ValueDate, ValueUpdated,
};
pub use error::{Error, Result};
pub use humanize::{Humanizer, RelTimeHumanizer};
pub use locale::{CldrFormatter, Grouping, Locale, LocaleFormatter, NumberSymbols};
pub use number::{format_float, format_number, format_number_with, NumberFormat, ValueNumber};
pub use round::{round, round_down, round_up};
pub use value::{
    AssetType, KeyType, Value, ValueAsset, ValueBlock, ValueCheckbox, ValueData, ValueEmail,
    ValuePhone, ValueRelation, ValueRollup, ValueSelect, ValueTemplate, ValueText, ValueUrl,
};

/// Rendered content of a checked checkbox cell
pub const CHECKED_MARK: &str = "√";

/// Separator between the start and end of a rendered time range
pub const RANGE_SEPARATOR: &str = " → ";
