//! # attrview
//!
//! Rendering and rollup aggregation for attribute view cells.
//!
//! An attribute view is a database-like table inside a document. Each cell
//! holds one of sixteen kinds of typed value; this crate turns them into
//! display strings and computes rollup statistics over related rows.
//!
//! ## Features
//!
//! - Typed cell model with a JSON shape compatible with stored tables
//! - Number formats: plain, grouped, percent and ten currencies
//! - Dates, created and updated times, ranges and humanized durations
//! - Sixteen rollup operators (counts, percentages, sum, average, median, ...)
//!
//! ## Example
//!
//! ```rust
//! use attrview::prelude::*;
//!
//! let json = r#"{"id":"v1","type":"number","number":{"content":0.4567,"isNotEmpty":true,"format":"percent","formattedContent":"45.67%"}}"#;
//! let value = Value::from_json(json).unwrap();
//! assert_eq!(value.render(), "45.67%");
//! ```

pub mod calculation;
pub mod prelude;

use std::path::Path;

use serde::Deserialize;

// Re-export calculation types
pub use calculation::RollupCalculationExt;

// Re-export core types
pub use attrview_core::{
    date::format_timestamps,
    format_float,
    format_number,
    format_number_with,
    round,
    round_down,
    round_up,
    AssetType,
    CldrFormatter,
    CreatedFormat,
    DateFormat,
    // Error types
    Error,
    // Configuration
    FormatContext,
    Grouping,
    Humanizer,
    KeyType,
    Lang,
    Locale,
    LocaleFormatter,
    NumberFormat,
    NumberSymbols,
    RelTimeHumanizer,
    Result,
    TimeZoneSetting,
    UpdatedFormat,
    // Cell types
    Value,
    ValueAsset,
    ValueBlock,
    ValueCheckbox,
    ValueCreated,
    ValueData,
    ValueDate,
    ValueEmail,
    ValueNumber,
    ValuePhone,
    ValueRelation,
    ValueRollup,
    ValueSelect,
    ValueTemplate,
    ValueText,
    ValueUpdated,
    ValueUrl,
    // Constants
    CHECKED_MARK,
    RANGE_SEPARATOR,
};

// Re-export rollup types
pub use attrview_rollup::{
    aggregate, collect_rendered, CalcOperator, RollupCalc, RollupError, RollupExt, RollupResult,
};

/// A JSON document holding one value or a list of values
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueDocument {
    Many(Vec<Value>),
    One(Value),
}

/// Parse one value or an array of values
pub fn parse_values(json: &str) -> Result<Vec<Value>> {
    let doc: ValueDocument = serde_json::from_str(json).map_err(Error::from)?;
    Ok(match doc {
        ValueDocument::Many(values) => values,
        ValueDocument::One(value) => vec![value],
    })
}

/// Read values from a JSON file holding one value or an array of values
pub fn read_values<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| Error::other(format!("Failed to read {}: {e}", path.display())))?;
    parse_values(&json)
}
