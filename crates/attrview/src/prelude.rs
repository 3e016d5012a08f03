//! Prelude module - common imports for attrview users
//!
//! ```rust
//! use attrview::prelude::*;
//! ```

pub use crate::{
    // Rollup types
    CalcOperator,
    DateFormat,
    // Configuration
    FormatContext,
    KeyType,
    Lang,
    NumberFormat,
    RollupCalc,
    // Extension traits
    RollupCalculationExt,
    RollupExt,
    TimeZoneSetting,
    // Cell types
    Value,
    ValueAsset,
    ValueBlock,
    ValueCheckbox,
    ValueCreated,
    ValueData,
    ValueDate,
    ValueNumber,
    ValueRelation,
    ValueRollup,
    ValueSelect,
    ValueText,
    ValueUpdated,
};
