//! # attrview-rollup
//!
//! Rollup aggregation for attribute views.
//!
//! A rollup column shows a statistic over the cells of related rows. The
//! caller gathers those cells' rendered strings (see [`collect_rendered`]) and
//! reduces them with a [`CalcOperator`].
//!
//! ## Example
//!
//! ```rust
//! use attrview_core::ValueRollup;
//! use attrview_rollup::{CalcOperator, RollupCalc, RollupExt};
//!
//! let mut rollup = ValueRollup::new(["3", "1", "2"]);
//! rollup.render_contents(Some(&RollupCalc::new(CalcOperator::Median)));
//! assert_eq!(rollup.contents, vec!["2"]);
//! ```

pub mod calc;
pub mod error;
pub mod operator;

pub use calc::{aggregate, collect_rendered, RollupExt};
pub use error::{RollupError, RollupResult};
pub use operator::{CalcOperator, RollupCalc};
