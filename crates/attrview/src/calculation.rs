//! Rollup calculation on cells
//!
//! Fills a rollup cell from the cells of its related rows and reduces the
//! result with the column's operator.
//!
//! # Example
//!
//! ```rust
//! use attrview::prelude::*;
//!
//! let related = vec![
//!     Value::new("a", "price", "row-1", ValueNumber::new(10.0)),
//!     Value::new("b", "price", "row-2", ValueNumber::new(32.5)),
//! ];
//!
//! let mut total = Value::new("c", "total", "row-0", ValueData::Rollup(None));
//! total.calculate_rollup(&related, Some(&RollupCalc::new(CalcOperator::Sum)));
//! assert_eq!(total.render(), "42.5");
//! ```

use crate::{collect_rendered, RollupCalc, RollupExt, Value, ValueData, ValueRollup};

/// Extension trait for computing rollup cells
pub trait RollupCalculationExt {
    /// Replace this rollup cell's contents with the aggregate of `related`
    ///
    /// Returns `false` (and leaves the cell alone) if the cell is not a rollup.
    fn calculate_rollup(&mut self, related: &[Value], calc: Option<&RollupCalc>) -> bool;
}

impl RollupCalculationExt for Value {
    fn calculate_rollup(&mut self, related: &[Value], calc: Option<&RollupCalc>) -> bool {
        if !matches!(self.data, ValueData::Rollup(_)) {
            log::debug!(
                "value {:?} has type {:?}, not a rollup",
                self.id,
                self.data.type_name()
            );
            return false;
        }

        let mut rollup: ValueRollup = collect_rendered(related);
        rollup.render_contents(calc);
        self.data = ValueData::Rollup(Some(rollup));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalcOperator, ValueCheckbox, ValueText};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_checked_rollup() {
        let related: Vec<Value> = [true, false, true]
            .into_iter()
            .enumerate()
            .map(|(i, checked)| {
                Value::new(format!("c{i}"), "done", format!("r{i}"), ValueCheckbox { checked })
            })
            .collect();

        let mut cell = Value::new("x", "progress", "row", ValueData::Rollup(None));
        let calc = RollupCalc::new(CalcOperator::PercentChecked);
        assert!(cell.calculate_rollup(&related, Some(&calc)));
        assert_eq!(cell.render(), "66%");
    }

    #[test]
    fn test_without_operator_lists_values() {
        let related = vec![
            Value::new("1", "k", "r1", ValueText { content: "a".into() }),
            Value::new("2", "k", "r2", ValueText { content: "b".into() }),
        ];
        let mut cell = Value::new("x", "k2", "row", ValueData::Rollup(None));
        cell.calculate_rollup(&related, None);
        assert_eq!(cell.render(), "a b");
    }

    #[test]
    fn test_non_rollup_is_untouched() {
        let mut cell = Value::new("x", "k", "row", ValueText { content: "keep".into() });
        let before = cell.clone();
        assert!(!cell.calculate_rollup(&[], Some(&RollupCalc::new(CalcOperator::CountAll))));
        assert_eq!(cell, before);
    }
}
