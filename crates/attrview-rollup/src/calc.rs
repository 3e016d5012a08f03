//! Rollup aggregation
//!
//! Related cells arrive as their rendered strings, so numeric operators
//! re-parse them and checkbox operators compare against the checked mark.
//! Strings that do not parse as numbers count as 0.
//!
//! When a statistic is undefined (an average or median over no numbers, a
//! percentage of no cells) the contents are left as they are.

use std::cmp::Ordering;
use std::collections::HashSet;

use attrview_core::{format_float, Value, ValueRollup, CHECKED_MARK};

use crate::operator::{CalcOperator, RollupCalc};

/// Summarize `contents` with `operator`
///
/// Returns the replacement contents (a single summary entry), or `None` when
/// the contents should stay unchanged.
pub fn aggregate<S: AsRef<str>>(contents: &[S], operator: CalcOperator) -> Option<Vec<String>> {
    let total = contents.len();
    let values = || contents.iter().map(as_str);
    let count = |pred: &dyn Fn(&str) -> bool| values().filter(|&v| pred(v)).count();

    let summary = match operator {
        CalcOperator::None => return None,
        CalcOperator::CountAll | CalcOperator::CountValues => total.to_string(),
        CalcOperator::CountUniqueValues => {
            let unique: HashSet<&str> = values().collect();
            unique.len().to_string()
        }
        CalcOperator::CountEmpty => count(&str::is_empty).to_string(),
        CalcOperator::CountNotEmpty => count(&|v: &str| !v.is_empty()).to_string(),
        CalcOperator::PercentEmpty => percent(count(&str::is_empty), total)?,
        CalcOperator::PercentNotEmpty => percent(count(&|v: &str| !v.is_empty()), total)?,
        CalcOperator::Sum => format_float(sum(numbers(values()))),
        CalcOperator::Average => {
            let numbers: Vec<f64> = numbers(values()).collect();
            if numbers.is_empty() {
                log::debug!("average over no numbers, leaving rollup unchanged");
                return None;
            }
            format_float(sum(numbers.iter().copied()) / numbers.len() as f64)
        }
        CalcOperator::Median => {
            let mut numbers: Vec<f64> = numbers(values()).collect();
            if numbers.is_empty() {
                return None;
            }
            numbers.sort_by(nan_first);
            let mid = numbers.len() / 2;
            let median = if numbers.len() % 2 == 0 {
                (numbers[mid - 1] + numbers[mid]) / 2.0
            } else {
                numbers[mid]
            };
            format_float(median)
        }
        CalcOperator::Min => format_float(numbers(values()).fold(f64::MAX, f64::min)),
        CalcOperator::Max => format_float(numbers(values()).fold(-f64::MAX, f64::max)),
        CalcOperator::Range => {
            let (min, max) = numbers(values())
                .fold((f64::MAX, -f64::MAX), |(lo, hi), n| (lo.min(n), hi.max(n)));
            format_float(max - min)
        }
        CalcOperator::Checked => count(&is_checked).to_string(),
        CalcOperator::Unchecked => count(&|v: &str| !is_checked(v)).to_string(),
        CalcOperator::PercentChecked => percent(count(&is_checked), total)?,
        CalcOperator::PercentUnchecked => percent(count(&|v: &str| !is_checked(v)), total)?,
    };

    Some(vec![summary])
}

fn as_str<S: AsRef<str>>(s: &S) -> &str {
    s.as_ref()
}

/// Ascending order with NaN ahead of every number
fn nan_first(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| b.is_nan().cmp(&a.is_nan()))
}

fn is_checked(v: &str) -> bool {
    v == CHECKED_MARK
}

/// Non-empty entries parsed as numbers; unparsable entries read as 0
fn numbers<'a, I>(values: I) -> impl Iterator<Item = f64> + 'a
where
    I: Iterator<Item = &'a str> + 'a,
{
    values.filter(|v| !v.is_empty()).map(|v| {
        v.parse::<f64>().unwrap_or_else(|_| {
            log::trace!("rollup value {v:?} is not a number, counting as 0");
            0.0
        })
    })
}

/// Sum starting from positive zero, so an empty sum renders as "0"
fn sum<I: Iterator<Item = f64>>(numbers: I) -> f64 {
    numbers.fold(0.0, |acc, n| acc + n)
}

/// Whole-number percentage, truncated; `None` when there is nothing to divide by
fn percent(part: usize, total: usize) -> Option<String> {
    if total == 0 {
        log::debug!("percentage over no cells, leaving rollup unchanged");
        return None;
    }
    Some(format!("{}%", part * 100 / total))
}

/// Aggregation on rollup payloads
pub trait RollupExt {
    /// Collapse the contents in place; a missing `calc` leaves them unchanged
    fn render_contents(&mut self, calc: Option<&RollupCalc>);

    /// The aggregated payload, leaving `self` untouched
    fn rendered_contents(&self, calc: Option<&RollupCalc>) -> ValueRollup;
}

impl RollupExt for ValueRollup {
    fn render_contents(&mut self, calc: Option<&RollupCalc>) {
        let Some(calc) = calc else {
            return;
        };
        if let Some(summary) = aggregate(&self.contents, calc.operator) {
            self.contents = summary;
        }
    }

    fn rendered_contents(&self, calc: Option<&RollupCalc>) -> ValueRollup {
        let contents = calc
            .and_then(|calc| aggregate(&self.contents, calc.operator))
            .unwrap_or_else(|| self.contents.clone());
        ValueRollup { contents }
    }
}

/// Gather the rendered strings of related cells into a rollup payload
pub fn collect_rendered<'a, I>(related: I) -> ValueRollup
where
    I: IntoIterator<Item = &'a Value>,
{
    ValueRollup {
        contents: related.into_iter().map(Value::render).collect(),
    }
}
