//! Rollup operators

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RollupError, RollupResult};

/// Statistic a rollup column computes over its related cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalcOperator {
    /// Show the related values as they are
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "Count all")]
    CountAll,
    #[serde(rename = "Count values")]
    CountValues,
    #[serde(rename = "Count unique values")]
    CountUniqueValues,
    #[serde(rename = "Count empty")]
    CountEmpty,
    #[serde(rename = "Count not empty")]
    CountNotEmpty,
    #[serde(rename = "Percent empty")]
    PercentEmpty,
    #[serde(rename = "Percent not empty")]
    PercentNotEmpty,
    #[serde(rename = "Sum")]
    Sum,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Median")]
    Median,
    #[serde(rename = "Min")]
    Min,
    #[serde(rename = "Max")]
    Max,
    #[serde(rename = "Range")]
    Range,
    #[serde(rename = "Checked")]
    Checked,
    #[serde(rename = "Unchecked")]
    Unchecked,
    #[serde(rename = "Percent checked")]
    PercentChecked,
    #[serde(rename = "Percent unchecked")]
    PercentUnchecked,
}

impl CalcOperator {
    pub const ALL: [CalcOperator; 18] = [
        CalcOperator::None,
        CalcOperator::CountAll,
        CalcOperator::CountValues,
        CalcOperator::CountUniqueValues,
        CalcOperator::CountEmpty,
        CalcOperator::CountNotEmpty,
        CalcOperator::PercentEmpty,
        CalcOperator::PercentNotEmpty,
        CalcOperator::Sum,
        CalcOperator::Average,
        CalcOperator::Median,
        CalcOperator::Min,
        CalcOperator::Max,
        CalcOperator::Range,
        CalcOperator::Checked,
        CalcOperator::Unchecked,
        CalcOperator::PercentChecked,
        CalcOperator::PercentUnchecked,
    ];

    /// The persisted operator name
    pub fn as_str(&self) -> &'static str {
        match self {
            CalcOperator::None => "",
            CalcOperator::CountAll => "Count all",
            CalcOperator::CountValues => "Count values",
            CalcOperator::CountUniqueValues => "Count unique values",
            CalcOperator::CountEmpty => "Count empty",
            CalcOperator::CountNotEmpty => "Count not empty",
            CalcOperator::PercentEmpty => "Percent empty",
            CalcOperator::PercentNotEmpty => "Percent not empty",
            CalcOperator::Sum => "Sum",
            CalcOperator::Average => "Average",
            CalcOperator::Median => "Median",
            CalcOperator::Min => "Min",
            CalcOperator::Max => "Max",
            CalcOperator::Range => "Range",
            CalcOperator::Checked => "Checked",
            CalcOperator::Unchecked => "Unchecked",
            CalcOperator::PercentChecked => "Percent checked",
            CalcOperator::PercentUnchecked => "Percent unchecked",
        }
    }

    /// Whether the result is a percentage of all related cells
    pub fn is_percent(&self) -> bool {
        matches!(
            self,
            CalcOperator::PercentEmpty
                | CalcOperator::PercentNotEmpty
                | CalcOperator::PercentChecked
                | CalcOperator::PercentUnchecked
        )
    }
}

/// Lowercase with spaces, dashes and underscores removed
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for CalcOperator {
    type Err = RollupError;

    /// Accepts the persisted name ("Count all") as well as spellings such as
    /// `count-all`, `countAll` and `none`.
    fn from_str(s: &str) -> RollupResult<Self> {
        let wanted = normalize(s);
        if wanted == "none" {
            return Ok(CalcOperator::None);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|op| normalize(op.as_str()) == wanted)
            .ok_or_else(|| RollupError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for CalcOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rollup configuration of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RollupCalc {
    pub operator: CalcOperator,
}

impl RollupCalc {
    pub fn new(operator: CalcOperator) -> Self {
        Self { operator }
    }
}

impl From<CalcOperator> for RollupCalc {
    fn from(operator: CalcOperator) -> Self {
        Self::new(operator)
    }
}
