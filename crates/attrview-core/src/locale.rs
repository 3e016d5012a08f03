//! Locale-aware decimal formatting
//!
//! Currency rendering needs the grouping and decimal conventions of the
//! currency's home locale. That lookup is kept behind [`LocaleFormatter`] so
//! an application can plug in a full CLDR implementation; [`CldrFormatter`]
//! carries the conventions for the locales the built-in number formats use.

use std::fmt;

/// Locales referenced by the built-in number formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    Chinese,
    German,
    Japanese,
    Russian,
    Hindi,
    Korean,
    French,
}

impl Locale {
    /// BCP 47 language tag
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Chinese => "zh",
            Locale::German => "de",
            Locale::Japanese => "ja",
            Locale::Russian => "ru",
            Locale::Hindi => "hi",
            Locale::Korean => "ko",
            Locale::French => "fr",
        }
    }

    /// Number symbols used when formatting in this locale
    pub fn symbols(&self) -> NumberSymbols {
        match self {
            Locale::English | Locale::Chinese | Locale::Japanese | Locale::Korean => {
                NumberSymbols::new(".", ",", Grouping::Thousands)
            }
            Locale::German => NumberSymbols::new(",", ".", Grouping::Thousands),
            Locale::Russian => NumberSymbols::new(",", "\u{a0}", Grouping::Thousands),
            Locale::French => NumberSymbols::new(",", "\u{202f}", Grouping::Thousands),
            Locale::Hindi => NumberSymbols::new(".", ",", Grouping::Indian),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// How integer digits are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// Groups of three: 1,234,567
    Thousands,
    /// Last three digits, then groups of two: 12,34,567
    Indian,
}

/// Decimal point, group separator and grouping style of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: &'static str,
    pub group: &'static str,
    pub grouping: Grouping,
}

impl NumberSymbols {
    pub const fn new(decimal: &'static str, group: &'static str, grouping: Grouping) -> Self {
        Self {
            decimal,
            group,
            grouping,
        }
    }
}

/// Formats a decimal amount according to a locale's conventions
pub trait LocaleFormatter: Send + Sync {
    /// Format `amount` with exactly `precision` fractional digits, grouped
    /// and punctuated for `locale`. Non-finite amounts are written as
    /// `NaN`, `+Inf` or `-Inf`.
    fn format_decimal(&self, amount: f64, precision: usize, locale: Locale) -> String;
}

/// Built-in formatter using the CLDR default conventions of each [`Locale`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrFormatter;

impl LocaleFormatter for CldrFormatter {
    fn format_decimal(&self, amount: f64, precision: usize, locale: Locale) -> String {
        if !amount.is_finite() {
            return crate::number::format_float(amount);
        }

        let symbols = locale.symbols();
        let fixed = format!("{:.*}", precision, amount.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + 8);
        if amount < 0.0 {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, symbols.group, symbols.grouping));
        if let Some(frac) = frac_part {
            out.push_str(symbols.decimal);
            out.push_str(frac);
        }
        out
    }
}

/// Insert group separators into a run of ASCII digits
fn group_digits(digits: &str, separator: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    // Positions (counted from the right) where a separator precedes the digit
    let is_boundary = |from_right: usize| match grouping {
        Grouping::Thousands => from_right % 3 == 0,
        Grouping::Indian => from_right == 3 || (from_right > 3 && (from_right - 3) % 2 == 0),
    };

    let mut out = String::with_capacity(len + len / 2 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        let from_right = len - i;
        if i > 0 && is_boundary(from_right) {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}
