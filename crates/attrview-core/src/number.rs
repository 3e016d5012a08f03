//! Number cells and number formats

use serde::{ser::Error as _, Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::config::FormatContext;
use crate::locale::{CldrFormatter, Locale, LocaleFormatter};

/// Display format of a number cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// Plain decimal with no grouping
    #[default]
    None,
    /// English thousands grouping: 1,234.5
    Commas,
    /// Amount times 100 with a percent sign: 45.67%
    Percent,
    UsDollar,
    Yuan,
    Euro,
    Pound,
    Yen,
    Ruble,
    Rupee,
    Won,
    CanadianDollar,
    Franc,
}

/// How a currency format renders its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// Prefix written before the localized amount
    pub symbol: &'static str,
    /// Locale whose grouping and decimal point are used
    pub locale: Locale,
    /// Fractional digits
    pub precision: usize,
}

impl NumberFormat {
    /// All formats, in declaration order
    pub const ALL: [NumberFormat; 13] = [
        NumberFormat::None,
        NumberFormat::Commas,
        NumberFormat::Percent,
        NumberFormat::UsDollar,
        NumberFormat::Yuan,
        NumberFormat::Euro,
        NumberFormat::Pound,
        NumberFormat::Yen,
        NumberFormat::Ruble,
        NumberFormat::Rupee,
        NumberFormat::Won,
        NumberFormat::CanadianDollar,
        NumberFormat::Franc,
    ];

    /// The persisted string for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberFormat::None => "",
            NumberFormat::Commas => "commas",
            NumberFormat::Percent => "percent",
            NumberFormat::UsDollar => "usDollar",
            NumberFormat::Yuan => "yuan",
            NumberFormat::Euro => "euro",
            NumberFormat::Pound => "pound",
            NumberFormat::Yen => "yen",
            NumberFormat::Ruble => "ruble",
            NumberFormat::Rupee => "rupee",
            NumberFormat::Won => "won",
            NumberFormat::CanadianDollar => "canadianDollar",
            NumberFormat::Franc => "franc",
        }
    }

    /// Parse a persisted format string
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == s)
    }

    /// Parse a persisted format string, treating unknown formats as [`NumberFormat::None`]
    pub fn from_wire(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::debug!("unknown number format {s:?}, rendering as plain number");
            NumberFormat::None
        })
    }

    /// Currency rendering rules, if this is a currency format
    pub fn currency(&self) -> Option<Currency> {
        let (symbol, locale, precision) = match self {
            NumberFormat::UsDollar => ("$", Locale::English, 2),
            NumberFormat::Yuan => ("CN¥", Locale::Chinese, 2),
            NumberFormat::Euro => ("€", Locale::German, 2),
            NumberFormat::Pound => ("£", Locale::English, 2),
            NumberFormat::Yen => ("¥", Locale::Japanese, 0),
            NumberFormat::Ruble => ("₽", Locale::Russian, 2),
            NumberFormat::Rupee => ("₹", Locale::Hindi, 2),
            NumberFormat::Won => ("₩", Locale::Korean, 0),
            NumberFormat::CanadianDollar => ("CA$", Locale::English, 2),
            NumberFormat::Franc => ("CHF", Locale::French, 2),
            NumberFormat::None | NumberFormat::Commas | NumberFormat::Percent => return None,
        };
        Some(Currency {
            symbol,
            locale,
            precision,
        })
    }
}

wire_string_enum!(NumberFormat);

/// Payload of a number cell
///
/// `formatted_content` caches the rendered string. It is not refreshed
/// automatically: after changing `content` or `format`, call
/// [`ValueNumber::format_number`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueNumber {
    #[serde(serialize_with = "serialize_json_number")]
    pub content: f64,
    pub is_not_empty: bool,
    pub format: NumberFormat,
    pub formatted_content: String,
}

impl ValueNumber {
    /// Create a plain (unformatted) number
    pub fn new(content: f64) -> Self {
        Self::new_formatted(content, NumberFormat::None)
    }

    /// Create a number rendered with `format`
    pub fn new_formatted(content: f64, format: NumberFormat) -> Self {
        Self::build(content, format, &CldrFormatter)
    }

    /// Create a number rendered with `format`, using the context's locale formatter
    pub fn new_formatted_with(content: f64, format: NumberFormat, ctx: &FormatContext) -> Self {
        Self::build(content, format, ctx.locale_formatter.as_ref())
    }

    fn build(content: f64, format: NumberFormat, formatter: &dyn LocaleFormatter) -> Self {
        let formatted_content = match format {
            // At most five decimals when first entered
            NumberFormat::None => trim_fraction(&fixed(content, 5)).to_string(),
            _ => format_number_with(content, format, formatter),
        };
        Self {
            content,
            is_not_empty: true,
            format,
            formatted_content,
        }
    }

    /// Recompute `formatted_content` from `content` and `format`
    pub fn format_number(&mut self) {
        self.formatted_content = format_number(self.content, self.format);
    }

    /// Recompute `formatted_content` using a custom locale formatter
    pub fn format_number_with(&mut self, formatter: &dyn LocaleFormatter) {
        self.formatted_content = format_number_with(self.content, self.format, formatter);
    }
}

/// Render `content` in `format` using the built-in [`CldrFormatter`]
pub fn format_number(content: f64, format: NumberFormat) -> String {
    format_number_with(content, format, &CldrFormatter)
}

/// Render `content` in `format`, delegating locale conventions to `formatter`
pub fn format_number_with(
    content: f64,
    format: NumberFormat,
    formatter: &dyn LocaleFormatter,
) -> String {
    match format {
        NumberFormat::None => format_float(content),
        NumberFormat::Commas => {
            let s = formatter.format_decimal(content, 6, Locale::English);
            trim_fraction(&s).to_string()
        }
        NumberFormat::Percent => format!("{}%", trim_fraction(&fixed(content * 100.0, 2))),
        _ => match format.currency() {
            Some(currency) => format!(
                "{}{}",
                currency.symbol,
                formatter.format_decimal(content, currency.precision, currency.locale)
            ),
            None => format_float(content),
        },
    }
}

/// Shortest decimal string that round-trips to `value`, never in exponent form
///
/// Non-finite values are written as `NaN`, `+Inf` and `-Inf`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        value.to_string()
    }
}

/// Fixed-precision decimal with the same non-finite spelling as [`format_float`]
fn fixed(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", precision, value)
    } else {
        format_float(value)
    }
}

/// Drop trailing zeros of a fraction, then a dangling decimal point
fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// JSON text of a finite number: plain decimal for magnitudes in
/// `[1e-6, 1e21)` (integral amounts without a fraction), exponent form
/// with a signed exponent outside it
fn json_number_text(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let abs = value.abs();
    if abs == 0.0 || (1e-6..1e21).contains(&abs) {
        // Display never uses exponent form and keeps the sign of -0
        return Some(value.to_string());
    }
    let text = format!("{value:e}");
    Some(match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    })
}

/// Write `content` in the persisted number spelling; non-finite amounts
/// have no JSON form and fail serialization
fn serialize_json_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let text = json_number_text(*value).ok_or_else(|| {
        S::Error::custom(format!("unsupported number value: {}", format_float(*value)))
    })?;
    let raw = RawValue::from_string(text).map_err(S::Error::custom)?;
    raw.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_plain_number() {
        assert_eq!(ValueNumber::new(42.0).formatted_content, "42");
        assert_eq!(ValueNumber::new(3.14).formatted_content, "3.14");
        assert_eq!(ValueNumber::new(0.0).formatted_content, "0");
        assert_eq!(ValueNumber::new(1.234567).formatted_content, "1.23457");
        assert!(ValueNumber::new(1.0).is_not_empty);
    }

    #[test]
    fn test_commas() {
        let n = ValueNumber::new_formatted(1234.5, NumberFormat::Commas);
        assert_eq!(n.formatted_content, "1,234.5");
        assert_eq!(format_number(1_000_000.0, NumberFormat::Commas), "1,000,000");
        assert_eq!(format_number(-9876.25, NumberFormat::Commas), "-9,876.25");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_number(0.4567, NumberFormat::Percent), "45.67%");
        assert_eq!(format_number(0.5, NumberFormat::Percent), "50%");
        assert_eq!(format_number(1.0, NumberFormat::Percent), "100%");
    }

    #[test]
    fn test_currencies() {
        assert_eq!(format_number(9.996, NumberFormat::UsDollar), "$10.00");
        assert_eq!(format_number(1234.5, NumberFormat::UsDollar), "$1,234.50");
        assert_eq!(format_number(1234.5, NumberFormat::Yuan), "CN¥1,234.50");
        assert_eq!(format_number(1234.5, NumberFormat::Euro), "€1.234,50");
        assert_eq!(format_number(1234.5, NumberFormat::Pound), "£1,234.50");
        assert_eq!(format_number(1234.4, NumberFormat::Yen), "¥1,234");
        assert_eq!(format_number(1234.5, NumberFormat::Ruble), "₽1\u{a0}234,50");
        assert_eq!(format_number(123456.0, NumberFormat::Rupee), "₹1,23,456.00");
        assert_eq!(format_number(5000.0, NumberFormat::Won), "₩5,000");
        assert_eq!(format_number(12.0, NumberFormat::CanadianDollar), "CA$12.00");
        assert_eq!(format_number(1234.5, NumberFormat::Franc), "CHF1\u{202f}234,50");
        assert_eq!(format_number(-5.0, NumberFormat::UsDollar), "$-5.00");
    }

    #[test]
    fn test_refresh_after_mutation() {
        let mut n = ValueNumber::new_formatted(1.0, NumberFormat::UsDollar);
        n.content = 2.5;
        // The cache is stale until refreshed
        assert_eq!(n.formatted_content, "$1.00");
        n.format_number();
        assert_eq!(n.formatted_content, "$2.50");

        n.format = NumberFormat::None;
        n.content = 0.1 + 0.2;
        n.format_number();
        assert_eq!(n.formatted_content, "0.30000000000000004");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(3.0), "3");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(-0.125), "-0.125");
        assert_eq!(format_float(1e21), "1000000000000000000000");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn test_format_wire_strings() {
        for format in NumberFormat::ALL {
            assert_eq!(NumberFormat::parse(format.as_str()), Some(format));
        }
        assert_eq!(NumberFormat::from_wire("bitcoin"), NumberFormat::None);
    }

    #[test]
    fn test_json_shape() {
        let n = ValueNumber::new_formatted(1234.0, NumberFormat::Commas);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(
            json,
            r#"{"content":1234,"isNotEmpty":true,"format":"commas","formattedContent":"1,234"}"#
        );

        let back: ValueNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }

    fn content_json(content: f64) -> String {
        let json = serde_json::to_string(&ValueNumber::new(content)).unwrap();
        let start = json.find(':').unwrap() + 1;
        let end = json.find(",\"isNotEmpty\"").unwrap();
        json[start..end].to_string()
    }

    #[test]
    fn test_json_number_spelling() {
        assert_eq!(content_json(1e15), "1000000000000000");
        assert_eq!(content_json(1e18), "1000000000000000000");
        assert_eq!(content_json(123456789012345680000.0), "123456789012345680000");
        assert_eq!(content_json(-0.0), "-0");
        assert_eq!(content_json(0.000015), "0.000015");
        assert_eq!(content_json(2.5), "2.5");
        assert_eq!(content_json(1e21), "1e+21");
        assert_eq!(content_json(1e-7), "1e-7");
        assert_eq!(content_json(-1.5e300), "-1.5e+300");
    }

    #[test]
    fn test_non_finite_content_is_not_serializable() {
        for content in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(serde_json::to_string(&ValueNumber::new(content)).is_err());
        }
    }

    /// Tags every amount with the locale it was asked to format for
    struct TaggingFormatter;

    impl LocaleFormatter for TaggingFormatter {
        fn format_decimal(&self, amount: f64, precision: usize, locale: Locale) -> String {
            format!("{amount:.precision$}@{}", locale.tag())
        }
    }

    #[test]
    fn test_context_locale_formatter() {
        let ctx = FormatContext::new(
            crate::config::Lang::English,
            crate::config::TimeZoneSetting::Utc,
        )
        .with_locale_formatter(std::sync::Arc::new(TaggingFormatter));

        let euro = ValueNumber::new_formatted_with(12.25, NumberFormat::Euro, &ctx);
        assert_eq!(euro.formatted_content, "€12.25@de");

        let yen = ValueNumber::new_formatted_with(12.4, NumberFormat::Yen, &ctx);
        assert_eq!(yen.formatted_content, "¥12@ja");

        let plain = ValueNumber::new_formatted_with(12.5, NumberFormat::None, &ctx);
        assert_eq!(plain.formatted_content, "12.5");
    }
}
