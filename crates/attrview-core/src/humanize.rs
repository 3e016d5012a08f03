//! Relative-time phrases for duration-formatted timestamps

use chrono::{DateTime, Utc};

use crate::config::Lang;

/// Renders the span between two instants as a human-readable phrase
pub trait Humanizer: Send + Sync {
    /// Phrase for the distance between `from` and `to`; symmetric in its arguments
    fn humanize(&self, from: DateTime<Utc>, to: DateTime<Utc>, lang: Lang) -> String;
}

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;
const LONG_TIME: i64 = 37 * YEAR;

/// One row of a magnitude table: spans shorter than `below` use `phrase`,
/// with `%d` replaced by the span divided by `unit`
struct Magnitude {
    below: i64,
    phrase: &'static str,
    unit: i64,
}

const fn mag(below: i64, phrase: &'static str, unit: i64) -> Magnitude {
    Magnitude {
        below,
        phrase,
        unit,
    }
}

const ENGLISH: [Magnitude; 17] = [
    mag(SECOND, "now", SECOND),
    mag(2 * SECOND, "1 second", 1),
    mag(MINUTE, "%d seconds", SECOND),
    mag(2 * MINUTE, "1 minute", 1),
    mag(HOUR, "%d minutes", MINUTE),
    mag(2 * HOUR, "1 hour", 1),
    mag(DAY, "%d hours", HOUR),
    mag(2 * DAY, "1 day", 1),
    mag(WEEK, "%d days", DAY),
    mag(2 * WEEK, "1 week", 1),
    mag(MONTH, "%d weeks", WEEK),
    mag(2 * MONTH, "1 month", 1),
    mag(YEAR, "%d months", MONTH),
    mag(18 * MONTH, "1 year", 1),
    mag(2 * YEAR, "2 years", 1),
    mag(LONG_TIME, "%d years", YEAR),
    mag(i64::MAX, "a long while", 1),
];

const CHINESE: [Magnitude; 17] = [
    mag(SECOND, "刚刚", SECOND),
    mag(2 * SECOND, "1 秒", 1),
    mag(MINUTE, "%d 秒", SECOND),
    mag(2 * MINUTE, "1 分钟", 1),
    mag(HOUR, "%d 分钟", MINUTE),
    mag(2 * HOUR, "1 小时", 1),
    mag(DAY, "%d 小时", HOUR),
    mag(2 * DAY, "1 天", 1),
    mag(WEEK, "%d 天", DAY),
    mag(2 * WEEK, "1 周", 1),
    mag(MONTH, "%d 周", WEEK),
    mag(2 * MONTH, "1 个月", 1),
    mag(YEAR, "%d 个月", MONTH),
    mag(18 * MONTH, "1 年", 1),
    mag(2 * YEAR, "2 年", 1),
    mag(LONG_TIME, "%d 年", YEAR),
    mag(i64::MAX, "很久", 1),
];

/// Built-in humanizer with English and Chinese magnitude tables
#[derive(Debug, Clone, Copy, Default)]
pub struct RelTimeHumanizer;

impl RelTimeHumanizer {
    fn table(lang: Lang) -> &'static [Magnitude] {
        match lang {
            Lang::English => &ENGLISH,
            Lang::Chinese => &CHINESE,
        }
    }
}

impl Humanizer for RelTimeHumanizer {
    fn humanize(&self, from: DateTime<Utc>, to: DateTime<Utc>, lang: Lang) -> String {
        let span = (to - from).num_milliseconds().saturating_abs();
        let table = Self::table(lang);
        let idx = table
            .partition_point(|m| m.below <= span)
            .min(table.len() - 1);
        let m = &table[idx];
        m.phrase.replace("%d", &(span / m.unit).to_string())
    }
}
