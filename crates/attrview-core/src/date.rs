//! Date, created-time and updated-time cells
//!
//! All three kinds store millisecond Unix timestamps and cache their rendered
//! form. A second timestamp greater than zero turns the value into a range
//! (`start → end`); the duration format replaces the absolute rendering with
//! a humanized span between the two instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FormatContext;
use crate::RANGE_SEPARATOR;

const DATE_PATTERN: &str = "%Y-%m-%d";
const DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M";

/// Display format shared by date, created and updated cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// Absolute date (and time)
    #[default]
    None,
    /// Humanized span between the start and end timestamps
    Duration,
}

/// Display format of a created-time cell
pub type CreatedFormat = DateFormat;

/// Display format of an updated-time cell
pub type UpdatedFormat = DateFormat;

impl DateFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::None => "",
            DateFormat::Duration => "duration",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" => Some(DateFormat::None),
            "duration" => Some(DateFormat::Duration),
            _ => None,
        }
    }

    /// Parse a persisted format string, treating unknown formats as [`DateFormat::None`]
    pub fn from_wire(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::debug!("unknown date format {s:?}, rendering as absolute date");
            DateFormat::None
        })
    }
}

wire_string_enum!(DateFormat);

/// Payload of a date cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueDate {
    pub content: i64,
    pub is_not_empty: bool,
    pub has_end_date: bool,
    pub is_not_time: bool,
    pub content2: i64,
    pub is_not_empty2: bool,
    pub formatted_content: String,
}

impl ValueDate {
    /// Build a date value, rendering it with the default [`FormatContext`]
    pub fn new_formatted(
        content: i64,
        content2: i64,
        format: DateFormat,
        is_not_time: bool,
    ) -> Self {
        Self::new_formatted_with(content, content2, format, is_not_time, &FormatContext::default())
    }

    /// Build a date value, rendering it with `ctx`
    ///
    /// `is_not_time` only selects the rendering granularity. The returned
    /// value always has `has_end_date == false` and `is_not_time == true`.
    pub fn new_formatted_with(
        content: i64,
        content2: i64,
        format: DateFormat,
        is_not_time: bool,
        ctx: &FormatContext,
    ) -> Self {
        Self {
            content,
            content2,
            has_end_date: false,
            is_not_time: true,
            formatted_content: format_timestamps(content, content2, format, !is_not_time, ctx),
            ..Default::default()
        }
    }
}

/// Payload of a created-time cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueCreated {
    pub content: i64,
    pub is_not_empty: bool,
    pub content2: i64,
    pub is_not_empty2: bool,
    pub formatted_content: String,
}

impl ValueCreated {
    pub fn new_formatted(content: i64, content2: i64, format: CreatedFormat) -> Self {
        Self::new_formatted_with(content, content2, format, &FormatContext::default())
    }

    pub fn new_formatted_with(
        content: i64,
        content2: i64,
        format: CreatedFormat,
        ctx: &FormatContext,
    ) -> Self {
        Self {
            content,
            content2,
            formatted_content: format_timestamps(content, content2, format, true, ctx),
            ..Default::default()
        }
    }
}

/// Payload of an updated-time cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueUpdated {
    pub content: i64,
    pub is_not_empty: bool,
    pub content2: i64,
    pub is_not_empty2: bool,
    pub formatted_content: String,
}

impl ValueUpdated {
    pub fn new_formatted(content: i64, content2: i64, format: UpdatedFormat) -> Self {
        Self::new_formatted_with(content, content2, format, &FormatContext::default())
    }

    pub fn new_formatted_with(
        content: i64,
        content2: i64,
        format: UpdatedFormat,
        ctx: &FormatContext,
    ) -> Self {
        Self {
            content,
            content2,
            formatted_content: format_timestamps(content, content2, format, true, ctx),
            ..Default::default()
        }
    }
}

/// Render a timestamp or a `content → content2` range, or the humanized
/// span between them when `format` is [`DateFormat::Duration`]
pub fn format_timestamps(
    content: i64,
    content2: i64,
    format: DateFormat,
    with_time: bool,
    ctx: &FormatContext,
) -> String {
    match format {
        DateFormat::Duration => {
            let (Some(start), Some(end)) = (instant(content), instant(content2)) else {
                return String::new();
            };
            ctx.humanizer.humanize(start, end, ctx.lang)
        }
        DateFormat::None => {
            let mut formatted = format_instant(content, with_time, ctx);
            if content2 > 0 {
                formatted.push_str(RANGE_SEPARATOR);
                formatted.push_str(&format_instant(content2, with_time, ctx));
            }
            formatted
        }
    }
}

/// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM` in the context's timezone
pub fn format_instant(ms: i64, with_time: bool, ctx: &FormatContext) -> String {
    let pattern = if with_time { DATE_TIME_PATTERN } else { DATE_PATTERN };
    match instant(ms) {
        Some(t) => ctx.tz.format(t, pattern),
        None => String::new(),
    }
}

fn instant(ms: i64) -> Option<DateTime<Utc>> {
    let t = DateTime::from_timestamp_millis(ms);
    if t.is_none() {
        log::debug!("timestamp {ms} is out of range");
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Lang, TimeZoneSetting};
    use pretty_assertions::assert_eq;

    // 2024-03-05 14:07:00 UTC
    const T1: i64 = 1_709_647_620_000;
    // 2024-03-08 14:07:00 UTC
    const T2: i64 = T1 + 3 * 24 * 3_600_000;

    fn utc() -> FormatContext {
        FormatContext::new(Lang::English, TimeZoneSetting::Utc)
    }

    #[test]
    fn test_date_single() {
        let d = ValueDate::new_formatted_with(T1, 0, DateFormat::None, true, &utc());
        assert_eq!(d.formatted_content, "2024-03-05");

        let d = ValueDate::new_formatted_with(T1, 0, DateFormat::None, false, &utc());
        assert_eq!(d.formatted_content, "2024-03-05 14:07");
    }

    #[test]
    fn test_date_range() {
        let d = ValueDate::new_formatted_with(T1, T2, DateFormat::None, true, &utc());
        assert_eq!(d.formatted_content, "2024-03-05 → 2024-03-08");

        let d = ValueDate::new_formatted_with(T1, T2, DateFormat::None, false, &utc());
        assert_eq!(d.formatted_content, "2024-03-05 14:07 → 2024-03-08 14:07");
    }

    #[test]
    fn test_date_flags_normalized() {
        let d = ValueDate::new_formatted_with(T1, T2, DateFormat::None, false, &utc());
        assert!(!d.has_end_date);
        assert!(d.is_not_time);
        assert_eq!(d.content, T1);
        assert_eq!(d.content2, T2);
    }

    #[test]
    fn test_duration_replaces_absolute() {
        let d = ValueDate::new_formatted_with(T1, T2, DateFormat::Duration, true, &utc());
        assert_eq!(d.formatted_content, "3 days");

        let zh = utc().with_lang(Lang::Chinese);
        let c = ValueCreated::new_formatted_with(T1, T2, DateFormat::Duration, &zh);
        assert_eq!(c.formatted_content, "3 天");
    }

    #[test]
    fn test_created_and_updated_include_time() {
        let c = ValueCreated::new_formatted_with(T1, 0, CreatedFormat::None, &utc());
        assert_eq!(c.formatted_content, "2024-03-05 14:07");

        let u = ValueUpdated::new_formatted_with(T1, T2, UpdatedFormat::None, &utc());
        assert_eq!(u.formatted_content, "2024-03-05 14:07 → 2024-03-08 14:07");
    }

    #[test]
    fn test_json_shape() {
        let d = ValueDate::new_formatted_with(T1, 0, DateFormat::None, true, &utc());
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(
            json,
            r#"{"content":1709647620000,"isNotEmpty":false,"hasEndDate":false,"isNotTime":true,"content2":0,"isNotEmpty2":false,"formattedContent":"2024-03-05"}"#
        );
    }

    #[test]
    fn test_format_wire_strings() {
        assert_eq!(DateFormat::from_wire("duration"), DateFormat::Duration);
        assert_eq!(DateFormat::from_wire(""), DateFormat::None);
        assert_eq!(DateFormat::from_wire("weekday"), DateFormat::None);
    }
}
