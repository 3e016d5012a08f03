//! Formatting configuration
//!
//! Timestamp rendering depends on the display timezone, and duration
//! rendering on the display language. [`FormatContext`] bundles both with the
//! pluggable formatters so callers don't rely on process-wide state.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::error::{Error, Result};
use crate::humanize::{Humanizer, RelTimeHumanizer};
use crate::locale::{CldrFormatter, LocaleFormatter};

/// Environment variable holding the display language tag (e.g. `zh_CN`)
pub const LANG_ENV: &str = "ATTRVIEW_LANG";

/// Display language for humanized durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    English,
    Chinese,
}

impl Lang {
    /// Canonical tag
    pub fn tag(&self) -> &'static str {
        match self {
            Lang::English => "en_US",
            Lang::Chinese => "zh_CN",
        }
    }

    /// Language from [`LANG_ENV`], defaulting to English
    pub fn from_env() -> Self {
        match std::env::var(LANG_ENV) {
            Ok(tag) => tag.parse().unwrap_or_else(|e| {
                log::warn!("ignoring {LANG_ENV}: {e}");
                Lang::default()
            }),
            Err(_) => Lang::default(),
        }
    }
}

impl FromStr for Lang {
    type Err = Error;

    /// Accepts tags such as `en`, `en_US`, `zh-CN`, `zh_CHT`.
    /// Languages without a dedicated table fall back to English.
    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(Error::other("empty language tag"));
        }
        let primary = tag
            .split(|c| c == '_' || c == '-')
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase();
        Ok(match primary.as_str() {
            "zh" => Lang::Chinese,
            _ => Lang::English,
        })
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Timezone used to render absolute timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSetting {
    /// The system's local timezone
    #[default]
    Local,
    Utc,
    /// A fixed offset from UTC
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// Format a UTC instant in this timezone with a `strftime` pattern
    pub fn format(&self, instant: DateTime<Utc>, pattern: &str) -> String {
        match self {
            TimeZoneSetting::Local => instant.with_timezone(&Local).format(pattern).to_string(),
            TimeZoneSetting::Utc => instant.format(pattern).to_string(),
            TimeZoneSetting::Fixed(offset) => {
                instant.with_timezone(offset).format(pattern).to_string()
            }
        }
    }
}

/// Everything timestamp and currency rendering needs besides the value itself
#[derive(Clone)]
pub struct FormatContext {
    pub lang: Lang,
    pub tz: TimeZoneSetting,
    pub locale_formatter: Arc<dyn LocaleFormatter>,
    pub humanizer: Arc<dyn Humanizer>,
}

impl FormatContext {
    /// Context with an explicit language and timezone and the built-in formatters
    pub fn new(lang: Lang, tz: TimeZoneSetting) -> Self {
        Self {
            lang,
            tz,
            locale_formatter: Arc::new(CldrFormatter),
            humanizer: Arc::new(RelTimeHumanizer),
        }
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_tz(mut self, tz: TimeZoneSetting) -> Self {
        self.tz = tz;
        self
    }

    pub fn with_locale_formatter(mut self, formatter: Arc<dyn LocaleFormatter>) -> Self {
        self.locale_formatter = formatter;
        self
    }

    pub fn with_humanizer(mut self, humanizer: Arc<dyn Humanizer>) -> Self {
        self.humanizer = humanizer;
        self
    }
}

impl Default for FormatContext {
    /// Local timezone, language from [`LANG_ENV`]
    fn default() -> Self {
        Self::new(Lang::from_env(), TimeZoneSetting::Local)
    }
}

impl fmt::Debug for FormatContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatContext")
            .field("lang", &self.lang)
            .field("tz", &self.tz)
            .finish_non_exhaustive()
    }
}
