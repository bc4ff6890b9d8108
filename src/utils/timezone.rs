use chrono::offset::Offset;
use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Current calendar date in this timezone
    pub(crate) fn today(self) -> NaiveDate {
        match self {
            Timezone::Local => Local::now().date_naive(),
            Timezone::Named(tz) => Utc::now().with_timezone(&tz).date_naive(),
        }
    }

    /// Render a wall-clock instant as a `git` date argument.
    ///
    /// Local time is left bare so git applies the process timezone. Named zones
    /// carry their UTC offset at that instant, e.g. `2024-01-02 00:00 +0800`.
    pub(crate) fn format_bound(self, at: NaiveDateTime) -> String {
        let bare = at.format("%Y-%m-%d %H:%M").to_string();
        match self {
            Timezone::Local => bare,
            Timezone::Named(tz) => {
                // Nonexistent local times (DST gaps) fall back to the offset in effect at that UTC instant
                let offset = match tz.from_local_datetime(&at).earliest() {
                    Some(dt) => dt.offset().fix(),
                    None => tz.offset_from_utc_datetime(&at).fix(),
                };
                let secs = offset.local_minus_utc();
                let sign = if secs < 0 { '-' } else { '+' };
                let secs = secs.abs();
                format!("{bare} {sign}{:02}{:02}", secs / 3600, (secs % 3600) / 60)
            }
        }
    }
}
