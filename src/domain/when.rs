//! Parsing and resolving "when" expressions for scheduling notes

use crate::error::{AgendaError, Result};
use chrono::{
    DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
    Weekday,
};

/// A day relative to today, or a specific calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// Current/most recent occurrence of a weekday
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    /// Next occurrence of a weekday (strictly after today)
    NextWeekday(Weekday),
    /// Specific date
    SpecificDate(NaiveDate),
}

impl DayReference {
    /// Parse a day reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "" | "today" | "now" => Ok(DayReference::Today),
            "yesterday" => Ok(DayReference::Yesterday),
            "tomorrow" => Ok(DayReference::Tomorrow),
            _ if normalized.starts_with("last ") => {
                Self::parse_weekday(&normalized[5..], input).map(DayReference::LastWeekday)
            }
            _ if normalized.starts_with("next ") => {
                Self::parse_weekday(&normalized[5..], input).map(DayReference::NextWeekday)
            }
            _ => {
                if let Ok(weekday) = Self::parse_weekday(&normalized, input) {
                    return Ok(DayReference::Weekday(weekday));
                }
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .map(DayReference::SpecificDate)
                    .map_err(|_| AgendaError::InvalidWhen(input.to_string()))
            }
        }
    }

    fn parse_weekday(day_str: &str, input: &str) -> Result<Weekday> {
        match day_str.trim() {
            "monday" => Ok(Weekday::Mon),
            "tuesday" => Ok(Weekday::Tue),
            "wednesday" => Ok(Weekday::Wed),
            "thursday" => Ok(Weekday::Thu),
            "friday" => Ok(Weekday::Fri),
            "saturday" => Ok(Weekday::Sat),
            "sunday" => Ok(Weekday::Sun),
            _ => Err(AgendaError::InvalidWhen(input.to_string())),
        }
    }

    /// Resolve this reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DayReference::Today => base_date,
            DayReference::Yesterday => base_date - Duration::days(1),
            DayReference::Tomorrow => base_date + Duration::days(1),
            DayReference::Weekday(target) => {
                let days_back = (base_date.weekday().num_days_from_monday() + 7
                    - target.num_days_from_monday())
                    % 7;
                base_date - Duration::days(days_back as i64)
            }
            DayReference::LastWeekday(target) => {
                let days_back = match (base_date.weekday().num_days_from_monday() + 7
                    - target.num_days_from_monday())
                    % 7
                {
                    0 => 7,
                    days => days,
                };
                base_date - Duration::days(days_back as i64)
            }
            DayReference::NextWeekday(target) => {
                let days_forward = match (target.num_days_from_monday() + 7
                    - base_date.weekday().num_days_from_monday())
                    % 7
                {
                    0 => 7,
                    days => days,
                };
                base_date + Duration::days(days_forward as i64)
            }
            DayReference::SpecificDate(date) => *date,
        }
    }
}

/// Time of day used when a future day is given without one
fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

/// When a note is scheduled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum When {
    /// A full timestamp with offset (RFC 3339)
    Exact(DateTime<Utc>),
    /// A day plus optional time of day, in local time
    Local {
        day: DayReference,
        time: Option<NaiveTime>,
    },
}

impl When {
    /// Parse RFC 3339, `YYYY-MM-DD HH:MM`, or `<day> [HH:MM]`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if let Ok(exact) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(When::Exact(exact.with_timezone(&Utc)));
        }

        let (day_part, time) = match trimmed.rsplit_once(char::is_whitespace) {
            Some((day, last)) => match NaiveTime::parse_from_str(last, "%H:%M") {
                Ok(time) => (day, Some(time)),
                Err(_) => (trimmed, None),
            },
            None => match NaiveTime::parse_from_str(trimmed, "%H:%M") {
                Ok(time) => ("", Some(time)),
                Err(_) => (trimmed, None),
            },
        };

        let day = DayReference::parse(day_part)
            .map_err(|_| AgendaError::InvalidWhen(input.to_string()))?;
        Ok(When::Local { day, time })
    }

    /// Resolve against a local wall-clock "now"
    pub fn resolve_naive(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self {
            When::Exact(exact) => exact.with_timezone(&Local).naive_local(),
            When::Local { day, time } => {
                let date = day.resolve(now.date());
                let time = match (time, day) {
                    (Some(time), _) => *time,
                    (None, DayReference::Today) => now.time(),
                    (None, _) => default_time(),
                };
                date.and_time(time)
            }
        }
    }

    /// Resolve to a UTC instant using the local time zone
    pub fn resolve(&self, now: DateTime<Local>) -> Result<DateTime<Utc>> {
        if let When::Exact(exact) = self {
            return Ok(*exact);
        }

        let naive = self.resolve_naive(now.naive_local());
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| {
                AgendaError::InvalidWhen(format!("{} does not exist in local time", naive))
            })
    }
}
