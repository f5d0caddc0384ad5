//! Timestamps, weekdays, and the two time bucketings used as grouping
//! dimensions.
//!
//! # Buckets
//!
//! | Type           | Rule                                                |
//! |----------------|-----------------------------------------------------|
//! | [`TimeOfDay`]  | `Day` for hour ∈ [day_start, night_start), else `Night` |
//! | [`HourInterval`] | `start = hour / width * width`                    |
//!
//! The final interval of the day is clamped for display: with width 3 the
//! bucket starting at 21 reads `21:00-23:59`, never `21:00-24:59`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Weekday};

use crate::{CtError, CtResult};

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// A naive (zone-less) instant.  The dataset is written in UTC with a
/// trailing `Z`; the offset is normalised away on parse.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub NaiveDateTime);

impl Timestamp {
    /// Parse RFC 3339 (`2022-03-01T08:05:00Z`) or a plain
    /// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS`, with optional
    /// fractional seconds.
    pub fn parse(text: &str) -> CtResult<Timestamp> {
        let s = text.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Timestamp(dt.naive_utc()));
        }
        for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Timestamp(dt));
            }
        }
        Err(CtError::Timestamp(text.to_owned()))
    }

    /// Hour of day, 0–23.
    #[inline]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[inline]
    pub fn weekday(self) -> DayOfWeek {
        DayOfWeek(self.0.weekday())
    }
}

impl FromStr for Timestamp {
    type Err = CtError;
    fn from_str(s: &str) -> CtResult<Timestamp> {
        Timestamp::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

// ── DayOfWeek ─────────────────────────────────────────────────────────────────

/// Weekday ordered Monday-first, displayed by full name ("Tuesday").
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DayOfWeek(pub Weekday);

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek(Weekday::Mon),
        DayOfWeek(Weekday::Tue),
        DayOfWeek(Weekday::Wed),
        DayOfWeek(Weekday::Thu),
        DayOfWeek(Weekday::Fri),
        DayOfWeek(Weekday::Sat),
        DayOfWeek(Weekday::Sun),
    ];

    pub fn name(self) -> &'static str {
        match self.0 {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

impl PartialOrd for DayOfWeek {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayOfWeek {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.num_days_from_monday().cmp(&other.0.num_days_from_monday())
    }
}

impl FromStr for DayOfWeek {
    type Err = CtError;
    /// Accepts full or abbreviated English names, any case.
    fn from_str(s: &str) -> CtResult<DayOfWeek> {
        s.trim()
            .parse::<Weekday>()
            .map(DayOfWeek)
            .map_err(|_| CtError::Parse(format!("unknown weekday {s:?}")))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// Coarse day/night classification of a timestamp.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 2] = [TimeOfDay::Day, TimeOfDay::Night];

    /// `Day` for `day_start <= hour < night_start`, otherwise `Night`.
    #[inline]
    pub fn classify(hour: u32, day_start: u32, night_start: u32) -> TimeOfDay {
        if (day_start..night_start).contains(&hour) {
            TimeOfDay::Day
        } else {
            TimeOfDay::Night
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Day   => "Day",
            TimeOfDay::Night => "Night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HourInterval ──────────────────────────────────────────────────────────────

/// A fixed-width block of hours within one day.
///
/// Ordered by start hour.  Two intervals of different widths never meet in
/// one layer set, so deriving `Ord` over `(start, width)` is enough.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourInterval {
    /// First hour covered, a multiple of `width`.
    pub start: u8,
    /// Bucket width in hours, 1–24.
    pub width: u8,
}

impl HourInterval {
    /// Bucket `hour` (0–23) into a `width`-hour interval.
    ///
    /// # Errors
    ///
    /// [`CtError::Config`] if `width` is outside 1–24 or `hour` > 23.
    pub fn of_hour(hour: u32, width: u8) -> CtResult<HourInterval> {
        check_bucket_width(width)?;
        if hour > 23 {
            return Err(CtError::Parse(format!("hour {hour} out of range 0-23")));
        }
        let w = width as u32;
        Ok(HourInterval { start: (hour / w * w) as u8, width })
    }

    /// Bucket containing `ts`.
    pub fn of_timestamp(ts: Timestamp, width: u8) -> CtResult<HourInterval> {
        HourInterval::of_hour(ts.hour(), width)
    }

    /// Last hour covered, clamped to 23.
    #[inline]
    pub fn end_hour(self) -> u8 {
        (self.start + self.width - 1).min(23)
    }

    /// Every interval of one day, in order.
    pub fn all(width: u8) -> CtResult<Vec<HourInterval>> {
        check_bucket_width(width)?;
        Ok((0..24u8)
            .step_by(width as usize)
            .map(|start| HourInterval { start, width })
            .collect())
    }

    /// `"21-23h"` style label, used on slider steps.
    pub fn short_label(self) -> String {
        format!("{:02}-{:02}h", self.start, self.end_hour())
    }
}

impl fmt::Display for HourInterval {
    /// `"21:00-23:59"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:59", self.start, self.end_hour())
    }
}

/// Validate an hour-interval width.
pub fn check_bucket_width(width: u8) -> CtResult<()> {
    if (1..=24).contains(&width) {
        Ok(())
    } else {
        Err(CtError::Config(format!("bucket width must be 1-24 hours, got {width}")))
    }
}
