//! Civil date-time with a fixed UTC offset.
//!
//! `CivilTime` is the request and response type of the almanac: the
//! instant a caller asks about, and the instants at which each element
//! begins and ends, expressed in the caller's local offset.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{civil_to_jd, days_in_month, jd_to_civil};

/// Largest UTC offset accepted, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A civil calendar instant at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Local time minus UTC, in hours (+5.5 for India).
    pub utc_offset_hours: f64,
}

impl CivilTime {
    /// Build a validated civil instant.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        let t = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        };
        t.validate()?;
        Ok(t)
    }

    /// Build a validated UTC instant.
    pub fn utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        Self::new(year, month, day, hour, minute, second, 0.0)
    }

    /// Check every field against its calendar range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidInput("month must be 1-12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidInput("day outside month"));
        }
        if self.hour >= 24 {
            return Err(TimeError::InvalidInput("hour must be below 24"));
        }
        if self.minute >= 60 {
            return Err(TimeError::InvalidInput("minute must be below 60"));
        }
        if !self.second.is_finite() || !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidInput("second must be finite and in [0, 61)"));
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(TimeError::InvalidInput("UTC offset must be finite and within 14 h"));
        }
        Ok(())
    }

    /// Fraction of the local day elapsed, in [0, 1).
    pub fn day_fraction(&self) -> f64 {
        (f64::from(self.hour) + f64::from(self.minute) / 60.0 + self.second / 3600.0) / 24.0
    }

    /// Julian Day of this instant on the local clock.
    pub fn to_jd_local(&self) -> f64 {
        civil_to_jd(
            self.month,
            f64::from(self.day) + self.day_fraction(),
            self.year,
        )
    }

    /// Julian Day of this instant in UT.
    pub fn to_jd_ut(&self) -> f64 {
        self.to_jd_local() - self.utc_offset_hours / 24.0
    }

    /// Julian Day of local midnight starting this civil date.
    pub fn date_jd(&self) -> f64 {
        civil_to_jd(self.month, f64::from(self.day), self.year)
    }

    /// Civil instant for a local-clock Julian Day at the given offset.
    ///
    /// The clock is rounded to whole milliseconds; an f64 Julian Day of the
    /// current era resolves only about 40 µs.
    pub fn from_jd_local(jd_local: f64, utc_offset_hours: f64) -> Self {
        let shifted = jd_local + 0.5;
        let mut day_number = shifted.floor();
        let mut millis = ((shifted - day_number) * MILLIS_PER_DAY as f64).round() as i64;
        if millis >= MILLIS_PER_DAY {
            // Rounded up to the next midnight.
            day_number += 1.0;
            millis = 0;
        }
        let (year, month, day) = jd_to_civil(day_number - 0.5);
        let hour = millis / 3_600_000;
        let minute = (millis % 3_600_000) / 60_000;
        let second = (millis % 60_000) as f64 / 1e3;
        Self {
            year,
            month,
            day: day.floor() as u32,
            hour: hour as u32,
            minute: minute as u32,
            second,
            utc_offset_hours,
        }
    }

    /// Civil instant for a UT Julian Day, shown at the given offset.
    pub fn from_jd_ut(jd_ut: f64, utc_offset_hours: f64) -> Self {
        Self::from_jd_local(jd_ut + utc_offset_hours / 24.0, utc_offset_hours)
    }
}

fn format_offset(f: &mut Formatter<'_>, offset_hours: f64) -> std::fmt::Result {
    let total_minutes = (offset_hours * 60.0).round() as i64;
    if total_minutes == 0 {
        return write!(f, "Z");
    }
    let sign = if total_minutes < 0 { '-' } else { '+' };
    let abs = total_minutes.abs();
    write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - f64::from(whole);
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )?;
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )?;
        }
        format_offset(f, self.utc_offset_hours)
    }
}

/// Parse `±HH:MM` (or `±HHMM`) into hours.
fn parse_offset(s: &str) -> Result<f64, TimeError> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1.0, &s[1..]),
        Some(b'-') => (-1.0, &s[1..]),
        _ => return Err(TimeError::Parse(format!("bad UTC offset '{s}'"))),
    };
    let (hh, mm) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: u32 = hh.parse()?;
    let minutes: u32 = mm.parse()?;
    if minutes >= 60 {
        return Err(TimeError::Parse(format!("bad UTC offset '{s}'")));
    }
    Ok(sign * (f64::from(hours) + f64::from(minutes) / 60.0))
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDTHH:MM[:SS[.fff]](Z|±HH:MM)`; a space may replace `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("missing time part in '{s}'")))?;

        let mut date_parts = date.splitn(3, '-');
        let (Some(y), Some(mo), Some(d)) = (date_parts.next(), date_parts.next(), date_parts.next())
        else {
            return Err(TimeError::Parse(format!("bad date '{date}'")));
        };
        let year: i32 = y.parse()?;
        let month: u32 = mo.parse()?;
        let day: u32 = d.parse()?;

        let (clock, offset) = if let Some(clock) = time.strip_suffix(['Z', 'z']) {
            (clock, 0.0)
        } else if let Some(pos) = time.rfind(['+', '-']) {
            (&time[..pos], parse_offset(&time[pos..])?)
        } else {
            return Err(TimeError::Parse(format!("missing UTC offset in '{s}'")));
        };

        let mut clock_parts = clock.splitn(3, ':');
        let (Some(h), Some(mi)) = (clock_parts.next(), clock_parts.next()) else {
            return Err(TimeError::Parse(format!("bad time '{clock}'")));
        };
        let hour: u32 = h.parse()?;
        let minute: u32 = mi.parse()?;
        let second: f64 = match clock_parts.next() {
            Some(sec) => sec.parse()?,
            None => 0.0,
        };

        Self::new(year, month, day, hour, minute, second, offset)
    }
}
