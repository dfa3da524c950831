//! Julian Day <-> civil calendar conversions.
//!
//! Julian Days here are astronomical: the day begins at noon, so civil
//! midnight falls on a half-integer (2000-01-01 00:00 = 2451544.5).
//! Dates before 1582-10-15 are taken in the Julian calendar.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the B1900.0 reference used by the older solar and
/// lunar series (1899-12-31 12:00).
pub const J1900_JD: f64 = 2_415_020.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First Gregorian day number, counted in the Julian calendar
/// (1582-10-15 Gregorian = 1582-10-05 Julian = JDN 2299161).
const GREGORIAN_SWITCH_JULIAN_COUNT: i64 = 2_299_171;

/// First Julian Day Number of the Gregorian calendar.
const GREGORIAN_SWITCH_JDN: f64 = 2_299_161.0;

/// Convert a civil date to a Julian Day.
///
/// `day` may carry a fractional part encoding the time of day
/// (`15.5` = noon on the 15th).
pub fn civil_to_jd(month: u32, day: f64, year: i32) -> f64 {
    let im = 12 * (i64::from(year) + 4800) + i64::from(month) - 3;
    let mut j = (2 * im.rem_euclid(12) + 7 + 365 * im).div_euclid(12);
    j += im.div_euclid(48) - 32_083;

    let whole_day = day.floor();
    // Day counts from the reform onwards get the Gregorian leap-day correction.
    if j + whole_day as i64 >= GREGORIAN_SWITCH_JULIAN_COUNT {
        j += im.div_euclid(4800) - im.div_euclid(1200) + 38;
    }

    j as f64 + day - 0.5
}

/// Convert a Julian Day back to `(year, month, fractional day)`.
pub fn jd_to_civil(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let frac = shifted - z;

    let a = if z < GREGORIAN_SWITCH_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + frac;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Weekday for a Julian Day: 0 = Sunday .. 6 = Saturday.
///
/// JD 0.0 fell on a Monday noon.
pub fn weekday_index(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

/// Julian centuries of 36525 days since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian centuries of 36525 days since 1900 January 0.5.
pub fn centuries_since_j1900(jd: f64) -> f64 {
    (jd - J1900_JD) / DAYS_PER_CENTURY
}

/// Decimal civil year for a Julian Day (2000-07-02 ≈ 2000.5).
pub fn decimal_year(jd: f64) -> f64 {
    let (year, month, day) = jd_to_civil(jd);
    f64::from(year) + (f64::from(month) - 1.0) / 12.0 + (day - 1.0) / 365.25
}

/// Days in `month` of `year`, Julian rules before 1582 and Gregorian after.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = if year > 1582 {
                (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
            } else {
                year.rem_euclid(4) == 0
            };
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}
