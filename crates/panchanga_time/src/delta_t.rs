//! ΔT = TT − UT model.
//!
//! Between 1620 and 2010 the value is interpolated linearly from observed
//! decade values. Outside that band it falls back to quadratic fits in
//! Julian centuries from 1810.0, and the result is flagged as extrapolated.

use crate::julian::{DAYS_PER_CENTURY, decimal_year};

/// Julian Day of 1810.0, the epoch of the quadratic fits.
const FIT_EPOCH_JD: f64 = 2_382_148.0;

/// First year of the decade table.
pub const TABLE_START_YEAR: f64 = 1620.0;

/// Year at which the decade table ends.
pub const TABLE_END_YEAR: f64 = 2010.0;

/// Observed ΔT in seconds, one value per decade from 1620 to 2010.
#[rustfmt::skip]
static DECADE_SECONDS: [f64; 40] = [
    124.0, 85.0, 62.0, 48.0, 37.0, 26.0, 16.0, 10.0,  9.0, 10.0,   // 1620-1710
     11.0, 11.0, 12.0, 13.0, 15.0, 16.0, 17.0, 17.0, 13.7, 12.5,   // 1720-1810
     12.0,  7.5,  5.7,  7.1,  7.9,  1.6, -5.4, -5.9, -2.7, 10.5,   // 1820-1910
     21.2, 24.0, 24.3, 29.1, 33.1, 40.2, 50.5, 56.9, 63.8, 66.1,   // 1920-2010
];

/// A ΔT value together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaT {
    /// TT − UT in seconds.
    pub seconds: f64,
    /// True when the date fell outside the 1620–2010 decade table.
    pub extrapolated: bool,
}

impl DeltaT {
    /// TT − UT in hours.
    pub fn hours(&self) -> f64 {
        self.seconds / 3600.0
    }

    /// TT − UT in days.
    pub fn days(&self) -> f64 {
        self.seconds / 86_400.0
    }
}

/// ΔT for a Julian Day (UT).
pub fn delta_t(jd: f64) -> DeltaT {
    let year = decimal_year(jd);
    let t = (jd - FIT_EPOCH_JD) / DAYS_PER_CENTURY;

    if (TABLE_START_YEAR..TABLE_END_YEAR).contains(&year) {
        let pos = (year - TABLE_START_YEAR) / 10.0;
        let i = (pos.floor() as usize).min(DECADE_SECONDS.len() - 2);
        let frac = pos - i as f64;
        let seconds = DECADE_SECONDS[i] + (DECADE_SECONDS[i + 1] - DECADE_SECONDS[i]) * frac;
        return DeltaT {
            seconds,
            extrapolated: false,
        };
    }

    let seconds = if year >= TABLE_END_YEAR {
        25.5 * t * t - 39.0
    } else if year >= 948.0 {
        25.5 * t * t
    } else {
        1361.7 + 320.0 * t + 44.3 * t * t
    };

    DeltaT {
        seconds,
        extrapolated: true,
    }
}

/// ΔT in hours for a Julian Day (UT).
pub fn delta_t_hours(jd: f64) -> f64 {
    delta_t(jd).hours()
}
