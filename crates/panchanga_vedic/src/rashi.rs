//! Rashi (sidereal zodiac sign) and degree-minute-second formatting.

use std::fmt::{Display, Formatter};

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

const NAMES: [&str; 12] = [
    "Mesha",
    "Vrishabha",
    "Mithuna",
    "Karka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrischika",
    "Dhanu",
    "Makara",
    "Kumbha",
    "Meena",
];

const WESTERN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

impl Rashi {
    /// Rashi for an index, reduced modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Rashi for a sidereal longitude: `⌊|λ| / 30⌋`, reduced modulo 12.
    pub fn from_longitude(sidereal_deg: f64) -> Self {
        let idx = (sidereal_deg.abs() / 30.0).floor() % 12.0;
        Self::from_index(idx as u8)
    }

    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        WESTERN_NAMES[self as usize]
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whether the angle is below zero.
    pub negative: bool,
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let remainder = (d - degrees) * 60.0;
    let minutes = remainder.floor();
    let seconds = (remainder - minutes) * 60.0;
    Dms {
        negative: deg < 0.0,
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    let magnitude = f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0;
    if dms.negative { -magnitude } else { magnitude }
}

impl Display for Dms {
    /// `-23°51'10.80"`: seconds to two decimals, carried into minutes and
    /// degrees when they round up to 60.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let centi = ((f64::from(self.degrees) * 3600.0
            + f64::from(self.minutes) * 60.0
            + self.seconds)
            * 100.0)
            .round() as u64;
        let sign = if self.negative && centi > 0 { "-" } else { "" };
        let degrees = centi / 360_000;
        let minutes = (centi / 6000) % 60;
        let seconds = centi % 6000;
        write!(
            f,
            "{sign}{degrees}°{minutes:02}'{:02}.{:02}\"",
            seconds / 100,
            seconds % 100
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_to_rashi() {
        assert_eq!(Rashi::from_longitude(0.0), Rashi::Mesha);
        assert_eq!(Rashi::from_longitude(29.999), Rashi::Mesha);
        assert_eq!(Rashi::from_longitude(30.0), Rashi::Vrishabha);
        assert_eq!(Rashi::from_longitude(359.9), Rashi::Meena);
    }

    #[test]
    fn names() {
        assert_eq!(Rashi::from_index(11).name(), "Meena");
        assert_eq!(Rashi::Karka.western_name(), "Cancer");
    }

    #[test]
    fn dms_basic() {
        let dms = deg_to_dms(23.853);
        assert!(!dms.negative);
        assert_eq!(dms.degrees, 23);
        assert_eq!(dms.minutes, 51);
        assert!((dms.seconds - 10.8).abs() < 1e-6);
    }

    #[test]
    fn dms_roundtrip_negative() {
        let deg = -24.191_389;
        let back = dms_to_deg(&deg_to_dms(deg));
        assert!((back - deg).abs() < 1e-10);
    }

    #[test]
    fn dms_display() {
        assert_eq!(deg_to_dms(-23.853).to_string(), "-23°51'10.80\"");
        assert_eq!(deg_to_dms(5.5).to_string(), "5°30'00.00\"");
    }

    #[test]
    fn dms_display_carries() {
        // 10°59'59.999" rounds up to 11°00'00.00"
        let dms = Dms {
            negative: false,
            degrees: 10,
            minutes: 59,
            seconds: 59.999,
        };
        assert_eq!(dms.to_string(), "11°00'00.00\"");
    }
}
