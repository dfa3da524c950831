//! Types for almanac results.

use std::fmt::{Display, Formatter};

use panchanga_time::CivilTime;
use panchanga_vedic::{Karana, Nakshatra, Paksha, Rashi, Tithi, Vaar, Yoga};

/// Tithi (lunar day) with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Start of this tithi, local time.
    pub start: CivilTime,
    /// End of this tithi, local time.
    pub end: CivilTime,
}

/// Karana (half-tithi) with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// Name-table index (0..10).
    pub index: u8,
    /// Sequence slot within the synodic month (0..59).
    pub slot: u8,
    pub start: CivilTime,
    pub end: CivilTime,
}

/// Nakshatra (lunar mansion) with pada and start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0..26).
    pub index: u8,
    /// Quarter within the nakshatra (1-4).
    pub pada: u8,
    pub start: CivilTime,
    pub end: CivilTime,
}

/// Yoga (Sun + Moon combination) with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub index: u8,
    pub start: CivilTime,
    pub end: CivilTime,
}

/// Sidereal sign of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaasiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0..11).
    pub index: u8,
}

/// Ayanamsa in decimal degrees and as a formatted DMS string.
#[derive(Debug, Clone, PartialEq)]
pub struct AyanamsaInfo {
    /// Degrees; negative, so sidereal = tropical + ayanamsa.
    pub degrees: f64,
    /// `-24°11'28.40"`-style rendering of `degrees`.
    pub formatted: String,
}

/// Non-fatal conditions attached to a result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum RangeWarning {
    /// ΔT came from a polynomial fit rather than the observed table.
    DeltaTExtrapolated {
        /// Decimal year of the request.
        year: f64,
        /// Extrapolated ΔT, seconds.
        delta_t_seconds: f64,
    },
}

impl Display for RangeWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeltaTExtrapolated {
                year,
                delta_t_seconds,
            } => write!(
                f,
                "ΔT extrapolated for year {year:.1} ({delta_t_seconds:.1} s); \
                 boundary times may be off by minutes"
            ),
        }
    }
}

/// Every almanac element for one civil instant.
#[derive(Debug, Clone, PartialEq)]
pub struct AlmanacResult {
    pub weekday: Vaar,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub karana: KaranaInfo,
    pub yoga: YogaInfo,
    pub raasi: RaasiInfo,
    pub ayanamsa: AyanamsaInfo,
    pub warnings: Vec<RangeWarning>,
}
