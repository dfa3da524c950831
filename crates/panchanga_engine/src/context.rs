//! Per-request scratch state for one almanac computation.
//!
//! A `CalculationContext` is created for a single request, threaded through
//! every position evaluation of that request, and dropped at the end.
//! Nothing in it is shared between requests.

use crate::angle::normalize_360;
use crate::ayanamsa::ayanamsa;
use crate::error::EngineError;
use crate::kepler::KeplerConfig;
use crate::moon::moon_longitude;
use crate::sun::sun_longitude;

/// Phase anchor subtracted from the unreduced Moon longitude in the yoga sum.
pub const YOGA_MOON_ANCHOR: f64 = 491_143.076_989_738_56;

/// Phase anchor subtracted from the unreduced Sun longitude in the yoga sum.
pub const YOGA_SUN_ANCHOR: f64 = 36_976.912_405_792_01;

/// Intermediate values produced by one stage and consumed by another.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalculationContext {
    /// TT − UT at the request instant, hours.
    pub delta_t_hours: f64,
    /// Ayanamsa at the request instant, degrees (negative).
    pub ayanamsa_deg: f64,
    /// Last Sun longitude before reduction modulo 360.
    pub sun_longitude_for_yoga: f64,
    /// Last Moon longitude before reduction modulo 360.
    pub moon_longitude_for_yoga: f64,
    /// Last Moon angular velocity, degrees per day.
    pub moon_velocity: f64,
}

/// Sun and Moon apparent longitudes at one instant, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luminaries {
    pub sun: f64,
    pub moon: f64,
}

impl Luminaries {
    /// Moon − Sun, taken positive: the Moon is unwrapped past the Sun
    /// before subtracting, so the result lies in [0, 360).
    pub fn elongation(&self) -> f64 {
        let moon = if self.moon < self.sun {
            self.moon + 360.0
        } else {
            self.moon
        };
        moon - self.sun
    }
}

impl CalculationContext {
    /// Context for a request whose dynamical-time JD is `jd_tt`.
    pub fn new(delta_t_hours: f64, jd_tt: f64) -> Self {
        Self {
            delta_t_hours,
            ayanamsa_deg: ayanamsa(jd_tt),
            ..Self::default()
        }
    }

    /// Evaluate the Sun and Moon at `jd_tt`, refreshing the unreduced
    /// longitudes and the Moon's velocity.
    pub fn evaluate(
        &mut self,
        jd_tt: f64,
        kepler: &KeplerConfig,
    ) -> Result<Luminaries, EngineError> {
        if !jd_tt.is_finite() {
            return Err(EngineError::NonFinite("Julian Day"));
        }
        let sun = sun_longitude(jd_tt, self, kepler)?;
        let moon = moon_longitude(jd_tt, self);
        Ok(Luminaries { sun, moon })
    }

    /// Sidereal longitude for a tropical one, in [0, 360).
    pub fn sidereal(&self, tropical_deg: f64) -> f64 {
        normalize_360(tropical_deg + self.ayanamsa_deg)
    }

    /// Anchored Sun + Moon sidereal sum that indexes the yoga.
    ///
    /// Built from the unreduced longitudes, so it is continuous in time.
    pub fn yoga_sum(&self) -> f64 {
        (self.moon_longitude_for_yoga + self.ayanamsa_deg - YOGA_MOON_ANCHOR)
            + (self.sun_longitude_for_yoga + self.ayanamsa_deg - YOGA_SUN_ANCHOR)
    }

    /// Convert a dynamical-time JD back to a local-clock JD.
    pub fn to_local_jd(&self, jd_tt: f64, utc_offset_hours: f64) -> f64 {
        jd_tt + (utc_offset_hours - self.delta_t_hours) / 24.0
    }
}
