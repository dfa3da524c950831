//! One engine evaluation, exposed for diagnostics.

use panchanga_engine::CalculationContext;
use panchanga_time::delta_t;

use crate::config::AlmanacConfig;
use crate::error::AlmanacError;

/// Sun and Moon state at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSnapshot {
    pub jd_ut: f64,
    /// Dynamical time used by the engine.
    pub jd_tt: f64,
    /// TT − UT, seconds.
    pub delta_t_seconds: f64,
    /// Apparent tropical longitudes, degrees in [0, 360).
    pub sun_longitude: f64,
    pub moon_longitude: f64,
    /// Sidereal longitudes, degrees in [0, 360).
    pub sun_sidereal: f64,
    pub moon_sidereal: f64,
    /// Moon's angular velocity, degrees per day.
    pub moon_velocity: f64,
    /// Moon − Sun in [0, 360).
    pub elongation: f64,
    pub ayanamsa_deg: f64,
}

/// Evaluate the engine at a UT Julian Day with default settings.
pub fn positions_at(jd_ut: f64) -> Result<PositionSnapshot, AlmanacError> {
    positions_at_with_config(jd_ut, &AlmanacConfig::default())
}

/// Evaluate the engine at a UT Julian Day.
pub fn positions_at_with_config(
    jd_ut: f64,
    config: &AlmanacConfig,
) -> Result<PositionSnapshot, AlmanacError> {
    if !jd_ut.is_finite() {
        return Err(AlmanacError::InvalidInput(
            "Julian Day must be finite".to_string(),
        ));
    }
    config.validate()?;

    let dt = delta_t(jd_ut);
    let jd_tt = jd_ut + dt.days();
    let mut ctx = CalculationContext::new(dt.hours(), jd_tt);
    let lum = ctx.evaluate(jd_tt, &config.kepler())?;

    Ok(PositionSnapshot {
        jd_ut,
        jd_tt,
        delta_t_seconds: dt.seconds,
        sun_longitude: lum.sun,
        moon_longitude: lum.moon,
        sun_sidereal: ctx.sidereal(lum.sun),
        moon_sidereal: ctx.sidereal(lum.moon),
        moon_velocity: ctx.moon_velocity,
        elongation: lum.elongation(),
        ayanamsa_deg: ctx.ayanamsa_deg,
    })
}
