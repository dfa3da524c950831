//! Apparent geocentric longitude of the Sun.
//!
//! Newcomb's elements in Julian centuries from 1900 January 0.5, the
//! equation of the centre through Kepler's equation, small planetary and
//! lunar perturbations, nutation and annual aberration. Accurate to about
//! 0.01°, i.e. well under a minute of time for any boundary that depends
//! on the Sun.

use panchanga_time::centuries_since_j1900;

use crate::angle::normalize_360;
use crate::context::CalculationContext;
use crate::error::EngineError;
use crate::kepler::{KeplerConfig, solve_kepler, true_anomaly};
use crate::nutation::nutation;

/// Constant of annual aberration, arcseconds.
const ABERRATION_ARCSEC: f64 = 20.496;

/// Cosine pre-corrections to the mean longitude and anomaly from Venus
/// (A, B) and Jupiter (C): `(amplitude°, phase°, rate°/century)`.
#[rustfmt::skip]
static MEAN_ELEMENT_TERMS: [(f64, f64, f64); 3] = [
    (0.00134, 153.23, 22518.7541),
    (0.00154, 216.57, 45037.5082),
    (0.00200, 312.69, 32964.3577),
];

/// Solar position before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent longitude in degrees, not reduced modulo 360.
    pub longitude_unwrapped: f64,
    /// Radius vector in astronomical units.
    pub radius_au: f64,
}

impl SolarPosition {
    /// Apparent longitude in [0, 360).
    pub fn longitude(&self) -> f64 {
        normalize_360(self.longitude_unwrapped)
    }
}

/// Compute the Sun's apparent longitude and distance at a dynamical-time JD.
pub fn solar_position(jd: f64, kepler: &KeplerConfig) -> Result<SolarPosition, EngineError> {
    let t = centuries_since_j1900(jd);
    let t2 = t * t;

    let mut mean_lon = 279.69668 + 36000.76892 * t + 0.0003025 * t2;
    // Earth's perihelion; the Sun's geocentric perigee lies opposite.
    let perihelion = 101.220833 + 1.719175 * t + 0.000452778 * t2 + 0.0000033333 * t2 * t;
    let mut mean_anom = mean_lon - (perihelion + 180.0);
    let ecc = 0.01675104 - 0.0000418 * t - 0.000000126 * t2;

    let venus_jupiter: [f64; 3] =
        MEAN_ELEMENT_TERMS.map(|(_, phase, rate)| (phase + rate * t).to_radians());
    let pre: f64 = MEAN_ELEMENT_TERMS
        .iter()
        .zip(venus_jupiter.iter())
        .map(|((amp, _, _), arg)| amp * arg.cos())
        .sum();
    mean_lon += pre;
    mean_anom = normalize_360(mean_anom + pre);

    let ecc_anom = solve_kepler(mean_anom, ecc, kepler)?.eccentric_anomaly;
    let nu = true_anomaly(ecc_anom, ecc).to_degrees();

    // Moon (D), long-period inequality (E) and Venus (H) arguments.
    let d = (350.74 + 445267.1142 * t - 0.00144 * t2).to_radians();
    let e = (231.19 + 20.20 * t).to_radians();
    let h = (353.40 + 65928.7155 * t).to_radians();
    let [a, b, c] = venus_jupiter;

    let true_lon = mean_lon + nu - mean_anom + 0.00179 * d.sin() + 0.00178 * e.sin();

    let radius_au = 1.0000002 * (1.0 - ecc * ecc_anom.cos())
        + 5.43e-6 * a.sin()
        + 1.575e-5 * b.sin()
        + 1.627e-5 * c.sin()
        + 3.076e-5 * d.cos()
        + 9.27e-6 * h.sin();

    let apparent = true_lon + nutation(jd) - ABERRATION_ARCSEC / (3600.0 * radius_au);
    if !apparent.is_finite() {
        return Err(EngineError::NonFinite("solar longitude"));
    }

    Ok(SolarPosition {
        longitude_unwrapped: apparent,
        radius_au,
    })
}

/// Apparent longitude of the Sun in [0, 360) at a dynamical-time JD.
///
/// The unreduced value is left in `ctx.sun_longitude_for_yoga`.
pub fn sun_longitude(
    jd: f64,
    ctx: &mut CalculationContext,
    kepler: &KeplerConfig,
) -> Result<f64, EngineError> {
    let pos = solar_position(jd, kepler)?;
    ctx.sun_longitude_for_yoga = pos.longitude_unwrapped;
    Ok(pos.longitude())
}
