//! Apparent geocentric longitude and angular velocity of the Moon.
//!
//! Mean elements are Chapront's polynomials in Julian centuries from
//! J2000.0. Seven long-period arguments first correct the mean elements
//! (Venus terms, the Earth's figure and the secular drift of the node),
//! then the periodic tables below are summed, followed by a short series of
//! direct planetary perturbations and nutation.
//!
//! Amplitudes are in arcseconds. Rows are split by whether they carry the
//! argument of latitude `F`: those rows also see the long-period change
//! of the lunar orbit's inclination.

use panchanga_time::{J2000_JD, centuries_since_j2000};

use crate::angle::{ARCSEC_TO_DEG, normalize_360, sin_rev};
use crate::context::CalculationContext;
use crate::nutation::nutation;
use crate::perturbation::{BaseAngles, Term, sum_rates, sum_sines};

/// Mean daily motion of the Moon in longitude, degrees per day.
pub const MEAN_DAILY_MOTION: f64 = 13.176397;

/// Daily rate of decrease of the Earth's orbital eccentricity factor.
const ECCENTRICITY_DECAY_PER_DAY: f64 = 6.832e-8;

/// Rows without `F`: `(n_l, n_l', n_F, n_D, amplitude″)`.
#[rustfmt::skip]
pub static MOON_PRIMARY: [Term; 48] = [
    ( 1,  0, 0, 0, 22639.5864),
    (-1,  0, 0, 2,  4586.4972),
    ( 0,  0, 0, 2,  2369.9304),
    ( 2,  0, 0, 0,   769.0248),
    ( 0,  1, 0, 0,  -666.4176),
    (-2,  0, 0, 2,   211.6548),
    (-1, -1, 0, 2,   205.4376),
    ( 1,  0, 0, 2,   191.9592),
    ( 0, -1, 0, 2,   164.7288),
    (-1,  1, 0, 0,  -147.3228),
    ( 0,  0, 0, 1,  -124.9920),
    ( 1,  1, 0, 0,  -109.3788),
    (-1,  0, 0, 4,    38.4300),
    ( 3,  0, 0, 0,    36.1224),
    (-2,  0, 0, 4,    30.7728),
    (-1,  1, 0, 2,   -28.3968),
    ( 0,  1, 0, 2,   -24.3576),
    (-1,  0, 0, 1,   -18.5868),
    ( 0,  1, 0, 1,    17.9532),
    ( 1, -1, 0, 2,    14.5296),
    ( 2,  0, 0, 2,    14.3784),
    ( 0,  0, 0, 4,    13.8996),
    (-3,  0, 0, 2,    13.1940),
    (-2,  1, 0, 0,    -9.6804),
    (-2, -1, 0, 2,     8.6040),
    ( 1,  0, 0, 1,    -8.4528),
    ( 0, -2, 0, 2,     8.0496),
    ( 2,  1, 0, 0,    -7.6320),
    ( 0,  2, 0, 0,    -7.4484),
    (-1, -2, 0, 2,     7.3728),
    (-1, -1, 0, 4,     4.3740),
    (-1,  0, 0, 3,    -3.2112),
    ( 1,  1, 0, 2,    -2.9160),
    (-2, -1, 0, 4,     2.7324),
    (-1,  2, 0, 0,    -2.5668),
    (-1,  2, 0, 2,    -2.5200),
    (-2,  1, 0, 2,     2.4876),
    ( 1,  0, 0, 4,     1.9764),
    ( 4,  0, 0, 0,     1.9332),
    ( 0, -1, 0, 4,     1.8720),
    (-2,  0, 0, 1,    -1.7532),
    ( 1,  1, 0, 1,     1.2636),
    (-2,  0, 0, 3,    -1.2240),
    (-3,  0, 0, 4,     1.1880),
    ( 2, -1, 0, 2,     1.1772),
    ( 1,  2, 0, 0,    -1.1628),
    (-1,  1, 0, 1,     1.0764),
    ( 3,  0, 0, 2,     1.0584),
];

/// Rows carrying `F`: `(n_l, n_l', n_F, n_D, amplitude″)`.
#[rustfmt::skip]
pub static MOON_SECONDARY: [Term; 11] = [
    ( 0,  0,  2, 0, -411.5952),
    ( 0,  0, -2, 2,   55.1772),
    ( 1,  0,  2, 0,  -45.1008),
    ( 1,  0, -2, 0,   39.5280),
    (-1,  0,  2, 2,   -9.3672),
    ( 1,  0, -2, 2,   -6.3828),
    ( 0,  0,  2, 2,   -5.7420),
    ( 2,  0,  2, 0,   -3.9960),
    ( 0, -1, -2, 2,    2.1456),
    ( 0,  1, -2, 2,   -1.4364),
    ( 2,  0, -2, 0,   -1.3716),
];

/// Direct planetary perturbations: `(amplitude″, phase, rate)` with the
/// argument `2π·(phase + rate·T)`, phase and rate in revolutions.
#[rustfmt::skip]
static PLANETARY_TERMS: [(f64, f64, f64); 11] = [
    (0.82, 0.7736,   -62.5512),
    (0.31, 0.0466,  -125.1025),
    (0.35, 0.5785,   -25.1042),
    (0.66, 0.4591,  1335.8075),
    (0.64, 0.3130,   -91.5680),
    (1.14, 0.1480,  1331.2898),
    (0.21, 0.5918,  1056.5859),
    (0.44, 0.5784,  1322.8595),
    (0.24, 0.2275,    -5.7374),
    (0.28, 0.2965,     2.6929),
    (0.33, 0.3132,     6.3368),
];

/// Mean motion of each base angle, radians per day.
const BASE_RATES: BaseAngles = BaseAngles {
    l: 13.064_992_95 * (std::f64::consts::PI / 180.0),
    l_prime: 0.985_600_28 * (std::f64::consts::PI / 180.0),
    f: 13.229_350_24 * (std::f64::consts::PI / 180.0),
    d: 12.190_749_12 * (std::f64::consts::PI / 180.0),
};

/// Mean elements of the lunar orbit, degrees.
struct MeanElements {
    longitude: f64,
    elongation: f64,
    sun_anomaly: f64,
    moon_anomaly: f64,
    latitude_arg: f64,
}

fn mean_elements(t: f64) -> MeanElements {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    MeanElements {
        longitude: 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
            - t4 / 65194000.0,
        elongation: 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
            - t4 / 113065000.0,
        sun_anomaly: 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0,
        moon_anomaly: 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
            - t4 / 14712000.0,
        latitude_arg: 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
            + t4 / 863310000.0,
    }
}

/// Long-period corrections (arcseconds) to the mean elements, plus the
/// change in the inclination factor.
struct LongPeriod {
    longitude: f64,
    moon_anomaly: f64,
    sun_anomaly: f64,
    latitude_arg: f64,
    elongation: f64,
    inclination: f64,
}

fn long_period(t: f64) -> LongPeriod {
    let s1 = sin_rev(0.19833 + 0.05611 * t);
    let s2 = sin_rev(0.27869 + 0.04508 * t);
    let s3 = sin_rev(0.16827 - 0.36903 * t);
    let s4 = sin_rev(0.34734 - 5.37261 * t);
    let s5 = sin_rev(0.10498 - 5.37899 * t);
    let s6 = sin_rev(0.42681 - 0.41855 * t);
    let s7 = sin_rev(0.14943 - 5.37511 * t);

    let longitude = 0.84 * s1 + 0.31 * s2 + 14.27 * s3 + 7.26 * s4 + 0.28 * s5 + 0.24 * s6;
    let sun_anomaly = -6.40 * s1 - 1.89 * s6;

    LongPeriod {
        longitude,
        moon_anomaly: 2.94 * s1 + 0.31 * s2 + 14.27 * s3 + 9.34 * s4 + 1.12 * s5 + 0.83 * s6,
        sun_anomaly,
        latitude_arg: 0.21 * s1 + 0.31 * s2 + 14.27 * s3 - 88.70 * s4 - 15.30 * s5 + 0.24 * s6
            - 1.86 * s7,
        elongation: longitude - sun_anomaly,
        inclination: -3332e-9 * sin_rev(0.59734 - 5.37261 * t)
            - 539e-9 * sin_rev(0.35498 - 5.37899 * t)
            - 64e-9 * sin_rev(0.39943 - 5.37511 * t),
    }
}

/// Lunar position before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Apparent longitude in degrees, not reduced modulo 360.
    pub longitude_unwrapped: f64,
    /// Angular velocity in longitude, degrees per day.
    pub velocity: f64,
}

impl LunarPosition {
    /// Apparent longitude in [0, 360).
    pub fn longitude(&self) -> f64 {
        normalize_360(self.longitude_unwrapped)
    }
}

/// Compute the Moon's apparent longitude and angular velocity at a
/// dynamical-time JD.
pub fn lunar_position(jd: f64) -> LunarPosition {
    let t = centuries_since_j2000(jd);
    let days = jd - J2000_JD;

    let mean = mean_elements(t);
    let lp = long_period(t);

    let angles = BaseAngles {
        l: (mean.moon_anomaly + lp.moon_anomaly * ARCSEC_TO_DEG).to_radians(),
        l_prime: (mean.sun_anomaly + lp.sun_anomaly * ARCSEC_TO_DEG).to_radians(),
        f: (mean.latitude_arg + lp.latitude_arg * ARCSEC_TO_DEG).to_radians(),
        d: (mean.elongation + lp.elongation * ARCSEC_TO_DEG).to_radians(),
    };

    let ecc = 1.0 - ECCENTRICITY_DECAY_PER_DAY * days;
    let eccentricity_scale = |term: &Term| ecc.powi(i32::from(term.1.unsigned_abs()));
    let inclination = 1.000002708 + 139.978 * lp.inclination;
    let secondary_scale =
        |term: &Term| eccentricity_scale(term) * inclination.powi(i32::from(term.2.unsigned_abs()));

    let periodic = sum_sines(&MOON_PRIMARY, &angles, eccentricity_scale)
        + sum_sines(&MOON_SECONDARY, &angles, secondary_scale);

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .map(|(amp, phase, rate)| amp * sin_rev(phase + rate * t))
        .sum();

    let longitude_unwrapped = mean.longitude
        + (lp.longitude + periodic + planetary) * ARCSEC_TO_DEG
        + nutation(jd);

    let rate = sum_rates(&MOON_PRIMARY, &angles, &BASE_RATES, eccentricity_scale)
        + sum_rates(&MOON_SECONDARY, &angles, &BASE_RATES, secondary_scale);

    LunarPosition {
        longitude_unwrapped,
        velocity: MEAN_DAILY_MOTION + rate * ARCSEC_TO_DEG,
    }
}

/// Apparent longitude of the Moon in [0, 360) at a dynamical-time JD.
///
/// The unreduced value is left in `ctx.moon_longitude_for_yoga` and the
/// angular velocity in `ctx.moon_velocity`.
pub fn moon_longitude(jd: f64, ctx: &mut CalculationContext) -> f64 {
    let pos = lunar_position(jd);
    ctx.moon_longitude_for_yoga = pos.longitude_unwrapped;
    ctx.moon_velocity = pos.velocity;
    pos.longitude()
}
