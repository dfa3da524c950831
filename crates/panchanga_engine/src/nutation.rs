//! Nutation in longitude, 13-term series.
//!
//! Arguments are the Sun's and Moon's mean longitudes and mean anomalies
//! and the longitude of the Moon's ascending node, as polynomials in Julian
//! centuries from 1900 January 0.5. The elongation `D = L☾ − L☉` enters
//! through the multipliers of the two mean longitudes. Good to about 0.01″
//! against the full IAU 1980 theory, which is far below what almanac
//! boundaries need.

use panchanga_time::centuries_since_j1900;

use crate::angle::ARCSEC_TO_DEG;

/// Mean arguments in radians: `[L☉, L☾, M☉, M☾, Ω]`.
fn mean_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    [
        279.6967 + 36000.7689 * t + 0.000303 * t2,
        270.4342 + 481267.8831 * t - 0.001133 * t2,
        358.4758 + 35999.0498 * t - 0.000150 * t2,
        296.1046 + 477198.8491 * t + 0.009192 * t2,
        259.1833 - 1934.1420 * t + 0.002078 * t2,
    ]
    .map(f64::to_radians)
}

/// Each row: `[n_L☉, n_L☾, n_M☉, n_M☾, n_Ω]` and `(A, A')` so that the term
/// is `(A + A'·T)·sin(argument)` arcseconds.
#[rustfmt::skip]
static NUTATION_TERMS: [([i8; 5], f64, f64); 13] = [
    //  L☉  L☾  M☉  M☾   Ω         A         A'
    ([  0,  0,  0,  0,  1], -17.2327, -0.01737),
    ([  2,  0,  0,  0,  0],  -1.2729, -0.00013),
    ([  0,  0,  0,  0,  2],   0.2088,  0.0),
    ([  0,  2,  0,  0,  0],  -0.2037,  0.0),
    ([  0,  0,  1,  0,  0],   0.1261, -0.00031),
    ([  0,  0,  0,  1,  0],   0.0675,  0.0),
    ([  2,  0,  1,  0,  0],  -0.0497,  0.00012),
    ([  0,  2,  0,  0, -1],  -0.0342,  0.0),
    ([  0,  2,  0,  1,  0],  -0.0261,  0.0),
    ([  2,  0, -1,  0,  0],   0.0214,  0.0),
    ([  2, -2,  0,  1,  0],  -0.0149,  0.0),  // M☾ − 2D
    ([  2,  0,  0,  0, -1],   0.0124,  0.0),
    ([  0,  2,  0, -1,  0],   0.0114,  0.0),
];

/// Nutation in longitude Δψ, in arcseconds.
pub fn nutation_arcsec(jd: f64) -> f64 {
    let t = centuries_since_j1900(jd);
    let args = mean_arguments(t);

    NUTATION_TERMS
        .iter()
        .map(|(mult, a, a_rate)| {
            let arg: f64 = mult
                .iter()
                .zip(args.iter())
                .map(|(&n, &x)| f64::from(n) * x)
                .sum();
            (a + a_rate * t) * arg.sin()
        })
        .sum()
}

/// Nutation in longitude Δψ, in degrees.
pub fn nutation(jd: f64) -> f64 {
    nutation_arcsec(jd) * ARCSEC_TO_DEG
}
