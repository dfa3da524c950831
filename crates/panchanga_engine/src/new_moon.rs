//! Closed-form new-moon estimator.
//!
//! Lunation `k` counts new moons from the one of 1900 January 0
//! (k = 0). The instant is the mean conjunction plus a 13-term periodic
//! correction in the Sun's and Moon's mean anomalies and the Moon's
//! argument of latitude. Results are in dynamical time and good to a
//! couple of minutes.

use crate::angle::normalize_360;

/// Mean new moon of lunation 0, JD (TT).
pub const NEW_MOON_EPOCH_JD: f64 = 2_415_020.759_33;

/// Mean synodic month, days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_68;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Each row: `[n_M☉, n_M☾, n_F]` and `(A, A')`, the term being
/// `(A + A'·T)·sin(argument)` days.
#[rustfmt::skip]
static NEW_MOON_TERMS: [([i8; 3], f64, f64); 13] = [
    //  M☉  M☾   F        A          A'
    ([  1,  0,  0],  0.1734, -0.000393),
    ([  2,  0,  0],  0.0021,  0.0),
    ([  0,  1,  0], -0.4068,  0.0),
    ([  0,  2,  0],  0.0161,  0.0),
    ([  0,  3,  0], -0.0004,  0.0),
    ([  0,  0,  2],  0.0104,  0.0),
    ([  1,  1,  0], -0.0051,  0.0),
    ([  1, -1,  0], -0.0074,  0.0),
    ([  1,  0,  2],  0.0004,  0.0),
    ([ -1,  0,  2], -0.0004,  0.0),
    ([  0,  1,  2], -0.0006,  0.0),
    ([  0, -1,  2],  0.0010,  0.0),
    ([  1,  2,  0],  0.0005,  0.0),
];

/// Mean conjunction for lunation `k`, before the periodic correction.
fn mean_new_moon(k: f64, t: f64) -> f64 {
    let t2 = t * t;
    NEW_MOON_EPOCH_JD + SYNODIC_MONTH_DAYS * k + 0.0001178 * t2 - 0.000000155 * t2 * t
        + 0.00033 * (166.56 + 132.87 * t - 0.009173 * t2).to_radians().sin()
}

/// Periodic correction to the mean conjunction, days.
pub fn new_moon_correction(lunation: i64) -> f64 {
    let k = lunation as f64;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let args = [
        normalize_360(359.2242 + 29.105_356_08 * k - 0.0000333 * t2 - 0.00000347 * t3),
        normalize_360(306.0253 + 385.816_918_06 * k + 0.0107306 * t2 + 0.00001236 * t3),
        normalize_360(21.2964 + 390.670_506_46 * k - 0.0016528 * t2 - 0.00000239 * t3),
    ]
    .map(f64::to_radians);

    NEW_MOON_TERMS
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

/// JD (TT) of the new moon of lunation `k`.
pub fn new_moon_jd(lunation: i64) -> f64 {
    let k = lunation as f64;
    mean_new_moon(k, k / LUNATIONS_PER_CENTURY) + new_moon_correction(lunation)
}

/// First guess at the lunation in progress at `jd`.
pub fn lunation_estimate(jd: f64) -> i64 {
    ((jd - 2_415_020.0) / 365.25 * 12.3685).floor() as i64
}

/// Lunation `k` with `new_moon_jd(k) <= jd < new_moon_jd(k + 1)`.
pub fn lunation_containing(jd: f64) -> i64 {
    let mut k = lunation_estimate(jd);
    // The estimate is never more than one lunation off.
    for _ in 0..3 {
        if new_moon_jd(k) > jd {
            k -= 1;
        } else if new_moon_jd(k + 1) <= jd {
            k += 1;
        } else {
            break;
        }
    }
    k
}

/// JD (TT) of the new moon closest to `jd`.
pub fn nearest_new_moon(jd: f64) -> f64 {
    let k = lunation_containing(jd);
    let before = new_moon_jd(k);
    let after = new_moon_jd(k + 1);
    if jd - before <= after - jd { before } else { after }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunation_zero_near_epoch() {
        let jd = new_moon_jd(0);
        assert!((jd - NEW_MOON_EPOCH_JD).abs() < 1.0, "got {jd}");
        assert!(new_moon_correction(0).abs() < 1.0);
    }

    #[test]
    fn new_moon_2024_01_11() {
        // New moon 2024-01-11 11:57 UT.
        let jd_ut = 2_460_321.0 - 0.5 + (11.0 + 57.0 / 60.0) / 24.0;
        let k = lunation_containing(jd_ut + 0.1);
        let jd = new_moon_jd(k);
        assert!((jd - jd_ut).abs() * 1440.0 < 10.0, "off by {} min", (jd - jd_ut) * 1440.0);
    }

    #[test]
    fn bracket_holds() {
        for i in 0..50 {
            let jd = 2_440_000.5 + f64::from(i) * 97.3;
            let k = lunation_containing(jd);
            assert!(new_moon_jd(k) <= jd && jd < new_moon_jd(k + 1), "jd {jd}");
        }
    }

    #[test]
    fn consecutive_lunations_are_a_synodic_month_apart() {
        for k in [0, 500, 1200, 1500] {
            let gap = new_moon_jd(k + 1) - new_moon_jd(k);
            assert!((gap - SYNODIC_MONTH_DAYS).abs() < 0.6, "k={k}: {gap}");
        }
    }

    #[test]
    fn nearest_picks_closer_side() {
        let nm = new_moon_jd(1533);
        assert_eq!(nearest_new_moon(nm + 3.0), nm);
        assert_eq!(nearest_new_moon(nm - 3.0), nm);
    }
}
