//! Ayanamsa: offset between the tropical and sidereal zodiacs.
//!
//! Lahiri-style: general precession in longitude since 1900 with the two
//! largest nutation terms, rebased by a fixed constant so that the sidereal
//! zero point sits near the star Spica's opposite. The value is negative;
//! a sidereal longitude is `tropical + ayanamsa`.

use panchanga_time::centuries_since_j1900;

use crate::angle::ARCSEC_TO_DEG;

/// Fixed rebasing offset, arcseconds.
const AYANAMSA_OFFSET_ARCSEC: f64 = 80_861.27;

/// Ayanamsa in degrees (negative) at a Julian Day.
pub fn ayanamsa(jd: f64) -> f64 {
    let t = centuries_since_j1900(jd);
    let t2 = t * t;

    let node = (259.183275 - 1934.142008333206 * t + 0.0020777778 * t2).to_radians();
    let sun_lon = (279.696678 + 36000.76892 * t + 0.0003025 * t2).to_radians();

    let aya = 17.23 * node.sin() + 1.27 * (2.0 * sun_lon).sin() - (5025.64 + 1.11 * t) * t;
    (aya - AYANAMSA_OFFSET_ARCSEC) * ARCSEC_TO_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahiri_at_j2000() {
        // Lahiri ayanamsa at J2000.0 ≈ 23°51′
        let aya = ayanamsa(2_451_545.0);
        assert!((aya + 23.853).abs() < 0.01, "got {aya}");
    }

    #[test]
    fn lahiri_2024() {
        let aya = ayanamsa(2_460_310.5);
        assert!((aya + 24.19).abs() < 0.01, "got {aya}");
    }

    #[test]
    fn grows_about_fifty_arcsec_per_year() {
        let a = ayanamsa(2_451_545.0);
        let b = ayanamsa(2_451_545.0 + 36_525.0);
        let per_year = (a - b) * 3600.0 / 100.0;
        assert!((per_year - 50.3).abs() < 0.6, "got {per_year}″/yr");
    }
}
