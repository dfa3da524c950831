use panchanga_vedic::{
    ALL_KARANAS, ALL_NAKSHATRAS, ALL_RASHIS, ALL_TITHIS, ALL_VAARS, ALL_YOGAS, Karana, Nakshatra,
    Rashi, Tithi, Vaar, Yoga, deg_to_dms, dms_to_deg, karana_index_from_slot,
};
use proptest::prelude::*;

#[test]
fn table_lengths() {
    assert_eq!(ALL_VAARS.len(), 7);
    assert_eq!(ALL_NAKSHATRAS.len(), 27);
    assert_eq!(ALL_TITHIS.len(), 30);
    assert_eq!(ALL_KARANAS.len(), 11);
    assert_eq!(ALL_YOGAS.len(), 27);
    assert_eq!(ALL_RASHIS.len(), 12);
}

#[test]
fn karana_slot_reference_cases() {
    assert_eq!(karana_index_from_slot(0), 10);
    assert_eq!(karana_index_from_slot(57), 7);
    assert_eq!(karana_index_from_slot(8), 0);
}

#[test]
fn karana_sequence_over_a_month() {
    // Kimstughna, then Bava..Vishti eight times, then the three closers.
    let names: Vec<&str> = (0..60).map(|s| Karana::from_slot(s).name()).collect();
    assert_eq!(names[0], "Kimstughna");
    assert_eq!(&names[1..8], &["Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti"]);
    assert_eq!(&names[57..], &["Shakuni", "Chatushpada", "Naga"]);
}

proptest! {
    #[test]
    fn from_index_always_in_range(i in any::<u8>()) {
        prop_assert!(Vaar::from_index(i).index() < 7);
        prop_assert!(Nakshatra::from_index(i).index() < 27);
        prop_assert!(Tithi::from_index(i).index() < 30);
        prop_assert!(Karana::from_index(i).index() < 11);
        prop_assert!(Karana::from_slot(i).index() < 11);
        prop_assert!(Yoga::from_index(i).index() < 27);
        prop_assert!(Rashi::from_index(i).index() < 12);
    }

    #[test]
    fn dms_roundtrip(deg in -360.0f64..360.0) {
        let back = dms_to_deg(&deg_to_dms(deg));
        prop_assert!((back - deg).abs() < 1e-9);
    }

    #[test]
    fn nakshatra_and_rashi_agree(lon in 0.0f64..360.0) {
        // Every rashi holds exactly 2¼ nakshatras; nakshatra 9 starts rashi 4.
        let n = Nakshatra::from_longitude(lon).index() as f64;
        let r = Rashi::from_longitude(lon).index() as f64;
        prop_assert!(n * 13.333_333 / 30.0 <= r + 1.0);
        prop_assert!(r * 30.0 < (n + 1.0) * 13.333_334);
    }
}
