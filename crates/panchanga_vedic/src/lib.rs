//! Panchanga element tables.
//!
//! Index ↔ name lookups for the six almanac elements, the irregular
//! karana slot mapping, and degree-minute-second formatting.

pub mod karana;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use karana::{
    ALL_KARANAS, KARANA_SEGMENT_DEG, KARANAS_PER_MONTH, Karana, karana_index_from_slot,
};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra};
pub use rashi::{ALL_RASHIS, Dms, Rashi, deg_to_dms, dms_to_deg};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi};
pub use vaar::{ALL_VAARS, Vaar};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga};
