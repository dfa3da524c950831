//! Time handling for the panchanga engine.
//!
//! This crate provides:
//! - Julian Day ↔ civil calendar conversions (Julian/Gregorian reform aware)
//! - Weekday lookup from a Julian Day
//! - The ΔT (TT − UT) model used to move between civil and dynamical time
//! - `CivilTime`, a validated civil instant with a fixed UTC offset

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;

pub use civil::{CivilTime, MAX_UTC_OFFSET_HOURS};
pub use delta_t::{DeltaT, delta_t, delta_t_hours};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J1900_JD, J2000_JD, centuries_since_j1900, centuries_since_j2000,
    civil_to_jd, days_in_month, decimal_year, jd_to_civil, weekday_index,
};
