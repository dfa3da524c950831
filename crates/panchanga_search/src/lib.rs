//! Panchanga assembly: element classification and boundary instants.
//!
//! This crate provides:
//! - `calculate`, the full almanac for one civil instant
//! - Single-element queries (`tithi_for`, `karana_for`, ...)
//! - The boundary solver that finds where each element begins and ends
//! - `AlmanacConfig`, solver tolerances loadable from TOML
//! - `positions_at`, a diagnostic view of one engine evaluation

pub mod almanac;
pub mod almanac_types;
pub mod config;
pub mod error;
pub mod positions;
pub(crate) mod solver;

pub use almanac::{
    calculate, calculate_with_config, karana_for, nakshatra_for, tithi_for, yoga_for,
};
pub use almanac_types::{
    AlmanacResult, AyanamsaInfo, KaranaInfo, NakshatraInfo, RaasiInfo, RangeWarning, TithiInfo,
    YogaInfo,
};
pub use config::AlmanacConfig;
pub use error::AlmanacError;
pub use positions::{PositionSnapshot, positions_at, positions_at_with_config};
