//! Celestial position engine for almanac computation.
//!
//! This crate provides:
//! - Apparent longitudes of the Sun and Moon and the Moon's angular velocity
//! - Nutation in longitude and the Lahiri-style ayanamsa
//! - A bounded Newton-Raphson Kepler solver
//! - A closed-form new-moon estimator
//! - `CalculationContext`, the per-request scratch record threaded through
//!   every evaluation
//!
//! All functions take Julian Days in dynamical time (TT) unless noted.

pub mod angle;
pub mod ayanamsa;
pub mod context;
pub mod error;
pub mod kepler;
pub mod moon;
pub mod new_moon;
pub mod nutation;
pub mod perturbation;
pub mod sun;

pub use angle::{normalize_360, normalize_to_pm180};
pub use ayanamsa::ayanamsa;
pub use context::{CalculationContext, Luminaries, YOGA_MOON_ANCHOR, YOGA_SUN_ANCHOR};
pub use error::EngineError;
pub use kepler::{KeplerConfig, KeplerSolution, solve_kepler, true_anomaly};
pub use moon::{LunarPosition, MEAN_DAILY_MOTION, lunar_position, moon_longitude};
pub use new_moon::{
    NEW_MOON_EPOCH_JD, SYNODIC_MONTH_DAYS, lunation_containing, nearest_new_moon, new_moon_jd,
};
pub use nutation::nutation;
pub use sun::{SolarPosition, solar_position, sun_longitude};
