//! Boundary solver: the instant at which an angular quantity reaches a
//! target.
//!
//! Each step evaluates the quantity at a trial JD, wraps the error against
//! the target to (-180, 180] and advances by `error / rate`, the rate
//! coming from the Moon's angular velocity at the trial instant. The
//! request's context is copied for every trial so the request-time values
//! survive; the ayanamsa stays at its request-time value throughout.

use panchanga_engine::{
    CalculationContext, KeplerConfig, nearest_new_moon, normalize_360, normalize_to_pm180,
};
use panchanga_vedic::{KARANA_SEGMENT_DEG, NAKSHATRA_SPAN_DEG, TITHI_SEGMENT_DEG, YOGA_SEGMENT_DEG};
use tracing::{debug, trace};

use crate::config::AlmanacConfig;
use crate::error::AlmanacError;

/// Sun's contribution to the yoga rate, degrees per day.
const YOGA_SUN_RATE: f64 = 1.014_561_663_3;

/// Sun's mean motion subtracted from the Moon's for elongation rates.
const ELONGATION_SUN_RATE: f64 = 1.0;

/// Almanac elements that have start and end instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Tithi,
    Karana,
    Nakshatra,
    Yoga,
}

impl Element {
    /// Lower-case name, as used in logs and errors.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Karana => "karana",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
        }
    }

    /// Angular width of one element, degrees.
    pub const fn segment_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SEGMENT_DEG,
            Self::Karana => KARANA_SEGMENT_DEG,
            Self::Nakshatra => NAKSHATRA_SPAN_DEG,
            Self::Yoga => YOGA_SEGMENT_DEG,
        }
    }

    /// Number of elements in one full cycle of the underlying angle.
    const fn segments(self) -> i64 {
        match self {
            Self::Tithi => 30,
            Self::Karana => 60,
            Self::Nakshatra | Self::Yoga => 27,
        }
    }
}

/// Which side of the current element an edge lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    Start,
    End,
}

impl Edge {
    const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }

    const fn offset(self) -> i64 {
        match self {
            Self::Start => 0,
            Self::End => 1,
        }
    }
}

/// Request-time state shared by every boundary solve of one request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoundarySolver<'a> {
    pub config: &'a AlmanacConfig,
    pub kepler: KeplerConfig,
    /// Context as evaluated at the request instant.
    pub ctx: CalculationContext,
    /// Request instant, dynamical time.
    pub jd_tt: f64,
}

impl BoundarySolver<'_> {
    /// JD (TT) of one edge of `element`, whose current position in its
    /// cycle is `index`.
    ///
    /// For tithi and karana `index` is the slot within the lunar month
    /// (0..30 or 0..60); for nakshatra the 0..27 index; for yoga the
    /// unreduced multiple `⌊raw / segment⌋` of the anchored sum.
    pub fn edge(&self, element: Element, index: i64, edge: Edge) -> Result<f64, AlmanacError> {
        let n = index + edge.offset();
        let target = n as f64 * element.segment_deg();

        match element {
            Element::Tithi | Element::Karana => {
                if n == 0 || n == element.segments() {
                    return Ok(self.new_moon_edge(element, edge));
                }
                self.iterate(element, edge, |ctx, jd| {
                    let lum = ctx.evaluate(jd, &self.kepler)?;
                    let error = normalize_to_pm180(lum.sun + target - lum.moon);
                    Ok((error, ctx.moon_velocity - ELONGATION_SUN_RATE))
                })
            }
            Element::Nakshatra => self.iterate(element, edge, |ctx, jd| {
                let lum = ctx.evaluate(jd, &self.kepler)?;
                let error = normalize_to_pm180(target - ctx.sidereal(lum.moon));
                Ok((error, ctx.moon_velocity))
            }),
            Element::Yoga => self.iterate(element, edge, |ctx, jd| {
                ctx.evaluate(jd, &self.kepler)?;
                let error = normalize_to_pm180(target - ctx.yoga_sum());
                Ok((error, ctx.moon_velocity + YOGA_SUN_RATE))
            }),
        }
    }

    /// Month edge from the new-moon series, kept on its side of the request.
    ///
    /// The series and the engine's own zero elongation differ by up to a
    /// couple of minutes, so a request in that gap would otherwise fall
    /// outside its own tithi. The edge is then pinned to the request.
    fn new_moon_edge(&self, element: Element, edge: Edge) -> f64 {
        let estimate = nearest_new_moon(self.jd_tt);
        let jd = match edge {
            Edge::Start => estimate.min(self.jd_tt),
            Edge::End => estimate.max(self.jd_tt),
        };
        if jd == estimate {
            debug!(
                element = element.name(),
                edge = edge.name(),
                jd,
                "edge taken from new-moon estimate"
            );
        } else {
            debug!(
                element = element.name(),
                edge = edge.name(),
                estimate,
                gap_seconds = (estimate - jd) * 86_400.0,
                "new-moon estimate lies across the request; edge pinned to request"
            );
        }
        jd
    }

    /// Fixed-point iteration from the request instant. `measure` returns the
    /// wrapped error (degrees) and its rate (degrees per day) at a trial JD.
    fn iterate<F>(&self, element: Element, edge: Edge, measure: F) -> Result<f64, AlmanacError>
    where
        F: Fn(&mut CalculationContext, f64) -> Result<(f64, f64), AlmanacError>,
    {
        let mut jd = self.jd_tt;
        for iteration in 0..self.config.max_iterations {
            let mut trial = self.ctx;
            let (error, rate) = measure(&mut trial, jd)?;
            trace!(
                element = element.name(),
                edge = edge.name(),
                iteration,
                jd,
                error,
                "boundary step"
            );

            if error.abs() <= self.config.tolerance_deg {
                debug!(
                    element = element.name(),
                    edge = edge.name(),
                    iterations = iteration,
                    jd,
                    "boundary converged"
                );
                return Ok(jd);
            }

            let next = jd + error / rate;
            if !next.is_finite() {
                debug!(
                    element = element.name(),
                    edge = edge.name(),
                    jd,
                    rate,
                    "non-finite step"
                );
                return Err(AlmanacError::Convergence {
                    stage: element.name(),
                    iterations: iteration + 1,
                    cause: Some("non-finite step"),
                });
            }
            jd = next;
        }

        debug!(
            element = element.name(),
            edge = edge.name(),
            max_iterations = self.config.max_iterations,
            "boundary solve hit iteration cap"
        );
        Err(AlmanacError::Convergence {
            stage: element.name(),
            iterations: self.config.max_iterations,
            cause: None,
        })
    }
}

/// Unreduced yoga multiple `⌊raw / segment⌋` for an anchored sum.
pub(crate) fn yoga_multiple(yoga_sum: f64) -> i64 {
    (yoga_sum / YOGA_SEGMENT_DEG).floor() as i64
}

/// Position of a [0, 360) angle within `element`'s cycle.
pub(crate) fn slot(element: Element, angle_deg: f64) -> i64 {
    let raw = (normalize_360(angle_deg) / element.segment_deg()).floor() as i64;
    raw.min(element.segments() - 1)
}
