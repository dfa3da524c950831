//! Almanac assembly for one civil instant.
//!
//! One Sun/Moon evaluation at the request instant classifies every
//! element; four boundary solves then find where the tithi, karana,
//! nakshatra and yoga begin and end. Boundary instants are reported on the
//! caller's local clock.

use panchanga_engine::{CalculationContext, Luminaries};
use panchanga_time::{CivilTime, DeltaT, decimal_year, delta_t, weekday_index};
use panchanga_vedic::{Karana, Nakshatra, Rashi, Tithi, Vaar, Yoga, deg_to_dms};
use tracing::{debug, warn};

use crate::almanac_types::{
    AlmanacResult, AyanamsaInfo, KaranaInfo, NakshatraInfo, RaasiInfo, RangeWarning, TithiInfo,
    YogaInfo,
};
use crate::config::AlmanacConfig;
use crate::error::AlmanacError;
use crate::solver::{BoundarySolver, Edge, Element, slot, yoga_multiple};

/// Everything derived from the request instant before any boundary solve.
struct Request<'a> {
    solver: BoundarySolver<'a>,
    luminaries: Luminaries,
    jd_local: f64,
    utc_offset_hours: f64,
    warnings: Vec<RangeWarning>,
}

impl<'a> Request<'a> {
    fn prepare(instant: &CivilTime, config: &'a AlmanacConfig) -> Result<Self, AlmanacError> {
        config.validate()?;
        instant.validate()?;

        let jd_local = instant.to_jd_local();
        let jd_ut = instant.to_jd_ut();
        let dt = delta_t(jd_ut);
        let jd_tt = jd_ut + dt.days();

        let warnings = range_warnings(jd_ut, &dt);

        let kepler = config.kepler();
        let mut ctx = CalculationContext::new(dt.hours(), jd_tt);
        let luminaries = ctx.evaluate(jd_tt, &kepler)?;
        debug!(
            jd_ut,
            jd_tt,
            sun = luminaries.sun,
            moon = luminaries.moon,
            ayanamsa = ctx.ayanamsa_deg,
            "request evaluated"
        );

        Ok(Self {
            solver: BoundarySolver {
                config,
                kepler,
                ctx,
                jd_tt,
            },
            luminaries,
            jd_local,
            utc_offset_hours: instant.utc_offset_hours,
            warnings,
        })
    }

    fn ctx(&self) -> &CalculationContext {
        &self.solver.ctx
    }

    fn local(&self, jd_tt: f64) -> CivilTime {
        let jd = self.ctx().to_local_jd(jd_tt, self.utc_offset_hours);
        CivilTime::from_jd_local(jd, self.utc_offset_hours)
    }

    fn edges(&self, element: Element, index: i64) -> Result<(CivilTime, CivilTime), AlmanacError> {
        let start = self.solver.edge(element, index, Edge::Start)?;
        let end = self.solver.edge(element, index, Edge::End)?;
        Ok((self.local(start), self.local(end)))
    }

    fn weekday(&self) -> Vaar {
        Vaar::from_index(weekday_index(self.jd_local))
    }

    fn tithi(&self) -> Result<TithiInfo, AlmanacError> {
        let idx = slot(Element::Tithi, self.luminaries.elongation());
        let tithi = Tithi::from_index(idx as u8);
        let (start, end) = self.edges(Element::Tithi, idx)?;
        Ok(TithiInfo {
            tithi,
            index: tithi.index(),
            paksha: tithi.paksha(),
            tithi_in_paksha: tithi.tithi_in_paksha(),
            start,
            end,
        })
    }

    fn karana(&self) -> Result<KaranaInfo, AlmanacError> {
        let raw = slot(Element::Karana, self.luminaries.elongation());
        let karana = Karana::from_slot(raw as u8);
        let (start, end) = self.edges(Element::Karana, raw)?;
        Ok(KaranaInfo {
            karana,
            index: karana.index(),
            slot: raw as u8,
            start,
            end,
        })
    }

    fn nakshatra(&self) -> Result<NakshatraInfo, AlmanacError> {
        let moon = self.ctx().sidereal(self.luminaries.moon);
        let idx = slot(Element::Nakshatra, moon);
        let nakshatra = Nakshatra::from_index(idx as u8);
        let (start, end) = self.edges(Element::Nakshatra, idx)?;
        Ok(NakshatraInfo {
            nakshatra,
            index: nakshatra.index(),
            pada: Nakshatra::pada(moon),
            start,
            end,
        })
    }

    fn yoga(&self) -> Result<YogaInfo, AlmanacError> {
        let multiple = yoga_multiple(self.ctx().yoga_sum());
        let yoga = Yoga::from_index(multiple.rem_euclid(27) as u8);
        let (start, end) = self.edges(Element::Yoga, multiple)?;
        Ok(YogaInfo {
            yoga,
            index: yoga.index(),
            start,
            end,
        })
    }

    fn raasi(&self) -> RaasiInfo {
        let rashi = Rashi::from_longitude(self.ctx().sidereal(self.luminaries.moon));
        RaasiInfo {
            rashi,
            index: rashi.index(),
        }
    }

    fn ayanamsa(&self) -> AyanamsaInfo {
        let degrees = self.ctx().ayanamsa_deg;
        AyanamsaInfo {
            degrees,
            formatted: deg_to_dms(degrees).to_string(),
        }
    }
}

fn range_warnings(jd_ut: f64, dt: &DeltaT) -> Vec<RangeWarning> {
    if !dt.extrapolated {
        return Vec::new();
    }
    let year = decimal_year(jd_ut);
    warn!(
        year,
        delta_t_seconds = dt.seconds,
        "ΔT extrapolated outside the 1620-2010 table"
    );
    vec![RangeWarning::DeltaTExtrapolated {
        year,
        delta_t_seconds: dt.seconds,
    }]
}

/// Compute every almanac element for a civil instant with default settings.
pub fn calculate(instant: &CivilTime) -> Result<AlmanacResult, AlmanacError> {
    calculate_with_config(instant, &AlmanacConfig::default())
}

/// Compute every almanac element for a civil instant.
pub fn calculate_with_config(
    instant: &CivilTime,
    config: &AlmanacConfig,
) -> Result<AlmanacResult, AlmanacError> {
    let req = Request::prepare(instant, config)?;
    Ok(AlmanacResult {
        weekday: req.weekday(),
        tithi: req.tithi()?,
        nakshatra: req.nakshatra()?,
        karana: req.karana()?,
        yoga: req.yoga()?,
        raasi: req.raasi(),
        ayanamsa: req.ayanamsa(),
        warnings: req.warnings,
    })
}

/// Tithi in force at `instant`, with its start and end.
pub fn tithi_for(instant: &CivilTime, config: &AlmanacConfig) -> Result<TithiInfo, AlmanacError> {
    Request::prepare(instant, config)?.tithi()
}

/// Karana in force at `instant`, with its start and end.
pub fn karana_for(
    instant: &CivilTime,
    config: &AlmanacConfig,
) -> Result<KaranaInfo, AlmanacError> {
    Request::prepare(instant, config)?.karana()
}

/// Nakshatra of the Moon at `instant`, with its start and end.
pub fn nakshatra_for(
    instant: &CivilTime,
    config: &AlmanacConfig,
) -> Result<NakshatraInfo, AlmanacError> {
    Request::prepare(instant, config)?.nakshatra()
}

/// Yoga in force at `instant`, with its start and end.
pub fn yoga_for(instant: &CivilTime, config: &AlmanacConfig) -> Result<YogaInfo, AlmanacError> {
    Request::prepare(instant, config)?.yoga()
}
