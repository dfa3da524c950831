//! Periodic-term evaluator shared by the lunar series.
//!
//! A term is a fixed 5-tuple: integer multipliers of the four Delaunay-style
//! base angles `(l, l', F, D)` followed by an amplitude in arcseconds. The
//! argument of a term is `n_l·l + n_l'·l' + n_F·F + n_D·D`; its contribution
//! is `amplitude · scale · sin(argument)` for positions, and
//! `amplitude · scale · (d argument/dt) · cos(argument)` for rates.
//!
//! `scale` lets a caller apply per-row corrections (e.g. the secular decrease
//! of the Earth's orbital eccentricity for rows that contain `l'`).

/// `(n_l, n_l', n_F, n_D, amplitude_arcsec)`
pub type Term = (i8, i8, i8, i8, f64);

/// The four base angles a term table is written against.
///
/// Values are in radians for [`sum_sines`], or in radians per day when
/// used as the `rates` argument of [`sum_rates`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseAngles {
    /// Moon's mean anomaly.
    pub l: f64,
    /// Sun's mean anomaly.
    pub l_prime: f64,
    /// Moon's argument of latitude.
    pub f: f64,
    /// Mean elongation of the Moon from the Sun.
    pub d: f64,
}

impl BaseAngles {
    /// Linear combination of the base angles for one term.
    pub fn argument(&self, term: &Term) -> f64 {
        f64::from(term.0) * self.l
            + f64::from(term.1) * self.l_prime
            + f64::from(term.2) * self.f
            + f64::from(term.3) * self.d
    }
}

/// `Σ amplitude · scale(term) · sin(argument)` over a table, in arcseconds.
pub fn sum_sines<S>(table: &[Term], angles: &BaseAngles, scale: S) -> f64
where
    S: Fn(&Term) -> f64,
{
    table
        .iter()
        .map(|term| term.4 * scale(term) * angles.argument(term).sin())
        .sum()
}

/// Time derivative of [`sum_sines`], in arcseconds per day.
///
/// `rates` holds the daily motion of each base angle in radians per day.
pub fn sum_rates<S>(table: &[Term], angles: &BaseAngles, rates: &BaseAngles, scale: S) -> f64
where
    S: Fn(&Term) -> f64,
{
    table
        .iter()
        .map(|term| term.4 * scale(term) * rates.argument(term) * angles.argument(term).cos())
        .sum()
}
