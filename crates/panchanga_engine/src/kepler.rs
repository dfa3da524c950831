//! Kepler's equation, solved by Newton-Raphson.

use tracing::debug;

use crate::error::EngineError;

/// Convergence settings for [`solve_kepler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerConfig {
    /// Stop once the residual of Kepler's equation is within this many degrees.
    pub tolerance_deg: f64,
    /// Newton steps allowed before giving up.
    pub max_iterations: u32,
}

impl Default for KeplerConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 1e-9,
            max_iterations: 50,
        }
    }
}

/// Result of a Kepler solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians.
    pub eccentric_anomaly: f64,
    /// Newton steps taken.
    pub iterations: u32,
}

/// Solve `M + e·sin E − E = 0` for the eccentric anomaly `E`.
///
/// Starts from `E₀ = M`. For the Earth's orbit (e ≈ 0.0167) this settles in
/// three or four steps.
pub fn solve_kepler(
    mean_anomaly_deg: f64,
    eccentricity: f64,
    config: &KeplerConfig,
) -> Result<KeplerSolution, EngineError> {
    if !mean_anomaly_deg.is_finite() || !eccentricity.is_finite() {
        return Err(EngineError::NonFinite("Kepler equation input"));
    }

    let m = mean_anomaly_deg.to_radians();
    let tol = config.tolerance_deg.to_radians();
    let mut e_anom = m;

    for iterations in 0..=config.max_iterations {
        let residual = m + eccentricity * e_anom.sin() - e_anom;
        if residual.abs() <= tol {
            return Ok(KeplerSolution {
                eccentric_anomaly: e_anom,
                iterations,
            });
        }
        if iterations == config.max_iterations {
            break;
        }
        e_anom += residual / (1.0 - eccentricity * e_anom.cos());
    }

    debug!(
        mean_anomaly_deg,
        eccentricity,
        max_iterations = config.max_iterations,
        "Kepler solve did not converge"
    );
    Err(EngineError::NoConvergence {
        solver: "kepler",
        iterations: config.max_iterations,
    })
}

/// True anomaly (radians) from the eccentric anomaly.
///
/// Near `E = π` the half-angle tangent blows up; there the true anomaly
/// equals `E`.
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    if (std::f64::consts::PI - eccentric_anomaly).abs() < 1e-10 {
        return eccentric_anomaly;
    }
    let factor = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt();
    2.0 * (factor * (eccentric_anomaly / 2.0).tan()).atan()
}
