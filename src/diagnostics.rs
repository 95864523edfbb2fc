use crate::analytic::{v_exact, x_exact};
use crate::dynamics::state::{SimConfig, State};
use crate::error::SimError;
use crate::sim::{integrate, Method};

// ---------------------------------------------------------------------------
// Derived series
// ---------------------------------------------------------------------------

/// Energy x² + v² at each snapshot.
pub fn energy_series(trajectory: &[State]) -> Vec<f64> {
    trajectory.iter().map(|s| s.energy()).collect()
}

/// Signed position error, exact minus computed, at each snapshot.
pub fn position_errors(trajectory: &[State], x0: f64, v0: f64) -> Vec<f64> {
    trajectory
        .iter()
        .map(|s| x_exact(s.time, x0, v0) - s.x)
        .collect()
}

/// Signed velocity error, exact minus computed, at each snapshot.
pub fn velocity_errors(trajectory: &[State], x0: f64, v0: f64) -> Vec<f64> {
    trajectory
        .iter()
        .map(|s| v_exact(s.time, x0, v0) - s.v)
        .collect()
}

/// Largest signed position error over the trajectory (-inf when empty).
pub fn max_position_error(trajectory: &[State], x0: f64, v0: f64) -> f64 {
    trajectory
        .iter()
        .map(|s| x_exact(s.time, x0, v0) - s.x)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Run one integration per step size over a fixed window; returns
/// (h, max signed position error) pairs aligned with `steps`.
pub fn max_error_sweep(
    t_min: f64,
    t_max: f64,
    x0: f64,
    v0: f64,
    method: Method,
    steps: &[f64],
) -> Result<Vec<(f64, f64)>, SimError> {
    let mut points = Vec::with_capacity(steps.len());
    for &h in steps {
        let config = SimConfig::new(t_min, t_max, h);
        let trajectory = integrate(&config, x0, v0, method)?;
        points.push((h, max_position_error(&trajectory, x0, v0)));
    }
    Ok(points)
}

// ---------------------------------------------------------------------------
// Energy summary
// ---------------------------------------------------------------------------

/// Energy statistics computed from a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySummary {
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    /// Largest |energy - first| over the run.
    pub max_deviation: f64,
}

impl EnergySummary {
    /// Compute the summary; None for an empty trajectory.
    pub fn from_trajectory(trajectory: &[State]) -> Option<Self> {
        let first = trajectory.first()?.energy();
        let mut summary = EnergySummary {
            first,
            last: first,
            min: first,
            max: first,
            max_deviation: 0.0,
        };
        for s in trajectory {
            let e = s.energy();
            summary.last = e;
            summary.min = summary.min.min(e);
            summary.max = summary.max.max(e);
            summary.max_deviation = summary.max_deviation.max((e - first).abs());
        }
        Some(summary)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
