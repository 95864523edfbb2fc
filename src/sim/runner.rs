use crate::dynamics::state::{SimConfig, State};
use crate::error::SimError;

use super::integrator::Method;

// ---------------------------------------------------------------------------
// Uniform grids
// ---------------------------------------------------------------------------

/// Evenly spaced values from start (inclusive) to stop (exclusive).
///
/// Entry i sits at start + i*step and the count is ceil((stop - start)/step).
/// Empty when the interval is empty or the step is not positive.
pub fn uniform_grid(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0 && step.is_finite()) || stop <= start {
        return Vec::new();
    }
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

// ---------------------------------------------------------------------------
// Integration driver
// ---------------------------------------------------------------------------

/// Integrate the oscillator over the config window with the given method.
///
/// Returns one snapshot per grid point; entry 0 carries (x0, v0) unchanged.
/// An empty window (t_min >= t_max) yields an empty trajectory; a step size
/// that is not a positive finite number fails before any computation.
pub fn integrate(
    config: &SimConfig,
    x0: f64,
    v0: f64,
    method: Method,
) -> Result<Vec<State>, SimError> {
    if !(config.h > 0.0 && config.h.is_finite()) {
        return Err(SimError::InvalidStep(config.h));
    }

    let times = uniform_grid(config.t_min, config.t_max, config.h);
    let mut trajectory = Vec::with_capacity(times.len());
    if times.is_empty() {
        return Ok(trajectory);
    }

    let mut state = State { time: times[0], x: x0, v: v0 };
    trajectory.push(state);

    for &t in &times[1..] {
        let (x, v) = method.step(&state, config.h);
        state = State { time: t, x, v };
        trajectory.push(state);
    }

    Ok(trajectory)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::x_exact;
    use approx::assert_relative_eq;

    #[test]
    fn grid_has_arange_length_and_spacing() {
        let grid = uniform_grid(0.0, 15.0, 0.05);
        assert_eq!(grid.len(), 300);
        assert_eq!(grid[0], 0.0);
        assert_relative_eq!(grid[1], 0.05, epsilon = 1e-15);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
        assert!(*grid.last().unwrap() < 15.0);
    }

    #[test]
    fn grid_is_empty_for_degenerate_inputs() {
        assert!(uniform_grid(1.0, 1.0, 0.1).is_empty());
        assert!(uniform_grid(2.0, 1.0, 0.1).is_empty());
        assert!(uniform_grid(0.0, 1.0, 0.0).is_empty());
        assert!(uniform_grid(0.0, 1.0, -0.1).is_empty());
    }

    #[test]
    fn trajectory_matches_grid_and_keeps_initial_state_exactly() {
        let config = SimConfig::default();
        for method in Method::ALL {
            let traj = integrate(&config, 1.0, 2.0, method).unwrap();
            assert_eq!(traj.len(), 300);
            assert_eq!(traj[0].time, 0.0);
            assert_eq!(traj[0].x, 1.0);
            assert_eq!(traj[0].v, 2.0);
            for (i, s) in traj.iter().enumerate() {
                assert_eq!(s.time, i as f64 * 0.05);
            }
        }
    }

    #[test]
    fn nonpositive_step_fails_fast() {
        for h in [0.0, -0.05, f64::NAN, f64::INFINITY] {
            let config = SimConfig::new(0.0, 15.0, h);
            let err = integrate(&config, 1.0, 2.0, Method::Explicit).unwrap_err();
            assert!(matches!(err, SimError::InvalidStep(_)));
        }
    }

    #[test]
    fn empty_window_yields_empty_trajectory() {
        let config = SimConfig::new(15.0, 15.0, 0.05);
        assert!(integrate(&config, 1.0, 2.0, Method::Explicit).unwrap().is_empty());

        let config = SimConfig::new(20.0, 15.0, 0.05);
        assert!(integrate(&config, 1.0, 2.0, Method::Symplectic).unwrap().is_empty());
    }

    #[test]
    fn explicit_energy_grows_over_long_horizon() {
        let config = SimConfig::new(0.0, 300.0, 0.05);
        let traj = integrate(&config, 1.0, 2.0, Method::Explicit).unwrap();
        assert!(traj.last().unwrap().energy() > traj[1].energy());
    }

    #[test]
    fn implicit_energy_decays_over_long_horizon() {
        let config = SimConfig::new(0.0, 300.0, 0.05);
        let traj = integrate(&config, 1.0, 2.0, Method::Implicit).unwrap();
        assert!(traj.last().unwrap().energy() < traj[1].energy());
    }

    #[test]
    fn symplectic_energy_stays_in_a_bounded_band() {
        let config = SimConfig::new(0.0, 300.0, 0.05);
        let traj = integrate(&config, 1.0, 2.0, Method::Symplectic).unwrap();
        for s in &traj {
            assert!(
                (s.energy() - 5.0).abs() < 0.5,
                "energy {} drifted out of band at t={}",
                s.energy(),
                s.time
            );
        }
    }

    #[test]
    fn all_methods_converge_to_the_analytic_solution() {
        for method in Method::ALL {
            let mut prev_err = f64::INFINITY;
            for h in [0.1, 0.05, 0.025, 0.0125] {
                let config = SimConfig::new(0.0, 1.0 + h / 2.0, h);
                let traj = integrate(&config, 1.0, 2.0, method).unwrap();
                let last = traj.last().unwrap();
                assert_relative_eq!(last.time, 1.0, epsilon = 1e-9);

                let err = (x_exact(last.time, 1.0, 2.0) - last.x).abs();
                assert!(
                    err < prev_err,
                    "{method}: error {err} did not shrink from {prev_err} at h={h}"
                );
                prev_err = err;
            }
        }
    }
}
