use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Closed-form solution of the spring equations
// ---------------------------------------------------------------------------

/// Exact position at time t for initial state (x0, v0).
pub fn x_exact(t: f64, x0: f64, v0: f64) -> f64 {
    x0 * t.cos() + v0 * t.sin()
}

/// Exact velocity at time t for initial state (x0, v0).
pub fn v_exact(t: f64, x0: f64, v0: f64) -> f64 {
    v0 * t.cos() - x0 * t.sin()
}

/// Evaluate the exact solution on a set of grid times.
pub fn exact_trajectory(times: &[f64], x0: f64, v0: f64) -> Vec<State> {
    times
        .iter()
        .map(|&t| State {
            time: t,
            x: x_exact(t, x0, v0),
            v: v_exact(t, x0, v0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn initial_condition_recovered_at_time_zero() {
        assert_eq!(x_exact(0.0, 1.0, 2.0), 1.0);
        assert_eq!(v_exact(0.0, 1.0, 2.0), 2.0);
    }

    #[test]
    fn exact_solution_conserves_energy() {
        for i in 0..200 {
            let t = i as f64 * 0.37;
            let x = x_exact(t, 1.0, 2.0);
            let v = v_exact(t, 1.0, 2.0);
            assert_relative_eq!(x * x + v * v, 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn exact_trajectory_aligns_with_grid_times() {
        let times = [0.0, 0.5, 1.0];
        let traj = exact_trajectory(&times, 1.0, 2.0);
        assert_eq!(traj.len(), 3);
        for (s, &t) in traj.iter().zip(&times) {
            assert_eq!(s.time, t);
            assert_eq!(s.x, x_exact(t, 1.0, 2.0));
            assert_eq!(s.v, v_exact(t, 1.0, 2.0));
        }
    }
}
