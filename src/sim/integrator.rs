use std::fmt;
use std::str::FromStr;

use crate::dynamics::state::State;
use crate::dynamics::{acceleration, derivatives};
use crate::error::SimError;

// ---------------------------------------------------------------------------
// Method selection
// ---------------------------------------------------------------------------

/// The three Euler-family schemes applied to the spring equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Explicit,
    Implicit,
    Symplectic,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Explicit, Method::Implicit, Method::Symplectic];

    /// Lower-case tag used on the command line and in file names.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Explicit => "explicit",
            Method::Implicit => "implicit",
            Method::Symplectic => "symplectic",
        }
    }

    /// Advance the phase coordinates one step of size h.
    pub fn step(&self, prev: &State, h: f64) -> (f64, f64) {
        match self {
            Method::Explicit => explicit_step(prev, h),
            Method::Implicit => implicit_step(prev, h),
            Method::Symplectic => symplectic_step(prev, h),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SimError;

    /// Tags are matched exactly; anything else is rejected before any
    /// computation happens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "explicit" => Ok(Method::Explicit),
            "implicit" => Ok(Method::Implicit),
            "symplectic" => Ok(Method::Symplectic),
            _ => Err(SimError::InvalidMethod(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-step update rules
// ---------------------------------------------------------------------------

/// Forward Euler: both derivatives read the previous step. Energy grows
/// without bound, so trajectories spiral outward.
pub fn explicit_step(prev: &State, h: f64) -> (f64, f64) {
    let d = derivatives(prev);
    (prev.x + h * d.dx, prev.v + h * d.dv)
}

/// Backward Euler, solved in closed form for the linear spring. Energy
/// decays toward zero.
pub fn implicit_step(prev: &State, h: f64) -> (f64, f64) {
    let denom = 1.0 + h * h;
    ((prev.x + h * prev.v) / denom, (prev.v - h * prev.x) / denom)
}

/// Semi-implicit Euler: the velocity update reads the just-updated
/// position. Energy stays within a bounded band over long horizons.
pub fn symplectic_step(prev: &State, h: f64) -> (f64, f64) {
    let x_next = prev.x + h * prev.v;
    (x_next, prev.v + h * acceleration(x_next))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn start() -> State {
        State { time: 0.0, x: 1.0, v: 2.0 }
    }

    #[test]
    fn explicit_first_step_matches_hand_computation() {
        let (x, v) = explicit_step(&start(), 0.05);
        assert_relative_eq!(x, 1.1, epsilon = 1e-12);
        assert_relative_eq!(v, 1.95, epsilon = 1e-12);
    }

    #[test]
    fn implicit_first_step_matches_hand_computation() {
        let (x, v) = implicit_step(&start(), 0.05);
        assert_eq!(x, (1.0 + 0.05 * 2.0) / (1.0 + 0.05 * 0.05));
        assert_eq!(v, (2.0 - 0.05 * 1.0) / (1.0 + 0.05 * 0.05));
        assert_relative_eq!(x, 1.0973, epsilon = 1e-4);
        assert_relative_eq!(v, 1.9451, epsilon = 1e-4);
    }

    #[test]
    fn symplectic_first_step_reads_updated_position() {
        let (x, v) = symplectic_step(&start(), 0.05);
        assert_relative_eq!(x, 1.1, epsilon = 1e-12);
        assert_relative_eq!(v, 2.0 - 0.05 * 1.1, epsilon = 1e-12);

        // Same position as explicit, different velocity
        let (_, v_explicit) = explicit_step(&start(), 0.05);
        assert!(v != v_explicit);
    }

    #[test]
    fn method_dispatch_matches_free_functions() {
        let s = start();
        assert_eq!(Method::Explicit.step(&s, 0.05), explicit_step(&s, 0.05));
        assert_eq!(Method::Implicit.step(&s, 0.05), implicit_step(&s, 0.05));
        assert_eq!(Method::Symplectic.step(&s, 0.05), symplectic_step(&s, 0.05));
    }

    #[test]
    fn names_round_trip_through_parsing() {
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn unrecognized_tags_are_rejected() {
        for tag in ["foo", "", "Explicit"] {
            assert_eq!(
                tag.parse::<Method>(),
                Err(SimError::InvalidMethod(tag.to_string()))
            );
        }
    }
}
