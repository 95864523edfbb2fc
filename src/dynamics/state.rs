use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Oscillator state: one snapshot of the mass on the spring
// ---------------------------------------------------------------------------

/// A single snapshot of the oscillator at a grid time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub time: f64, // s
    pub x: f64,    // position, m
    pub v: f64,    // velocity, m/s
}

impl State {
    /// Phase-space point (x, v).
    pub fn phase(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.v)
    }

    /// Oscillator energy x² + v².
    pub fn energy(&self) -> f64 {
        self.phase().norm_squared()
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

/// Integration window [t_min, t_max) and step size.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub t_min: f64,
    pub t_max: f64,
    pub h: f64,
}

impl SimConfig {
    pub fn new(t_min: f64, t_max: f64, h: f64) -> Self {
        Self { t_min, t_max, h }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            t_min: 0.0,
            t_max: 15.0,  // a few periods of the unit oscillator
            h: 0.05,
        }
    }
}
