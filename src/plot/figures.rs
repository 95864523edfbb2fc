use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::style::colors::{BLUE, GREEN, MAGENTA, YELLOW};

use super::render::{scatter_chart, Axes, Series};
use crate::analytic::exact_trajectory;
use crate::diagnostics::{max_error_sweep, position_errors, velocity_errors, EnergySummary};
use crate::dynamics::state::{SimConfig, State};
use crate::io::{csv, json};
use crate::sim::{integrate, uniform_grid, Method};

// Canonical initial state and step shared by every figure.
const X0: f64 = 1.0;
const V0: f64 = 2.0;
const H: f64 = 0.05;

/// Figure routine signature used by the CLI dispatch table.
pub type FigureFn = fn(&Path) -> Result<(), Box<dyn Error>>;

/// CLI figure keys and their routines.
pub const FIGURES: &[(&str, FigureFn)] = &[
    ("explicit_euler", explicit_euler),
    ("explicit_euler_errors", explicit_euler_errors),
    ("explicit_euler_energy", explicit_euler_energy),
    ("explicit_euler_max_errors", explicit_euler_max_errors),
    ("implicit_euler", implicit_euler),
    ("implicit_euler_errors", implicit_euler_errors),
    ("implicit_euler_energy", implicit_euler_energy),
    ("implicit_euler_max_errors", implicit_euler_max_errors),
    ("phase_space", phase_space),
    ("symplectic_euler_energy", symplectic_euler_energy),
    ("symplectic_euler", symplectic_euler),
];

/// Look up a figure routine by its CLI key.
pub fn figure(name: &str) -> Option<FigureFn> {
    FIGURES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|&(_, f)| f)
}

// ---------------------------------------------------------------------------
// Figure routines
// ---------------------------------------------------------------------------

/// Position and velocity under the explicit method.
pub fn explicit_euler(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    trajectory_figure(out_dir, Method::Explicit, "explicit_euler", -4.0..4.0)
}

/// Errors in position and velocity under the explicit method.
pub fn explicit_euler_errors(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    errors_figure(out_dir, Method::Explicit, "explicit_euler_errors", -1.0..1.0)
}

/// Energy growth under the explicit method.
pub fn explicit_euler_energy(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    energy_figure(
        out_dir,
        Method::Explicit,
        "explicit_euler_energy",
        SimConfig::default(),
        5.0..11.0,
    )
}

/// Maximum position error vs step size for the explicit method.
pub fn explicit_euler_max_errors(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    max_errors_figure(out_dir, Method::Explicit, "explicit_euler_max_errors")
}

/// Position and velocity under the implicit method.
pub fn implicit_euler(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    trajectory_figure(out_dir, Method::Implicit, "implicit_euler", -3.0..3.0)
}

/// Errors in position and velocity under the implicit method.
pub fn implicit_euler_errors(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    errors_figure(out_dir, Method::Implicit, "implicit_euler_errors", -0.8..0.8)
}

/// Energy decay under the implicit method.
pub fn implicit_euler_energy(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    energy_figure(
        out_dir,
        Method::Implicit,
        "implicit_euler_energy",
        SimConfig::default(),
        2.0..5.0,
    )
}

/// Maximum position error vs step size for the implicit method.
pub fn implicit_euler_max_errors(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    max_errors_figure(out_dir, Method::Implicit, "implicit_euler_max_errors")
}

/// Phase-space orbits of all three methods against the analytic circle.
pub fn phase_space(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let config = long_run();
    let explicit = integrate(&config, X0, V0, Method::Explicit)?;
    let implicit = integrate(&config, X0, V0, Method::Implicit)?;
    let symplectic = integrate(&config, X0, V0, Method::Symplectic)?;
    let times = uniform_grid(config.t_min, config.t_max, config.h);
    let exact = exact_trajectory(&times, X0, V0);

    scatter_chart(
        &out_dir.join("phase_space.png"),
        &Axes {
            x_desc: "Position",
            y_desc: "Velocity",
            x_range: -4.0..4.0,
            y_range: -4.0..4.0,
        },
        &[
            Series::new("Explicit", BLUE, phase_points(&explicit)),
            Series::new("Implicit", GREEN, phase_points(&implicit)),
            Series::new("Symplectic", YELLOW, phase_points(&symplectic)),
            Series::new("Analytic", MAGENTA, phase_points(&exact)),
        ],
    )
}

/// Bounded energy band of the symplectic method over a long horizon.
pub fn symplectic_euler_energy(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    energy_figure(
        out_dir,
        Method::Symplectic,
        "symplectic_euler_energy",
        long_run(),
        4.95..5.25,
    )
}

/// Symplectic position against the analytic solution far from t = 0.
pub fn symplectic_euler(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let config = SimConfig::new(1000.0, 1015.0, H);
    let trajectory = integrate(&config, X0, V0, Method::Symplectic)?;
    csv::write_trajectory_file(out_dir.join("symplectic_euler.csv"), &trajectory)?;

    let times = uniform_grid(config.t_min, config.t_max, config.h);
    let exact = exact_trajectory(&times, X0, V0);

    scatter_chart(
        &out_dir.join("symplectic_euler.png"),
        &Axes {
            x_desc: "Time",
            y_desc: "Position",
            x_range: config.t_min..config.t_max,
            y_range: -3.0..3.0,
        },
        &[
            Series::new("Symplectic", BLUE, time_position(&trajectory)),
            Series::new("Analytic", GREEN, time_position(&exact)),
        ],
    )
}

// ---------------------------------------------------------------------------
// Shared figure shapes
// ---------------------------------------------------------------------------

fn trajectory_figure(
    out_dir: &Path,
    method: Method,
    name: &str,
    y_range: Range<f64>,
) -> Result<(), Box<dyn Error>> {
    let config = SimConfig::default();
    let trajectory = integrate(&config, X0, V0, method)?;
    csv::write_trajectory_file(out_dir.join(format!("{name}.csv")), &trajectory)?;

    scatter_chart(
        &out_dir.join(format!("{name}.png")),
        &Axes {
            x_desc: "Time",
            y_desc: "Position and Velocity",
            x_range: config.t_min..config.t_max,
            y_range,
        },
        &[
            Series::new("Position", BLUE, time_position(&trajectory)),
            Series::new("Velocity", GREEN, time_velocity(&trajectory)),
        ],
    )
}

fn errors_figure(
    out_dir: &Path,
    method: Method,
    name: &str,
    y_range: Range<f64>,
) -> Result<(), Box<dyn Error>> {
    let config = SimConfig::default();
    let trajectory = integrate(&config, X0, V0, method)?;
    let x_errs = position_errors(&trajectory, X0, V0);
    let v_errs = velocity_errors(&trajectory, X0, V0);

    scatter_chart(
        &out_dir.join(format!("{name}.png")),
        &Axes {
            x_desc: "Time",
            y_desc: "Errors in Position and Velocity",
            x_range: config.t_min..config.t_max,
            y_range,
        },
        &[
            Series::new("Error in Position", BLUE, error_points(&trajectory, &x_errs)),
            Series::new("Error in Velocity", GREEN, error_points(&trajectory, &v_errs)),
        ],
    )
}

fn energy_figure(
    out_dir: &Path,
    method: Method,
    name: &str,
    config: SimConfig,
    y_range: Range<f64>,
) -> Result<(), Box<dyn Error>> {
    let trajectory = integrate(&config, X0, V0, method)?;
    if let Some(summary) = EnergySummary::from_trajectory(&trajectory) {
        json::write_summary_file(
            out_dir.join(format!("{name}_summary.json")),
            method,
            &config,
            &summary,
        )?;
    }

    scatter_chart(
        &out_dir.join(format!("{name}.png")),
        &Axes {
            x_desc: "Time",
            y_desc: "Energy",
            x_range: 0.0..15.0,
            y_range,
        },
        &[Series::new("", BLUE, time_energy(&trajectory))],
    )
}

fn max_errors_figure(out_dir: &Path, method: Method, name: &str) -> Result<(), Box<dyn Error>> {
    let steps = uniform_grid(0.0002, 0.06, 0.0002);
    let sweep = max_error_sweep(0.0, 15.0, X0, V0, method, &steps)?;

    scatter_chart(
        &out_dir.join(format!("{name}.png")),
        &Axes {
            x_desc: "Step Size",
            y_desc: "Maximum Error in Position",
            x_range: 0.0..0.06,
            y_range: 0.0..0.8,
        },
        &[Series::new("", BLUE, sweep)],
    )
}

fn long_run() -> SimConfig {
    SimConfig::new(0.0, 300.0, H)
}

fn time_position(trajectory: &[State]) -> Vec<(f64, f64)> {
    trajectory.iter().map(|s| (s.time, s.x)).collect()
}

fn time_velocity(trajectory: &[State]) -> Vec<(f64, f64)> {
    trajectory.iter().map(|s| (s.time, s.v)).collect()
}

fn time_energy(trajectory: &[State]) -> Vec<(f64, f64)> {
    trajectory.iter().map(|s| (s.time, s.energy())).collect()
}

fn phase_points(trajectory: &[State]) -> Vec<(f64, f64)> {
    trajectory.iter().map(|s| (s.x, s.v)).collect()
}

fn error_points(trajectory: &[State], errors: &[f64]) -> Vec<(f64, f64)> {
    trajectory
        .iter()
        .zip(errors)
        .map(|(s, &e)| (s.time, e))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
