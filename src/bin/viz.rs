use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use oscillator_sim::analytic::exact_trajectory;
use oscillator_sim::diagnostics::{position_errors, EnergySummary};
use oscillator_sim::dynamics::state::{SimConfig, State};
use oscillator_sim::sim::{integrate, uniform_grid, Method};

const X0: f64 = 1.0;
const V0: f64 = 2.0;

fn main() -> eframe::Result {
    let config = SimConfig::default();

    let runs: Vec<MethodRun> = Method::ALL
        .iter()
        .map(|&method| {
            let trajectory =
                integrate(&config, X0, V0, method).expect("default config has a positive step");
            let errors = position_errors(&trajectory, X0, V0);
            let drift = EnergySummary::from_trajectory(&trajectory)
                .map_or(0.0, |s| s.max_deviation);
            MethodRun { method, trajectory, errors, drift }
        })
        .collect();

    let times = uniform_grid(config.t_min, config.t_max, config.h);
    let exact = exact_trajectory(&times, X0, V0);

    let app = OscViz { config, runs, exact };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Oscillator Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct MethodRun {
    method: Method,
    trajectory: Vec<State>,
    errors: Vec<f64>,
    drift: f64,
}

struct OscViz {
    config: SimConfig,
    runs: Vec<MethodRun>,
    exact: Vec<State>,
}

impl eframe::App for OscViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Mass on a spring: explicit vs implicit vs symplectic Euler");
            let drifts = self
                .runs
                .iter()
                .map(|r| format!("{}: {:.3}", r.method, r.drift))
                .collect::<Vec<_>>()
                .join("  |  ");
            ui.label(format!(
                "t in [{}, {})  h = {}  x0 = {}  v0 = {}  |  energy drift  {}",
                self.config.t_min, self.config.t_max, self.config.h, X0, V0, drifts,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Position vs Time
                ui.vertical(|ui| {
                    ui.label("Position");
                    Plot::new("position")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time")
                        .show(ui, |plot_ui| {
                            for run in &self.runs {
                                let points: PlotPoints =
                                    run.trajectory.iter().map(|s| [s.time, s.x]).collect();
                                plot_ui.line(Line::new(run.method.name(), points));
                            }
                            let points: PlotPoints =
                                self.exact.iter().map(|s| [s.time, s.x]).collect();
                            plot_ui.line(Line::new("analytic", points));
                        });
                });

                // Energy vs Time
                ui.vertical(|ui| {
                    ui.label("Energy");
                    Plot::new("energy")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time")
                        .show(ui, |plot_ui| {
                            for run in &self.runs {
                                let points: PlotPoints = run
                                    .trajectory
                                    .iter()
                                    .map(|s| [s.time, s.energy()])
                                    .collect();
                                plot_ui.line(Line::new(run.method.name(), points));
                            }
                        });
                });
            });

            ui.horizontal(|ui| {
                // Phase portrait
                ui.vertical(|ui| {
                    ui.label("Phase Space");
                    Plot::new("phase")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Position")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            for run in &self.runs {
                                let points: PlotPoints =
                                    run.trajectory.iter().map(|s| [s.x, s.v]).collect();
                                plot_ui.line(Line::new(run.method.name(), points));
                            }
                            let points: PlotPoints =
                                self.exact.iter().map(|s| [s.x, s.v]).collect();
                            plot_ui.line(Line::new("analytic", points));
                        });
                });

                // Position error vs Time
                ui.vertical(|ui| {
                    ui.label("Error in Position");
                    Plot::new("error")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time")
                        .show(ui, |plot_ui| {
                            for run in &self.runs {
                                let points: PlotPoints = run
                                    .trajectory
                                    .iter()
                                    .zip(&run.errors)
                                    .map(|(s, &e)| [s.time, e])
                                    .collect();
                                plot_ui.line(Line::new(run.method.name(), points));
                            }
                        });
                });
            });
        });
    }
}
