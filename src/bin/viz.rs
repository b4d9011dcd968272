use eframe::egui;
use egui_plot::{HLine, Line, Plot, PlotPoints, VLine};

use shuttle_sim::io::summary::FlightSummary;
use shuttle_sim::scenario::{presets, CourtMarks, NET_HEIGHT};
use shuttle_sim::{run_batch, LaunchCondition, SimConfig, Shuttle, Trajectory};

fn main() -> eframe::Result {
    let shuttle = Shuttle::standard();
    let config = SimConfig::default();
    let scenarios = presets::clear_comparison();

    let results = run_batch(&shuttle, &scenarios, &config);
    let runs: Vec<(LaunchCondition, Trajectory)> = scenarios
        .into_iter()
        .zip(results)
        .filter_map(|(launch, result)| match result {
            Ok(traj) => Some((launch, traj)),
            Err(e) => {
                eprintln!("stroke v0={} km/h skipped: {e}", launch.speed_kmh);
                None
            }
        })
        .collect();

    let app = TrajViz {
        runs,
        marks: CourtMarks::default(),
        title: presets::CLEAR_COMPARISON_TITLE.to_string(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([700.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        presets::CLEAR_COMPARISON_TITLE,
        options,
        Box::new(|_| Ok(Box::new(app))),
    )
}

struct TrajViz {
    runs: Vec<(LaunchCondition, Trajectory)>,
    marks: CourtMarks,
    title: String,
}

impl eframe::App for TrajViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(&self.title);
            ui.label(format!(
                "{} strokes  |  court marks at the usual lines, net tape {NET_HEIGHT} m",
                self.runs.len(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let plot_height =
                (ui.available_height() / self.runs.len().max(1) as f32).max(120.0) - 6.0;

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (i, (launch, traj)) in self.runs.iter().enumerate() {
                    let summary = FlightSummary::from_trajectory(traj);
                    let label = format!(
                        "v0={:.0} km/h, θ={:.0}°, x0={:.2} m  —  range {:.2} m",
                        launch.speed_kmh, launch.angle_deg, launch.offset, summary.landing_range,
                    );
                    ui.label(&label);

                    let points: PlotPoints = traj
                        .states
                        .iter()
                        .map(|s| [s.pos.x, s.pos.y])
                        .collect();

                    Plot::new(format!("stroke_{i}"))
                        .height(plot_height)
                        .x_axis_label("Horizontal distance (m)")
                        .y_axis_label("Height (m)")
                        .include_y(0.0)
                        .show(ui, |plot_ui| {
                            for mark in self.marks.ticks() {
                                plot_ui.vline(VLine::new("", mark));
                            }
                            plot_ui.hline(HLine::new("net tape", NET_HEIGHT));
                            plot_ui.line(Line::new("Trajectory", points));
                        });
                }
            });
        });
    }
}
