//! Profile panel: the three voltage estimates along the grid diagonal.
//!
//! The diagonal runs from the corner of the L outward, so it crosses the
//! region where the estimators disagree most (near the conductor) and the
//! region where they all decay together.

use egui::Ui;

use crate::app::SimulationData;

/// State for the diagonal profile panel.
#[derive(Debug, Default)]
pub struct ProfilePanel {}

impl ProfilePanel {
    pub fn ui(&mut self, ui: &mut Ui, sim: &SimulationData) {
        ui.heading("Diagonal profile");
        ui.separator();

        let result = &sim.result;
        let grid = &result.grid;
        let n = grid.nx.min(grid.ny);
        let dx = grid.width / grid.nx as f64;
        let dy = grid.height / grid.ny as f64;
        let step = (dx * dx + dy * dy).sqrt();

        let analytic_points: egui_plot::PlotPoints = (0..n)
            .map(|i| [i as f64 * step, result.analytic[[i, i]]])
            .collect();
        let superposition_points: egui_plot::PlotPoints = (0..n)
            .map(|i| [i as f64 * step, result.superposition[[i, i]]])
            .collect();
        let path_points: egui_plot::PlotPoints = (0..n)
            .map(|i| [i as f64 * step, result.path_integral[[i, i]]])
            .collect();

        let analytic_line = egui_plot::Line::new(analytic_points)
            .name("Analytical")
            .color(egui::Color32::YELLOW)
            .width(2.0);
        let superposition_line = egui_plot::Line::new(superposition_points)
            .name("Point-charge sum")
            .color(egui::Color32::from_rgb(200, 200, 200))
            .width(2.0);
        let path_line = egui_plot::Line::new(path_points)
            .name("Path integral")
            .color(egui::Color32::from_rgb(70, 120, 255))
            .width(2.0);

        ui.label("Voltage (V) against distance from the corner along the diagonal (m).");
        egui_plot::Plot::new("profile_plot")
            .legend(egui_plot::Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(analytic_line);
                plot_ui.line(superposition_line);
                plot_ui.line(path_line);
            });
    }
}
