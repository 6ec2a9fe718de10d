//! Controls panel: wire discretisation, integration, and animation pacing.

use egui::Ui;

use crate::app::AnimationState;

/// State for the controls panel. The wire and grid settings feed the next
/// re-run; the pacing settings act immediately on the running animation.
#[derive(Debug)]
pub struct ControlsPanel {
    /// Leg length L (m).
    pub length: f64,
    /// Total charge Q (C).
    pub total_charge: f64,
    /// Point-charge sites per leg.
    pub divisions: usize,
    /// Observation points per grid side.
    pub grid_points: usize,
    /// Side of the sampled square region (m).
    pub extent: f64,
    /// Radial step dt of the path integral (m).
    pub path_step: f64,
    /// Truncation offset of the path integral (m).
    pub path_cutoff: f64,
    /// Delay between animation frames (ms).
    pub frame_delay_ms: u64,
    /// Grid points revealed per frame.
    pub points_per_tick: usize,
    /// Keep the last ds arrow on screen after the path-integral pass.
    pub keep_trace_arrow: bool,
    /// Set to true by the UI when the user clicks "Re-run".
    pub rerun_requested: bool,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self {
            length: 0.15,
            total_charge: 50e-6,
            divisions: 20,
            grid_points: 20,
            extent: 0.2,
            path_step: 0.005,
            path_cutoff: 0.5,
            frame_delay_ms: 20,
            points_per_tick: 1,
            keep_trace_arrow: false,
            rerun_requested: false,
        }
    }
}

impl ControlsPanel {
    pub fn ui(&mut self, ui: &mut Ui, anim: &mut AnimationState) {
        ui.heading("Controls");
        ui.separator();

        ui.label("Wire and grid (applied on re-run):");
        let mut divisions = self.divisions as f64;
        ui.add(egui::Slider::new(&mut divisions, 2.0..=200.0).text("Sites per leg"));
        self.divisions = divisions as usize;

        let mut grid_points = self.grid_points as f64;
        ui.add(egui::Slider::new(&mut grid_points, 4.0..=40.0).text("Grid points per side"));
        self.grid_points = grid_points as usize;

        ui.add(
            egui::Slider::new(&mut self.path_step, 0.001..=0.02)
                .logarithmic(true)
                .text("Path step dt (m)"),
        );
        ui.add(
            egui::Slider::new(&mut self.path_cutoff, 0.1..=5.0)
                .logarithmic(true)
                .text("Path cutoff (m)"),
        );

        ui.add_space(8.0);
        if ui.button("Re-run simulation").clicked() {
            self.rerun_requested = true;
        }

        ui.add_space(16.0);
        ui.separator();
        ui.label("Animation:");

        let mut delay = self.frame_delay_ms as f64;
        ui.add(egui::Slider::new(&mut delay, 0.0..=200.0).text("Frame delay (ms)"));
        self.frame_delay_ms = delay as u64;

        let mut per_tick = self.points_per_tick as f64;
        ui.add(egui::Slider::new(&mut per_tick, 1.0..=50.0).text("Points per frame"));
        self.points_per_tick = per_tick as usize;

        ui.checkbox(&mut self.keep_trace_arrow, "Keep last ds arrow visible");

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let label = if anim.playing { "Pause" } else { "Resume" };
            if ui.button(label).clicked() {
                anim.playing = !anim.playing;
            }
            if ui.button("Restart animation").clicked() {
                anim.restart();
            }
        });
    }
}
