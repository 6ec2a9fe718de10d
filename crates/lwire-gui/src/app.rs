//! Main application state and egui integration.
//!
//! The comparison itself is computed headlessly by `lwire-core`; the app
//! merely reveals the precomputed results point by point, in three paced
//! passes: path integral first, then the point-charge columns, then the
//! analytical reference.

use std::time::Duration;

use eframe::egui;

use lwire_core::compare::compare_estimators;
use lwire_core::estimator::{EstimatorError, ObservationGrid};
use lwire_core::types::{ChargeElement, ComparisonResult, SimulationParams};
use lwire_geometry::discretise::discretise_wire;
use lwire_geometry::wire::LWire;

use crate::panels;

/// Everything the panels need from one comparison run.
pub struct SimulationData {
    pub wire: LWire,
    pub elements: Vec<ChargeElement>,
    pub result: ComparisonResult,
}

/// Run the comparison for the current control settings.
pub fn run_simulation(
    controls: &panels::controls::ControlsPanel,
) -> Result<SimulationData, EstimatorError> {
    let wire = LWire::new(controls.length, controls.total_charge);
    let positions: Vec<[f64; 3]> = discretise_wire(&wire, controls.divisions)
        .iter()
        .map(|p| p.position)
        .collect();
    let elements = ChargeElement::distribute(&positions, wire.total_charge);

    let grid = ObservationGrid::square(controls.extent, controls.grid_points);
    let params = SimulationParams {
        path_step: controls.path_step,
        path_cutoff: controls.path_cutoff,
        ..Default::default()
    };

    let result = compare_estimators(wire.length, wire.total_charge, &elements, &grid, &params)?;
    Ok(SimulationData {
        wire,
        elements,
        result,
    })
}

/// The three reveal passes, in animation order, plus the finished state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PathIntegral,
    Superposition,
    Analytic,
    Done,
}

impl Phase {
    fn rank(self) -> u8 {
        match self {
            Phase::PathIntegral => 0,
            Phase::Superposition => 1,
            Phase::Analytic => 2,
            Phase::Done => 3,
        }
    }
}

/// Paced reveal of the precomputed grid, one phase at a time.
#[derive(Debug)]
pub struct AnimationState {
    pub phase: Phase,
    /// Points revealed so far in the current phase.
    pub cursor: usize,
    pub playing: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            phase: Phase::PathIntegral,
            cursor: 0,
            playing: true,
        }
    }
}

impl AnimationState {
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Reveal `step` more points, rolling into the next phase at the end
    /// of the grid.
    pub fn advance(&mut self, total: usize, step: usize) {
        if !self.playing || self.phase == Phase::Done {
            return;
        }
        self.cursor = (self.cursor + step.max(1)).min(total);
        if self.cursor >= total {
            self.cursor = 0;
            self.phase = match self.phase {
                Phase::PathIntegral => Phase::Superposition,
                Phase::Superposition => Phase::Analytic,
                Phase::Analytic | Phase::Done => Phase::Done,
            };
        }
    }

    /// How many grid points of the given phase are currently visible.
    pub fn revealed(&self, phase: Phase, total: usize) -> usize {
        if phase.rank() < self.phase.rank() {
            total
        } else if phase.rank() == self.phase.rank() {
            self.cursor
        } else {
            0
        }
    }

    /// The most recently revealed (phase, grid index), if any.
    pub fn latest(&self, total: usize) -> Option<(Phase, usize)> {
        if total == 0 {
            return None;
        }
        if self.cursor > 0 && self.phase != Phase::Done {
            return Some((self.phase, self.cursor - 1));
        }
        match self.phase {
            Phase::PathIntegral => None,
            Phase::Superposition => Some((Phase::PathIntegral, total - 1)),
            Phase::Analytic => Some((Phase::Superposition, total - 1)),
            Phase::Done => Some((Phase::Analytic, total - 1)),
        }
    }
}

/// Sidebar navigation panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Scene,
    Profile,
    Controls,
}

/// The main L-charge application.
pub struct LwireApp {
    active_panel: Panel,
    pub scene_state: panels::scene::ScenePanel,
    pub profile_state: panels::profile::ProfilePanel,
    pub controls_state: panels::controls::ControlsPanel,
    pub anim: AnimationState,
    sim: Option<SimulationData>,
    error_message: Option<String>,
}

impl Default for LwireApp {
    fn default() -> Self {
        let controls = panels::controls::ControlsPanel::default();
        let (sim, error_message) = match run_simulation(&controls) {
            Ok(sim) => (Some(sim), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            active_panel: Panel::Scene,
            scene_state: panels::scene::ScenePanel::default(),
            profile_state: panels::profile::ProfilePanel::default(),
            controls_state: controls,
            anim: AnimationState::default(),
            sim,
            error_message,
        }
    }
}

impl eframe::App for LwireApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controls_state.rerun_requested {
            self.controls_state.rerun_requested = false;
            match run_simulation(&self.controls_state) {
                Ok(sim) => {
                    self.sim = Some(sim);
                    self.error_message = None;
                    self.anim.restart();
                }
                Err(e) => self.error_message = Some(e.to_string()),
            }
        }

        if let Some(sim) = &self.sim {
            let total = sim.result.grid.len();
            if self.anim.playing && self.anim.phase != Phase::Done {
                self.anim.advance(total, self.controls_state.points_per_tick);
                ctx.request_repaint_after(Duration::from_millis(
                    self.controls_state.frame_delay_ms,
                ));
            }
        }

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(140.0)
            .show(ctx, |ui| {
                ui.heading("The L Charge");
                ui.separator();

                ui.selectable_value(&mut self.active_panel, Panel::Scene, "Scene");
                ui.selectable_value(&mut self.active_panel, Panel::Profile, "Profile");
                ui.selectable_value(&mut self.active_panel, Panel::Controls, "Controls");

                if let Some(err) = &self.error_message {
                    ui.add_space(12.0);
                    ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.active_panel {
            Panel::Scene => match &self.sim {
                Some(sim) => self.scene_state.ui(
                    ui,
                    sim,
                    &self.anim,
                    self.controls_state.keep_trace_arrow,
                ),
                None => {
                    ui.label("No simulation results. Adjust the controls and re-run.");
                }
            },
            Panel::Profile => match &self.sim {
                Some(sim) => self.profile_state.ui(ui, sim),
                None => {
                    ui.label("No simulation results. Adjust the controls and re-run.");
                }
            },
            Panel::Controls => self.controls_state.ui(ui, &mut self.anim),
        });
    }
}
