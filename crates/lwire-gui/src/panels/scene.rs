//! Scene panel: isometric view of the wire, the three marker sets, and the
//! field arrows.
//!
//! Marker heights are voltage × the shared render scale, so the three
//! methods can be compared directly by eye: yellow spheres for the
//! analytical reference, translucent columns for the point-charge sum,
//! blue spheres for the path integral. Field arrows are coloured by
//! magnitude, red > yellow > green.

use egui::{Color32, Pos2, Stroke, Ui};

use lwire_core::types::ComparisonResult;

use crate::app::{AnimationState, Phase, SimulationData};

const ISO_COS: f64 = 0.866_025_403_784_438_6;
const ISO_SIN: f64 = 0.5;

/// Arrow length in world metres for field and ds indicators.
const ARROW_LEN: f64 = 0.01;

/// State for the scene display panel.
#[derive(Debug)]
pub struct ScenePanel {
    pub show_wire: bool,
    pub show_field: bool,
    pub show_analytic: bool,
    pub show_superposition: bool,
    pub show_path: bool,
}

impl Default for ScenePanel {
    fn default() -> Self {
        Self {
            show_wire: true,
            show_field: true,
            show_analytic: true,
            show_superposition: true,
            show_path: true,
        }
    }
}

/// Isometric projection fitted to the panel rectangle. World x recedes to
/// the upper right, y to the upper left, z straight up.
struct Projector {
    base: Pos2,
    scale: f64,
}

impl Projector {
    fn fit(rect: egui::Rect, span: f64, max_height: f64) -> Self {
        let iso_width = 2.0 * span * ISO_COS;
        let iso_height = 2.0 * span * ISO_SIN + max_height.max(0.0);
        let scale = (rect.width() as f64 / iso_width)
            .min(rect.height() as f64 / iso_height)
            * 0.85;
        let base = Pos2::new(rect.center().x, rect.bottom() - 0.05 * rect.height());
        Self { base, scale }
    }

    fn to_screen(&self, p: [f64; 3]) -> Pos2 {
        let ix = (p[0] - p[1]) * ISO_COS;
        let iy = (p[0] + p[1]) * ISO_SIN + p[2];
        Pos2::new(
            self.base.x + (ix * self.scale) as f32,
            self.base.y - (iy * self.scale) as f32,
        )
    }
}

impl ScenePanel {
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        sim: &SimulationData,
        anim: &AnimationState,
        keep_trace_arrow: bool,
    ) {
        let result = &sim.result;
        let total = result.grid.len();

        self.voltage_readout(ui, result, anim, total);

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_wire, "Wire");
            ui.checkbox(&mut self.show_field, "Field arrows");
            ui.checkbox(&mut self.show_analytic, "Analytical");
            ui.checkbox(&mut self.show_superposition, "Point-charge sum");
            ui.checkbox(&mut self.show_path, "Path integral");
        });

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;

        let span = result.grid.width.max(sim.wire.length);
        let proj = Projector::fit(rect, span, max_marker_height(result));

        if self.show_wire {
            for el in &sim.elements {
                painter.circle_filled(proj.to_screen(el.position), 3.0, Color32::RED);
            }
        }

        // Field arrows appear with the first pass, as each point completes.
        if self.show_field {
            let revealed = anim.revealed(Phase::PathIntegral, total);
            let (lo, hi) = log_magnitude_range(&result.field.magnitudes);
            for i in 0..revealed {
                let mag = result.field.magnitudes[i];
                if mag <= 0.0 {
                    continue;
                }
                let pos = result.field.positions[i];
                let e = result.field.vectors[i];
                let tip = [
                    pos[0] + e[0] / mag * ARROW_LEN,
                    pos[1] + e[1] / mag * ARROW_LEN,
                    pos[2] + e[2] / mag * ARROW_LEN,
                ];
                let a = proj.to_screen(pos);
                let b = proj.to_screen(tip);
                let t = ((mag.ln() - lo) / (hi - lo)) as f32;
                painter.arrow(a, b - a, Stroke::new(1.0, field_color(t)));
            }
        }

        if self.show_superposition {
            let revealed = anim.revealed(Phase::Superposition, total);
            let colour = Color32::from_rgba_unmultiplied(255, 255, 255, 90);
            for i in 0..revealed {
                let (ix, iy) = (i % result.grid.nx, i / result.grid.nx);
                let base = result.grid.point(ix, iy);
                let mut top = base;
                top[2] = result.superposition[[iy, ix]] * result.render_scale;
                painter.line_segment(
                    [proj.to_screen(base), proj.to_screen(top)],
                    Stroke::new(3.0, colour),
                );
            }
        }

        if self.show_path {
            let revealed = anim.revealed(Phase::PathIntegral, total);
            let colour = Color32::from_rgb(70, 120, 255);
            for i in 0..revealed {
                let (ix, iy) = (i % result.grid.nx, i / result.grid.nx);
                let mut pos = result.grid.point(ix, iy);
                pos[2] = result.path_integral[[iy, ix]] * result.render_scale;
                painter.circle_filled(proj.to_screen(pos), 2.5, colour);
            }
        }

        if self.show_analytic {
            let revealed = anim.revealed(Phase::Analytic, total);
            for i in 0..revealed {
                let (ix, iy) = (i % result.grid.nx, i / result.grid.nx);
                let v = result.analytic[[iy, ix]];
                // Only positive reference voltages get a marker; the
                // degenerate zero branch stays blank.
                if v <= 0.0 {
                    continue;
                }
                let mut pos = result.grid.point(ix, iy);
                pos[2] = v * result.render_scale;
                painter.circle_filled(proj.to_screen(pos), 2.5, Color32::YELLOW);
            }
        }

        self.trace_arrow(&painter, &proj, result, anim, keep_trace_arrow, total);
    }

    /// Echo the most recently revealed voltage, coloured by the method
    /// that produced it.
    fn voltage_readout(
        &self,
        ui: &mut Ui,
        result: &ComparisonResult,
        anim: &AnimationState,
        total: usize,
    ) {
        match anim.latest(total) {
            Some((phase, i)) => {
                let (ix, iy) = (i % result.grid.nx, i / result.grid.nx);
                let (v, colour, label) = match phase {
                    Phase::PathIntegral => (
                        result.path_integral[[iy, ix]],
                        Color32::from_rgb(70, 120, 255),
                        "path integral",
                    ),
                    Phase::Superposition => (
                        result.superposition[[iy, ix]],
                        Color32::WHITE,
                        "point-charge sum",
                    ),
                    Phase::Analytic | Phase::Done => {
                        (result.analytic[[iy, ix]], Color32::YELLOW, "analytical")
                    }
                };
                ui.colored_label(colour, format!("Voltage in J/C: {:.4e}  ({})", v, label));
            }
            None => {
                ui.label("Voltage in J/C: \u{2014}");
            }
        }
    }

    /// The blue ds arrow shown while the path integral is animating.
    fn trace_arrow(
        &self,
        painter: &egui::Painter,
        proj: &Projector,
        result: &ComparisonResult,
        anim: &AnimationState,
        keep: bool,
        total: usize,
    ) {
        if !self.show_path || total == 0 {
            return;
        }
        let index = match anim.phase {
            Phase::PathIntegral => {
                if anim.cursor == 0 {
                    return;
                }
                anim.cursor - 1
            }
            // After the pass the arrow is hidden unless the user keeps it.
            _ if keep => total - 1,
            _ => return,
        };

        let trace = &result.traces[index];
        let Some(ds) = trace.directions.last() else {
            return;
        };
        let (ix, iy) = (index % result.grid.nx, index / result.grid.nx);
        let mut pos = result.grid.point(ix, iy);
        pos[2] = result.path_integral[[iy, ix]] * result.render_scale;
        let tip = [
            pos[0] + ds[0] * ARROW_LEN,
            pos[1] + ds[1] * ARROW_LEN,
            pos[2] + ds[2] * ARROW_LEN,
        ];
        let a = proj.to_screen(pos);
        let b = proj.to_screen(tip);
        painter.arrow(a, b - a, Stroke::new(1.5, Color32::from_rgb(70, 120, 255)));
    }
}

/// Tallest marker over all three surfaces, in world metres.
fn max_marker_height(result: &ComparisonResult) -> f64 {
    let mut max = 0.0_f64;
    for surface in [
        &result.analytic,
        &result.superposition,
        &result.path_integral,
    ] {
        for &v in surface.iter() {
            max = max.max(v * result.render_scale);
        }
    }
    max
}

/// Range of ln|E| over the map, for colour normalisation.
fn log_magnitude_range(magnitudes: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &m in magnitudes {
        if m > 0.0 {
            lo = lo.min(m.ln());
            hi = hi.max(m.ln());
        }
    }
    if !lo.is_finite() || !hi.is_finite() || hi - lo < f64::EPSILON {
        return (0.0, 1.0);
    }
    (lo, hi)
}

/// Green through yellow to red with increasing normalised magnitude.
fn field_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let (from, to, u) = if t < 0.5 {
        ((40u8, 190u8, 70u8), (230u8, 200u8, 40u8), t / 0.5)
    } else {
        ((230, 200, 40), (220, 50, 50), (t - 0.5) / 0.5)
    };
    Color32::from_rgb(
        lerp_u8(from.0, to.0, u),
        lerp_u8(from.1, to.1, u),
        lerp_u8(from.2, to.2, u),
    )
}

fn lerp_u8(a: u8, b: u8, u: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * u).round() as u8
}
