//! Core types shared across the lwire demonstrator.
//!
//! This module defines the fundamental data structures used throughout the
//! comparison pipeline: charge elements, integration parameters, and result
//! containers.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::estimator::ObservationGrid;

/// Coulomb's constant k (N·m²/C²).
pub const COULOMB_CONSTANT: f64 = 8.99e9;

/// A single point charge in the simulation domain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChargeElement {
    /// Position in 3D space (m).
    pub position: [f64; 3],
    /// Charge (C).
    pub charge: f64,
}

impl ChargeElement {
    pub fn new(position: [f64; 3], charge: f64) -> Self {
        Self { position, charge }
    }

    /// Distribute a total charge equally over a set of positions.
    ///
    /// Each element receives q = Q/M where M is the number of positions, so
    /// the per-element charges sum back to Q exactly up to floating-point
    /// rounding.
    pub fn distribute(positions: &[[f64; 3]], total_charge: f64) -> Vec<ChargeElement> {
        let dq = total_charge / positions.len() as f64;
        positions
            .iter()
            .map(|&position| ChargeElement::new(position, dq))
            .collect()
    }
}

/// Parameters controlling the numerical estimators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Radial step dt of the path integral (m).
    pub path_step: f64,
    /// Truncation offset of the path integral (m): each march stops at
    /// |r| + cutoff rather than infinity. Hand-tuned; the neglected tail is
    /// roughly k·q/(|r| + cutoff) per element.
    pub path_cutoff: f64,
    /// Voltages above this threshold (V) are treated as residual
    /// near-singular terms and clamped to zero.
    pub clamp_threshold: f64,
    /// Marker height per volt used by renderers (m/V). Shared by all three
    /// methods so heights stay directly comparable.
    pub render_scale: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            path_step: 0.005,
            path_cutoff: 0.5,
            clamp_threshold: 1e19,
            render_scale: 1e-8,
        }
    }
}

/// Electric field vectors sampled over an observation grid.
///
/// Points are stored row-major, y index outermost, matching
/// [`ObservationGrid`] ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMap {
    /// Sample positions (m).
    pub positions: Vec<[f64; 3]>,
    /// Field vector at each position (V/m).
    pub vectors: Vec<[f64; 3]>,
    /// Field magnitude at each position (V/m).
    pub magnitudes: Vec<f64>,
    /// Number of points along x.
    pub nx: usize,
    /// Number of points along y.
    pub ny: usize,
}

/// The radial march directions recorded while path-integrating one grid
/// point, one unit vector per contributing wire element. Visualisation only.
#[derive(Debug, Clone, Default)]
pub struct PathTrace {
    pub directions: Vec<[f64; 3]>,
}

/// Complete results of one comparison run.
///
/// The three voltage surfaces are indexed `[[iy, ix]]` over the same grid,
/// so any pair of surfaces can be compared point by point.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// The observation grid the surfaces were evaluated on.
    pub grid: ObservationGrid,
    /// Closed-form reference voltages (V).
    pub analytic: Array2<f64>,
    /// Point-charge superposition voltages (V).
    pub superposition: Array2<f64>,
    /// Path-integral voltage estimates (V).
    pub path_integral: Array2<f64>,
    /// Field vectors over the grid.
    pub field: FieldMap,
    /// Per-point path-integration traces, grid-ordered.
    pub traces: Vec<PathTrace>,
    /// Marker height per volt (m/V), shared by all three surfaces.
    pub render_scale: f64,
}
