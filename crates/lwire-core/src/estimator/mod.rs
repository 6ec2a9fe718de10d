//! Potential estimator abstraction and implementations.
//!
//! The [`PotentialEstimator`] trait defines the interface that all three
//! computation strategies implement. The analytic estimator is the exact
//! reference; the superposition and path-integral estimators are the
//! numerical approximations compared against it.

pub mod analytic;
pub mod path_integral;
pub mod superposition;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while evaluating a potential.
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("No charge elements provided")]
    EmptyWire,

    #[error("Invalid wire geometry: {0}")]
    InvalidWire(String),

    #[error("Invalid observation grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid integration parameter: {0}")]
    InvalidParameter(String),
}

/// The core trait that all potential computation strategies implement.
///
/// This abstraction allows the CLI, GUI, and tests to operate against any
/// strategy without knowledge of the underlying method, and to compare the
/// strategies point by point over a shared grid.
pub trait PotentialEstimator {
    /// Evaluate the potential (V) at a single observation point.
    fn potential_at(&self, point: &[f64; 3]) -> Result<f64, EstimatorError>;

    /// Evaluate the potential over a whole observation grid.
    ///
    /// The returned array is indexed `[[iy, ix]]`.
    fn potential_surface(&self, grid: &ObservationGrid) -> Result<Array2<f64>, EstimatorError> {
        grid.check()?;
        let mut voltages = Array2::zeros((grid.ny, grid.nx));
        for iy in 0..grid.ny {
            for ix in 0..grid.nx {
                voltages[[iy, ix]] = self.potential_at(&grid.point(ix, iy))?;
            }
        }
        Ok(voltages)
    }

    /// Human-readable name of the strategy.
    fn method_name(&self) -> &str;
}

/// A planar lattice of observation points in the z = 0 plane.
///
/// Points sit at `origin + (ix·width/nx, iy·height/ny, 0)`, a half-open
/// sampling that never reaches the far edge of the extent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationGrid {
    /// Lower-left corner of the sampled region (m).
    pub origin: [f64; 3],
    /// Extent along x (m).
    pub width: f64,
    /// Extent along y (m).
    pub height: f64,
    /// Number of points along x.
    pub nx: usize,
    /// Number of points along y.
    pub ny: usize,
}

impl ObservationGrid {
    /// A square grid anchored at the origin, the demonstrator's default.
    pub fn square(extent: f64, points: usize) -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            width: extent,
            height: extent,
            nx: points,
            ny: points,
        }
    }

    /// The observation point at lattice indices (ix, iy).
    pub fn point(&self, ix: usize, iy: usize) -> [f64; 3] {
        [
            self.origin[0] + ix as f64 * self.width / self.nx as f64,
            self.origin[1] + iy as f64 * self.height / self.ny as f64,
            self.origin[2],
        ]
    }

    /// Flat row-major index of (ix, iy), y outermost.
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.nx + ix
    }

    /// Total number of observation points.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn check(&self) -> Result<(), EstimatorError> {
        if self.nx == 0 || self.ny == 0 {
            return Err(EstimatorError::InvalidGrid(format!(
                "grid must have points in both directions, got {}x{}",
                self.nx, self.ny
            )));
        }
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(EstimatorError::InvalidGrid(format!(
                "grid extent must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_grid_points() {
        let grid = ObservationGrid::square(0.2, 20);
        assert_eq!(grid.len(), 400);
        assert_eq!(grid.point(0, 0), [0.0, 0.0, 0.0]);

        // Half-open sampling: the last point stops one step short of the
        // far edge.
        let last = grid.point(19, 19);
        assert!((last[0] - 0.19).abs() < 1e-12);
        assert!((last[1] - 0.19).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        let grid = ObservationGrid::square(0.2, 0);
        assert!(grid.check().is_err());

        let flat = ObservationGrid {
            origin: [0.0, 0.0, 0.0],
            width: 0.0,
            height: 0.2,
            nx: 10,
            ny: 10,
        };
        assert!(flat.check().is_err());
    }
}
