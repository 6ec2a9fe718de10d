//! Headless comparison driver.
//!
//! Runs the three potential estimators and the field superposition over a
//! shared observation grid, producing a [`ComparisonResult`] that the CLI,
//! the GUI, and the tests all consume. Rendering never happens here.

use ndarray::Array2;

use crate::estimator::analytic::AnalyticEstimator;
use crate::estimator::path_integral::PathIntegralEstimator;
use crate::estimator::superposition::SuperpositionEstimator;
use crate::estimator::{EstimatorError, ObservationGrid, PotentialEstimator};
use crate::field::compute_field_map;
use crate::types::{ChargeElement, ComparisonResult, SimulationParams};

/// Run all three estimators plus the field map over the grid.
///
/// # Arguments
/// * `wire_length` - Leg length L of the conductor (m), used by the
///   closed form.
/// * `total_charge` - Total charge Q (C), used by the closed form.
/// * `elements` - The discretised point charges, used by the two numerical
///   estimators and the field map.
/// * `grid` - Observation grid shared by every method.
/// * `params` - Integration and clamping parameters.
pub fn compare_estimators(
    wire_length: f64,
    total_charge: f64,
    elements: &[ChargeElement],
    grid: &ObservationGrid,
    params: &SimulationParams,
) -> Result<ComparisonResult, EstimatorError> {
    if elements.is_empty() {
        return Err(EstimatorError::EmptyWire);
    }

    let analytic_est = AnalyticEstimator::new(wire_length, total_charge)?;
    let superposition_est = SuperpositionEstimator::from_params(elements.to_vec(), params);
    let path_est = PathIntegralEstimator::from_params(elements.to_vec(), params)?;

    let analytic = analytic_est.potential_surface(grid)?;
    let superposition = superposition_est.potential_surface(grid)?;

    // The path-integral surface is evaluated point by point so the march
    // directions can be captured alongside the voltages.
    grid.check()?;
    let mut path_integral = Array2::zeros((grid.ny, grid.nx));
    let mut traces = Vec::with_capacity(grid.len());
    for iy in 0..grid.ny {
        for ix in 0..grid.nx {
            let (v, trace) = path_est.potential_with_trace(&grid.point(ix, iy))?;
            path_integral[[iy, ix]] = v;
            traces.push(trace);
        }
    }

    let field = compute_field_map(elements, grid)?;

    Ok(ComparisonResult {
        grid: grid.clone(),
        analytic,
        superposition,
        path_integral,
        field,
        traces,
        render_scale: params.render_scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_elements() -> Vec<ChargeElement> {
        // A coarse hand-rolled L: 4 sites per leg.
        let mut positions = Vec::new();
        for i in 0..4 {
            positions.push([i as f64 * 0.0375, 0.0, 0.0]);
        }
        for i in 1..=4 {
            positions.push([0.0, i as f64 * 0.0375, 0.0]);
        }
        ChargeElement::distribute(&positions, 50e-6)
    }

    #[test]
    fn test_surfaces_share_grid_shape() {
        let grid = ObservationGrid::square(0.2, 6);
        let result = compare_estimators(
            0.15,
            50e-6,
            &demo_elements(),
            &grid,
            &SimulationParams::default(),
        )
        .unwrap();

        assert_eq!(result.analytic.dim(), (6, 6));
        assert_eq!(result.superposition.dim(), (6, 6));
        assert_eq!(result.path_integral.dim(), (6, 6));
        assert_eq!(result.traces.len(), 36);
        assert_eq!(result.field.magnitudes.len(), 36);
    }

    #[test]
    fn test_empty_elements_rejected() {
        let grid = ObservationGrid::square(0.2, 6);
        let err = compare_estimators(0.15, 50e-6, &[], &grid, &SimulationParams::default());
        assert!(matches!(err, Err(EstimatorError::EmptyWire)));
    }
}
