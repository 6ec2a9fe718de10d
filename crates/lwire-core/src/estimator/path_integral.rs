//! Path-integral approximation of the potential.
//!
//! For each wire element, the estimator marches radially outward from the
//! element through the observation point, accumulating the discrete line
//! integral of E·ds. Along a radial path E is parallel to ds, so each step
//! contributes |E(t)|·dt = (k·q/t²)·dt. The march starts at t = |r| and
//! stops at t = |r| + cutoff; the neglected tail of the integral is roughly
//! k·q/(|r| + cutoff) per element, so the cutoff is a hand-tuned truncation
//! rather than a controlled error bound.
//!
//! The march direction r̂ of each element is recorded in a
//! [`PathTrace`](crate::types::PathTrace) so renderers can display the
//! instantaneous ds direction while animating.

use super::{EstimatorError, PotentialEstimator};
use crate::types::{ChargeElement, PathTrace, SimulationParams, COULOMB_CONSTANT};

/// Discrete E·ds path-integral estimator.
pub struct PathIntegralEstimator {
    elements: Vec<ChargeElement>,
    step: f64,
    cutoff: f64,
}

impl PathIntegralEstimator {
    pub fn new(
        elements: Vec<ChargeElement>,
        step: f64,
        cutoff: f64,
    ) -> Result<Self, EstimatorError> {
        if !(step > 0.0) || !step.is_finite() {
            return Err(EstimatorError::InvalidParameter(format!(
                "path step must be positive and finite, got {}",
                step
            )));
        }
        if !(cutoff > 0.0) || !cutoff.is_finite() {
            return Err(EstimatorError::InvalidParameter(format!(
                "path cutoff must be positive and finite, got {}",
                cutoff
            )));
        }
        Ok(Self {
            elements,
            step,
            cutoff,
        })
    }

    pub fn from_params(
        elements: Vec<ChargeElement>,
        params: &SimulationParams,
    ) -> Result<Self, EstimatorError> {
        Self::new(elements, params.path_step, params.path_cutoff)
    }

    /// Evaluate the potential at a point, also returning the per-element
    /// march directions for visualisation.
    pub fn potential_with_trace(
        &self,
        point: &[f64; 3],
    ) -> Result<(f64, PathTrace), EstimatorError> {
        if self.elements.is_empty() {
            return Err(EstimatorError::EmptyWire);
        }

        let mut total = 0.0;
        let mut directions = Vec::with_capacity(self.elements.len());

        for el in &self.elements {
            let dx = point[0] - el.position[0];
            let dy = point[1] - el.position[1];
            let dz = point[2] - el.position[2];
            let r = (dx * dx + dy * dy + dz * dz).sqrt();
            // Zero separation: skip the pair entirely, as in the
            // superposition sum.
            if r == 0.0 {
                continue;
            }

            // ds points radially outward for every step of this element.
            let ds = [dx / r, dy / r, dz / r];

            let mut t = r;
            let mut dp = 0.0;
            while t < r + self.cutoff {
                dp += COULOMB_CONSTANT * el.charge / (t * t) * self.step;
                t += self.step;
            }

            total += dp;
            directions.push(ds);
        }

        Ok((total, PathTrace { directions }))
    }
}

impl PotentialEstimator for PathIntegralEstimator {
    fn potential_at(&self, point: &[f64; 3]) -> Result<f64, EstimatorError> {
        self.potential_with_trace(point).map(|(v, _)| v)
    }

    fn method_name(&self) -> &str {
        "Path integral of E·ds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_charge_truncated_integral() {
        // For one charge, the march sums k·q/t²·dt from r to r + cutoff,
        // which approximates k·q·(1/r - 1/(r + cutoff)). A left-endpoint
        // Riemann sum of a decreasing integrand overestimates, so the
        // discrete value brackets the exact truncated integral from above.
        let q = 1.0e-9;
        let r = 0.1;
        let cutoff = 0.5;
        let step = 1e-4;

        let est =
            PathIntegralEstimator::new(vec![ChargeElement::new([0.0, 0.0, 0.0], q)], step, cutoff)
                .unwrap();
        let v = est.potential_at(&[r, 0.0, 0.0]).unwrap();

        let exact_truncated = COULOMB_CONSTANT * q * (1.0 / r - 1.0 / (r + cutoff));
        assert!(v >= exact_truncated);
        assert!((v - exact_truncated) / exact_truncated < 1e-2);
    }

    #[test]
    fn test_trace_directions_are_radial_units() {
        let elements = vec![
            ChargeElement::new([0.0, 0.0, 0.0], 1.0e-9),
            ChargeElement::new([0.1, 0.0, 0.0], 1.0e-9),
        ];
        let est = PathIntegralEstimator::new(elements, 0.005, 0.5).unwrap();
        let (_, trace) = est.potential_with_trace(&[0.1, 0.1, 0.0]).unwrap();

        assert_eq!(trace.directions.len(), 2);
        for ds in &trace.directions {
            let mag = (ds[0] * ds[0] + ds[1] * ds[1] + ds[2] * ds[2]).sqrt();
            assert!((mag - 1.0).abs() < 1e-12);
        }
        // Second element sits directly below the observation point.
        assert!((trace.directions[1][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_element_skipped_and_untraced() {
        let elements = vec![
            ChargeElement::new([0.1, 0.1, 0.0], 1.0e-9),
            ChargeElement::new([0.0, 0.0, 0.0], 1.0e-9),
        ];
        let est = PathIntegralEstimator::new(elements, 0.005, 0.5).unwrap();
        let (v, trace) = est.potential_with_trace(&[0.1, 0.1, 0.0]).unwrap();

        assert_eq!(trace.directions.len(), 1);
        assert!(v.is_finite());
        assert!(v > 0.0);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let elements = vec![ChargeElement::new([0.0, 0.0, 0.0], 1.0e-9)];
        assert!(PathIntegralEstimator::new(elements.clone(), 0.0, 0.5).is_err());
        assert!(PathIntegralEstimator::new(elements.clone(), -1.0, 0.5).is_err());
        assert!(PathIntegralEstimator::new(elements, 0.005, 0.0).is_err());
    }
}
