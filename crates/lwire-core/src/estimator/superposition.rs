//! Coulomb superposition over discretised point charges.
//!
//! The potential at an observation point is the scalar sum of k·q/|r| over
//! every wire element, where r is the displacement from element to point.
//! Elements coinciding exactly with the observation point are skipped, and
//! an implausibly large total is clamped to zero as a guard against residual
//! near-singular terms.

use super::{EstimatorError, PotentialEstimator};
use crate::types::{ChargeElement, SimulationParams, COULOMB_CONSTANT};

/// Point-charge superposition estimator.
pub struct SuperpositionEstimator {
    elements: Vec<ChargeElement>,
    clamp_threshold: f64,
}

impl SuperpositionEstimator {
    pub fn new(elements: Vec<ChargeElement>, clamp_threshold: f64) -> Self {
        Self {
            elements,
            clamp_threshold,
        }
    }

    pub fn from_params(elements: Vec<ChargeElement>, params: &SimulationParams) -> Self {
        Self::new(elements, params.clamp_threshold)
    }
}

impl PotentialEstimator for SuperpositionEstimator {
    fn potential_at(&self, point: &[f64; 3]) -> Result<f64, EstimatorError> {
        if self.elements.is_empty() {
            return Err(EstimatorError::EmptyWire);
        }

        let mut v = 0.0;
        for el in &self.elements {
            let dx = point[0] - el.position[0];
            let dy = point[1] - el.position[1];
            let dz = point[2] - el.position[2];
            let r = (dx * dx + dy * dy + dz * dz).sqrt();
            // Zero separation: the pair is skipped rather than divided.
            if r > 0.0 {
                v += COULOMB_CONSTANT * el.charge / r;
            }
        }

        if v > self.clamp_threshold {
            v = 0.0;
        }
        Ok(v)
    }

    fn method_name(&self) -> &str {
        "Point-charge superposition"
    }
}
