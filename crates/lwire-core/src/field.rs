//! Electric field superposition over the discretised wire.
//!
//! The field at an observation point $\mathbf{r}_{\text{obs}}$ is the
//! Coulomb-law vector sum
//!
//! $$
//! \mathbf{E}(\mathbf{r}_{\text{obs}}) = \sum_i \frac{k\,q_i}{|\mathbf{r}|^3}\,\mathbf{r},
//! \qquad \mathbf{r} = \mathbf{r}_{\text{obs}} - \mathbf{r}_i
//! $$
//!
//! with zero-separation pairs skipped.

use crate::estimator::{EstimatorError, ObservationGrid};
use crate::types::{ChargeElement, FieldMap, COULOMB_CONSTANT};

/// Compute the electric field vector (V/m) at a single observation point.
pub fn field_at_point(elements: &[ChargeElement], point: &[f64; 3]) -> [f64; 3] {
    let mut e = [0.0; 3];
    for el in elements {
        let dx = point[0] - el.position[0];
        let dy = point[1] - el.position[1];
        let dz = point[2] - el.position[2];
        let r_sq = dx * dx + dy * dy + dz * dz;
        if r_sq == 0.0 {
            continue;
        }
        let r = r_sq.sqrt();
        let coeff = COULOMB_CONSTANT * el.charge / (r_sq * r);
        e[0] += coeff * dx;
        e[1] += coeff * dy;
        e[2] += coeff * dz;
    }
    e
}

/// Evaluate the field over a whole observation grid.
pub fn compute_field_map(
    elements: &[ChargeElement],
    grid: &ObservationGrid,
) -> Result<FieldMap, EstimatorError> {
    if elements.is_empty() {
        return Err(EstimatorError::EmptyWire);
    }
    grid.check()?;

    let mut positions = Vec::with_capacity(grid.len());
    let mut vectors = Vec::with_capacity(grid.len());
    let mut magnitudes = Vec::with_capacity(grid.len());

    for iy in 0..grid.ny {
        for ix in 0..grid.nx {
            let obs = grid.point(ix, iy);
            let e = field_at_point(elements, &obs);
            let mag = (e[0] * e[0] + e[1] * e[1] + e[2] * e[2]).sqrt();

            positions.push(obs);
            vectors.push(e);
            magnitudes.push(mag);
        }
    }

    Ok(FieldMap {
        positions,
        vectors,
        magnitudes,
        nx: grid.nx,
        ny: grid.ny,
    })
}
