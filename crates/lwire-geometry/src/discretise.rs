//! Discretisation of the L-wire into point-charge sites.
//!
//! Given an [`LWire`](crate::wire::LWire) and a per-leg division count N,
//! this module generates exactly 2N lattice sites with uniform spacing
//! d = L/N: the x leg at (i·d, 0, 0) for i in 0..N and the y leg at
//! (0, i·d, 0) for i in 1..=N. The corner belongs to the x leg only, so no
//! site is duplicated. Assigning each site an equal charge q = Q/2N then
//! conserves the total charge exactly.

use crate::wire::LWire;

/// A point-charge site on the wire, produced by discretisation.
#[derive(Debug, Clone)]
pub struct WirePoint {
    /// Position in 3D space (m).
    pub position: [f64; 3],
}

/// Discretise an L-wire into 2·`divisions` equally spaced sites.
///
/// # Arguments
/// * `wire` - The wire to discretise.
/// * `divisions` - Number of sites per leg.
///
/// # Returns
/// A vector of exactly `2 * divisions` sites covering both legs.
pub fn discretise_wire(wire: &LWire, divisions: usize) -> Vec<WirePoint> {
    assert!(divisions > 0, "Division count must be positive");

    let dl = wire.length / divisions as f64;
    let mut points = Vec::with_capacity(2 * divisions);

    // x leg, corner included
    for i in 0..divisions {
        points.push(WirePoint {
            position: [i as f64 * dl, 0.0, 0.0],
        });
    }
    // y leg, corner excluded
    for i in 1..=divisions {
        points.push(WirePoint {
            position: [0.0, i as f64 * dl, 0.0],
        });
    }

    points
}
