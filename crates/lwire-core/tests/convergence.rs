//! Test numerical estimator convergence against the closed form.
//!
//! Both numerical strategies should approach the analytical L-conductor
//! potential as the discretisation refines: the superposition as the
//! division count grows, the path integral as its radial step shrinks and
//! its truncation cutoff grows.

use lwire_core::estimator::analytic::AnalyticEstimator;
use lwire_core::estimator::path_integral::PathIntegralEstimator;
use lwire_core::estimator::superposition::SuperpositionEstimator;
use lwire_core::estimator::PotentialEstimator;
use lwire_core::types::ChargeElement;
use lwire_geometry::discretise::discretise_wire;
use lwire_geometry::wire::LWire;

const LENGTH: f64 = 0.15;
const TOTAL_CHARGE: f64 = 50e-6;
const PROBE: [f64; 3] = [0.1, 0.1, 0.0];

fn elements_for(wire: &LWire, divisions: usize) -> Vec<ChargeElement> {
    let positions: Vec<[f64; 3]> = discretise_wire(wire, divisions)
        .iter()
        .map(|p| p.position)
        .collect();
    ChargeElement::distribute(&positions, wire.total_charge)
}

#[test]
fn test_superposition_converges() {
    let wire = LWire::new(LENGTH, TOTAL_CHARGE);
    let reference = AnalyticEstimator::new(LENGTH, TOTAL_CHARGE)
        .unwrap()
        .voltage(PROBE[0], PROBE[1]);

    eprintln!("=== Superposition convergence at (0.1, 0.1) ===");
    eprintln!("analytic = {:.6e} V", reference);
    eprintln!("{:>6} {:>6} {:>14} {:>8}", "N1", "M", "V_sup", "err%");

    let mut last_err = f64::INFINITY;
    for &n in &[10, 20, 50, 200] {
        let elements = elements_for(&wire, n);
        let est = SuperpositionEstimator::new(elements.clone(), 1e19);
        let v = est.potential_at(&PROBE).unwrap();
        let err = (v - reference).abs() / reference;

        eprintln!(
            "{:6} {:6} {:14.6e} {:7.2}",
            n,
            elements.len(),
            v,
            err * 100.0
        );
        last_err = err;
    }

    // A fine discretisation lands well inside the 5% regression bound.
    assert!(
        last_err < 0.05,
        "Superposition error {:.2}% exceeds 5%",
        last_err * 100.0
    );
}

#[test]
fn test_path_integral_converges() {
    let wire = LWire::new(LENGTH, TOTAL_CHARGE);
    let reference = AnalyticEstimator::new(LENGTH, TOTAL_CHARGE)
        .unwrap()
        .voltage(PROBE[0], PROBE[1]);
    let elements = elements_for(&wire, 200);

    eprintln!("=== Path-integral convergence at (0.1, 0.1) ===");
    eprintln!("analytic = {:.6e} V", reference);
    eprintln!("{:>8} {:>8} {:>14} {:>8}", "dt", "cutoff", "V_path", "err%");

    // Larger cutoffs recover more of the truncated tail, so the estimate
    // climbs toward the reference.
    let mut previous = 0.0;
    for &cutoff in &[0.5, 2.0, 10.0] {
        let est = PathIntegralEstimator::new(elements.clone(), 1e-3, cutoff).unwrap();
        let v = est.potential_at(&PROBE).unwrap();
        let err = (v - reference).abs() / reference;

        eprintln!("{:8.0e} {:8.1} {:14.6e} {:7.2}", 1e-3, cutoff, v, err * 100.0);
        assert!(v > previous, "Estimate should grow with the cutoff");
        previous = v;
    }

    let fine = PathIntegralEstimator::new(elements, 1e-3, 10.0).unwrap();
    let v = fine.potential_at(&PROBE).unwrap();
    let err = (v - reference).abs() / reference;
    assert!(
        err < 0.05,
        "Path-integral error {:.2}% exceeds 5%",
        err * 100.0
    );
}

#[test]
fn test_default_cutoff_underestimates() {
    // The demonstrator's default +0.5 m cutoff truncates a non-negligible
    // tail, so out of the box the path integral sits below the closed form.
    // This pins the known systematic down rather than hiding it.
    let wire = LWire::new(LENGTH, TOTAL_CHARGE);
    let reference = AnalyticEstimator::new(LENGTH, TOTAL_CHARGE)
        .unwrap()
        .voltage(PROBE[0], PROBE[1]);

    let est = PathIntegralEstimator::new(elements_for(&wire, 200), 1e-3, 0.5).unwrap();
    let v = est.potential_at(&PROBE).unwrap();

    assert!(v > 0.0);
    assert!(v < reference);
}
