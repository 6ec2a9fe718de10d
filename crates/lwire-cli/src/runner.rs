//! Comparison runner: ties together geometry, estimators, and export.

use std::path::Path;

use anyhow::Result;

use lwire_core::compare::compare_estimators;
use lwire_core::estimator::ObservationGrid;
use lwire_core::types::{ChargeElement, ComparisonResult, SimulationParams};
use lwire_geometry::discretise::discretise_wire;
use lwire_geometry::wire::LWire;

use crate::config::JobConfig;

/// Results from a comparison run, with the inputs kept for export headers.
pub struct ComparisonOutput {
    pub wire: LWire,
    pub elements: Vec<ChargeElement>,
    pub result: ComparisonResult,
}

/// The marker/colour key, printed once at startup.
pub fn print_legend() {
    println!("Key:");
    println!();
    println!("1. Yellow sphere height = actual voltage given by the analytical function");
    println!("   Exact wherever the closed form is defined");
    println!();
    println!("2. Translucent column height = voltage from summing point-charge contributions");
    println!("   Accuracy depends on dq, a small bit of charge");
    println!();
    println!("3. Blue sphere height = voltage from numerically integrating E dot ds");
    println!("   Accuracy depends on dq and on dt, a small bit of path");
    println!();
    println!("4. Blue arrow = direction of ds while the E dot ds integral is evaluated");
    println!("   The GUI can slow this animation down or keep the last arrow on screen");
    println!();
    println!("5. Red/yellow/green arrows = strength and direction of the electric field");
    println!("   In terms of strength: red > yellow > green");
    println!();
}

/// Run a full comparison from a parsed job configuration.
pub fn run_comparison(job: &JobConfig) -> Result<ComparisonOutput> {
    let wire = LWire::new(job.wire.length, job.wire.total_charge);
    let lattice = discretise_wire(&wire, job.wire.divisions);
    let positions: Vec<[f64; 3]> = lattice.iter().map(|p| p.position).collect();
    let elements = ChargeElement::distribute(&positions, wire.total_charge);

    println!(
        "  Wire: {} point charges (dl = {:.4} m, dq = {:.3e} C)",
        elements.len(),
        wire.length / job.wire.divisions as f64,
        elements[0].charge
    );

    let grid = ObservationGrid::square(job.grid.extent, job.grid.points);
    println!(
        "  Grid: {}x{} points over {:.2} m",
        grid.nx, grid.ny, job.grid.extent
    );

    let params = SimulationParams {
        path_step: job.integration.path_step,
        path_cutoff: job.integration.path_cutoff,
        clamp_threshold: job.integration.clamp_threshold,
        ..Default::default()
    };

    log::info!(
        "comparing 3 estimators over {} grid points against {} wire elements",
        grid.len(),
        elements.len()
    );
    let result = compare_estimators(
        wire.length,
        wire.total_charge,
        &elements,
        &grid,
        &params,
    )
    .map_err(|e| anyhow::anyhow!("Comparison failed: {}", e))?;

    if job.output.print_voltages {
        print_voltages(&result);
    }

    Ok(ComparisonOutput {
        wire,
        elements,
        result,
    })
}

/// Per-point voltage dump, the demonstrator's optional debug output.
fn print_voltages(result: &ComparisonResult) {
    for iy in 0..result.grid.ny {
        for ix in 0..result.grid.nx {
            let [x, y, _] = result.grid.point(ix, iy);
            println!(
                "Potential at ({:.3}, {:.3}): analytic {:.4e} V, superposition {:.4e} V, path integral {:.4e} V",
                x,
                y,
                result.analytic[[iy, ix]],
                result.superposition[[iy, ix]],
                result.path_integral[[iy, ix]],
            );
        }
    }
}

/// Write the three voltage surfaces to a CSV file with a metadata header.
pub fn write_potentials_csv(output: &ComparisonOutput, path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    let result = &output.result;

    writeln!(file, "# L-wire potential comparison")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        file,
        "# wire: L={} m, Q={:.3e} C, {} elements",
        output.wire.length,
        output.wire.total_charge,
        output.elements.len()
    )?;
    writeln!(file, "# grid: {}x{}", result.grid.nx, result.grid.ny)?;
    writeln!(file, "#")?;
    writeln!(file, "x_m,y_m,analytic_v,superposition_v,path_integral_v")?;

    for iy in 0..result.grid.ny {
        for ix in 0..result.grid.nx {
            let [x, y, _] = result.grid.point(ix, iy);
            writeln!(
                file,
                "{:.4},{:.4},{:.6e},{:.6e},{:.6e}",
                x,
                y,
                result.analytic[[iy, ix]],
                result.superposition[[iy, ix]],
                result.path_integral[[iy, ix]],
            )?;
        }
    }

    println!("Potentials written to: {}", path.display());
    Ok(())
}

/// Write the field map to a CSV file.
pub fn write_field_csv(output: &ComparisonOutput, path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    let field = &output.result.field;

    writeln!(file, "# L-wire electric field map")?;
    writeln!(file, "# grid: {}x{}", field.nx, field.ny)?;
    writeln!(file, "#")?;
    writeln!(file, "x_m,y_m,ex_v_per_m,ey_v_per_m,magnitude_v_per_m")?;

    for (pos, (vec, mag)) in field
        .positions
        .iter()
        .zip(field.vectors.iter().zip(field.magnitudes.iter()))
    {
        writeln!(
            file,
            "{:.4},{:.4},{:.6e},{:.6e},{:.6e}",
            pos[0], pos[1], vec[0], vec[1], mag
        )?;
    }

    println!("Field map written to: {}", path.display());
    Ok(())
}

/// One grid point of the JSON export.
#[derive(serde::Serialize)]
struct PointRecord {
    x_m: f64,
    y_m: f64,
    analytic_v: f64,
    superposition_v: f64,
    path_integral_v: f64,
    ex_v_per_m: f64,
    ey_v_per_m: f64,
    field_magnitude_v_per_m: f64,
}

/// Write the full comparison to a JSON file.
pub fn write_comparison_json(output: &ComparisonOutput, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let result = &output.result;
    let mut records = Vec::with_capacity(result.grid.len());
    for iy in 0..result.grid.ny {
        for ix in 0..result.grid.nx {
            let [x, y, _] = result.grid.point(ix, iy);
            let flat = result.grid.index(ix, iy);
            records.push(PointRecord {
                x_m: x,
                y_m: y,
                analytic_v: result.analytic[[iy, ix]],
                superposition_v: result.superposition[[iy, ix]],
                path_integral_v: result.path_integral[[iy, ix]],
                ex_v_per_m: result.field.vectors[flat][0],
                ey_v_per_m: result.field.vectors[flat][1],
                field_magnitude_v_per_m: result.field.magnitudes[flat],
            });
        }
    }

    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Comparison (JSON) written to: {}", path.display());
    Ok(())
}
