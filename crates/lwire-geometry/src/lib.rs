//! # Lwire Geometry
//!
//! Geometry handling for the lwire electrostatics demonstrator. This crate
//! provides:
//!
//! - **The L-wire primitive** ([`wire`]) — Two perpendicular charged legs of
//!   equal length sharing a corner at the origin.
//! - **Discretisation** ([`discretise`]) — Converts the wire into a lattice
//!   of equally spaced point-charge sites.

pub mod discretise;
pub mod wire;
