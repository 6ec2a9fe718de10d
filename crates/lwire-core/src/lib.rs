//! # Lwire Core
//!
//! The numerical backbone of the lwire electrostatics demonstrator. This
//! crate computes the electric field and electric potential of an L-shaped
//! charged wire using three independent strategies, so their results can be
//! compared against one another.
//!
//! ## Architecture
//!
//! All strategies implement the [`estimator::PotentialEstimator`] trait,
//! which provides a uniform interface for evaluating the potential at a
//! point or over a whole observation grid:
//!
//! - [`estimator::analytic::AnalyticEstimator`] — closed-form potential of
//!   the finite L conductor, the reference result.
//! - [`estimator::superposition::SuperpositionEstimator`] — Coulomb
//!   superposition over the discretised point charges.
//! - [`estimator::path_integral::PathIntegralEstimator`] — discrete radial
//!   path integral of E·ds per point charge.
//!
//! ## Modules
//!
//! - [`types`] — Core data structures (charge elements, parameters, results).
//! - [`estimator`] — Potential estimator trait and implementations.
//! - [`field`] — Electric field superposition and field maps.
//! - [`compare`] — Headless driver running all three strategies over a grid.

pub mod compare;
pub mod estimator;
pub mod field;
pub mod types;
