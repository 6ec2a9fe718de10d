//! GUI panels for the L-charge demonstrator.

pub mod controls;
pub mod profile;
pub mod scene;
