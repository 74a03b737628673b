//! # Core Module
//!
//! The fundamental building blocks of Particula.
//!
//! - **Particle Registry** ([`models`]) - The owning `Model`, particle records and identifiers
//! - **Capabilities** ([`decorators`]) - Typed attribute bundles attached to particles (`Xyz`, `XyzR`)
//! - **File I/O** ([`io`]) - Scenario descriptions in TOML format
//! - **Geometry** ([`utils`]) - Distances, centroids and bounding boxes over coordinate vectors
//!
//! Decorators are not stored inside particles. Each decorator kind owns a side table in the
//! model keyed by particle id, and a decorator handle is a plain `Copy` token that proves the
//! table entry existed when the handle was created.

pub mod decorators;
pub mod io;
pub mod models;
pub mod utils;
