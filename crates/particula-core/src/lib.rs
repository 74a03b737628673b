//! # Particula Core Library
//!
//! A small particle-modeling library: a [`Model`](core::models::model::Model) owns opaque
//! particles, and typed decorators attach capabilities (such as point coordinates) to those
//! particles after they have been created.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** The particle registry (`Model`), generational particle
//!   identifiers, the decorator side tables (`Xyz`, `XyzR`), geometry helpers and scenario I/O.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on top of `core`, such as
//!   populating a model from a scenario description and rendering every particle.

pub mod core;
pub mod workflows;
