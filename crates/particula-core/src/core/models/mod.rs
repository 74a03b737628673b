//! # Core Models Module
//!
//! Data structures that represent a particle model.
//!
//! - [`model`] - The owning registry of particles and their decorator side tables
//! - [`particle`] - A single particle record
//! - [`ids`] - Generational identifiers for particles
//! - [`error`] - Faults raised when a particle or decorator is misused
//!
//! ## Usage
//!
//! ```ignore
//! use particula::core::decorators::xyz::Xyz;
//! use particula::core::models::model::Model;
//! use nalgebra::Vector3;
//!
//! let mut model = Model::new();
//! let p1 = model.add_particle("p1");
//! let d1 = Xyz::setup_particle(&mut model, p1)?;
//! d1.set_coordinates(&mut model, Vector3::new(10.0, 10.0, 10.0))?;
//! println!("{}", d1.view(&model)?);
//! ```

pub mod error;
pub mod ids;
pub mod model;
pub mod particle;
