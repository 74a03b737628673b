//! # Decorators
//!
//! Typed capabilities attached to particles after creation.
//!
//! A decorator handle is a thin `Copy` token holding only a [`ParticleId`]. It is created
//! either by a `setup_particle` function, which inserts the side-table record and fails if the
//! particle already carries the capability, or by [`Decorator::decorate`], which wraps a
//! particle that was set up earlier. Every operation takes the owning [`Model`] explicitly.
//!
//! - [`xyz`] - Point-like particles with three Cartesian coordinates
//! - [`xyzr`] - Spheres: an `Xyz` plus a radius

use crate::core::models::error::ModelError;
use crate::core::models::ids::ParticleId;
use crate::core::models::model::Model;
use nalgebra::Vector3;
use std::fmt;

pub mod xyz;
pub mod xyzr;

/// Common interface of all decorator kinds.
pub trait Decorator: Copy + Sized {
    /// The display name of the decorator kind, used in fault reports.
    const NAME: &'static str;

    /// Returns `true` if the particle is live and carries this capability.
    fn is_setup(model: &Model, id: ParticleId) -> bool;

    /// Wraps a particle that already carries this capability.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParticle`] for stale ids,
    /// [`ModelError::ForeignParticle`] for ids of another model and
    /// [`ModelError::NotDecorated`] if the capability was never set up.
    fn decorate(model: &Model, id: ParticleId) -> Result<Self, ModelError>;

    /// The particle this handle is bound to.
    fn particle(self) -> ParticleId;
}

pub(crate) fn not_decorated(
    model: &Model,
    id: ParticleId,
    decorator: &'static str,
) -> ModelError {
    match model.particle_name(id) {
        Ok(name) => ModelError::NotDecorated {
            particle: id,
            name: name.to_string(),
            decorator,
        },
        Err(e) => e,
    }
}

pub(crate) fn already_decorated(
    model: &Model,
    id: ParticleId,
    decorator: &'static str,
) -> ModelError {
    match model.particle_name(id) {
        Ok(name) => ModelError::AlreadyDecorated {
            particle: id,
            name: name.to_string(),
            decorator,
        },
        Err(e) => e,
    }
}

pub(crate) fn write_coordinates(f: &mut fmt::Formatter<'_>, v: &Vector3<f64>) -> fmt::Result {
    write!(f, "({:?}, {:?}, {:?})", v.x, v.y, v.z)
}
