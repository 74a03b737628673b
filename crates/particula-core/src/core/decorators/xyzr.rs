use super::xyz::Xyz;
use super::{Decorator, already_decorated, not_decorated, write_coordinates};
use crate::core::models::error::ModelError;
use crate::core::models::ids::{ParticleId, ParticleKey};
use crate::core::models::model::Model;
use crate::core::utils::geometry;
use nalgebra::Vector3;
use std::fmt;
use tracing::debug;

/// A spherical particle: an [`Xyz`] center plus a radius.
///
/// Setting up `XyzR` on a particle that is not yet an `Xyz` attaches the coordinates as well,
/// so every sphere is also a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XyzR {
    particle: ParticleId,
}

impl XyzR {
    /// Attaches a radius to a particle, keeping its coordinates if it is already an `Xyz`
    /// and placing it at the origin otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRadius`] for negative or non-finite radii,
    /// [`ModelError::InvalidParticle`] for stale ids, [`ModelError::ForeignParticle`] for ids
    /// of another model and [`ModelError::AlreadyDecorated`] if the particle already carries a
    /// radius.
    pub fn setup_particle(
        model: &mut Model,
        id: ParticleId,
        radius: f64,
    ) -> Result<Self, ModelError> {
        let key = Self::check_setup(model, id, radius)?;
        if !model.coordinates.contains_key(key) {
            Xyz::setup_particle(model, id)?;
        }
        Ok(Self::attach(model, id, radius))
    }

    /// Attaches a sphere with the given center and radius.
    ///
    /// If the particle is already an `Xyz`, its coordinates are overwritten with `center`.
    pub fn setup_particle_at(
        model: &mut Model,
        id: ParticleId,
        center: Vector3<f64>,
        radius: f64,
    ) -> Result<Self, ModelError> {
        Self::check_setup(model, id, radius)?;
        match Xyz::decorate(model, id) {
            Ok(xyz) => xyz.set_coordinates(model, center)?,
            Err(_) => {
                Xyz::setup_particle_at(model, id, center)?;
            }
        }
        Ok(Self::attach(model, id, radius))
    }

    pub fn radius(self, model: &Model) -> Result<f64, ModelError> {
        let key = model.checked_key(self.particle)?;
        model
            .radii
            .get(key)
            .copied()
            .ok_or_else(|| not_decorated(model, self.particle, Self::NAME))
    }

    pub fn set_radius(self, model: &mut Model, radius: f64) -> Result<(), ModelError> {
        check_radius(radius)?;
        let key = model.checked_key(self.particle)?;
        if !model.radii.contains_key(key) {
            return Err(not_decorated(model, self.particle, Self::NAME));
        }
        model.radii[key] = radius;
        Ok(())
    }

    /// The point view of this sphere.
    pub fn xyz(self) -> Xyz {
        // Every XyzR record has a matching Xyz record.
        Xyz::decorate_unchecked(self.particle)
    }

    pub fn coordinates(self, model: &Model) -> Result<Vector3<f64>, ModelError> {
        self.xyz().coordinates(model)
    }

    /// Distance between the surfaces of two spheres; negative when they overlap.
    pub fn sphere_distance(self, other: XyzR, model: &Model) -> Result<f64, ModelError> {
        Ok(geometry::sphere_distance(
            &self.coordinates(model)?,
            self.radius(model)?,
            &other.coordinates(model)?,
            other.radius(model)?,
        ))
    }

    pub fn view(self, model: &Model) -> Result<XyzRView<'_>, ModelError> {
        Ok(XyzRView {
            name: model.particle_name(self.particle)?,
            coordinates: self.coordinates(model)?,
            radius: self.radius(model)?,
        })
    }

    fn check_setup(
        model: &Model,
        id: ParticleId,
        radius: f64,
    ) -> Result<ParticleKey, ModelError> {
        check_radius(radius)?;
        let key = model.checked_key(id)?;
        if model.radii.contains_key(key) {
            return Err(already_decorated(model, id, Self::NAME));
        }
        Ok(key)
    }

    fn attach(model: &mut Model, id: ParticleId, radius: f64) -> Self {
        model.radii.insert(id.key(), radius);
        debug!(particle = ?id, radius, "Set up XyzR decorator.");
        Self { particle: id }
    }
}

impl Decorator for XyzR {
    const NAME: &'static str = "XyzR";

    fn is_setup(model: &Model, id: ParticleId) -> bool {
        model
            .checked_key(id)
            .is_ok_and(|key| model.radii.contains_key(key))
    }

    fn decorate(model: &Model, id: ParticleId) -> Result<Self, ModelError> {
        let key = model.checked_key(id)?;
        if !model.radii.contains_key(key) {
            return Err(not_decorated(model, id, Self::NAME));
        }
        Ok(Self { particle: id })
    }

    fn particle(self) -> ParticleId {
        self.particle
    }
}

fn check_radius(radius: f64) -> Result<(), ModelError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidRadius(radius))
    }
}

/// A read-only snapshot of a sphere, rendered as `<name> (<x>, <y>, <z>) r=<radius>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzRView<'a> {
    pub name: &'a str,
    pub coordinates: Vector3<f64>,
    pub radius: f64,
}

impl fmt::Display for XyzRView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.name)?;
        write_coordinates(f, &self.coordinates)?;
        write!(f, " r={:?}", self.radius)
    }
}
