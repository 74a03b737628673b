use super::{Decorator, already_decorated, not_decorated, write_coordinates};
use crate::core::models::error::ModelError;
use crate::core::models::ids::ParticleId;
use crate::core::models::model::Model;
use crate::core::utils::geometry;
use nalgebra::Vector3;
use std::fmt;
use tracing::debug;

/// A point-like particle: three Cartesian coordinates attached to a particle.
///
/// The handle holds only the particle id. Coordinates live in the model's `Xyz` side table
/// and are read or written by passing the model to each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Xyz {
    particle: ParticleId,
}

impl Xyz {
    /// Attaches coordinates at the origin to a particle.
    ///
    /// # Arguments
    ///
    /// * `model` - The model owning the particle.
    /// * `id` - The particle to decorate.
    ///
    /// # Return
    ///
    /// The new `Xyz` handle bound to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParticle`] for stale ids,
    /// [`ModelError::ForeignParticle`] for ids of another model and
    /// [`ModelError::AlreadyDecorated`] if the particle already carries coordinates.
    pub fn setup_particle(model: &mut Model, id: ParticleId) -> Result<Self, ModelError> {
        Self::setup_particle_at(model, id, Vector3::zeros())
    }

    /// Attaches coordinates with an initial value to a particle.
    ///
    /// # Errors
    ///
    /// Same as [`Xyz::setup_particle`].
    pub fn setup_particle_at(
        model: &mut Model,
        id: ParticleId,
        coordinates: Vector3<f64>,
    ) -> Result<Self, ModelError> {
        let key = model.checked_key(id)?;
        if model.coordinates.contains_key(key) {
            return Err(already_decorated(model, id, Self::NAME));
        }
        model.coordinates.insert(key, coordinates);
        debug!(particle = ?id, ?coordinates, "Set up Xyz decorator.");
        Ok(Self { particle: id })
    }

    /// Returns the current coordinates of the particle.
    pub fn coordinates(self, model: &Model) -> Result<Vector3<f64>, ModelError> {
        self.slot(model).copied()
    }

    /// Overwrites the coordinates of the particle.
    pub fn set_coordinates(
        self,
        model: &mut Model,
        coordinates: Vector3<f64>,
    ) -> Result<(), ModelError> {
        *self.slot_mut(model)? = coordinates;
        Ok(())
    }

    /// Returns a single coordinate (`0` = x, `1` = y, `2` = z).
    pub fn coordinate(self, model: &Model, axis: usize) -> Result<f64, ModelError> {
        check_axis(axis)?;
        Ok(self.slot(model)?[axis])
    }

    /// Overwrites a single coordinate (`0` = x, `1` = y, `2` = z).
    pub fn set_coordinate(
        self,
        model: &mut Model,
        axis: usize,
        value: f64,
    ) -> Result<(), ModelError> {
        check_axis(axis)?;
        self.slot_mut(model)?[axis] = value;
        Ok(())
    }

    /// Moves the particle by `delta`.
    pub fn translate(self, model: &mut Model, delta: Vector3<f64>) -> Result<(), ModelError> {
        *self.slot_mut(model)? += delta;
        Ok(())
    }

    /// Euclidean distance between the centers of two decorated particles.
    pub fn distance_to(self, other: Xyz, model: &Model) -> Result<f64, ModelError> {
        Ok(geometry::distance(
            &self.coordinates(model)?,
            &other.coordinates(model)?,
        ))
    }

    /// Borrows the particle's current state for rendering.
    pub fn view(self, model: &Model) -> Result<XyzView<'_>, ModelError> {
        Ok(XyzView {
            name: model.particle_name(self.particle)?,
            coordinates: self.coordinates(model)?,
        })
    }

    pub(crate) fn decorate_unchecked(id: ParticleId) -> Self {
        Self { particle: id }
    }

    fn slot(self, model: &Model) -> Result<&Vector3<f64>, ModelError> {
        let key = model.checked_key(self.particle)?;
        model
            .coordinates
            .get(key)
            .ok_or_else(|| not_decorated(model, self.particle, Self::NAME))
    }

    fn slot_mut(self, model: &mut Model) -> Result<&mut Vector3<f64>, ModelError> {
        let key = model.checked_key(self.particle)?;
        if !model.coordinates.contains_key(key) {
            return Err(not_decorated(model, self.particle, Self::NAME));
        }
        Ok(&mut model.coordinates[key])
    }
}

impl Decorator for Xyz {
    const NAME: &'static str = "Xyz";

    fn is_setup(model: &Model, id: ParticleId) -> bool {
        model
            .checked_key(id)
            .is_ok_and(|key| model.coordinates.contains_key(key))
    }

    fn decorate(model: &Model, id: ParticleId) -> Result<Self, ModelError> {
        let key = model.checked_key(id)?;
        if !model.coordinates.contains_key(key) {
            return Err(not_decorated(model, id, Self::NAME));
        }
        Ok(Self { particle: id })
    }

    fn particle(self) -> ParticleId {
        self.particle
    }
}

fn check_axis(axis: usize) -> Result<(), ModelError> {
    if axis < 3 {
        Ok(())
    } else {
        Err(ModelError::InvalidAxis(axis))
    }
}

/// A read-only snapshot of a point-like particle, rendered as `<name> (<x>, <y>, <z>)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzView<'a> {
    pub name: &'a str,
    pub coordinates: Vector3<f64>,
}

impl fmt::Display for XyzView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.name)?;
        write_coordinates(f, &self.coordinates)
    }
}
