use super::error::ModelError;
use super::ids::{ModelId, ParticleId, ParticleKey};
use super::particle::Particle;
use crate::core::decorators::Decorator;
use crate::core::decorators::xyz::Xyz;
use crate::core::decorators::xyzr::XyzR;
use nalgebra::Vector3;
use slotmap::{SecondaryMap, SlotMap};
use tracing::{debug, trace};

/// The owning registry of particles and all decorator data attached to them.
///
/// Particles live in a slot map, so the key inside every [`ParticleId`] carries a generation
/// and an id of a removed particle can never alias a particle added later. Each model also
/// stamps its own [`ModelId`] into the ids it hands out, so ids from another model (including
/// one that has been dropped) are rejected rather than resolved against this one.
///
/// Each decorator kind keeps its records in its own side table keyed by particle; the
/// particle record itself knows nothing about the capabilities attached to it. A clone shares
/// its source's model id, so ids and handles of the source stay valid on the clone.
#[derive(Debug, Clone)]
pub struct Model {
    id: ModelId,
    /// Primary storage for particles.
    particles: SlotMap<ParticleKey, Particle>,
    /// Side table of the `Xyz` decorator.
    pub(crate) coordinates: SecondaryMap<ParticleKey, Vector3<f64>>,
    /// Side table of the `XyzR` decorator. Every key is also present in `coordinates`.
    pub(crate) radii: SecondaryMap<ParticleKey, f64>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            id: ModelId::next(),
            particles: SlotMap::with_key(),
            coordinates: SecondaryMap::new(),
            radii: SecondaryMap::new(),
        }
    }
}

impl Model {
    /// Creates a new, empty model with a fresh [`ModelId`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The identity stamped into every particle id this model hands out.
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Registers a new particle and returns its identifier.
    ///
    /// The returned identifier is unique within this model: no two calls on the same
    /// model return the same id, even if particles are removed in between.
    ///
    /// # Arguments
    ///
    /// * `name` - The human-readable label used for diagnostics and rendering.
    ///
    /// # Return
    ///
    /// The `ParticleId` of the new particle.
    pub fn add_particle(&mut self, name: &str) -> ParticleId {
        let id = ParticleId::new(self.id, self.particles.insert(Particle::new(name)));
        trace!(particle = ?id, name, "Added particle.");
        id
    }

    /// Removes a particle together with every decorator record attached to it.
    ///
    /// After removal, the identifier (and every decorator handle built from it) is stale
    /// and is rejected by all model operations.
    ///
    /// # Arguments
    ///
    /// * `id` - The particle to remove.
    ///
    /// # Return
    ///
    /// The removed `Particle` record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ForeignParticle`] if the id belongs to another model and
    /// [`ModelError::InvalidParticle`] if it is not live in this model.
    pub fn remove_particle(&mut self, id: ParticleId) -> Result<Particle, ModelError> {
        let key = self.checked_key(id)?;
        let particle = self
            .particles
            .remove(key)
            .ok_or(ModelError::InvalidParticle(id))?;
        self.coordinates.remove(key);
        self.radii.remove(key);
        debug!(particle = ?id, name = %particle.name, "Removed particle and its decorators.");
        Ok(particle)
    }

    /// Retrieves a particle record by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Particle)` if the particle is live in this model, otherwise `None`.
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.checked_key(id).ok().and_then(|key| self.particles.get(key))
    }

    /// Returns `true` if the id refers to a live particle of this model.
    pub fn contains(&self, id: ParticleId) -> bool {
        self.checked_key(id).is_ok()
    }

    /// Returns the name of a particle.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ForeignParticle`] or [`ModelError::InvalidParticle`] if the id
    /// is not live in this model.
    pub fn particle_name(&self, id: ParticleId) -> Result<&str, ModelError> {
        let key = self.checked_key(id)?;
        Ok(self.particles[key].name.as_str())
    }

    /// Returns the number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns `true` if the model holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Returns an iterator over all live particles in slot order.
    pub fn particles_iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
        let model = self.id;
        self.particles
            .iter()
            .map(move |(key, particle)| (ParticleId::new(model, key), particle))
    }

    /// Renders a particle using the richest decorator it carries.
    ///
    /// Spheres (`XyzR`) render as `<name> (<x>, <y>, <z>) r=<radius>`, points (`Xyz`) as
    /// `<name> (<x>, <y>, <z>)`, and undecorated particles as their name alone.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ForeignParticle`] or [`ModelError::InvalidParticle`] if the id
    /// is not live in this model.
    pub fn render(&self, id: ParticleId) -> Result<String, ModelError> {
        if XyzR::is_setup(self, id) {
            return Ok(XyzR::decorate(self, id)?.view(self)?.to_string());
        }
        if Xyz::is_setup(self, id) {
            return Ok(Xyz::decorate(self, id)?.view(self)?.to_string());
        }
        self.particle_name(id).map(str::to_string)
    }

    /// Resolves an id to its slot key, rejecting foreign and stale ids.
    pub(crate) fn checked_key(&self, id: ParticleId) -> Result<ParticleKey, ModelError> {
        if id.model() != self.id {
            return Err(ModelError::ForeignParticle {
                particle: id,
                owner: id.model(),
                model: self.id,
            });
        }
        if !self.particles.contains_key(id.key()) {
            return Err(ModelError::InvalidParticle(id));
        }
        Ok(id.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_model_is_empty() {
        let model = Model::new();
        assert!(model.is_empty());
        assert_eq!(model.len(), 0);
        assert_eq!(model.particles_iter().count(), 0);
    }

    #[test]
    fn add_particle_returns_distinct_ids() {
        let mut model = Model::new();
        let ids: Vec<ParticleId> = (0..64)
            .map(|i| model.add_particle(&format!("p{}", i)))
            .collect();

        let unique: HashSet<ParticleId> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(model.len(), 64);
    }

    #[test]
    fn add_particle_with_same_name_still_yields_distinct_ids() {
        let mut model = Model::new();
        let a = model.add_particle("p");
        let b = model.add_particle("p");
        assert_ne!(a, b);
        assert_eq!(model.particle_name(a).unwrap(), "p");
        assert_eq!(model.particle_name(b).unwrap(), "p");
    }

    #[test]
    fn particle_lookup_returns_record() {
        let mut model = Model::new();
        let id = model.add_particle("p1");
        assert!(model.contains(id));
        assert_eq!(model.particle(id).unwrap().name, "p1");
    }

    #[test]
    fn remove_particle_makes_id_stale() {
        let mut model = Model::new();
        let id = model.add_particle("p1");

        let removed = model.remove_particle(id).unwrap();

        assert_eq!(removed.name, "p1");
        assert!(!model.contains(id));
        assert!(model.particle(id).is_none());
        assert_eq!(
            model.particle_name(id),
            Err(ModelError::InvalidParticle(id))
        );
        assert_eq!(
            model.remove_particle(id),
            Err(ModelError::InvalidParticle(id))
        );
    }

    #[test]
    fn removed_id_is_not_reused_by_new_particle() {
        let mut model = Model::new();
        let old = model.add_particle("old");
        model.remove_particle(old).unwrap();

        let new = model.add_particle("new");

        assert_ne!(old, new);
        assert!(!model.contains(old));
        assert_eq!(model.particle_name(new).unwrap(), "new");
    }

    #[test]
    fn remove_particle_drops_decorator_records() {
        let mut model = Model::new();
        let id = model.add_particle("p1");
        XyzR::setup_particle(&mut model, id, 2.0).unwrap();
        assert!(model.coordinates.contains_key(id.key()));
        assert!(model.radii.contains_key(id.key()));

        model.remove_particle(id).unwrap();

        assert!(!model.coordinates.contains_key(id.key()));
        assert!(!model.radii.contains_key(id.key()));
    }

    #[test]
    fn render_picks_richest_decorator() {
        let mut model = Model::new();
        let plain = model.add_particle("plain");
        let point = model.add_particle("point");
        let sphere = model.add_particle("sphere");

        Xyz::setup_particle_at(&mut model, point, Vector3::new(1.0, 2.0, 3.0)).unwrap();
        XyzR::setup_particle_at(&mut model, sphere, Vector3::new(0.5, 0.0, -0.5), 1.5).unwrap();

        assert_eq!(model.render(plain).unwrap(), "plain");
        assert_eq!(model.render(point).unwrap(), "point (1.0, 2.0, 3.0)");
        assert_eq!(
            model.render(sphere).unwrap(),
            "sphere (0.5, 0.0, -0.5) r=1.5"
        );
    }

    #[test]
    fn render_rejects_stale_id() {
        let mut model = Model::new();
        let id = model.add_particle("p1");
        model.remove_particle(id).unwrap();
        assert_eq!(model.render(id), Err(ModelError::InvalidParticle(id)));
    }

    #[test]
    fn each_model_gets_its_own_id() {
        let a = Model::new();
        let b = Model::default();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn ids_from_another_model_are_rejected() {
        let mut a = Model::new();
        let mut b = Model::new();
        let foreign = a.add_particle("p1");
        b.add_particle("other");

        assert!(!b.contains(foreign));
        assert!(b.particle(foreign).is_none());
        assert_eq!(
            b.particle_name(foreign),
            Err(ModelError::ForeignParticle {
                particle: foreign,
                owner: a.id(),
                model: b.id(),
            })
        );
        assert!(matches!(
            b.remove_particle(foreign),
            Err(ModelError::ForeignParticle { .. })
        ));
        assert!(matches!(
            b.render(foreign),
            Err(ModelError::ForeignParticle { .. })
        ));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn ids_from_a_dropped_model_are_rejected() {
        let stale = {
            let mut dropped = Model::new();
            dropped.add_particle("p1")
        };
        let mut fresh = Model::new();
        fresh.add_particle("other");

        assert!(!fresh.contains(stale));
        assert!(matches!(
            fresh.particle_name(stale),
            Err(ModelError::ForeignParticle { .. })
        ));
    }

    #[test]
    fn clone_accepts_ids_of_its_source() {
        let mut model = Model::new();
        let id = model.add_particle("p1");

        let copy = model.clone();

        assert_eq!(copy.id(), model.id());
        assert_eq!(copy.particle_name(id).unwrap(), "p1");
    }

    #[test]
    fn particles_iter_yields_usable_ids() {
        let mut model = Model::new();
        let a = model.add_particle("a");
        let b = model.add_particle("b");

        let ids: HashSet<ParticleId> = model.particles_iter().map(|(id, _)| id).collect();

        assert_eq!(ids, HashSet::from([a, b]));
        for id in ids {
            assert!(model.contains(id));
        }
    }
}
