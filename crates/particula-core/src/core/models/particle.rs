/// An opaque entity registered in a [`Model`](super::model::Model).
///
/// A particle has identity and a human-readable name, but no attributes of its own.
/// Attributes are attached afterwards through decorators, which keep their data in
/// side tables owned by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Particle {
    /// The diagnostic label of the particle (e.g., "p1").
    pub name: String,
}

impl Particle {
    /// Creates a new `Particle` with the given name.
    ///
    /// # Arguments
    ///
    /// * `name` - The human-readable label of the particle.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_stores_name() {
        let particle = Particle::new("p1");
        assert_eq!(particle.name, "p1");
    }

    #[test]
    fn particle_equality_and_clone_works() {
        let p1 = Particle::new("p1");
        let p2 = p1.clone();
        assert_eq!(p1, p2);
        assert_ne!(p1, Particle::new("p2"));
    }
}
