use super::ids::{ModelId, ParticleId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Particle {0:?} does not exist in this model (never added or already removed)")]
    InvalidParticle(ParticleId),

    #[error("Particle {particle:?} belongs to model {owner:?}, not to model {model:?}")]
    ForeignParticle {
        particle: ParticleId,
        owner: ModelId,
        model: ModelId,
    },

    #[error("Particle '{name}' ({particle:?}) is already decorated as {decorator}")]
    AlreadyDecorated {
        particle: ParticleId,
        name: String,
        decorator: &'static str,
    },

    #[error("Particle '{name}' ({particle:?}) is not decorated as {decorator}")]
    NotDecorated {
        particle: ParticleId,
        name: String,
        decorator: &'static str,
    },

    #[error("Coordinate axis {0} is out of range (expected 0, 1 or 2)")]
    InvalidAxis(usize),

    #[error("Radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
}
