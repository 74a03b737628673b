use slotmap::new_key_type;
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    pub(crate) struct ParticleKey;
}

static MODEL_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier of a [`Model`](super::model::Model).
///
/// Allocated from a monotonic atomic counter, so a model created after another one was
/// dropped never receives the dropped model's id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(u64);

impl ModelId {
    pub(crate) fn next() -> Self {
        Self(MODEL_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identifies a particle within one specific model.
///
/// The slot key carries a generation, which rejects ids of removed particles; the model id
/// rejects ids that belong to another (possibly already dropped) model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParticleId {
    model: ModelId,
    key: ParticleKey,
}

impl ParticleId {
    pub(crate) fn new(model: ModelId, key: ParticleKey) -> Self {
        Self { model, key }
    }

    /// The model this particle was registered in.
    pub fn model(self) -> ModelId {
        self.model
    }

    pub(crate) fn key(self) -> ParticleKey {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_ids_are_unique() {
        let a = ModelId::next();
        let b = ModelId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
