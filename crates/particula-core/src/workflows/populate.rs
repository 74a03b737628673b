use super::error::WorkflowError;
use crate::core::decorators::xyz::Xyz;
use crate::core::decorators::xyzr::XyzR;
use crate::core::io::scenario::Scenario;
use crate::core::models::error::ModelError;
use crate::core::models::ids::ParticleId;
use crate::core::models::model::Model;
use tracing::{debug, info, instrument};

/// A model built from a scenario, with particle ids kept in scenario order.
#[derive(Debug, Clone)]
pub struct PopulatedModel {
    pub model: Model,
    pub particles: Vec<ParticleId>,
}

impl PopulatedModel {
    /// Renders every particle, one entry per particle in scenario order.
    pub fn render_lines(&self) -> Result<Vec<String>, ModelError> {
        self.particles
            .iter()
            .map(|&id| self.model.render(id))
            .collect()
    }
}

/// Creates a model and populates it from `scenario`.
///
/// The sequence is linear and unconditional: every particle is added, then every particle is
/// decorated (`XyzR` when the scenario gives a radius, `Xyz` otherwise), then every particle
/// receives its coordinates. Any fault aborts the run.
///
/// # Errors
///
/// Returns [`WorkflowError::Scenario`] if the scenario fails validation and
/// [`WorkflowError::Model`] if a model operation is rejected (e.g., an invalid radius).
#[instrument(skip_all, name = "populate_workflow", fields(particles = scenario.particles.len()))]
pub fn run(scenario: &Scenario) -> Result<PopulatedModel, WorkflowError> {
    scenario.validate()?;
    info!("Populating model from scenario.");

    let mut model = Model::new();

    let particles: Vec<ParticleId> = scenario
        .particles
        .iter()
        .map(|spec| model.add_particle(&spec.name))
        .collect();

    let mut decorated = Vec::with_capacity(particles.len());
    for (spec, &id) in scenario.particles.iter().zip(&particles) {
        let xyz = match spec.radius {
            Some(radius) => XyzR::setup_particle(&mut model, id, radius)?.xyz(),
            None => Xyz::setup_particle(&mut model, id)?,
        };
        decorated.push(xyz);
    }

    for (spec, xyz) in scenario.particles.iter().zip(&decorated) {
        xyz.set_coordinates(&mut model, spec.coordinates())?;
        debug!(name = %spec.name, coordinates = ?spec.coordinates, "Placed particle.");
    }

    info!("Model populated with {} particles.", model.len());
    Ok(PopulatedModel { model, particles })
}
