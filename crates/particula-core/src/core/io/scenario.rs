use nalgebra::Vector3;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid scenario TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Scenario defines no particles")]
    Empty,
    #[error("Particle name '{0}' is defined more than once")]
    DuplicateName(String),
}

/// One particle to create: its name, its coordinates and, for spheres, its radius.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParticleSpec {
    pub name: String,
    pub coordinates: [f64; 3],
    #[serde(default)]
    pub radius: Option<f64>,
}

impl ParticleSpec {
    pub fn point(name: &str, coordinates: [f64; 3]) -> Self {
        Self {
            name: name.to_string(),
            coordinates,
            radius: None,
        }
    }

    pub fn coordinates(&self) -> Vector3<f64> {
        Vector3::from(self.coordinates)
    }
}

/// An ordered list of particles a workflow should create.
///
/// In TOML each particle is a `[[particle]]` table:
///
/// ```toml
/// [[particle]]
/// name = "p1"
/// coordinates = [10.0, 10.0, 10.0]
/// radius = 1.5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(rename = "particle", default)]
    pub particles: Vec<ParticleSpec>,
}

impl Scenario {
    /// The built-in example: two point-like particles placed symmetrically about the origin.
    pub fn simple() -> Self {
        Self {
            particles: vec![
                ParticleSpec::point("p1", [10.0, 10.0, 10.0]),
                ParticleSpec::point("p2", [-10.0, -10.0, -10.0]),
            ],
        }
    }

    /// Parses and validates a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] for malformed TOML or unknown fields, and the
    /// validation errors of [`Scenario::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reads, parses and validates a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        debug!("Loading scenario from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks that the scenario is non-empty and particle names are unique.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.particles.is_empty() {
            return Err(ScenarioError::Empty);
        }
        let mut seen = HashSet::new();
        for spec in &self.particles {
            if !seen.insert(spec.name.as_str()) {
                return Err(ScenarioError::DuplicateName(spec.name.clone()));
            }
        }
        Ok(())
    }
}
