use thiserror::Error;

use crate::core::io::scenario::ScenarioError;
use crate::core::models::error::ModelError;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Model operation failed: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Invalid scenario: {source}")]
    Scenario {
        #[from]
        source: ScenarioError,
    },
}
