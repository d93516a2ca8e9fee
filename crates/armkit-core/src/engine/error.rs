use crate::core::models::error::ModelError;
use crate::core::network::mass_action::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Model definition error: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Reaction network error: {source}")]
    Network {
        #[from]
        source: NetworkError,
    },

    #[error("Invalid time grid: {0}")]
    InvalidTimeGrid(String),

    #[error("Trajectory column '{column}' has {found} values, expected {expected}")]
    TrajectoryShape {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Trajectory column '{column}' appears more than once")]
    DuplicateColumn { column: String },

    #[error("Trajectory column '{column}' does not name a species of the network")]
    UnknownSpecies { column: String },

    #[error("Trajectory time point {index} is {found}, expected {expected}")]
    TimeMismatch {
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("Trajectory CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Failed to serialize simulation request: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("Workflow phase '{phase}' failed: {reason}")]
    PhaseFailed { phase: &'static str, reason: String },
}
