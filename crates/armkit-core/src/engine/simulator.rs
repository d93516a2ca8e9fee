use super::error::EngineError;
use super::grid::TimeGrid;
use super::trajectory::Trajectory;
use crate::core::network::mass_action::ReactionNetwork;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Integrates a reaction network over a time grid.
///
/// Implementations return one column per network species they report, sampled on
/// exactly the points of `grid`.
pub trait Simulator {
    fn run(&self, network: &ReactionNetwork, grid: &TimeGrid) -> Result<Trajectory, EngineError>;
}

/// Relative tolerance when matching trajectory times against the requested grid.
const TIME_TOLERANCE: f64 = 1e-9;

/// Serves a trajectory produced by an external engine from a CSV file.
///
/// The file is checked against the request: its time column must match the grid
/// and every other column must name a species of the network.
#[derive(Debug, Clone)]
pub struct ReplaySimulator {
    path: PathBuf,
}

impl ReplaySimulator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Simulator for ReplaySimulator {
    #[instrument(skip_all, name = "replay_simulator", fields(path = %self.path.display()))]
    fn run(&self, network: &ReactionNetwork, grid: &TimeGrid) -> Result<Trajectory, EngineError> {
        let trajectory = Trajectory::read_csv_path(&self.path)?;
        check_times(trajectory.times(), grid.points())?;
        if let Some(column) = trajectory
            .column_names()
            .find(|name| network.species_index(name).is_none())
        {
            return Err(EngineError::UnknownSpecies {
                column: column.to_string(),
            });
        }
        info!(
            "Replayed {} of {} species over {} time points.",
            trajectory.column_count(),
            network.species.len(),
            trajectory.len()
        );
        Ok(trajectory)
    }
}

fn check_times(found: &[f64], expected: &[f64]) -> Result<(), EngineError> {
    if found.len() != expected.len() {
        return Err(EngineError::TrajectoryShape {
            column: super::trajectory::TIME_COLUMN.to_string(),
            expected: expected.len(),
            found: found.len(),
        });
    }
    for (index, (&f, &e)) in found.iter().zip(expected).enumerate() {
        if (f - e).abs() > TIME_TOLERANCE * e.abs().max(1.0) {
            return Err(EngineError::TimeMismatch {
                index,
                expected: e,
                found: f,
            });
        }
    }
    Ok(())
}

/// Everything an external engine needs to produce a trajectory.
#[derive(Debug, Serialize)]
pub struct SimulationRequest<'a> {
    pub network: &'a ReactionNetwork,
    pub time_grid: &'a TimeGrid,
    /// Substring the requester will select columns with, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<&'a str>,
}

impl SimulationRequest<'_> {
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
