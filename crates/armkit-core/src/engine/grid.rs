use super::error::EngineError;
use serde::Serialize;

/// Strictly increasing time points a trajectory is sampled on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// `points` evenly spaced values from `start` to `stop`, both included.
    ///
    /// A single point yields `[start]`.
    pub fn linspace(start: f64, stop: f64, points: usize) -> Result<Self, EngineError> {
        if points == 0 {
            return Err(EngineError::InvalidTimeGrid(
                "at least one time point is required".to_string(),
            ));
        }
        if !(start.is_finite() && stop.is_finite()) {
            return Err(EngineError::InvalidTimeGrid(format!(
                "bounds must be finite, got [{}, {}]",
                start, stop
            )));
        }
        if points > 1 && stop <= start {
            return Err(EngineError::InvalidTimeGrid(format!(
                "stop ({}) must be greater than start ({})",
                stop, start
            )));
        }

        let grid = if points == 1 {
            vec![start]
        } else {
            let step = (stop - start) / (points - 1) as f64;
            let mut grid: Vec<f64> = (0..points).map(|i| start + step * i as f64).collect();
            // Pin the endpoint against accumulated rounding.
            grid[points - 1] = stop;
            grid
        };
        Ok(Self { points: grid })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.points[0]
    }

    pub fn stop(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}
