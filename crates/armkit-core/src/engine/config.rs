use crate::core::catalog::Variant;
use crate::core::reactions::expansion::ElidedComplex;
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// A one-off model derived from a catalog variant at run time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeriveSpec {
    pub name: String,
    /// Species or parameter paths to new values, e.g. `"L" = 500.0` or `"Bax.C" = 2e5`.
    pub overrides: IndexMap<String, f64>,
    pub remove_reactions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    pub variant: Variant,
    pub derive: Option<DeriveSpec>,
    /// Run-time parameter values applied at compile time.
    pub parameters: IndexMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeGridConfig {
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    pub model: ModelSpec,
    pub elided_complex: ElidedComplex,
    pub time_grid: TimeGridConfig,
    /// Substring selecting the trajectory columns to keep.
    pub selection: String,
}

#[derive(Default)]
pub struct FigureConfigBuilder {
    variant: Option<Variant>,
    derive: Option<DeriveSpec>,
    parameters: IndexMap<String, f64>,
    elided_complex: Option<ElidedComplex>,
    start: Option<f64>,
    stop: Option<f64>,
    points: Option<usize>,
    selection: Option<String>,
}

impl FigureConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
    pub fn derive(mut self, derive: DeriveSpec) -> Self {
        self.derive = Some(derive);
        self
    }
    pub fn parameter(mut self, name: &str, value: f64) -> Self {
        self.parameters.insert(name.to_string(), value);
        self
    }
    pub fn elided_complex(mut self, policy: ElidedComplex) -> Self {
        self.elided_complex = Some(policy);
        self
    }
    pub fn start(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }
    pub fn stop(mut self, stop: f64) -> Self {
        self.stop = Some(stop);
        self
    }
    pub fn points(mut self, points: usize) -> Self {
        self.points = Some(points);
        self
    }
    pub fn selection(mut self, pattern: impl Into<String>) -> Self {
        self.selection = Some(pattern.into());
        self
    }

    pub fn build(self) -> Result<FigureConfig, ConfigError> {
        let model = ModelSpec {
            variant: self
                .variant
                .ok_or(ConfigError::MissingParameter("variant"))?,
            derive: self.derive,
            parameters: self.parameters,
        };
        let time_grid = TimeGridConfig {
            start: self.start.ok_or(ConfigError::MissingParameter("start"))?,
            stop: self.stop.ok_or(ConfigError::MissingParameter("stop"))?,
            points: self.points.ok_or(ConfigError::MissingParameter("points"))?,
        };
        Ok(FigureConfig {
            model,
            elided_complex: self.elided_complex.unwrap_or_default(),
            time_grid,
            selection: self
                .selection
                .ok_or(ConfigError::MissingParameter("selection"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_every_sampling_setting() {
        let err = FigureConfigBuilder::new()
            .variant(Variant::Arm)
            .start(0.0)
            .points(10)
            .selection("monomer")
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("stop"));
    }

    #[test]
    fn builder_defaults_to_steady_state_elided_complexes() {
        let config = FigureConfigBuilder::new()
            .variant(Variant::ArmExtrinsic)
            .parameter("KF", 2e-6)
            .start(0.0)
            .stop(1.0)
            .points(10)
            .selection("monomer")
            .build()
            .unwrap();
        assert_eq!(config.elided_complex, ElidedComplex::QuasiSteadyState);
        assert_eq!(config.model.parameters.get("KF"), Some(&2e-6));
        assert!(config.model.derive.is_none());
    }
}
