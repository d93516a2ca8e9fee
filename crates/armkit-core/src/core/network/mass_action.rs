use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("State vector has {found} entries, expected {expected}")]
    StateLength { expected: usize, found: usize },

    #[error("Step '{step}' references species index {index}, but the network has {len} species")]
    SpeciesIndex {
        step: String,
        index: usize,
        len: usize,
    },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Unknown network format '{0}'. Expected 'json' or 'toml'.")]
    UnknownFormat(String),
}

/// Serialization format for exported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkFormat {
    #[default]
    Json,
    Toml,
}

impl FromStr for NetworkFormat {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(NetworkFormat::Json),
            "toml" => Ok(NetworkFormat::Toml),
            other => Err(NetworkError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpecies {
    pub name: String,
    pub initial: f64,
    #[serde(default)]
    pub implicit: bool,
}

/// A species index with its stoichiometric coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoichTerm {
    pub species: usize,
    pub coefficient: u32,
}

/// One elementary mass-action step with a resolved rate constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub label: String,
    pub reaction: String,
    pub reactants: Vec<StoichTerm>,
    pub products: Vec<StoichTerm>,
    pub rate_constant: f64,
}

/// A compiled, index-based mass-action network.
///
/// This is the hand-off format for external engines: every name has been resolved,
/// every parameter has a value, and every template has been expanded into
/// elementary steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionNetwork {
    pub model: String,
    pub species: Vec<NetworkSpecies>,
    pub parameters: IndexMap<String, f64>,
    pub steps: Vec<Step>,
}

impl ReactionNetwork {
    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s.name == name)
    }

    pub fn initial_state(&self) -> Vec<f64> {
        self.species.iter().map(|s| s.initial).collect()
    }

    /// Steps generated from the named reaction rule.
    pub fn steps_of<'a>(&'a self, reaction: &'a str) -> impl Iterator<Item = &'a Step> + 'a {
        self.steps.iter().filter(move |s| s.reaction == reaction)
    }

    fn check_state(&self, state: &[f64]) -> Result<(), NetworkError> {
        if state.len() != self.species.len() {
            return Err(NetworkError::StateLength {
                expected: self.species.len(),
                found: state.len(),
            });
        }
        Ok(())
    }

    /// Checks that every step refers to an existing species; needed for networks read
    /// back from a file.
    pub fn validate(&self) -> Result<(), NetworkError> {
        let len = self.species.len();
        for step in &self.steps {
            for term in step.reactants.iter().chain(&step.products) {
                if term.species >= len {
                    return Err(NetworkError::SpeciesIndex {
                        step: step.label.clone(),
                        index: term.species,
                        len,
                    });
                }
            }
        }
        Ok(())
    }

    /// Mass-action flux of every step: `k * prod(x_i ^ nu_i)`.
    pub fn fluxes(&self, state: &[f64]) -> Result<Vec<f64>, NetworkError> {
        self.check_state(state)?;
        Ok(self
            .steps
            .iter()
            .map(|step| {
                step.reactants.iter().fold(step.rate_constant, |acc, term| {
                    acc * state[term.species].powi(term.coefficient as i32)
                })
            })
            .collect())
    }

    /// Time derivative of every species under mass-action kinetics.
    pub fn derivatives(&self, state: &[f64]) -> Result<Vec<f64>, NetworkError> {
        let fluxes = self.fluxes(state)?;
        let mut out = vec![0.0; self.species.len()];
        for (step, flux) in self.steps.iter().zip(fluxes) {
            for term in &step.reactants {
                out[term.species] -= term.coefficient as f64 * flux;
            }
            for term in &step.products {
                out[term.species] += term.coefficient as f64 * flux;
            }
        }
        Ok(out)
    }

    pub fn to_json(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String, NetworkError> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, NetworkError> {
        let network: Self = serde_json::from_str(content)?;
        network.validate()?;
        Ok(network)
    }

    pub fn from_toml(content: &str) -> Result<Self, NetworkError> {
        let network: Self = toml::from_str(content)?;
        network.validate()?;
        Ok(network)
    }

    pub fn render(&self, format: NetworkFormat) -> Result<String, NetworkError> {
        match format {
            NetworkFormat::Json => self.to_json(),
            NetworkFormat::Toml => self.to_toml(),
        }
    }

    pub fn write_to(&self, format: NetworkFormat, writer: &mut impl Write) -> Result<(), NetworkError> {
        let content = self.render(format)?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| NetworkError::Io {
                path: "<writer>".to_string(),
                source: e,
            })
    }

    pub fn write_to_path(&self, format: NetworkFormat, path: &Path) -> Result<(), NetworkError> {
        let content = self.render(format)?;
        std::fs::write(path, content).map_err(|e| NetworkError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn read_from_path(format: NetworkFormat, path: &Path) -> Result<Self, NetworkError> {
        let content = std::fs::read_to_string(path).map_err(|e| NetworkError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        match format {
            NetworkFormat::Json => Self::from_json(&content),
            NetworkFormat::Toml => Self::from_toml(&content),
        }
    }
}
