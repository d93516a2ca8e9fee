use super::mass_action::{NetworkSpecies, ReactionNetwork, Step, StoichTerm};
use crate::core::models::entities::EntryKind;
use crate::core::models::error::ModelError;
use crate::core::models::finalize::FinalizedModel;
use crate::core::models::model::Model;
use crate::core::reactions::expansion::{ElidedComplex, StepKinetics, SymbolicStep};
use crate::core::reactions::term::{Rate, Term};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Choices made when turning a finalized model into a mass-action network.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompileOptions {
    pub elided_complex: ElidedComplex,
    /// Run-time values for parameters; they take precedence over declared values.
    pub parameter_values: IndexMap<String, f64>,
}

impl CompileOptions {
    pub fn with_elided_complex(mut self, policy: ElidedComplex) -> Self {
        self.elided_complex = policy;
        self
    }

    pub fn with_parameter(mut self, name: &str, value: f64) -> Self {
        self.parameter_values.insert(name.to_string(), value);
        self
    }
}

impl FinalizedModel {
    /// Expands every reaction rule and resolves names to indices and rates to values.
    ///
    /// # Errors
    ///
    /// Fails when a run-time value names an unknown parameter, when an abstract
    /// parameter used by the network has no value, or when a resolved rate is negative
    /// or not finite.
    #[instrument(skip_all, fields(model = %self.model().name()))]
    pub fn compile(&self, options: &CompileOptions) -> Result<ReactionNetwork, ModelError> {
        let model = self.model();
        let parameters = resolve_parameters(model, &options.parameter_values)?;

        let species: Vec<NetworkSpecies> = self
            .species()
            .iter()
            .map(|s| NetworkSpecies {
                name: s.name.to_string(),
                initial: s.initial,
                implicit: s.implicit,
            })
            .collect();
        let index: HashMap<&str, usize> = species
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.as_str(), i))
            .collect();

        let mut steps = Vec::new();
        for (reaction, template) in model.reactions() {
            for symbolic in template.expand(reaction, options.elided_complex) {
                steps.push(resolve_step(symbolic, &index, &parameters)?);
            }
        }

        debug!(
            "Compiled {} reactions into {} elementary steps (elided complexes: {}).",
            model.reaction_count(),
            steps.len(),
            options.elided_complex
        );

        Ok(ReactionNetwork {
            model: model.name().to_string(),
            species,
            parameters: parameters
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
            steps,
        })
    }
}

fn resolve_parameters(
    model: &Model,
    assigned: &IndexMap<String, f64>,
) -> Result<IndexMap<String, Option<f64>>, ModelError> {
    for (name, value) in assigned {
        if model.parameter(name).is_none() {
            return Err(ModelError::UnknownEntry {
                model: model.name().to_string(),
                name: name.clone(),
            });
        }
        if !(value.is_finite() && *value >= 0.0) {
            return Err(ModelError::InvalidAmount {
                name: name.clone(),
                value: *value,
            });
        }
    }
    Ok(model
        .parameters()
        .map(|(name, p)| (name.to_string(), assigned.get(name).copied().or(p.value)))
        .collect())
}

fn rate_value(
    reaction: &str,
    slot: &'static str,
    rate: &Rate,
    parameters: &IndexMap<String, Option<f64>>,
) -> Result<f64, ModelError> {
    let value = match rate {
        Rate::Value(v) => *v,
        Rate::Parameter(name) => parameters
            .get(name)
            .copied()
            .flatten()
            .ok_or_else(|| ModelError::UnassignedParameter(name.clone()))?,
    };
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidRate {
            reaction: reaction.to_string(),
            rate: slot,
            value,
        })
    }
}

/// Merges repeated species so `A + A` becomes `2 A`.
fn collect_terms(
    reaction: &str,
    terms: &[Term],
    index: &HashMap<&str, usize>,
) -> Result<Vec<StoichTerm>, ModelError> {
    let mut out: Vec<StoichTerm> = Vec::with_capacity(terms.len());
    for term in terms {
        let name = term.species.to_string();
        let species = *index
            .get(name.as_str())
            .ok_or_else(|| ModelError::UnresolvedReference {
                reaction: reaction.to_string(),
                kind: EntryKind::Species,
                name: name.clone(),
            })?;
        match out.iter_mut().find(|t| t.species == species) {
            Some(existing) => existing.coefficient += term.multiplier,
            None => out.push(StoichTerm {
                species,
                coefficient: term.multiplier,
            }),
        }
    }
    Ok(out)
}

fn resolve_step(
    symbolic: SymbolicStep,
    index: &HashMap<&str, usize>,
    parameters: &IndexMap<String, Option<f64>>,
) -> Result<Step, ModelError> {
    let reaction = symbolic.reaction.as_str();
    let rate_constant = match &symbolic.kinetics {
        StepKinetics::MassAction(rate) => rate_value(reaction, "rate", rate, parameters)?,
        StepKinetics::QuasiSteadyState {
            forward,
            reverse,
            catalytic,
        } => {
            let kf = rate_value(reaction, "forward_rate", forward, parameters)?;
            let kr = rate_value(reaction, "reverse_rate", reverse, parameters)?;
            let kc = rate_value(reaction, "catalytic_rate", catalytic, parameters)?;
            if kr + kc > 0.0 {
                kf * kc / (kr + kc)
            } else {
                0.0
            }
        }
    };

    Ok(Step {
        reactants: collect_terms(reaction, &symbolic.reactants, index)?,
        products: collect_terms(reaction, &symbolic.products, index)?,
        label: symbolic.label,
        reaction: symbolic.reaction,
        rate_constant,
    })
}
