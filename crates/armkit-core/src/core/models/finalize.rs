use super::entities::{Entry, EntryKind};
use super::error::ModelError;
use super::model::Model;
use super::names::QualifiedName;
use crate::core::reactions::template::ReactionTemplate;
use crate::core::reactions::term::{Complex, Rate};
use tracing::{debug, instrument};

/// A species of a finalized model, including implicit reaction complexes.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedSpecies {
    pub name: QualifiedName,
    pub initial: f64,
    /// `true` for complexes generated by tracked reaction templates.
    pub implicit: bool,
}

/// A model whose reactions have all been checked against its declared contents.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedModel {
    model: Model,
    species: Vec<FinalizedSpecies>,
}

impl FinalizedModel {
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn species(&self) -> &[FinalizedSpecies] {
        &self.species
    }

    pub fn implicit_species(&self) -> impl Iterator<Item = &FinalizedSpecies> {
        self.species.iter().filter(|s| s.implicit)
    }
}

impl Model {
    /// Resolves every species and parameter a reaction refers to.
    ///
    /// # Errors
    ///
    /// Returns the first dangling reference, zero multiplier or invalid literal rate.
    #[instrument(skip_all, fields(model = %self.name))]
    pub fn finalize(&self) -> Result<FinalizedModel, ModelError> {
        let mut species: Vec<FinalizedSpecies> = self
            .all_species()
            .into_iter()
            .map(|(name, s)| FinalizedSpecies {
                name,
                initial: s.initial,
                implicit: false,
            })
            .collect();

        for (reaction, template) in self.reactions() {
            self.check_reaction(reaction, template)?;
            if let (Some(Complex::Implicit), Some(name)) =
                (template.complex(), template.complex_species(reaction))
            {
                species.push(FinalizedSpecies {
                    name,
                    initial: 0.0,
                    implicit: true,
                });
            }
        }

        debug!(
            "Finalized model with {} species ({} implicit) and {} reactions.",
            species.len(),
            species.iter().filter(|s| s.implicit).count(),
            self.reaction_count()
        );
        Ok(FinalizedModel {
            model: self.clone(),
            species,
        })
    }

    fn check_reaction(&self, reaction: &str, template: &ReactionTemplate) -> Result<(), ModelError> {
        for term in template.terms() {
            self.resolve_species(reaction, &term.species)?;
            if term.multiplier == 0 {
                return Err(ModelError::InvalidStoichiometry {
                    reaction: reaction.to_string(),
                    species: term.species.to_string(),
                    multiplier: term.multiplier,
                });
            }
        }
        if let Some(Complex::Species(name)) = template.complex() {
            self.resolve_species(reaction, name)?;
        }
        for (slot, rate) in template.rates() {
            match rate {
                Rate::Value(v) if !(v.is_finite() && *v >= 0.0) => {
                    return Err(ModelError::InvalidRate {
                        reaction: reaction.to_string(),
                        rate: slot,
                        value: *v,
                    });
                }
                Rate::Value(_) => {}
                Rate::Parameter(name) => {
                    if self.parameter(name).is_none() {
                        return Err(ModelError::UnresolvedReference {
                            reaction: reaction.to_string(),
                            kind: EntryKind::Parameter,
                            name: name.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn resolve_species(&self, reaction: &str, name: &QualifiedName) -> Result<(), ModelError> {
        let resolved = match self.get(name.root()) {
            Some(Entry::Species(_)) => !name.is_scoped(),
            Some(Entry::Group(group)) => name.is_scoped() && group.member(name.name()).is_some(),
            _ => false,
        };
        if resolved {
            Ok(())
        } else {
            Err(ModelError::UnresolvedReference {
                reaction: reaction.to_string(),
                kind: EntryKind::Species,
                name: name.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::ModelBuilder;
    use crate::core::reactions::template::{MichaelisMenten, ReversibleSynthesis};
    use crate::core::reactions::term::Term;

    fn with_reaction(template: impl Into<ReactionTemplate>) -> Result<FinalizedModel, ModelError> {
        let mut b = ModelBuilder::new("Test");
        b.declare_parameter("KC", 1.0)
            .unwrap()
            .declare_species("E", 1.0)
            .unwrap()
            .declare_species("S", 10.0)
            .unwrap()
            .declare_species("P", 0.0)
            .unwrap()
            .add_reaction("E_acts_on_S", template)
            .unwrap();
        b.build().finalize()
    }

    fn enzyme(p: Term, es: Complex, catalytic: Rate) -> MichaelisMenten {
        MichaelisMenten {
            e: "E".into(),
            s: "S".into(),
            es,
            p,
            forward_rate: Rate::Value(1e-3),
            reverse_rate: Rate::Value(1e-3),
            catalytic_rate: catalytic,
        }
    }

    #[test]
    fn implicit_complexes_become_zero_initial_species() {
        let finalized = with_reaction(enzyme("P".into(), Complex::Implicit, Rate::param("KC"))).unwrap();
        let implicit: Vec<_> = finalized.implicit_species().collect();
        assert_eq!(implicit.len(), 1);
        assert_eq!(implicit[0].name.to_string(), "E_acts_on_S.ES");
        assert_eq!(implicit[0].initial, 0.0);
        assert_eq!(finalized.species().len(), 4);
    }

    #[test]
    fn elided_complexes_add_no_species() {
        let finalized = with_reaction(enzyme("P".into(), Complex::Elided, Rate::param("KC"))).unwrap();
        assert_eq!(finalized.implicit_species().count(), 0);
    }

    #[test]
    fn dangling_species_reference_fails() {
        let err = with_reaction(enzyme("Q".into(), Complex::Elided, Rate::param("KC"))).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnresolvedReference {
                reaction: "E_acts_on_S".to_string(),
                kind: EntryKind::Species,
                name: "Q".to_string(),
            }
        );
    }

    #[test]
    fn dangling_parameter_reference_fails() {
        let err = with_reaction(enzyme("P".into(), Complex::Elided, Rate::param("KX"))).unwrap_err();
        assert!(matches!(
            err,
            ModelError::UnresolvedReference { kind: EntryKind::Parameter, .. }
        ));
    }

    #[test]
    fn scoped_reference_to_a_plain_species_does_not_resolve() {
        let err = with_reaction(enzyme("P.A".into(), Complex::Elided, Rate::param("KC"))).unwrap_err();
        assert!(matches!(err, ModelError::UnresolvedReference { .. }));
    }

    #[test]
    fn zero_multiplier_and_negative_rate_are_rejected() {
        assert!(matches!(
            with_reaction(enzyme(Term::from("P").times(0), Complex::Elided, Rate::param("KC"))),
            Err(ModelError::InvalidStoichiometry { .. })
        ));
        assert!(matches!(
            with_reaction(enzyme("P".into(), Complex::Elided, Rate::Value(-1.0))),
            Err(ModelError::InvalidRate { rate: "catalytic_rate", .. })
        ));
    }

    #[test]
    fn bound_complex_must_be_declared() {
        let err = with_reaction(ReversibleSynthesis {
            a: "E".into(),
            b: "S".into(),
            ab: Complex::species("ES"),
            forward_rate: Rate::Value(1.0),
            reverse_rate: Rate::Value(1.0),
        })
        .unwrap_err();
        assert!(matches!(err, ModelError::UnresolvedReference { .. }));
    }
}
