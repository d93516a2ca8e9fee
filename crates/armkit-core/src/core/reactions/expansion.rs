use super::template::{Equilibration, MichaelisMenten, ReactionTemplate, ReversibleSynthesis};
use super::term::{Rate, Term};
use crate::core::models::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How elementary steps are generated for a rule whose complex is elided (`ES=0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElidedComplex {
    /// The complex is a constant zero: only the binding step carries flux, and it
    /// drains its reactants into an untracked sink.
    Untracked,
    /// The complex is at instantaneous equilibrium: Michaelis–Menten rules collapse to
    /// `E + S -> E + n P` with `kf * kc / (kr + kc)`.
    #[default]
    QuasiSteadyState,
}

impl fmt::Display for ElidedComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElidedComplex::Untracked => f.write_str("untracked"),
            ElidedComplex::QuasiSteadyState => f.write_str("quasi-steady-state"),
        }
    }
}

impl FromStr for ElidedComplex {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "untracked" => Ok(ElidedComplex::Untracked),
            "quasi-steady-state" | "qss" => Ok(ElidedComplex::QuasiSteadyState),
            other => Err(ModelError::UnknownElidedComplexPolicy(other.to_string())),
        }
    }
}

/// Kinetics of one elementary step before parameter values are resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKinetics {
    MassAction(Rate),
    QuasiSteadyState {
        forward: Rate,
        reverse: Rate,
        catalytic: Rate,
    },
}

/// One mass-action step generated from a reaction rule, still name-based.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolicStep {
    pub label: String,
    pub reaction: String,
    pub reactants: Vec<Term>,
    pub products: Vec<Term>,
    pub kinetics: StepKinetics,
}

impl ReactionTemplate {
    /// Expands the rule into elementary mass-action steps.
    pub fn expand(&self, reaction: &str, policy: ElidedComplex) -> Vec<SymbolicStep> {
        let complex = self.complex_species(reaction).map(Term::new);
        match self {
            ReactionTemplate::ReversibleSynthesis(r) => expand_synthesis(reaction, r, complex),
            ReactionTemplate::MichaelisMenten(r) => {
                expand_michaelis_menten(reaction, r, complex, policy)
            }
            ReactionTemplate::Equilibration(r) => expand_equilibration(reaction, r),
        }
    }
}

fn step(
    reaction: &str,
    suffix: &str,
    reactants: Vec<Term>,
    products: Vec<Term>,
    kinetics: StepKinetics,
) -> SymbolicStep {
    SymbolicStep {
        label: format!("{}.{}", reaction, suffix),
        reaction: reaction.to_string(),
        reactants,
        products,
        kinetics,
    }
}

fn expand_synthesis(
    reaction: &str,
    r: &ReversibleSynthesis,
    complex: Option<Term>,
) -> Vec<SymbolicStep> {
    let reactants = vec![r.a.clone(), r.b.clone()];
    match complex {
        Some(ab) => vec![
            step(
                reaction,
                "bind",
                reactants.clone(),
                vec![ab.clone()],
                StepKinetics::MassAction(r.forward_rate.clone()),
            ),
            step(
                reaction,
                "unbind",
                vec![ab],
                reactants,
                StepKinetics::MassAction(r.reverse_rate.clone()),
            ),
        ],
        // With AB held at zero the reverse flux vanishes under either policy.
        None => vec![step(
            reaction,
            "bind",
            reactants,
            Vec::new(),
            StepKinetics::MassAction(r.forward_rate.clone()),
        )],
    }
}

fn expand_michaelis_menten(
    reaction: &str,
    r: &MichaelisMenten,
    complex: Option<Term>,
    policy: ElidedComplex,
) -> Vec<SymbolicStep> {
    let substrates = vec![r.e.clone(), r.s.clone()];
    match (complex, policy) {
        (Some(es), _) => vec![
            step(
                reaction,
                "bind",
                substrates.clone(),
                vec![es.clone()],
                StepKinetics::MassAction(r.forward_rate.clone()),
            ),
            step(
                reaction,
                "unbind",
                vec![es.clone()],
                substrates,
                StepKinetics::MassAction(r.reverse_rate.clone()),
            ),
            step(
                reaction,
                "catalyze",
                vec![es],
                vec![r.e.clone(), r.p.clone()],
                StepKinetics::MassAction(r.catalytic_rate.clone()),
            ),
        ],
        (None, ElidedComplex::Untracked) => vec![step(
            reaction,
            "bind",
            substrates,
            Vec::new(),
            StepKinetics::MassAction(r.forward_rate.clone()),
        )],
        (None, ElidedComplex::QuasiSteadyState) => vec![step(
            reaction,
            "catalyze",
            substrates,
            vec![r.e.clone(), r.p.clone()],
            StepKinetics::QuasiSteadyState {
                forward: r.forward_rate.clone(),
                reverse: r.reverse_rate.clone(),
                catalytic: r.catalytic_rate.clone(),
            },
        )],
    }
}

fn expand_equilibration(reaction: &str, r: &Equilibration) -> Vec<SymbolicStep> {
    vec![
        step(
            reaction,
            "forward",
            vec![r.a.clone()],
            vec![r.b.clone()],
            StepKinetics::MassAction(r.forward_rate.clone()),
        ),
        step(
            reaction,
            "reverse",
            vec![r.b.clone()],
            vec![r.a.clone()],
            StepKinetics::MassAction(r.reverse_rate.clone()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reactions::term::Complex;

    fn cleavage(es: Complex) -> ReactionTemplate {
        MichaelisMenten {
            e: "C8.A".into(),
            s: "sCas8.dimer".into(),
            es,
            p: Term::from("sCas8.monomer").times(2),
            forward_rate: Rate::Value(2.0 * 5.4e-8),
            reverse_rate: Rate::param("KR"),
            catalytic_rate: Rate::param("KC"),
        }
        .into()
    }

    fn labels(steps: &[SymbolicStep]) -> Vec<&str> {
        steps.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn tracked_michaelis_menten_expands_to_three_steps() {
        let steps = cleavage(Complex::Implicit).expand("C8_cleaves_sCas8", ElidedComplex::Untracked);
        assert_eq!(
            labels(&steps),
            [
                "C8_cleaves_sCas8.bind",
                "C8_cleaves_sCas8.unbind",
                "C8_cleaves_sCas8.catalyze"
            ]
        );
        let catalyze = &steps[2];
        assert_eq!(catalyze.reactants[0].species.to_string(), "C8_cleaves_sCas8.ES");
        assert_eq!(catalyze.products[1].multiplier, 2);
    }

    #[test]
    fn untracked_elided_complex_keeps_only_a_draining_bind_step() {
        let steps = cleavage(Complex::Elided).expand("C8_cleaves_sCas8", ElidedComplex::Untracked);
        assert_eq!(labels(&steps), ["C8_cleaves_sCas8.bind"]);
        assert!(steps[0].products.is_empty());
        assert_eq!(
            steps[0].kinetics,
            StepKinetics::MassAction(Rate::Value(2.0 * 5.4e-8))
        );
    }

    #[test]
    fn quasi_steady_state_lumps_to_a_catalytic_step_preserving_multiplier() {
        let steps =
            cleavage(Complex::Elided).expand("C8_cleaves_sCas8", ElidedComplex::QuasiSteadyState);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].products[0].species.to_string(), "C8.A");
        assert_eq!(steps[0].products[1].multiplier, 2);
        assert!(matches!(
            steps[0].kinetics,
            StepKinetics::QuasiSteadyState { .. }
        ));
    }

    #[test]
    fn equilibration_expands_to_forward_and_reverse() {
        let r: ReactionTemplate = Equilibration {
            a: "Smac.C".into(),
            b: "Smac.A".into(),
            forward_rate: Rate::Value(1e-2),
            reverse_rate: Rate::Value(1e-2),
        }
        .into();
        let steps = r.expand("Smac_to_cytosol", ElidedComplex::Untracked);
        assert_eq!(
            labels(&steps),
            ["Smac_to_cytosol.forward", "Smac_to_cytosol.reverse"]
        );
    }

    #[test]
    fn default_policy_keeps_the_product() {
        let steps =
            cleavage(Complex::Elided).expand("C8_cleaves_sCas8", ElidedComplex::default());
        assert_eq!(steps[0].products[1].species.to_string(), "sCas8.monomer");
        assert_eq!(steps[0].products[1].multiplier, 2);
    }

    #[test]
    fn policy_parses_from_kebab_case() {
        assert_eq!(
            "quasi-steady-state".parse::<ElidedComplex>().unwrap(),
            ElidedComplex::QuasiSteadyState
        );
        assert_eq!(ElidedComplex::Untracked.to_string(), "untracked");
        assert!("lumped".parse::<ElidedComplex>().is_err());
    }
}
