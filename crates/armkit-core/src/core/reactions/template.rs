use super::term::{Complex, Rate, Term};
use crate::core::models::names::QualifiedName;

/// Reversible synthesis: `A + B <=> AB`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReversibleSynthesis {
    pub a: Term,
    pub b: Term,
    pub ab: Complex,
    pub forward_rate: Rate,
    pub reverse_rate: Rate,
}

/// Michaelis–Menten enzymatic action: `E + S <=> ES -> E + P`.
#[derive(Debug, Clone, PartialEq)]
pub struct MichaelisMenten {
    pub e: Term,
    pub s: Term,
    pub es: Complex,
    pub p: Term,
    pub forward_rate: Rate,
    pub reverse_rate: Rate,
    pub catalytic_rate: Rate,
}

/// First-order interconversion: `A <=> B` (compartment transport).
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibration {
    pub a: Term,
    pub b: Term,
    pub forward_rate: Rate,
    pub reverse_rate: Rate,
}

/// A reaction rule: one kinetic template bound to concrete species and rates.
#[derive(Debug, Clone, PartialEq)]
pub enum ReactionTemplate {
    ReversibleSynthesis(ReversibleSynthesis),
    MichaelisMenten(MichaelisMenten),
    Equilibration(Equilibration),
}

impl From<ReversibleSynthesis> for ReactionTemplate {
    fn from(r: ReversibleSynthesis) -> Self {
        ReactionTemplate::ReversibleSynthesis(r)
    }
}

impl From<MichaelisMenten> for ReactionTemplate {
    fn from(r: MichaelisMenten) -> Self {
        ReactionTemplate::MichaelisMenten(r)
    }
}

impl From<Equilibration> for ReactionTemplate {
    fn from(r: Equilibration) -> Self {
        ReactionTemplate::Equilibration(r)
    }
}

impl ReactionTemplate {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ReactionTemplate::ReversibleSynthesis(_) => "ReversibleSynthesis",
            ReactionTemplate::MichaelisMenten(_) => "MichaelisMenten",
            ReactionTemplate::Equilibration(_) => "Equilibration",
        }
    }

    /// Every term the rule declares, excluding its intermediate complex.
    pub fn terms(&self) -> Vec<&Term> {
        match self {
            ReactionTemplate::ReversibleSynthesis(r) => vec![&r.a, &r.b],
            ReactionTemplate::MichaelisMenten(r) => vec![&r.e, &r.s, &r.p],
            ReactionTemplate::Equilibration(r) => vec![&r.a, &r.b],
        }
    }

    pub fn complex(&self) -> Option<&Complex> {
        match self {
            ReactionTemplate::ReversibleSynthesis(r) => Some(&r.ab),
            ReactionTemplate::MichaelisMenten(r) => Some(&r.es),
            ReactionTemplate::Equilibration(_) => None,
        }
    }

    /// Label of the complex slot, as written in the rule (`AB` or `ES`).
    pub fn complex_label(&self) -> Option<&'static str> {
        match self {
            ReactionTemplate::ReversibleSynthesis(_) => Some("AB"),
            ReactionTemplate::MichaelisMenten(_) => Some("ES"),
            ReactionTemplate::Equilibration(_) => None,
        }
    }

    /// Name of the species standing for the complex, if it is tracked.
    pub fn complex_species(&self, reaction: &str) -> Option<QualifiedName> {
        match (self.complex()?, self.complex_label()?) {
            (Complex::Implicit, label) => Some(QualifiedName::scoped(reaction, label)),
            (Complex::Species(name), _) => Some(name.clone()),
            (Complex::Elided, _) => None,
        }
    }

    pub fn is_complex_elided(&self) -> bool {
        self.complex().is_some_and(Complex::is_elided)
    }

    /// The declared rate slots, by name.
    pub fn rates(&self) -> Vec<(&'static str, &Rate)> {
        match self {
            ReactionTemplate::ReversibleSynthesis(r) => vec![
                ("forward_rate", &r.forward_rate),
                ("reverse_rate", &r.reverse_rate),
            ],
            ReactionTemplate::MichaelisMenten(r) => vec![
                ("forward_rate", &r.forward_rate),
                ("reverse_rate", &r.reverse_rate),
                ("catalytic_rate", &r.catalytic_rate),
            ],
            ReactionTemplate::Equilibration(r) => vec![
                ("forward_rate", &r.forward_rate),
                ("reverse_rate", &r.reverse_rate),
            ],
        }
    }

    /// The catalytic product term of a Michaelis–Menten rule.
    pub fn product(&self) -> Option<&Term> {
        match self {
            ReactionTemplate::MichaelisMenten(r) => Some(&r.p),
            _ => None,
        }
    }

    /// Human-readable reaction equation, e.g. `C3.A + sCas3.dimer <=> [ES=0] -> C3.A + 2 sCas3.monomer`.
    pub fn equation(&self, reaction: &str) -> String {
        let complex = |slot: &Complex, label: &str| match slot {
            Complex::Elided => format!("[{}=0]", label),
            _ => self
                .complex_species(reaction)
                .map(|n| n.to_string())
                .unwrap_or_default(),
        };
        match self {
            ReactionTemplate::ReversibleSynthesis(r) => {
                format!("{} + {} <=> {}", r.a, r.b, complex(&r.ab, "AB"))
            }
            ReactionTemplate::MichaelisMenten(r) => format!(
                "{} + {} <=> {} -> {} + {}",
                r.e,
                r.s,
                complex(&r.es, "ES"),
                r.e,
                r.p
            ),
            ReactionTemplate::Equilibration(r) => format!("{} <=> {}", r.a, r.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor_cleavage() -> ReactionTemplate {
        MichaelisMenten {
            e: "C3.A".into(),
            s: "sCas3.dimer".into(),
            es: Complex::Elided,
            p: Term::from("sCas3.monomer").times(2),
            forward_rate: Rate::Value(2.0 * 2.8e-7),
            reverse_rate: Rate::Value(1e-2),
            catalytic_rate: Rate::param("KC"),
        }
        .into()
    }

    #[test]
    fn elided_complex_has_no_species_but_keeps_three_rates() {
        let r = sensor_cleavage();
        assert!(r.is_complex_elided());
        assert_eq!(r.complex_species("C3_cleaves_sCas3"), None);
        let names: Vec<_> = r.rates().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["forward_rate", "reverse_rate", "catalytic_rate"]);
    }

    #[test]
    fn implicit_complex_is_scoped_by_reaction_name() {
        let r: ReactionTemplate = ReversibleSynthesis {
            a: "R.A".into(),
            b: "flip".into(),
            ab: Complex::Implicit,
            forward_rate: Rate::Value(1e-6),
            reverse_rate: Rate::Value(1e-3),
        }
        .into();
        assert_eq!(
            r.complex_species("flip_inhibits_R"),
            Some(QualifiedName::scoped("flip_inhibits_R", "AB"))
        );
    }

    #[test]
    fn product_multiplier_is_kept_and_shown_in_equation() {
        let r = sensor_cleavage();
        assert_eq!(r.product().unwrap().multiplier, 2);
        assert_eq!(
            r.equation("C3_cleaves_sCas3"),
            "C3.A + sCas3.dimer <=> [ES=0] -> C3.A + 2 sCas3.monomer"
        );
    }

    #[test]
    fn bound_complex_refers_to_declared_species() {
        let r: ReactionTemplate = ReversibleSynthesis {
            a: "Apaf.A".into(),
            b: "C9".into(),
            ab: Complex::species("Apop"),
            forward_rate: Rate::Value(5e-8),
            reverse_rate: Rate::param("KR"),
        }
        .into();
        assert_eq!(r.equation("Apaf_and_C9_to_Apop"), "Apaf.A + C9 <=> Apop");
    }
}
