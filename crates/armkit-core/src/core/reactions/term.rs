use crate::core::models::names::QualifiedName;
use std::fmt;

/// A species taking part in a reaction, with its stoichiometric multiplier.
///
/// `Term::from("sCas3.monomer").times(2)` reads as "two monomer units".
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub species: QualifiedName,
    pub multiplier: u32,
}

impl Term {
    pub fn new(species: impl Into<QualifiedName>) -> Self {
        Self {
            species: species.into(),
            multiplier: 1,
        }
    }

    pub fn times(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl From<&str> for Term {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<QualifiedName> for Term {
    fn from(species: QualifiedName) -> Self {
        Self::new(species)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.multiplier == 1 {
            write!(f, "{}", self.species)
        } else {
            write!(f, "{} {}", self.multiplier, self.species)
        }
    }
}

/// A rate constant given either as a literal or by reference to a model parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Rate {
    Value(f64),
    Parameter(String),
}

impl Rate {
    pub fn param(name: &str) -> Self {
        Rate::Parameter(name.to_string())
    }
}

impl From<f64> for Rate {
    fn from(value: f64) -> Self {
        Rate::Value(value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Value(v) => write!(f, "{:e}", v),
            Rate::Parameter(name) => write!(f, "{}", name),
        }
    }
}

/// How a template treats its intermediate complex (`AB` or `ES`).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Complex {
    /// Tracked as an implicit species scoped by the reaction name.
    #[default]
    Implicit,
    /// Bound to an already-declared species.
    Species(QualifiedName),
    /// Declared as the constant zero (`ES=0`); the complex is not tracked.
    Elided,
}

impl Complex {
    pub fn species(path: &str) -> Self {
        Complex::Species(QualifiedName::parse(path))
    }

    pub fn is_elided(&self) -> bool {
        matches!(self, Complex::Elided)
    }
}
