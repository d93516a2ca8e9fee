use super::entities::EntryKind;
use thiserror::Error;

/// Configuration errors raised while composing, finalizing or compiling a model.
///
/// All of them describe a faulty declaration (a typo'd deletion list, a stale
/// override, a dangling reference) and are reported at definition time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown entry '{name}' in model '{model}'")]
    UnknownEntry { model: String, name: String },

    #[error("Entry '{name}' is already declared in model '{model}'")]
    DuplicateEntry { model: String, name: String },

    #[error("Entry '{name}' is overridden more than once in model '{model}'")]
    DuplicateOverride { model: String, name: String },

    #[error("Entry '{name}' in model '{model}' is a {found}, expected a {expected}")]
    KindMismatch {
        model: String,
        name: String,
        expected: EntryKind,
        found: EntryKind,
    },

    #[error("Invalid name '{0}': expected an identifier of letters, digits and '_'")]
    InvalidName(String),

    #[error("Invalid amount {value} for '{name}': values must be finite and non-negative")]
    InvalidAmount { name: String, value: f64 },

    #[error("Group '{group}' requires an initial value for member '{member}'")]
    MissingInitialValue { group: String, member: String },

    #[error("Group template '{template}' has no member named '{member}'")]
    UnknownGroupMember { template: String, member: String },

    #[error("Reaction '{reaction}' references undeclared {kind} '{name}'")]
    UnresolvedReference {
        reaction: String,
        kind: EntryKind,
        name: String,
    },

    #[error(
        "Reaction '{reaction}' has invalid stoichiometric multiplier {multiplier} for '{species}'"
    )]
    InvalidStoichiometry {
        reaction: String,
        species: String,
        multiplier: u32,
    },

    #[error("Reaction '{reaction}' has an invalid {rate}: {value}")]
    InvalidRate {
        reaction: String,
        rate: &'static str,
        value: f64,
    },

    #[error("Parameter '{0}' has no value; assign one before compiling the network")]
    UnassignedParameter(String),

    #[error("Unknown model variant '{0}'")]
    UnknownVariant(String),

    #[error(
        "Unknown elided-complex policy '{0}'. Expected 'untracked' or 'quasi-steady-state'."
    )]
    UnknownElidedComplexPolicy(String),
}
