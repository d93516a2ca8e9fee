//! # Reactions Module
//!
//! Kinetic reaction templates and their expansion into elementary mass-action steps.
//!
//! ## Templates
//!
//! - **Reversible synthesis** `A + B <=> AB` with forward and reverse rates
//! - **Michaelis–Menten** `E + S <=> ES -> E + n P` with forward, reverse and catalytic rates
//! - **Equilibration** `A <=> B`, used for transport between compartments
//!
//! Every term carries an integer stoichiometric multiplier; sensor cleavage rules use
//! `2` to release two monomers per dimer. The intermediate complex of a template may be
//! tracked implicitly, bound to a declared species, or elided (`ES=0`), in which case
//! [`expansion::ElidedComplex`] decides how the rule's flux is represented.

pub mod expansion;
pub mod template;
pub mod term;
