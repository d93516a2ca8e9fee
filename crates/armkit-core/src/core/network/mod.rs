//! # Network Module
//!
//! Compilation of a finalized model into an index-based mass-action network.
//!
//! ## Overview
//!
//! A [`mass_action::ReactionNetwork`] is what an external engine consumes: species
//! with initial amounts, resolved parameter values, and elementary steps with integer
//! stoichiometry. The module also evaluates the mass-action right-hand side, which
//! lets tests check conservation laws of the declared topology without integrating.
//!
//! - [`compile`] - `FinalizedModel::compile` and its `CompileOptions`
//! - [`mass_action`] - The network itself, flux/derivative evaluation, JSON/TOML export

pub mod compile;
pub mod mass_action;
