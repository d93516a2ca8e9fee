//! # Core Module
//!
//! Stateless building blocks of the reaction-network description.
//!
//! ## Architecture
//!
//! - **Model Representation** ([`models`]) - Species, parameters, groups, the ordered
//!   `Model` mapping and the `ModelBuilder` used to derive one model from another
//! - **Kinetic Templates** ([`reactions`]) - Reversible synthesis, Michaelis–Menten and
//!   equilibration rules, plus their expansion into elementary steps
//! - **Compiled Networks** ([`network`]) - Index-based mass-action networks handed to
//!   external engines, with right-hand-side evaluation and export
//! - **Model Catalog** ([`catalog`]) - The Albeck ancestor and the ARM variants
//!
//! ## Lifecycle
//!
//! Models are defined once and never mutated. A derived model is produced by copying
//! its base into a `ModelBuilder`, applying declarations, overrides and deletions, and
//! calling `build()`. `Model::finalize` checks that every reference resolves, and
//! `FinalizedModel::compile` produces the `ReactionNetwork`.

pub mod catalog;
pub mod models;
pub mod network;
pub mod reactions;
