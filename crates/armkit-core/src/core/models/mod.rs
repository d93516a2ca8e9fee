//! # Core Models Module
//!
//! Data structures describing a reaction-network model definition.
//!
//! ## Key Components
//!
//! - [`names`] - Qualified names (`L`, `C3.pro`) identifying species across scopes
//! - [`entities`] - Species, parameters, group templates and group instances
//! - [`model`] - The ordered `Model` mapping and its queries
//! - [`builder`] - Derivation of a model from a base: declarations, overrides, deletions
//! - [`finalize`] - Reference resolution producing a `FinalizedModel`
//! - [`error`] - Definition-time configuration errors
//!
//! ## Usage
//!
//! ```ignore
//! use armkit::core::models::builder::ModelBuilder;
//!
//! let mut builder = ModelBuilder::derive("ARM_custom", &base);
//! builder
//!     .override_species("L", 500.0)?
//!     .remove_reaction("XIAP_inhibits_Apop")?;
//! let model = builder.build();
//! let finalized = model.finalize()?;
//! ```

pub mod builder;
pub mod entities;
pub mod error;
pub mod finalize;
pub mod model;
pub mod names;
