//! # ARMkit Core Library
//!
//! A declarative description of the ARM apoptosis reaction network and of the
//! machinery needed to compose it: species, rate parameters, reusable species groups
//! and kinetic reaction templates, assembled by derivation from an ancestor model.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that the model content stays
//! independent of whatever engine ends up integrating it.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Model`, `ReactionTemplate`),
//!   the derivation builder, template expansion into elementary mass-action steps,
//!   the compiled `ReactionNetwork` and the catalog of concrete model variants.
//!
//! - **[`engine`]: The Run Plumbing.** Configuration, time grids, the `Simulator` seam
//!   consumed from an external integrator, result tables (`Trajectory`) and progress
//!   reporting.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures such as the `figure1`
//!   scenario: build a variant, finalize it, compile it, hand it to a simulator and
//!   select the traces to render.

pub mod core;
pub mod engine;
pub mod workflows;
