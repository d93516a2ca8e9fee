//! # Engine Module
//!
//! Everything needed to turn a compiled [`ReactionNetwork`](crate::core::network::mass_action::ReactionNetwork)
//! into a trajectory, without owning a numerical integrator.
//!
//! ## Overview
//!
//! Time integration is delegated to an external engine behind the [`simulator::Simulator`]
//! trait. The engine module provides the pieces around that seam: the sampling grid a
//! simulation is requested on, the trajectory it returns, a replay implementation that
//! reads trajectories produced elsewhere, and the configuration and progress plumbing
//! shared by the workflows.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Model selection, derivation and sampling settings
//! - **Time Grids** ([`grid`]) - Evenly spaced or explicit sampling points
//! - **Trajectories** ([`trajectory`]) - Named species columns over time, with CSV I/O
//! - **Simulation** ([`simulator`]) - The integrator seam and the replay simulator
//! - **Progress Monitoring** ([`progress`]) - Phase and task callbacks for front ends
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod grid;
pub mod progress;
pub mod simulator;
pub mod trajectory;
