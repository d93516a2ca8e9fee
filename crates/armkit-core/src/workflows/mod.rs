//! # Workflows Module
//!
//! High-level entry points that run a complete model pipeline.
//!
//! ## Overview
//!
//! A workflow takes a configuration, builds the selected catalog model (optionally
//! deriving a one-off variant from it), finalizes and compiles it into a mass-action
//! network, hands the network to a [`Simulator`](crate::engine::simulator::Simulator)
//! and post-processes the resulting trajectory. Progress is reported phase by phase.
//!
//! - **Figure Workflow** ([`figure`]) - Sensor monomer time courses of an ARM variant.

pub mod figure;
