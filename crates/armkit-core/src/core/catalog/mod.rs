//! # Model Catalog
//!
//! Concrete models shipped with the library.
//!
//! - [`albeck`] - The Albeck extrinsic apoptosis model, ancestor of every variant
//! - [`arm`] - ARM and its stimulated variants `ARM_extrinsic` and `ARM_intrinsic`
//!
//! Variants differ only by overrides; the reaction topology of all three ARM models is
//! the same.

pub mod albeck;
pub mod arm;

use crate::core::models::error::ModelError;
use crate::core::models::model::Model;
use phf::{Map, phf_map};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Albeck,
    Arm,
    ArmExtrinsic,
    ArmIntrinsic,
}

/// Lookup from model name to variant.
pub static VARIANTS: Map<&'static str, Variant> = phf_map! {
    "Albeck" => Variant::Albeck,
    "ARM" => Variant::Arm,
    "ARM_extrinsic" => Variant::ArmExtrinsic,
    "ARM_intrinsic" => Variant::ArmIntrinsic,
};

impl Variant {
    /// All variants, ancestor first.
    pub const ALL: [Variant; 4] = [
        Variant::Albeck,
        Variant::Arm,
        Variant::ArmExtrinsic,
        Variant::ArmIntrinsic,
    ];

    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        VARIANTS
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::UnknownVariant(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Albeck => albeck::ALBECK,
            Variant::Arm => arm::ARM,
            Variant::ArmExtrinsic => arm::ARM_EXTRINSIC,
            Variant::ArmIntrinsic => arm::ARM_INTRINSIC,
        }
    }

    pub fn build(&self) -> Result<Model, ModelError> {
        match self {
            Variant::Albeck => albeck::albeck(),
            Variant::Arm => arm::arm(),
            Variant::ArmExtrinsic => arm::arm_extrinsic(),
            Variant::ArmIntrinsic => arm::arm_intrinsic(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds a catalog model by name.
pub fn build(name: &str) -> Result<Model, ModelError> {
    Variant::from_name(name)?.build()
}
