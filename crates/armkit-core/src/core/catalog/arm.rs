use super::albeck::albeck;
use crate::core::models::builder::ModelBuilder;
use crate::core::models::entities::GroupTemplate;
use crate::core::models::error::ModelError;
use crate::core::models::model::Model;
use crate::core::reactions::template::{MichaelisMenten, ReversibleSynthesis};
use crate::core::reactions::term::{Complex, Rate, Term};

pub const ARM: &str = "ARM";
pub const ARM_EXTRINSIC: &str = "ARM_extrinsic";
pub const ARM_INTRINSIC: &str = "ARM_intrinsic";

pub const SENSOR: &str = "Sensor";

/// Initial dimer amount of every fluorescent caspase sensor.
pub const SENSOR_DIMER: f64 = 7.5e5;

/// Reactions of the ancestor that do not apply to ARM.
pub const REMOVED_REACTIONS: [&str; 2] = [
    "Apaf_and_C9_to_Apop",
    "XIAP_inhibits_Apop",
];

/// Sensor reactions releasing two monomers per cleaved dimer.
pub const SENSOR_CLEAVAGES: [&str; 4] = [
    "C3_cleaves_sCas3",
    "Apop_cleaves_sCas9",
    "C8_cleaves_sCas8",
    "Apaf_cleaves_sCas9",
];

/// A dimeric caspase sensor; cleavage yields two monomers.
pub fn sensor() -> GroupTemplate {
    GroupTemplate::new(SENSOR)
        .required("dimer")
        .with_default("monomer", 0.0)
}

fn kr() -> Rate {
    Rate::param("KR")
}

fn kc() -> Rate {
    Rate::param("KC")
}

/// Sensor cleavage by `enzyme`: `E + dimer <=> [ES=0] -> E + 2 monomer`.
fn cleaves(enzyme: &str, sensor: &str, forward_rate: f64, reverse_rate: Rate) -> MichaelisMenten {
    MichaelisMenten {
        e: enzyme.into(),
        s: Term::from(format!("{}.dimer", sensor).as_str()),
        es: Complex::Elided,
        p: Term::from(format!("{}.monomer", sensor).as_str()).times(2),
        forward_rate: Rate::Value(forward_rate),
        reverse_rate,
        catalytic_rate: kc(),
    }
}

/// ARM baseline: Albeck with both stimuli zeroed, caspase sensors, and direct
/// apoptosome/caspase-3 coupling in place of the caspase-9 apoptosome.
pub fn arm() -> Result<Model, ModelError> {
    let base = albeck()?;
    let mut b = ModelBuilder::derive(ARM, &base);

    // Unstimulated baseline with a second, intrinsic input.
    b.override_species("L", 0.0)?
        .declare_species("IntrinsicStimuli", 0.0)?;

    b.override_species("Smac.M", 1e5)?
        .override_species("CytoC.M", 1e5)?
        .override_species("Apaf.I", 1e3)?
        .override_species("C9", 0.0)?
        .override_species("XIAP", 1e4)?;

    let sensor = sensor();
    b.add_group("sCas3", &sensor, &[("dimer", SENSOR_DIMER)])?
        .add_group("sCas9", &sensor, &[("dimer", SENSOR_DIMER)])?
        .add_group("sCas8", &sensor, &[("dimer", SENSOR_DIMER)])?;

    // Active Apaf cleaves pro-caspase-3; active caspase-3 turns Apaf into the apoptosome.
    b.add_reaction(
        "Apaf_activates_C3",
        MichaelisMenten {
            e: "Apaf.A".into(),
            s: "C3.pro".into(),
            es: Complex::Elided,
            p: "C3.A".into(),
            forward_rate: Rate::Value(5e-9),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "Apaf_and_C3_form_Apop",
        MichaelisMenten {
            e: "C3.A".into(),
            s: "Apaf.A".into(),
            es: Complex::Elided,
            p: "Apop".into(),
            forward_rate: Rate::Value(1.3e-6),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?;

    // XIAP sequesters active Apaf.
    b.add_reaction(
        "XIAP_inhibits_Apaf",
        ReversibleSynthesis {
            a: "Apaf.A".into(),
            b: "XIAP".into(),
            ab: Complex::Elided,
            forward_rate: Rate::Value(2e-6),
            reverse_rate: kr(),
        },
    )?;

    b.add_reaction(
        "C3_cleaves_sCas3",
        cleaves("C3.A", "sCas3", 2.0 * 2.8e-7, Rate::Value(1e-2)),
    )?
    .add_reaction(
        "Apop_cleaves_sCas9",
        cleaves("Apop", "sCas9", 2.0 * 2.8e-7, kr()),
    )?
    .add_reaction(
        "C8_cleaves_sCas8",
        cleaves("C8.A", "sCas8", 2.0 * 5.4e-8, kr()),
    )?;

    // Crosstalk between the two activation routes.
    b.add_reaction(
        "Apaf_cleaves_sCas9",
        cleaves("Apaf.A", "sCas9", 2.0 * 2e-10, kr()),
    )?
    .add_reaction(
        "IntrinsicStimuli_activates_Bid",
        MichaelisMenten {
            e: "IntrinsicStimuli".into(),
            s: "Bid.U".into(),
            es: Complex::Elided,
            p: "Bid.T".into(),
            forward_rate: Rate::param("KF"),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?;

    for name in REMOVED_REACTIONS {
        b.remove_reaction(name)?;
    }

    Ok(b.build())
}

/// ARM driven by a fixed dose of extrinsic ligand.
pub fn arm_extrinsic() -> Result<Model, ModelError> {
    let base = arm()?;
    let mut b = ModelBuilder::derive(ARM_EXTRINSIC, &base);
    b.override_species("L", 1e3)?;
    Ok(b.build())
}

/// ARM driven by a fixed dose of intrinsic stimulus.
pub fn arm_intrinsic() -> Result<Model, ModelError> {
    let base = arm()?;
    let mut b = ModelBuilder::derive(ARM_INTRINSIC, &base);
    b.override_species("IntrinsicStimuli", 1e2)?;
    Ok(b.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_derives_from_albeck() {
        let model = arm().unwrap();
        assert_eq!(model.ancestry(), ["Albeck".to_string()]);
        assert_eq!(model.reaction_count(), 28 - 2 + 8);
    }

    #[test]
    fn arm_overrides_inherited_pools() {
        let model = arm().unwrap();
        assert_eq!(model.initial_amount("Smac.M"), Some(1e5));
        assert_eq!(model.initial_amount("CytoC.M"), Some(1e5));
        assert_eq!(model.initial_amount("Apaf.I"), Some(1e3));
        assert_eq!(model.initial_amount("C9"), Some(0.0));
        assert_eq!(model.initial_amount("XIAP"), Some(1e4));
    }

    #[test]
    fn new_reactions_elide_their_complexes() {
        let model = arm().unwrap();
        for name in SENSOR_CLEAVAGES
            .iter()
            .chain(&["Apaf_activates_C3", "XIAP_inhibits_Apaf"])
        {
            assert!(model.reaction(name).unwrap().is_complex_elided(), "{}", name);
        }
    }

    #[test]
    fn sensor_reverse_rates_follow_declaration() {
        let model = arm().unwrap();
        let rates = model.reaction("C3_cleaves_sCas3").unwrap().rates();
        assert_eq!(rates[0].1, &Rate::Value(2.0 * 2.8e-7));
        assert_eq!(rates[1].1, &Rate::Value(1e-2));
        let rates = model.reaction("C8_cleaves_sCas8").unwrap().rates();
        assert_eq!(rates[1].1, &Rate::param("KR"));
    }
}
