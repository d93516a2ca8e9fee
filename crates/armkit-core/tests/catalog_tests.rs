use armkit::core::catalog::arm::{REMOVED_REACTIONS, SENSOR, SENSOR_CLEAVAGES, SENSOR_DIMER};
use armkit::core::catalog::{Variant, albeck, arm};
use armkit::core::models::builder::ModelBuilder;
use armkit::core::models::error::ModelError;
use armkit::core::network::compile::CompileOptions;
use armkit::core::reactions::expansion::ElidedComplex;
use armkit::core::reactions::template::ReactionTemplate;

const ARM_FAMILY: [Variant; 3] = [Variant::Arm, Variant::ArmExtrinsic, Variant::ArmIntrinsic];

#[test]
fn variant_stimuli_are_independent() {
    let expected = [
        (Variant::Arm, 0.0, 0.0),
        (Variant::ArmExtrinsic, 1e3, 0.0),
        (Variant::ArmIntrinsic, 0.0, 1e2),
    ];
    for (variant, ligand, intrinsic) in expected {
        let model = variant.build().unwrap();
        assert_eq!(model.initial_amount("L"), Some(ligand), "{}", variant);
        assert_eq!(
            model.initial_amount("IntrinsicStimuli"),
            Some(intrinsic),
            "{}",
            variant
        );
    }
}

#[test]
fn removed_reactions_exist_only_in_the_ancestor() {
    let ancestor = albeck::albeck().unwrap();
    for name in REMOVED_REACTIONS {
        assert!(ancestor.reaction(name).is_some(), "{} missing from Albeck", name);
    }
    for variant in ARM_FAMILY {
        let model = variant.build().unwrap();
        for name in REMOVED_REACTIONS {
            assert!(model.reaction(name).is_none(), "{} still in {}", name, variant);
        }
    }
}

#[test]
fn every_variant_finalizes_and_compiles() {
    for variant in Variant::ALL {
        let finalized = variant.build().unwrap().finalize().unwrap();
        for policy in [ElidedComplex::Untracked, ElidedComplex::QuasiSteadyState] {
            let options = CompileOptions::default().with_elided_complex(policy);
            let network = finalized.compile(&options).unwrap();
            network.validate().unwrap();
            let rhs = network.derivatives(&network.initial_state()).unwrap();
            assert!(rhs.iter().all(|d| d.is_finite()), "{}", variant);
        }
    }
}

#[test]
fn sensor_cleavage_releases_two_monomers() {
    let model = arm::arm().unwrap();
    for name in SENSOR_CLEAVAGES {
        let ReactionTemplate::MichaelisMenten(rule) = model.reaction(name).unwrap() else {
            panic!("{} is not a Michaelis-Menten rule", name);
        };
        let sensor = rule.s.species.root();
        assert_eq!(rule.s.species.to_string(), format!("{}.dimer", sensor), "{}", name);
        assert_eq!(rule.s.multiplier, 1, "{}", name);
        assert_eq!(rule.p.species.to_string(), format!("{}.monomer", sensor), "{}", name);
        assert_eq!(rule.p.multiplier, 2, "{}", name);
        assert!(name.ends_with(sensor), "{}", name);
    }
}

#[test]
fn removing_a_nonexistent_reaction_fails() {
    let base = arm::arm().unwrap();
    let mut builder = ModelBuilder::derive("Broken", &base);
    let err = builder.remove_reaction("NonexistentReaction").unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownEntry {
            model: "Broken".to_string(),
            name: "NonexistentReaction".to_string(),
        }
    );
}

#[test]
fn arm_family_carries_three_sensors() {
    for variant in ARM_FAMILY {
        let model = variant.build().unwrap();
        let sensors = model.groups_of(SENSOR);
        let names: Vec<&str> = sensors.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["sCas3", "sCas9", "sCas8"], "{}", variant);
        for (name, group) in sensors {
            assert_eq!(group.member("dimer").unwrap().initial, SENSOR_DIMER, "{}", name);
            assert_eq!(group.member("monomer").unwrap().initial, 0.0, "{}", name);
        }
    }
    assert!(albeck::albeck().unwrap().groups_of(SENSOR).is_empty());
}

#[test]
fn arm_family_shares_one_topology() {
    let reactions = |variant: Variant| -> Vec<String> {
        let model = variant.build().unwrap();
        model.reactions().map(|(name, _)| name.to_string()).collect()
    };
    let arm = reactions(Variant::Arm);
    assert_eq!(arm.len(), 34);
    assert_eq!(reactions(Variant::ArmExtrinsic), arm);
    assert_eq!(reactions(Variant::ArmIntrinsic), arm);
}

#[test]
fn untracked_and_steady_state_differ_only_on_elided_reactions() {
    let finalized = arm::arm_extrinsic().unwrap().finalize().unwrap();
    let untracked = finalized
        .compile(&CompileOptions::default().with_elided_complex(ElidedComplex::Untracked))
        .unwrap();
    let qss = finalized.compile(&CompileOptions::default()).unwrap();
    assert_eq!(untracked.species, qss.species);
    let cleave: Vec<_> = qss.steps_of("C8_cleaves_sCas8").collect();
    assert_eq!(cleave.len(), 1);
    let monomer = qss.species_index("sCas8.monomer").unwrap();
    assert!(cleave[0].products.iter().any(|t| t.species == monomer && t.coefficient == 2));
    assert!(
        untracked
            .steps_of("C8_cleaves_sCas8")
            .all(|s| s.products.is_empty())
    );
}
