use crate::core::models::builder::ModelBuilder;
use crate::core::models::entities::GroupTemplate;
use crate::core::models::error::ModelError;
use crate::core::models::model::Model;
use crate::core::reactions::template::{Equilibration, MichaelisMenten, ReversibleSynthesis};
use crate::core::reactions::term::{Complex, Rate};

pub const ALBECK: &str = "Albeck";

/// Fraction of the cell volume occupied by mitochondria; membrane reactions are
/// second order in a smaller volume, so their forward rates are divided by it.
const MITOCHONDRIAL_VOLUME: f64 = 0.07;

/// Transport rate between compartments, in both directions.
const TRANSLOCATION_RATE: f64 = 1e-2;

fn kr() -> Rate {
    Rate::param("KR")
}

fn kc() -> Rate {
    Rate::param("KC")
}

fn group(name: &str, members: &[(&str, f64)]) -> GroupTemplate {
    members
        .iter()
        .fold(GroupTemplate::new(name), |t, (m, v)| t.with_default(m, *v))
}

/// Builds the Albeck extrinsic apoptosis model, the ancestor of every ARM variant.
///
/// Receptor activation by ligand drives caspase-8, which feeds caspase-3 directly
/// and through Bid/Bax mitochondrial outer membrane permeabilization, releasing
/// cytochrome c and Smac. Intermediate complexes are tracked throughout.
pub fn albeck() -> Result<Model, ModelError> {
    let v = MITOCHONDRIAL_VOLUME;
    let mut b = ModelBuilder::new(ALBECK);

    b.declare_parameter("KF", 1e-6)?
        .declare_parameter("KR", 1e-3)?
        .declare_parameter("KC", 1.0)?;

    b.declare_species("L", 3000.0)?
        .add_group("R", &group("R", &[("I", 200.0), ("A", 0.0)]), &[])?
        .declare_species("flip", 1e2)?
        .add_group("C8", &group("C8", &[("pro", 2e4), ("A", 0.0)]), &[])?
        .declare_species("Bar", 1e3)?
        .add_group("C3", &group("C3", &[("pro", 1e4), ("A", 0.0), ("Ub", 0.0)]), &[])?
        .add_group("C6", &group("C6", &[("pro", 1e4), ("A", 0.0)]), &[])?
        .declare_species("XIAP", 1e5)?
        .add_group("PARP", &group("PARP", &[("U", 1e6), ("C", 0.0)]), &[])?
        .add_group("Bid", &group("Bid", &[("U", 4e4), ("T", 0.0)]), &[])?
        .declare_species("Bcl2c", 2e4)?
        .add_group(
            "Bax",
            &group(
                "Bax",
                &[("C", 1e5), ("A", 0.0), ("M", 0.0), ("M2", 0.0), ("M4", 0.0)],
            ),
            &[],
        )?
        .declare_species("Bcl2", 2e4)?
        .add_group("Mito", &group("Mito", &[("I", 5e5), ("A", 0.0)]), &[])?
        .add_group("CytoC", &group("CytoC", &[("M", 5e5), ("C", 0.0), ("A", 0.0)]), &[])?
        .add_group("Smac", &group("Smac", &[("M", 1e5), ("C", 0.0), ("A", 0.0)]), &[])?
        .add_group("Apaf", &group("Apaf", &[("I", 1e5), ("A", 0.0)]), &[])?
        .declare_species("C9", 1e5)?
        .declare_species("Apop", 0.0)?;

    // Receptor activation and caspase-8
    //   L + pR <--> L:pR --> L + R*
    b.add_reaction(
        "L_activates_R",
        MichaelisMenten {
            e: "L".into(),
            s: "R.I".into(),
            es: Complex::Implicit,
            p: "R.A".into(),
            forward_rate: Rate::Value(4e-7),
            reverse_rate: Rate::Value(1e-3),
            catalytic_rate: Rate::Value(1e-5),
        },
    )?
    .add_reaction(
        "flip_inhibits_R",
        ReversibleSynthesis {
            a: "R.A".into(),
            b: "flip".into(),
            ab: Complex::Implicit,
            forward_rate: Rate::Value(1e-6),
            reverse_rate: kr(),
        },
    )?
    .add_reaction(
        "R_activates_C8",
        MichaelisMenten {
            e: "R.A".into(),
            s: "C8.pro".into(),
            es: Complex::Implicit,
            p: "C8.A".into(),
            forward_rate: Rate::Value(1e-7),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "Bar_inhibits_C8",
        ReversibleSynthesis {
            a: "C8.A".into(),
            b: "Bar".into(),
            ab: Complex::Implicit,
            forward_rate: Rate::Value(1e-6),
            reverse_rate: kr(),
        },
    )?;

    // Effector caspases and the caspase-6 feedback loop
    b.add_reaction(
        "C8_activates_C3",
        MichaelisMenten {
            e: "C8.A".into(),
            s: "C3.pro".into(),
            es: Complex::Implicit,
            p: "C3.A".into(),
            forward_rate: Rate::Value(1e-7),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "C3_activates_C6",
        MichaelisMenten {
            e: "C3.A".into(),
            s: "C6.pro".into(),
            es: Complex::Implicit,
            p: "C6.A".into(),
            forward_rate: Rate::Value(1e-6),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "C6_activates_C8",
        MichaelisMenten {
            e: "C6.A".into(),
            s: "C8.pro".into(),
            es: Complex::Implicit,
            p: "C8.A".into(),
            forward_rate: Rate::Value(3e-8),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "XIAP_ubiquitinates_C3",
        MichaelisMenten {
            e: "XIAP".into(),
            s: "C3.A".into(),
            es: Complex::Implicit,
            p: "C3.Ub".into(),
            forward_rate: Rate::Value(2e-6),
            reverse_rate: kr(),
            catalytic_rate: Rate::Value(1e-1),
        },
    )?
    .add_reaction(
        "C3_cleaves_PARP",
        MichaelisMenten {
            e: "C3.A".into(),
            s: "PARP.U".into(),
            es: Complex::Implicit,
            p: "PARP.C".into(),
            forward_rate: Rate::Value(1e-6),
            reverse_rate: Rate::Value(1e-2),
            catalytic_rate: kc(),
        },
    )?;

    // Bid truncation and Bax activation
    b.add_reaction(
        "C8_truncates_Bid",
        MichaelisMenten {
            e: "C8.A".into(),
            s: "Bid.U".into(),
            es: Complex::Implicit,
            p: "Bid.T".into(),
            forward_rate: Rate::Value(1e-7),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "Bcl2c_inhibits_Bid",
        ReversibleSynthesis {
            a: "Bid.T".into(),
            b: "Bcl2c".into(),
            ab: Complex::Implicit,
            forward_rate: Rate::Value(1e-6),
            reverse_rate: kr(),
        },
    )?
    .add_reaction(
        "Bid_activates_Bax",
        MichaelisMenten {
            e: "Bid.T".into(),
            s: "Bax.C".into(),
            es: Complex::Implicit,
            p: "Bax.A".into(),
            forward_rate: Rate::Value(1e-7),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "Bax_to_mitochondria",
        Equilibration {
            a: "Bax.A".into(),
            b: "Bax.M".into(),
            forward_rate: Rate::Value(TRANSLOCATION_RATE),
            reverse_rate: Rate::Value(TRANSLOCATION_RATE),
        },
    )?;

    // Bax oligomerization at the membrane, each stage inhibited by Bcl2
    b.add_reaction(
        "Bcl2_inhibits_Bax",
        ReversibleSynthesis {
            a: "Bax.M".into(),
            b: "Bcl2".into(),
            ab: Complex::Implicit,
            forward_rate: Rate::Value(1e-6 / v),
            reverse_rate: kr(),
        },
    )?
    .add_reaction(
        "Bax_dimerizes",
        ReversibleSynthesis {
            a: "Bax.M".into(),
            b: "Bax.M".into(),
            ab: Complex::species("Bax.M2"),
            forward_rate: Rate::Value(1e-6 / v),
            reverse_rate: kr(),
        },
    )?
    .add_reaction(
        "Bcl2_inhibits_Bax2",
        ReversibleSynthesis {
            a: "Bax.M2".into(),
            b: "Bcl2".into(),
            ab: Complex::Implicit,
            forward_rate: Rate::Value(1e-6 / v),
            reverse_rate: kr(),
        },
    )?
    .add_reaction(
        "Bax_tetramerizes",
        ReversibleSynthesis {
            a: "Bax.M2".into(),
            b: "Bax.M2".into(),
            ab: Complex::species("Bax.M4"),
            forward_rate: Rate::Value(1e-6 / v),
            reverse_rate: kr(),
        },
    )?
    .add_reaction(
        "Bcl2_inhibits_Bax4",
        ReversibleSynthesis {
            a: "Bax.M4".into(),
            b: "Bcl2".into(),
            ab: Complex::Implicit,
            forward_rate: Rate::Value(1e-6 / v),
            reverse_rate: kr(),
        },
    )?;

    // Pore formation and release of mitochondrial proteins
    b.add_reaction(
        "Bax4_opens_pore",
        MichaelisMenten {
            e: "Bax.M4".into(),
            s: "Mito.I".into(),
            es: Complex::Implicit,
            p: "Mito.A".into(),
            forward_rate: Rate::Value(1e-6 / v),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "Pore_transports_CytoC",
        MichaelisMenten {
            e: "Mito.A".into(),
            s: "CytoC.M".into(),
            es: Complex::Implicit,
            p: "CytoC.C".into(),
            forward_rate: Rate::Value(2e-6 / v),
            reverse_rate: kr(),
            catalytic_rate: Rate::Value(10.0),
        },
    )?
    .add_reaction(
        "Pore_transports_Smac",
        MichaelisMenten {
            e: "Mito.A".into(),
            s: "Smac.M".into(),
            es: Complex::Implicit,
            p: "Smac.C".into(),
            forward_rate: Rate::Value(2e-6 / v),
            reverse_rate: kr(),
            catalytic_rate: Rate::Value(10.0),
        },
    )?
    .add_reaction(
        "CytoC_to_cytosol",
        Equilibration {
            a: "CytoC.C".into(),
            b: "CytoC.A".into(),
            forward_rate: Rate::Value(TRANSLOCATION_RATE),
            reverse_rate: Rate::Value(TRANSLOCATION_RATE),
        },
    )?;

    // Apoptosome
    //   CytoC + Apaf <--> CytoC:Apaf --> CytoC + Apaf*
    //   Apaf* + pC9 <--> Apop
    //   Apop + pC3 <--> Apop:pC3 --> Apop + C3
    b.add_reaction(
        "CytoC_activates_Apaf",
        MichaelisMenten {
            e: "CytoC.A".into(),
            s: "Apaf.I".into(),
            es: Complex::Implicit,
            p: "Apaf.A".into(),
            forward_rate: Rate::Value(5e-7),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "Apaf_and_C9_to_Apop",
        ReversibleSynthesis {
            a: "Apaf.A".into(),
            b: "C9".into(),
            ab: Complex::species("Apop"),
            forward_rate: Rate::Value(5e-8),
            reverse_rate: kr(),
        },
    )?
    .add_reaction(
        "Apop_activates_C3",
        MichaelisMenten {
            e: "Apop".into(),
            s: "C3.pro".into(),
            es: Complex::Implicit,
            p: "C3.A".into(),
            forward_rate: Rate::Value(5e-9),
            reverse_rate: kr(),
            catalytic_rate: kc(),
        },
    )?
    .add_reaction(
        "XIAP_inhibits_Apop",
        ReversibleSynthesis {
            a: "Apop".into(),
            b: "XIAP".into(),
            ab: Complex::Implicit,
            forward_rate: Rate::Value(2e-6),
            reverse_rate: kr(),
        },
    )?;

    // Smac release relieves XIAP inhibition
    b.add_reaction(
        "Smac_to_cytosol",
        Equilibration {
            a: "Smac.C".into(),
            b: "Smac.A".into(),
            forward_rate: Rate::Value(TRANSLOCATION_RATE),
            reverse_rate: Rate::Value(TRANSLOCATION_RATE),
        },
    )?
    .add_reaction(
        "Smac_inhibits_XIAP",
        ReversibleSynthesis {
            a: "Smac.A".into(),
            b: "XIAP".into(),
            ab: Complex::Implicit,
            forward_rate: Rate::Value(7e-6),
            reverse_rate: kr(),
        },
    )?;

    Ok(b.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestor_declares_the_full_reaction_set() {
        let model = albeck().unwrap();
        assert_eq!(model.reaction_count(), 28);
        assert!(model.ancestry().is_empty());
        assert!(model.reaction("Apaf_and_C9_to_Apop").is_some());
        assert!(model.reaction("XIAP_inhibits_Apop").is_some());
    }

    #[test]
    fn ancestor_finalizes_with_implicit_complexes() {
        let finalized = albeck().unwrap().finalize().unwrap();
        assert!(finalized.implicit_species().count() > 0);
        assert!(
            finalized
                .implicit_species()
                .any(|s| s.name.to_string() == "L_activates_R.ES")
        );
    }

    #[test]
    fn membrane_rates_are_scaled_by_mitochondrial_volume() {
        let model = albeck().unwrap();
        let rates = model.reaction("Bcl2_inhibits_Bax").unwrap().rates();
        assert_eq!(rates[0].1, &Rate::Value(1e-6 / 0.07));
    }
}
