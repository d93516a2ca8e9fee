use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use armkit::core::catalog::Variant;
use armkit::core::network::compile::CompileOptions;
use armkit::engine::progress::{Progress, ProgressReporter};
use tracing::info;

/// Summary of one successfully validated model.
#[derive(Debug)]
struct Validated {
    model: String,
    species: usize,
    steps: usize,
}

fn validate(
    variants: &[Variant],
    options: &CompileOptions,
    reporter: &ProgressReporter,
) -> Result<Vec<Validated>> {
    reporter.report(Progress::TaskStart {
        total_steps: variants.len() as u64,
    });
    let mut validated = Vec::with_capacity(variants.len());
    for variant in variants {
        let network = variant.build()?.finalize()?.compile(options)?;
        network.validate()?;
        validated.push(Validated {
            model: network.model.clone(),
            species: network.species.len(),
            steps: network.steps.len(),
        });
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);
    Ok(validated)
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let variants = if args.models.is_empty() {
        Variant::ALL.to_vec()
    } else {
        args.models
            .iter()
            .map(|name| Variant::from_name(name))
            .collect::<std::result::Result<Vec<_>, _>>()?
    };
    let options =
        CompileOptions::default().with_elided_complex(args.elided_complex.unwrap_or_default());
    info!(
        "Validating {} model(s) with {} elided complexes.",
        variants.len(),
        options.elided_complex
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    for v in validate(&variants, &options, &reporter)? {
        println!(
            "✓ {}: {} species, {} elementary steps",
            v.model, v.species, v.steps
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_model_validates() {
        let validated = validate(
            &Variant::ALL,
            &CompileOptions::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        let names: Vec<&str> = validated.iter().map(|v| v.model.as_str()).collect();
        assert_eq!(names, vec!["Albeck", "ARM", "ARM_extrinsic", "ARM_intrinsic"]);
        assert!(validated.iter().all(|v| v.steps > 0));
    }
}
