use crate::cli::ExportArgs;
use crate::config::PartialFigureConfig;
use crate::error::Result;
use armkit::engine::progress::ProgressReporter;
use armkit::workflows::figure;
use tracing::info;

pub fn run(args: ExportArgs) -> Result<()> {
    let config = PartialFigureConfig::load(&args.model)?.merge_with_cli(&args.model, None)?;
    let (network, _) = figure::prepare(&config, &ProgressReporter::new())?;

    match &args.output {
        Some(path) => {
            network.write_to_path(args.format, path)?;
            info!(
                "Wrote network '{}' ({} species, {} steps) to {:?}",
                network.model,
                network.species.len(),
                network.steps.len(),
                path
            );
            println!("✓ Network written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            network.write_to(args.format, &mut stdout)?;
        }
    }
    Ok(())
}
