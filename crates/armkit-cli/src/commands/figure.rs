use crate::cli::FigureArgs;
use crate::config::PartialFigureConfig;
use crate::error::{CliError, Result};
use crate::ui;
use crate::utils::progress::CliProgressHandler;
use armkit::engine::progress::ProgressReporter;
use armkit::engine::simulator::{ReplaySimulator, SimulationRequest};
use armkit::workflows::figure;
use std::path::Path;
use tracing::info;

pub fn run(args: FigureArgs) -> Result<()> {
    let config =
        PartialFigureConfig::load(&args.model)?.merge_with_cli(&args.model, Some(&args))?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    if let Some(request_path) = &args.request_out {
        let (network, time_grid) = figure::prepare(&config, &reporter)?;
        let request = SimulationRequest {
            network: &network,
            time_grid: &time_grid,
            selection: Some(config.selection.as_str()),
        };
        write_request(&request, request_path)?;
        println!(
            "✓ Simulation request for '{}' ({} time points) written to: {}",
            network.model,
            time_grid.len(),
            request_path.display()
        );
        return Ok(());
    }

    let trajectory_path = args.trajectory.as_ref().ok_or_else(|| {
        CliError::Argument("either --trajectory or --request-out is required".to_string())
    })?;
    info!("Replaying trajectory from {:?}", trajectory_path);
    let simulator = ReplaySimulator::new(trajectory_path);
    let result = figure::run(&config, &simulator, &reporter)?;

    print!("{}", ui::render_trajectory(&result.trajectory));
    if let Some(output) = &args.output {
        result.trajectory.write_csv_path(output)?;
        println!("✓ Selected columns written to: {}", output.display());
    }
    Ok(())
}

fn write_request(request: &SimulationRequest<'_>, path: &Path) -> Result<()> {
    let json = request.to_json()?;
    std::fs::write(path, json)?;
    info!("Wrote simulation request to {:?}", path);
    Ok(())
}
