use crate::core::catalog::Variant;
use crate::core::models::builder::ModelBuilder;
use crate::core::models::error::ModelError;
use crate::core::models::model::Model;
use crate::core::network::compile::CompileOptions;
use crate::core::network::mass_action::ReactionNetwork;
use crate::engine::config::{FigureConfig, FigureConfigBuilder, ModelSpec};
use crate::engine::error::EngineError;
use crate::engine::grid::TimeGrid;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::simulator::Simulator;
use crate::engine::trajectory::Trajectory;
use tracing::{debug, info, instrument, warn};

pub const FIGURE1_VARIANT: Variant = Variant::Arm;
pub const FIGURE1_START: f64 = 0.0;
pub const FIGURE1_STOP: f64 = 1.0;
pub const FIGURE1_POINTS: usize = 10;
pub const FIGURE1_SELECTION: &str = "monomer";

/// Builder preloaded with the sensor monomer figure settings.
pub fn figure1_builder() -> FigureConfigBuilder {
    FigureConfigBuilder::new()
        .variant(FIGURE1_VARIANT)
        .start(FIGURE1_START)
        .stop(FIGURE1_STOP)
        .points(FIGURE1_POINTS)
        .selection(FIGURE1_SELECTION)
}

#[derive(Debug, Clone)]
pub struct FigureResult {
    pub network: ReactionNetwork,
    pub time_grid: TimeGrid,
    /// The simulated trajectory restricted to the selected columns.
    pub trajectory: Trajectory,
}

/// Builds the catalog variant named by `spec` and applies its run-time derivation.
pub fn build_model(spec: &ModelSpec) -> Result<Model, ModelError> {
    let base = spec.variant.build()?;
    let Some(derive) = &spec.derive else {
        return Ok(base);
    };

    let mut builder = ModelBuilder::derive(&derive.name, &base);
    for (path, value) in &derive.overrides {
        builder.override_value(path, *value)?;
    }
    for reaction in &derive.remove_reactions {
        builder.remove_reaction(reaction)?;
    }
    Ok(builder.build())
}

/// Builds, finalizes and compiles the configured model, and constructs its time grid.
pub fn prepare(
    config: &FigureConfig,
    reporter: &ProgressReporter,
) -> Result<(ReactionNetwork, TimeGrid), EngineError> {
    let model = reporter.phase("Building Model", || build_model(&config.model))?;
    info!(
        "Model '{}' has {} reactions.",
        model.name(),
        model.reaction_count()
    );

    let network = reporter.phase("Compiling Network", || {
        let options = CompileOptions {
            elided_complex: config.elided_complex,
            parameter_values: config.model.parameters.clone(),
        };
        model.finalize()?.compile(&options)
    })?;
    info!(
        "Compiled {} species and {} elementary steps.",
        network.species.len(),
        network.steps.len()
    );

    let grid = &config.time_grid;
    let time_grid = TimeGrid::linspace(grid.start, grid.stop, grid.points)?;
    debug!(
        "Time grid of {} points over [{}, {}].",
        time_grid.len(),
        time_grid.start(),
        time_grid.stop()
    );
    Ok((network, time_grid))
}

#[instrument(skip_all, name = "figure_workflow")]
pub fn run(
    config: &FigureConfig,
    simulator: &dyn Simulator,
    reporter: &ProgressReporter,
) -> Result<FigureResult, EngineError> {
    let (network, time_grid) = prepare(config, reporter)?;

    let full = reporter.phase("Simulating", || simulator.run(&network, &time_grid))?;

    reporter.report(Progress::PhaseStart {
        name: "Selecting Columns",
    });
    let trajectory = full.filter_like(&config.selection);
    if trajectory.column_count() == 0 {
        warn!(
            "No trajectory column contains '{}' ({} columns available).",
            config.selection,
            full.column_count()
        );
        return Err(EngineError::PhaseFailed {
            phase: "Selecting Columns",
            reason: format!("no column name contains '{}'", config.selection),
        });
    }
    reporter.report(Progress::Message(format!(
        "Selected {} of {} columns.",
        trajectory.column_count(),
        full.column_count()
    )));
    reporter.report(Progress::PhaseFinish);

    info!(
        "Workflow complete. {} columns over {} time points.",
        trajectory.column_count(),
        trajectory.len()
    );
    Ok(FigureResult {
        network,
        time_grid,
        trajectory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::DeriveSpec;
    use crate::engine::simulator::ReplaySimulator;
    use indexmap::IndexMap;
    use std::sync::Mutex;

    /// Holds every species at its initial amount.
    struct ConstantSimulator;

    impl Simulator for ConstantSimulator {
        fn run(&self, network: &ReactionNetwork, grid: &TimeGrid) -> Result<Trajectory, EngineError> {
            let columns: IndexMap<String, Vec<f64>> = network
                .species
                .iter()
                .map(|s| (s.name.clone(), vec![s.initial; grid.len()]))
                .collect();
            Trajectory::new(grid.points().to_vec(), columns)
        }
    }

    #[test]
    fn figure1_selects_the_sensor_monomers() {
        let config = figure1_builder().build().unwrap();
        let result = run(&config, &ConstantSimulator, &ProgressReporter::new()).unwrap();
        assert_eq!(
            result.trajectory.column_names().collect::<Vec<_>>(),
            vec!["sCas3.monomer", "sCas9.monomer", "sCas8.monomer"]
        );
        assert_eq!(result.trajectory.len(), FIGURE1_POINTS);
        assert_eq!(result.network.model, "ARM");
    }

    #[test]
    fn run_reports_each_phase() {
        let phases = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p| {
            if let Progress::PhaseStart { name } = p {
                phases.lock().unwrap().push(name);
            }
        }));
        let config = figure1_builder().build().unwrap();
        run(&config, &ConstantSimulator, &reporter).unwrap();
        assert_eq!(
            *phases.lock().unwrap(),
            vec![
                "Building Model",
                "Compiling Network",
                "Simulating",
                "Selecting Columns"
            ]
        );
    }

    #[test]
    fn empty_selection_fails_the_last_phase() {
        let config = figure1_builder().selection("nothing").build().unwrap();
        assert!(matches!(
            run(&config, &ConstantSimulator, &ProgressReporter::new()),
            Err(EngineError::PhaseFailed { phase: "Selecting Columns", .. })
        ));
    }

    #[test]
    fn derivation_overrides_and_removes() {
        let mut overrides = IndexMap::new();
        overrides.insert("L".to_string(), 500.0);
        overrides.insert("KF".to_string(), 2e-6);
        let spec = ModelSpec {
            variant: Variant::Arm,
            derive: Some(DeriveSpec {
                name: "ARM_low_dose".to_string(),
                overrides,
                remove_reactions: vec!["Apaf_cleaves_sCas9".to_string()],
            }),
            parameters: IndexMap::new(),
        };
        let model = build_model(&spec).unwrap();
        assert_eq!(model.name(), "ARM_low_dose");
        assert!(model.derives_from("ARM"));
        assert_eq!(model.initial_amount("L"), Some(500.0));
        assert_eq!(model.parameter("KF").and_then(|p| p.value), Some(2e-6));
        assert!(model.reaction("Apaf_cleaves_sCas9").is_none());
    }

    #[test]
    fn derivation_of_unknown_reaction_fails() {
        let spec = ModelSpec {
            variant: Variant::Arm,
            derive: Some(DeriveSpec {
                name: "Broken".to_string(),
                remove_reactions: vec!["NonexistentReaction".to_string()],
                ..DeriveSpec::default()
            }),
            parameters: IndexMap::new(),
        };
        assert!(matches!(
            build_model(&spec),
            Err(ModelError::UnknownEntry { .. })
        ));
    }

    #[test]
    fn active_enzymes_produce_sensor_monomers_by_default() {
        let config = figure1_builder()
            .variant(Variant::ArmExtrinsic)
            .build()
            .unwrap();
        let (network, _) = prepare(&config, &ProgressReporter::new()).unwrap();
        let mut state = network.initial_state();
        for name in ["C3.A", "C8.A", "Apaf.A", "Apop"] {
            state[network.species_index(name).unwrap()] = 1e4;
        }
        let d = network.derivatives(&state).unwrap();
        for sensor in ["sCas3", "sCas9", "sCas8"] {
            let dimer = network.species_index(&format!("{}.dimer", sensor)).unwrap();
            let monomer = network.species_index(&format!("{}.monomer", sensor)).unwrap();
            assert!(d[monomer] > 0.0, "{}", sensor);
            assert!((d[monomer] + 2.0 * d[dimer]).abs() <= 1e-9 * d[monomer], "{}", sensor);
        }
    }

    #[test]
    fn replayed_trajectory_flows_through_the_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arm.csv");
        let config = figure1_builder().points(2).build().unwrap();
        let (network, grid) = prepare(&config, &ProgressReporter::new()).unwrap();
        ConstantSimulator
            .run(&network, &grid)
            .unwrap()
            .write_csv_path(&path)
            .unwrap();

        let result = run(&config, &ReplaySimulator::new(&path), &ProgressReporter::new()).unwrap();
        assert_eq!(result.trajectory.column_count(), 3);
        assert_eq!(result.trajectory.column("sCas8.monomer"), Some(&[0.0, 0.0][..]));
    }
}
