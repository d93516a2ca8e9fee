use crate::cli::{FigureArgs, ModelArgs};
use crate::error::{CliError, Result};
use armkit::core::catalog::Variant;
use armkit::core::reactions::expansion::ElidedComplex;
use armkit::engine::config::{DeriveSpec, FigureConfig, FigureConfigBuilder};
use armkit::workflows::figure;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialDeriveConfig {
    name: Option<String>,
    #[serde(default)]
    overrides: BTreeMap<String, f64>,
    #[serde(default)]
    remove_reactions: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialModelConfig {
    variant: Option<String>,
    derive: Option<PartialDeriveConfig>,
    #[serde(default)]
    parameters: BTreeMap<String, f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialNetworkConfig {
    elided_complex: Option<ElidedComplex>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialTimeGridConfig {
    start: Option<f64>,
    stop: Option<f64>,
    points: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialSelectionConfig {
    like: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialFigureConfig {
    model: Option<PartialModelConfig>,
    network: Option<PartialNetworkConfig>,
    time_grid: Option<PartialTimeGridConfig>,
    selection: Option<PartialSelectionConfig>,
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

impl PartialFigureConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts from an empty configuration.
    pub fn load(args: &ModelArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Merges with precedence CLI flag > `--set` > file > figure defaults.
    pub fn merge_with_cli(
        mut self,
        args: &ModelArgs,
        figure_args: Option<&FigureArgs>,
    ) -> Result<FigureConfig> {
        self.apply_set_values(&args.set_values)?;

        let model = self.model.take().unwrap_or_default();
        let network = self.network.take().unwrap_or_default();
        let grid = self.time_grid.take().unwrap_or_default();
        let selection = self.selection.take().unwrap_or_default();

        let mut builder: FigureConfigBuilder = figure::figure1_builder();

        if let Some(name) = args.variant.as_ref().or(model.variant.as_ref()) {
            builder = builder.variant(Variant::from_name(name)?);
        }
        for (name, value) in &model.parameters {
            builder = builder.parameter(name, *value);
        }
        if let Some(derive) = model.derive {
            let name = derive.name.ok_or_else(|| {
                CliError::Config(
                    "'model.derive.name' is required when deriving a model.".to_string(),
                )
            })?;
            builder = builder.derive(DeriveSpec {
                name,
                overrides: derive.overrides.into_iter().collect(),
                remove_reactions: derive.remove_reactions,
            });
        }
        if let Some(policy) = args.elided_complex.or(network.elided_complex) {
            builder = builder.elided_complex(policy);
        }

        if let Some(start) = figure_args.and_then(|a| a.start).or(grid.start) {
            builder = builder.start(start);
        }
        if let Some(stop) = figure_args.and_then(|a| a.stop).or(grid.stop) {
            builder = builder.stop(stop);
        }
        if let Some(points) = figure_args.and_then(|a| a.points).or(grid.points) {
            builder = builder.points(points);
        }
        if let Some(like) = figure_args
            .and_then(|a| a.like.clone())
            .or(selection.like)
        {
            builder = builder.selection(like);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            if let Some(name) = key.strip_prefix("model.parameters.") {
                let value = parse_value(key, value_str, "float")?;
                self.model_mut().parameters.insert(name.to_string(), value);
                continue;
            }
            if let Some(path) = key.strip_prefix("model.derive.overrides.") {
                let value = parse_value(key, value_str, "float")?;
                self.derive_mut().overrides.insert(path.to_string(), value);
                continue;
            }

            match key {
                "model.variant" => self.model_mut().variant = Some(value_str.to_string()),
                "model.derive.name" => self.derive_mut().name = Some(value_str.to_string()),
                "model.derive.remove-reactions" => self
                    .derive_mut()
                    .remove_reactions
                    .extend(value_str.split(',').map(|s| s.trim().to_string())),
                "network.elided-complex" => {
                    self.network.get_or_insert_with(Default::default).elided_complex =
                        Some(value_str.parse().map_err(|e| {
                            CliError::Config(format!("Invalid value for {}: {}", key, e))
                        })?);
                }
                "time-grid.start" => {
                    self.time_grid_mut().start = Some(parse_value(key, value_str, "float")?);
                }
                "time-grid.stop" => {
                    self.time_grid_mut().stop = Some(parse_value(key, value_str, "float")?);
                }
                "time-grid.points" => {
                    self.time_grid_mut().points = Some(parse_value(key, value_str, "integer")?);
                }
                "selection.like" => {
                    self.selection.get_or_insert_with(Default::default).like =
                        Some(value_str.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unknown or unsupported key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn model_mut(&mut self) -> &mut PartialModelConfig {
        self.model.get_or_insert_with(Default::default)
    }

    fn derive_mut(&mut self) -> &mut PartialDeriveConfig {
        self.model_mut().derive.get_or_insert_with(Default::default)
    }

    fn time_grid_mut(&mut self) -> &mut PartialTimeGridConfig {
        self.time_grid.get_or_insert_with(Default::default)
    }
}
