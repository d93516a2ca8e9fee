use armkit::core::network::mass_action::NetworkFormat;
use armkit::core::reactions::expansion::ElidedComplex;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Mauro Silberberg",
    version,
    about = "armkit CLI - Build, inspect and export the ARM apoptosis reaction-network models.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog models and their ancestry.
    List,
    /// Print the species, parameters and reaction rules of a catalog model.
    Show(ShowArgs),
    /// Finalize and compile catalog models, reporting dangling references.
    Validate(ValidateArgs),
    /// Compile a model into a mass-action network and write it as JSON or TOML.
    Export(ExportArgs),
    /// Sensor monomer time courses of an ARM variant.
    Figure1(FigureArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Name of the catalog model (e.g., 'ARM_extrinsic').
    #[arg(required = true, value_name = "MODEL")]
    pub model: String,

    /// Also list the complexes that tracked reactions add to the model in the species table.
    #[arg(long)]
    pub implicit: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Models to validate. Defaults to every catalog model.
    #[arg(value_name = "MODEL")]
    pub models: Vec<String>,

    /// How elided reaction complexes are compiled. Defaults to 'quasi-steady-state'.
    #[arg(long, value_name = "POLICY")]
    pub elided_complex: Option<ElidedComplex>,
}

/// Model selection shared by the commands that compile a network.
#[derive(Args, Debug, Default)]
pub struct ModelArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog model from the config file.
    #[arg(short = 'm', long = "model", value_name = "MODEL")]
    pub variant: Option<String>,

    /// Override how elided reaction complexes are compiled
    /// ('quasi-steady-state', the default, or 'untracked').
    #[arg(long, value_name = "POLICY")]
    pub elided_complex: Option<ElidedComplex>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S model.parameters.KF=2e-6
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Output format of the network.
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    pub format: NetworkFormat,

    /// Output file. The network is printed to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["trajectory", "request_out"])
))]
pub struct FigureArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Trajectory CSV produced by an external engine for this model and time grid.
    #[arg(short, long, value_name = "PATH")]
    pub trajectory: Option<PathBuf>,

    /// Write the simulation request (network and time grid) as JSON instead of plotting.
    #[arg(long, value_name = "PATH")]
    pub request_out: Option<PathBuf>,

    /// Keep only the trajectory columns whose name contains this pattern.
    #[arg(long, value_name = "PATTERN")]
    pub like: Option<String>,

    /// Override the number of time points.
    #[arg(long, value_name = "INT")]
    pub points: Option<usize>,

    /// Override the first time point.
    #[arg(long, value_name = "FLOAT")]
    pub start: Option<f64>,

    /// Override the last time point.
    #[arg(long, value_name = "FLOAT")]
    pub stop: Option<f64>,

    /// Write the selected columns to a CSV file in addition to printing them.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn figure1_requires_a_trajectory_source() {
        assert!(Cli::try_parse_from(["armkit", "figure1"]).is_err());
        assert!(
            Cli::try_parse_from(["armkit", "figure1", "-t", "a.csv", "--request-out", "r.json"])
                .is_err()
        );
    }

    #[test]
    fn figure1_parses_overrides() {
        let cli = Cli::try_parse_from([
            "armkit",
            "-vv",
            "figure1",
            "--request-out",
            "request.json",
            "-m",
            "ARM_intrinsic",
            "--elided-complex",
            "qss",
            "-S",
            "time-grid.points=5",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Figure1(args) = cli.command else {
            panic!("expected figure1");
        };
        assert_eq!(args.model.variant.as_deref(), Some("ARM_intrinsic"));
        assert_eq!(
            args.model.elided_complex,
            Some(ElidedComplex::QuasiSteadyState)
        );
        assert_eq!(args.model.set_values, vec!["time-grid.points=5"]);
    }

    #[test]
    fn export_format_is_parsed() {
        let cli = Cli::try_parse_from(["armkit", "export", "-m", "ARM", "-f", "toml"]).unwrap();
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, NetworkFormat::Toml);
        assert!(args.output.is_none());
    }
}
