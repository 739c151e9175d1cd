use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use surveykit::{
    init_logging, plan_file, plan_legacy_file, read_json, to_json, write_output, ConfigFormat,
    MissionSummary, PlanRequest, PlannerConfig, WaypointOrchestrator, BUILD_DATE, VERSION,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "surveykit")]
#[command(about = "Generate drone survey waypoints from shapes and flight parameters")]
#[command(version)]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plan a batch of shapes and print the generation report
    Plan {
        /// Request file (JSON: shapes + params)
        input: PathBuf,
        /// Planner configuration (JSON or TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write output here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Plan a single-shape request with fallback to the zig-zag generator
    Legacy {
        input: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print distance, duration and photo statistics for a request
    Summary {
        input: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Treat the input as a single-shape request
        #[arg(long)]
        legacy: bool,
    },
    /// Print the effective configuration, or write it to a file
    Config {
        #[arg(long)]
        config: Option<PathBuf>,
        /// Destination (.json or .toml)
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs)?;
    info!(version = VERSION, build_date = BUILD_DATE, "surveykit starting");

    match cli.command {
        Command::Plan {
            input,
            config,
            output,
        } => plan(&input, config.as_deref(), output.as_deref()),
        Command::Legacy {
            input,
            config,
            output,
        } => legacy(&input, config.as_deref(), output.as_deref()),
        Command::Summary {
            input,
            config,
            legacy,
        } => summary(&input, config.as_deref(), legacy),
        Command::Config { config, write } => show_config(config.as_deref(), write.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PlannerConfig> {
    PlannerConfig::load_or_default(path).context("failed to load planner configuration")
}

fn plan(input: &Path, config: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let report = plan_file(input, &config)?;
    for failure in &report.failures {
        warn!(
            shape_id = %failure.shape_id,
            kind = %failure.kind,
            error = %failure.error,
            "Shape skipped"
        );
    }
    info!(count = report.waypoints.len(), "Plan complete");
    write_output(&to_json(&report, config.output.pretty)?, output)
}

fn legacy(input: &Path, config: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let waypoints = plan_legacy_file(input, &config)?;
    info!(count = waypoints.len(), "Plan complete");
    write_output(&to_json(&waypoints, config.output.pretty)?, output)
}

fn summary(input: &Path, config: Option<&Path>, legacy: bool) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let waypoints = if legacy {
        plan_legacy_file(input, &config)?
    } else {
        let request: PlanRequest = read_json(input)?;
        WaypointOrchestrator::from_config(&config)
            .generate_request(&request)
            .waypoints
    };
    let summary =
        MissionSummary::from_waypoints_with_action(&waypoints, &config.defaults.photo_action);
    print!("{}", summary.format(config.output.measurement_system));
    Ok(())
}

fn show_config(config: Option<&Path>, write: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    match write {
        Some(path) => {
            config
                .save_to_file(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "Configuration written");
            Ok(())
        }
        None => {
            let text = config
                .to_string_for(ConfigFormat::Toml)
                .context("failed to encode configuration")?;
            print!("{text}");
            Ok(())
        }
    }
}
