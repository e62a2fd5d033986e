use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::info;

use crate::commands::base_commands::{Commands, DEFAULT_DISTRIBUTION, DEFAULT_RUNS, OutputFormat};
use crate::commands::report_format::format_simulation_report;
use crate::domain::line_type::LineType;
use crate::domain::simulation_config::SimulationConfig;
use crate::services::error::SimulationError;
use crate::services::histogram::{HistogramError, write_run_histograms};
use crate::services::scenario_yaml::{ScenarioYamlError, load_scenario_from_yaml_file};
use crate::services::simulation::{run_with_sampler, summarize_run};
use crate::services::simulation_types::{SimulationOutput, SimulationRun};
use crate::services::utilization_sampler::{RandomUtilizationSampler, UtilizationDistribution};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Scenario(#[from] ScenarioYamlError),
    #[error(transparent)]
    Histogram(#[from] HistogramError),
    #[error("failed to serialize simulation output: {0}")]
    Serialize(String),
    #[error("failed to write simulation output: {0}")]
    Write(#[from] std::io::Error),
}

/// Run parameters after merging scenario file values, CLI flags and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRun {
    pub config: SimulationConfig,
    pub runs: usize,
    pub distribution: UtilizationDistribution,
    pub seed: Option<u64>,
}

pub fn simulate_command(cmd: Commands) -> Result<(), CommandError> {
    let Commands::Simulate {
        cpm,
        webinar_length,
        utilization,
        line_type,
        revenue_multiplier,
        runs,
        distribution,
        seed,
        scenario,
        output,
        format,
        include_samples,
        histogram_dir,
    } = cmd
    else {
        return Ok(());
    };

    let resolved = match scenario {
        Some(path) => {
            let scenario = load_scenario_from_yaml_file(&path)?;
            info!(path = %path, "loaded scenario");
            let distribution = match distribution {
                Some(name) => name.parse::<UtilizationDistribution>()?,
                None => scenario.distribution.unwrap_or(UtilizationDistribution::Normal),
            };
            ResolvedRun {
                config: scenario.config,
                runs: runs.or(scenario.runs).unwrap_or(DEFAULT_RUNS),
                distribution,
                seed: seed.or(scenario.seed),
            }
        }
        None => {
            let line_type: LineType = line_type.parse()?;
            ResolvedRun {
                config: SimulationConfig::configure(
                    cpm,
                    webinar_length,
                    utilization,
                    line_type,
                    revenue_multiplier,
                )?,
                runs: runs.unwrap_or(DEFAULT_RUNS),
                distribution: distribution
                    .as_deref()
                    .unwrap_or(DEFAULT_DISTRIBUTION)
                    .parse::<UtilizationDistribution>()?,
                seed,
            }
        }
    };

    let executed = execute_run(&resolved, include_samples, format)?;
    println!("{}", executed.report);

    if let Some(path) = output {
        std::fs::write(&path, &executed.serialized)?;
        info!(path = %path, "simulation output written");
        println!("Simulation output written to {path}");
    }

    if let Some(dir) = histogram_dir {
        let paths = write_run_histograms(&dir, &executed.run)?;
        println!("{} histograms written to {dir}", paths.len());
    }

    Ok(())
}

pub struct ExecutedRun {
    pub run: SimulationRun,
    pub report: String,
    pub serialized: String,
}

/// Samples, computes and renders one run in both text and the requested format.
pub fn execute_run(
    resolved: &ResolvedRun,
    include_samples: bool,
    format: OutputFormat,
) -> Result<ExecutedRun, CommandError> {
    let rng = match resolved.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sampler = RandomUtilizationSampler::new(rng);
    let run = run_with_sampler(
        &resolved.config,
        resolved.runs,
        resolved.distribution,
        &mut sampler,
    )?;
    let report = summarize_run(&resolved.config, &run, resolved.distribution, resolved.seed)?;
    info!(
        runs = resolved.runs,
        distribution = %resolved.distribution,
        line_type = %resolved.config.line_type(),
        "simulation complete"
    );

    let text = format_simulation_report(&report);
    let simulation_output = SimulationOutput {
        report,
        samples: include_samples.then(|| run.clone()),
    };
    let serialized = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&simulation_output)
            .map_err(|e| CommandError::Serialize(e.to_string()))?,
        OutputFormat::Json => serde_json::to_string_pretty(&simulation_output)
            .map_err(|e| CommandError::Serialize(e.to_string()))?,
    };

    Ok(ExecutedRun {
        run,
        report: text,
        serialized,
    })
}
