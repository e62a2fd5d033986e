use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::line_type::LineType;
use crate::domain::simulation_config::SimulationConfig;
use crate::services::error::SimulationError;
use crate::services::utilization_sampler::UtilizationDistribution;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid scenario: {0}")]
    Invalid(#[from] SimulationError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioRecord {
    cost_per_minute: f64,
    webinar_length_minutes: u32,
    average_utilization: f64,
    line_type: String,
    revenue_multiplier: f64,
    runs: Option<usize>,
    distribution: Option<String>,
    seed: Option<u64>,
}

/// A validated configuration plus the run parameters a scenario file may pin.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub config: SimulationConfig,
    pub runs: Option<usize>,
    pub distribution: Option<UtilizationDistribution>,
    pub seed: Option<u64>,
}

pub fn load_scenario_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ScenarioYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_scenario_from_yaml_str(&contents)
}

pub fn deserialize_scenario_from_yaml_str(yaml: &str) -> Result<Scenario, ScenarioYamlError> {
    let record: ScenarioRecord = serde_yaml::from_str(yaml)?;
    let line_type: LineType = record.line_type.parse()?;
    let config = SimulationConfig::configure(
        record.cost_per_minute,
        record.webinar_length_minutes,
        record.average_utilization,
        line_type,
        record.revenue_multiplier,
    )?;
    let distribution = record
        .distribution
        .as_deref()
        .map(str::parse::<UtilizationDistribution>)
        .transpose()?;
    if record.runs == Some(0) {
        return Err(SimulationError::InvalidSampleCount.into());
    }

    Ok(Scenario {
        config,
        runs: record.runs,
        distribution,
        seed: record.seed,
    })
}
