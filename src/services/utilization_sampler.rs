use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::{Beta, Distribution};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::simulation_config::validate_utilization;
use crate::services::error::SimulationError;

/// Half width of the window used by [`UtilizationDistribution::Uniform`].
pub const UNIFORM_HALF_WIDTH: f64 = 0.2;

/// Shape of the simulated utilization.
///
/// `Normal` keeps its historical name but draws from a Beta distribution whose
/// mass sits near the average utilization, skewed away from the nearer bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilizationDistribution {
    Normal,
    Uniform,
}

impl UtilizationDistribution {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Uniform => "Uniform",
        }
    }
}

impl FromStr for UtilizationDistribution {
    type Err = SimulationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Normal" | "normal" => Ok(Self::Normal),
            "Uniform" | "uniform" => Ok(Self::Uniform),
            other => Err(SimulationError::UnknownDistribution(other.to_string())),
        }
    }
}

impl fmt::Display for UtilizationDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Beta shape parameters `(alpha, beta)` for the `Normal` variant.
pub fn beta_shape(average_utilization: f64) -> (f64, f64) {
    let alpha = 2.0 + average_utilization * 8.0;
    let beta = 2.0 + (1.0 - average_utilization) * 8.0;
    (alpha, beta)
}

/// Inclusive `[low, high]` window for the `Uniform` variant, clamped to `[0, 1]`.
pub fn uniform_window(average_utilization: f64) -> (f64, f64) {
    let low = (average_utilization - UNIFORM_HALF_WIDTH).max(0.0);
    let high = (average_utilization + UNIFORM_HALF_WIDTH).min(1.0);
    (low, high)
}

pub trait UtilizationSampler {
    fn sample(
        &mut self,
        distribution: UtilizationDistribution,
        sample_count: usize,
        average_utilization: f64,
    ) -> Result<Vec<f64>, SimulationError>;
}

pub struct RandomUtilizationSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomUtilizationSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> UtilizationSampler for RandomUtilizationSampler<R> {
    fn sample(
        &mut self,
        distribution: UtilizationDistribution,
        sample_count: usize,
        average_utilization: f64,
    ) -> Result<Vec<f64>, SimulationError> {
        if sample_count == 0 {
            return Err(SimulationError::InvalidSampleCount);
        }
        validate_utilization(average_utilization)?;

        match distribution {
            UtilizationDistribution::Normal => {
                let (alpha, beta) = beta_shape(average_utilization);
                debug!(alpha, beta, sample_count, "drawing beta utilization samples");
                let beta_dist = Beta::new(alpha, beta)
                    .map_err(|e| SimulationError::InvalidDistributionParameters(e.to_string()))?;
                Ok(beta_dist.sample_iter(&mut self.rng).take(sample_count).collect())
            }
            UtilizationDistribution::Uniform => {
                let (low, high) = uniform_window(average_utilization);
                debug!(low, high, sample_count, "drawing uniform utilization samples");
                Ok((0..sample_count)
                    .map(|_| self.rng.gen_range(low..=high))
                    .collect())
            }
        }
    }
}
