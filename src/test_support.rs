use crate::services::error::SimulationError;
use crate::services::utilization_sampler::{UtilizationDistribution, UtilizationSampler};

// A UtilizationSampler that repeats a fixed sequence and records every request
pub struct MockSampler {
    values: Vec<f64>,
    pub calls: Vec<(UtilizationDistribution, usize, f64)>,
}

impl MockSampler {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            calls: Vec::new(),
        }
    }
}

impl UtilizationSampler for MockSampler {
    fn sample(
        &mut self,
        distribution: UtilizationDistribution,
        sample_count: usize,
        average_utilization: f64,
    ) -> Result<Vec<f64>, SimulationError> {
        self.calls.push((distribution, sample_count, average_utilization));
        Ok(self.values.iter().copied().cycle().take(sample_count).collect())
    }
}
