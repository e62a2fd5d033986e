use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid distribution: {0} (expected Normal or Uniform)")]
    UnknownDistribution(String),
    #[error("invalid line type: {0} (expected QnA or ListenOnly)")]
    UnknownLineType(String),
    #[error("number of simulations must be greater than zero")]
    InvalidSampleCount,
    #[error("average utilization must be within [0, 1], got {0}")]
    InvalidUtilization(f64),
    #[error("cost per minute must be a positive number, got {0}")]
    InvalidCostPerMinute(f64),
    #[error("webinar length must be at least one minute")]
    InvalidWebinarLength,
    #[error("revenue multiplier must be at least 1, got {0}")]
    InvalidRevenueMultiplier(f64),
    #[error("invalid distribution parameters: {0}")]
    InvalidDistributionParameters(String),
    #[error("ideal revenue for {lines} lines is zero or not finite, gross margins are undefined")]
    DegenerateInput { lines: u32 },
}

impl SimulationError {
    /// True for every variant caused by a bad caller-supplied value.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::DegenerateInput { .. })
    }
}
