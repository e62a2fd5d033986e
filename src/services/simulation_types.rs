use serde::Serialize;

use crate::domain::line_type::LineType;
use crate::services::revenue_comparison::RevenueComparison;
use crate::services::statistics::DistributionSummary;
use crate::services::utilization_sampler::UtilizationDistribution;

/// Cost and margin arrays of one line-count tier, all indexed like the
/// utilization samples they were derived from.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TierRun {
    pub lines: u32,
    pub costs: Vec<f64>,
    pub ideal_revenue: f64,
    pub gross_margins: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub utilization_samples: Vec<f64>,
    pub tiers: Vec<TierRun>,
}

impl SimulationRun {
    pub fn tier(&self, lines: u32) -> Option<&TierRun> {
        self.tiers.iter().find(|tier| tier.lines == lines)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioEcho {
    pub cost_per_minute: f64,
    pub webinar_length_minutes: u32,
    pub average_utilization: f64,
    pub line_type: LineType,
    pub revenue_multiplier: f64,
    pub delivery_labor_cost: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TierSummary {
    pub lines: u32,
    pub mean_cost: f64,
    pub ideal_revenue: f64,
    pub gross_margin: DistributionSummary,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub distribution: UtilizationDistribution,
    pub runs: usize,
    pub seed: Option<u64>,
    pub scenario: ScenarioEcho,
    pub utilization: DistributionSummary,
    pub tiers: Vec<TierSummary>,
    pub revenue_comparison: Vec<RevenueComparison>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SimulationOutput {
    pub report: SimulationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<SimulationRun>,
}
