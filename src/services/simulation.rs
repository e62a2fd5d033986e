use rand::Rng;
use tracing::debug;

use crate::domain::simulation_config::SimulationConfig;
use crate::domain::tier::LINE_TIERS;
use crate::services::error::SimulationError;
use crate::services::revenue_comparison::compare_to_targets;
use crate::services::simulation_types::{
    ScenarioEcho, SimulationReport, SimulationRun, TierRun, TierSummary,
};
use crate::services::statistics::{DistributionSummary, mean};
use crate::services::utilization_sampler::{
    RandomUtilizationSampler, UtilizationDistribution, UtilizationSampler,
};

/// Samples utilization with a thread-local generator and computes the run.
pub fn run(
    config: &SimulationConfig,
    sample_count: usize,
    distribution_name: &str,
) -> Result<SimulationRun, SimulationError> {
    let mut rng = rand::thread_rng();
    run_with_rng(config, sample_count, distribution_name, &mut rng)
}

pub fn run_with_rng<R: Rng + ?Sized>(
    config: &SimulationConfig,
    sample_count: usize,
    distribution_name: &str,
    rng: &mut R,
) -> Result<SimulationRun, SimulationError> {
    let distribution: UtilizationDistribution = distribution_name.parse()?;
    let mut sampler = RandomUtilizationSampler::new(rng);
    run_with_sampler(config, sample_count, distribution, &mut sampler)
}

pub fn run_with_sampler<S: UtilizationSampler + ?Sized>(
    config: &SimulationConfig,
    sample_count: usize,
    distribution: UtilizationDistribution,
    sampler: &mut S,
) -> Result<SimulationRun, SimulationError> {
    if sample_count == 0 {
        return Err(SimulationError::InvalidSampleCount);
    }
    let samples = sampler.sample(distribution, sample_count, config.average_utilization())?;
    compute_run(config, samples)
}

/// Turns utilization samples into per-tier cost arrays, ideal revenues and
/// gross margins. Every tier is derived from the same sample sequence.
///
/// # Errors
/// - `InvalidSampleCount` for an empty sample sequence.
/// - `DegenerateInput` when a tier's ideal revenue is zero or not finite,
///   since every margin of that tier would be undefined.
pub fn compute_run(
    config: &SimulationConfig,
    utilization_samples: Vec<f64>,
) -> Result<SimulationRun, SimulationError> {
    if utilization_samples.is_empty() {
        return Err(SimulationError::InvalidSampleCount);
    }

    let tiers = LINE_TIERS
        .iter()
        .map(|lines| compute_tier(config, &utilization_samples, *lines))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SimulationRun {
        utilization_samples,
        tiers,
    })
}

fn compute_tier(
    config: &SimulationConfig,
    utilization_samples: &[f64],
    lines: u32,
) -> Result<TierRun, SimulationError> {
    let costs: Vec<f64> = utilization_samples
        .iter()
        .map(|utilization| config.cost_at(*utilization, lines))
        .collect();

    let mean_cost = mean(&costs).ok_or(SimulationError::InvalidSampleCount)?;
    let ideal_revenue = mean_cost * config.revenue_multiplier();
    if ideal_revenue == 0.0 || !ideal_revenue.is_finite() {
        return Err(SimulationError::DegenerateInput { lines });
    }

    let gross_margins = costs
        .iter()
        .map(|cost| (ideal_revenue - cost) / ideal_revenue)
        .collect();
    debug!(lines, mean_cost, ideal_revenue, "computed tier");

    Ok(TierRun {
        lines,
        costs,
        ideal_revenue,
        gross_margins,
    })
}

/// Condenses a run into the figures shown to users: utilization spread, ideal
/// revenue against target, and gross-margin percentiles per tier.
pub fn summarize_run(
    config: &SimulationConfig,
    run: &SimulationRun,
    distribution: UtilizationDistribution,
    seed: Option<u64>,
) -> Result<SimulationReport, SimulationError> {
    let utilization = DistributionSummary::from_values(&run.utilization_samples)
        .ok_or(SimulationError::InvalidSampleCount)?;

    let tiers = run
        .tiers
        .iter()
        .map(|tier| {
            let gross_margin = DistributionSummary::from_values(&tier.gross_margins)
                .ok_or(SimulationError::InvalidSampleCount)?;
            let mean_cost = mean(&tier.costs).ok_or(SimulationError::InvalidSampleCount)?;
            Ok::<_, SimulationError>(TierSummary {
                lines: tier.lines,
                mean_cost,
                ideal_revenue: tier.ideal_revenue,
                gross_margin,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SimulationReport {
        distribution,
        runs: run.utilization_samples.len(),
        seed,
        scenario: ScenarioEcho {
            cost_per_minute: config.cost_per_minute(),
            webinar_length_minutes: config.webinar_length_minutes(),
            average_utilization: config.average_utilization(),
            line_type: config.line_type(),
            revenue_multiplier: config.revenue_multiplier(),
            delivery_labor_cost: config.delivery_labor_cost(),
        },
        utilization,
        tiers,
        revenue_comparison: compare_to_targets(config.line_type(), run),
    })
}
