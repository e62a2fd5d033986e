use serde::Serialize;

use crate::domain::line_type::LineType;
use crate::domain::tier::target_revenue;
use crate::services::simulation_types::SimulationRun;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RevenueComparison {
    pub lines: u32,
    pub ideal_revenue: f64,
    pub target_revenue: f64,
    pub difference: f64,
}

/// Compares each tier's ideal revenue with the published target for the line type.
/// Tiers without a listed target are skipped.
pub fn compare_to_targets(line_type: LineType, run: &SimulationRun) -> Vec<RevenueComparison> {
    run.tiers
        .iter()
        .filter_map(|tier| {
            let target = target_revenue(line_type, tier.lines)?;
            Some(RevenueComparison {
                lines: tier.lines,
                ideal_revenue: tier.ideal_revenue,
                target_revenue: target,
                difference: tier.ideal_revenue - target,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::simulation_types::TierRun;

    fn run_with_revenues(revenues: &[(u32, f64)]) -> SimulationRun {
        SimulationRun {
            utilization_samples: vec![0.5],
            tiers: revenues
                .iter()
                .map(|(lines, revenue)| TierRun {
                    lines: *lines,
                    costs: vec![revenue / 2.0],
                    ideal_revenue: *revenue,
                    gross_margins: vec![0.5],
                })
                .collect(),
        }
    }

    #[test]
    fn compare_to_targets_subtracts_target() {
        let run = run_with_revenues(&[(25, 300.0), (50, 400.0)]);
        let rows = compare_to_targets(LineType::ListenOnly, &run);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].target_revenue, 250.0);
        assert_eq!(rows[0].difference, 50.0);
        assert_eq!(rows[1].target_revenue, 450.0);
        assert_eq!(rows[1].difference, -50.0);
    }

    #[test]
    fn compare_to_targets_uses_line_type_table() {
        let run = run_with_revenues(&[(300, 2750.0)]);
        let rows = compare_to_targets(LineType::QnA, &run);
        assert_eq!(rows[0].difference, 0.0);
    }

    #[test]
    fn compare_to_targets_skips_unlisted_tiers() {
        let run = run_with_revenues(&[(75, 500.0), (100, 900.0)]);
        let rows = compare_to_targets(LineType::QnA, &run);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lines, 100);
    }
}
