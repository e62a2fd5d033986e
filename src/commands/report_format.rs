use crate::services::revenue_comparison::RevenueComparison;
use crate::services::simulation_types::{SimulationReport, TierSummary};

pub fn format_simulation_report(report: &SimulationReport) -> String {
    let scenario = &report.scenario;
    let seed = match report.seed {
        Some(value) => value.to_string(),
        None => "random".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Audio Dial-in Simulation".to_string());
    lines.push(format!("Line type: {}", scenario.line_type));
    lines.push(format!("CPM: {}", scenario.cost_per_minute));
    lines.push(format!("Webinar length: {} min", scenario.webinar_length_minutes));
    lines.push(format!("Average utilization: {:.2}", scenario.average_utilization));
    lines.push(format!("Revenue multiplier: {}x", scenario.revenue_multiplier));
    lines.push(format!("Distribution: {}", report.distribution));
    lines.push(format!("Simulations: {}", report.runs));
    lines.push(format!("Seed: {seed}"));
    lines.push(format!(
        "Simulated utilization: mean {:.3}, min {:.3}, max {:.3}",
        report.utilization.mean, report.utilization.min, report.utilization.max
    ));
    lines.push(String::new());
    lines.push("Ideal revenue:".to_string());
    for tier in &report.tiers {
        lines.push(format_ideal_revenue_line(scenario.revenue_multiplier, tier));
    }
    lines.push(String::new());
    lines.push("Gross margin:".to_string());
    lines.push("| Number of Lines | P5 | P50 | P95 |".to_string());
    lines.push("|----------------|----|-----|-----|".to_string());
    for tier in &report.tiers {
        lines.push(format!(
            "| {} lines | {} | {} | {} |",
            tier.lines,
            format_percent(tier.gross_margin.p5),
            format_percent(tier.gross_margin.p50),
            format_percent(tier.gross_margin.p95)
        ));
    }
    lines.push(String::new());
    lines.push(format_revenue_table(&report.revenue_comparison));

    lines.join("\n")
}

fn format_ideal_revenue_line(multiplier: f64, tier: &TierSummary) -> String {
    format!(
        "Ideal Revenue at {multiplier}x ({} lines): {}",
        tier.lines,
        format_currency(tier.ideal_revenue)
    )
}

/// Markdown table comparing predicted and target revenue per tier.
pub fn format_revenue_table(rows: &[RevenueComparison]) -> String {
    let mut lines = vec![
        "| Number of Lines | Model Predicted Revenue | Target Revenue | Difference |".to_string(),
        "|----------------|------------------------|----------------|------------|".to_string(),
    ];
    for row in rows {
        lines.push(format!(
            "| {} lines | {} | {} | {} |",
            row.lines,
            format_currency(row.ideal_revenue),
            format_currency(row.target_revenue),
            format_currency(row.difference)
        ));
    }
    lines.join("\n")
}

/// Dollar amount with thousands separators and two decimals, e.g. `-$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::line_type::LineType;
    use crate::services::simulation_types::ScenarioEcho;
    use crate::services::statistics::DistributionSummary;
    use crate::services::utilization_sampler::UtilizationDistribution;

    fn summary(value: f64) -> DistributionSummary {
        DistributionSummary {
            mean: value,
            min: value,
            p5: value,
            p50: value,
            p95: value,
            max: value,
        }
    }

    fn build_report() -> SimulationReport {
        SimulationReport {
            distribution: UtilizationDistribution::Normal,
            runs: 1000,
            seed: Some(42),
            scenario: ScenarioEcho {
                cost_per_minute: 0.015,
                webinar_length_minutes: 75,
                average_utilization: 0.5,
                line_type: LineType::ListenOnly,
                revenue_multiplier: 3.5,
                delivery_labor_cost: 62.5,
            },
            utilization: summary(0.5),
            tiers: vec![TierSummary {
                lines: 25,
                mean_cost: 76.5625,
                ideal_revenue: 267.96875,
                gross_margin: summary(0.7142857),
            }],
            revenue_comparison: vec![RevenueComparison {
                lines: 25,
                ideal_revenue: 267.96875,
                target_revenue: 250.0,
                difference: 17.96875,
            }],
        }
    }

    #[test]
    fn format_simulation_report_includes_header_and_tables() {
        let output = format_simulation_report(&build_report());

        assert!(output.contains("Audio Dial-in Simulation"));
        assert!(output.contains("Line type: ListenOnly"));
        assert!(output.contains("Distribution: Normal"));
        assert!(output.contains("Simulations: 1000"));
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Ideal Revenue at 3.5x (25 lines): $267.97"));
        assert!(output.contains("| 25 lines | 71.4% | 71.4% | 71.4% |"));
        assert!(output.contains("| 25 lines | $267.97 | $250.00 | $17.97 |"));
    }

    #[test]
    fn format_simulation_report_marks_unseeded_runs() {
        let mut report = build_report();
        report.seed = None;
        assert!(format_simulation_report(&report).contains("Seed: random"));
    }

    #[test]
    fn format_revenue_table_has_header_row() {
        let table = format_revenue_table(&[]);
        assert!(table.starts_with("| Number of Lines | Model Predicted Revenue | Target Revenue | Difference |"));
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1500.5), "-$1,500.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }
}
