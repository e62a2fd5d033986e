use serde::Serialize;

use crate::domain::line_type::{LineType, delivery_labor_cost};
use crate::services::error::SimulationError;

pub const DEFAULT_COST_PER_MINUTE: f64 = 0.015;
pub const DEFAULT_WEBINAR_LENGTH_MINUTES: u32 = 75;
pub const DEFAULT_AVERAGE_UTILIZATION: f64 = 0.5;
pub const DEFAULT_REVENUE_MULTIPLIER: f64 = 3.5;

/// Cost parameters of a single simulation. Built through [`SimulationConfig::configure`],
/// which validates ranges and resolves the delivery labor cost once.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    cost_per_minute: f64,
    webinar_length_minutes: u32,
    average_utilization: f64,
    line_type: LineType,
    revenue_multiplier: f64,
    delivery_labor_cost: f64,
}

impl SimulationConfig {
    /// # Errors
    /// - CPM must be finite and greater than zero.
    /// - Webinar length must be at least one minute.
    /// - Average utilization must lie in `[0, 1]`.
    /// - Revenue multiplier must be finite and at least `1`.
    pub fn configure(
        cost_per_minute: f64,
        webinar_length_minutes: u32,
        average_utilization: f64,
        line_type: LineType,
        revenue_multiplier: f64,
    ) -> Result<Self, SimulationError> {
        if !cost_per_minute.is_finite() || cost_per_minute <= 0.0 {
            return Err(SimulationError::InvalidCostPerMinute(cost_per_minute));
        }
        if webinar_length_minutes == 0 {
            return Err(SimulationError::InvalidWebinarLength);
        }
        validate_utilization(average_utilization)?;
        if !revenue_multiplier.is_finite() || revenue_multiplier < 1.0 {
            return Err(SimulationError::InvalidRevenueMultiplier(revenue_multiplier));
        }

        Ok(Self {
            cost_per_minute,
            webinar_length_minutes,
            average_utilization,
            line_type,
            revenue_multiplier,
            delivery_labor_cost: delivery_labor_cost(line_type),
        })
    }

    pub fn cost_per_minute(&self) -> f64 {
        self.cost_per_minute
    }

    pub fn webinar_length_minutes(&self) -> u32 {
        self.webinar_length_minutes
    }

    pub fn average_utilization(&self) -> f64 {
        self.average_utilization
    }

    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    pub fn revenue_multiplier(&self) -> f64 {
        self.revenue_multiplier
    }

    pub fn delivery_labor_cost(&self) -> f64 {
        self.delivery_labor_cost
    }

    /// Cost of one webinar provisioned with `lines` lines at the given utilization.
    pub fn cost_at(&self, utilization: f64, lines: u32) -> f64 {
        utilization * f64::from(lines) * self.cost_per_minute * f64::from(self.webinar_length_minutes)
            + self.delivery_labor_cost
    }

    #[cfg(test)]
    pub(crate) fn with_delivery_labor_cost(mut self, delivery_labor_cost: f64) -> Self {
        self.delivery_labor_cost = delivery_labor_cost;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cost_per_minute: DEFAULT_COST_PER_MINUTE,
            webinar_length_minutes: DEFAULT_WEBINAR_LENGTH_MINUTES,
            average_utilization: DEFAULT_AVERAGE_UTILIZATION,
            line_type: LineType::QnA,
            revenue_multiplier: DEFAULT_REVENUE_MULTIPLIER,
            delivery_labor_cost: delivery_labor_cost(LineType::QnA),
        }
    }
}

pub(crate) fn validate_utilization(average_utilization: f64) -> Result<(), SimulationError> {
    if !(0.0..=1.0).contains(&average_utilization) {
        return Err(SimulationError::InvalidUtilization(average_utilization));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_resolves_delivery_labor_cost() {
        let config = SimulationConfig::configure(0.015, 75, 0.5, LineType::ListenOnly, 3.5).unwrap();
        assert_eq!(config.delivery_labor_cost(), 62.5);

        let config = SimulationConfig::configure(0.015, 75, 0.5, LineType::QnA, 3.5).unwrap();
        assert_eq!(config.delivery_labor_cost(), 152.5);
    }

    #[test]
    fn configure_accepts_utilization_bounds() {
        assert!(SimulationConfig::configure(0.015, 75, 0.0, LineType::QnA, 1.0).is_ok());
        assert!(SimulationConfig::configure(0.015, 75, 1.0, LineType::QnA, 10.0).is_ok());
    }

    #[test]
    fn configure_rejects_out_of_range_values() {
        let cases = [
            SimulationConfig::configure(0.0, 75, 0.5, LineType::QnA, 3.5),
            SimulationConfig::configure(f64::NAN, 75, 0.5, LineType::QnA, 3.5),
            SimulationConfig::configure(0.015, 0, 0.5, LineType::QnA, 3.5),
            SimulationConfig::configure(0.015, 75, -0.1, LineType::QnA, 3.5),
            SimulationConfig::configure(0.015, 75, 1.01, LineType::QnA, 3.5),
            SimulationConfig::configure(0.015, 75, f64::NAN, LineType::QnA, 3.5),
            SimulationConfig::configure(0.015, 75, 0.5, LineType::QnA, 0.5),
            SimulationConfig::configure(0.015, 75, 0.5, LineType::QnA, f64::INFINITY),
        ];
        for case in cases {
            let err = case.unwrap_err();
            assert!(err.is_invalid_argument(), "unexpected error: {err}");
        }
    }

    #[test]
    fn cost_at_matches_listen_only_example() {
        let config = SimulationConfig::configure(0.015, 75, 0.5, LineType::ListenOnly, 3.5).unwrap();
        // 0.5 * 25 * 0.015 * 75 = 14.0625, plus 62.5 labor
        assert!((config.cost_at(0.5, 25) - 76.5625).abs() < 1e-9);
    }

    #[test]
    fn default_matches_form_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.cost_per_minute(), 0.015);
        assert_eq!(config.webinar_length_minutes(), 75);
        assert_eq!(config.average_utilization(), 0.5);
        assert_eq!(config.line_type(), LineType::QnA);
        assert_eq!(config.revenue_multiplier(), 3.5);
        assert_eq!(config.delivery_labor_cost(), 152.5);
    }
}
