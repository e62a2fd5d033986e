use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::services::error::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineType {
    QnA,
    ListenOnly,
}

/// Fixed labor cost added to every webinar, per line type.
/// QnA lines need a live moderator, hence the higher figure.
const QNA_DELIVERY_LABOR_COST: f64 = 152.5;
const LISTEN_ONLY_DELIVERY_LABOR_COST: f64 = 62.5;

impl LineType {
    pub const ALL: [LineType; 2] = [LineType::QnA, LineType::ListenOnly];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::QnA => "QnA",
            Self::ListenOnly => "ListenOnly",
        }
    }
}

pub fn delivery_labor_cost(line_type: LineType) -> f64 {
    match line_type {
        LineType::QnA => QNA_DELIVERY_LABOR_COST,
        LineType::ListenOnly => LISTEN_ONLY_DELIVERY_LABOR_COST,
    }
}

/// Resolves the labor cost from a line type name, rejecting unknown names.
pub fn delivery_labor_cost_for(name: &str) -> Result<f64, SimulationError> {
    let line_type: LineType = name.parse()?;
    Ok(delivery_labor_cost(line_type))
}

impl FromStr for LineType {
    type Err = SimulationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "QnA" | "qna" => Ok(Self::QnA),
            "ListenOnly" | "listen-only" => Ok(Self::ListenOnly),
            other => Err(SimulationError::UnknownLineType(other.to_string())),
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
