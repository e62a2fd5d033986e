pub mod error;
pub mod histogram;
pub mod revenue_comparison;
pub mod scenario_yaml;
pub mod simulation;
pub mod simulation_types;
pub mod statistics;
pub mod utilization_sampler;
