pub mod line_type;
pub mod simulation_config;
pub mod tier;
