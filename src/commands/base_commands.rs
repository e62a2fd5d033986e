use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::simulation_config::{
    DEFAULT_AVERAGE_UTILIZATION, DEFAULT_COST_PER_MINUTE, DEFAULT_REVENUE_MULTIPLIER,
    DEFAULT_WEBINAR_LENGTH_MINUTES,
};

pub const DEFAULT_RUNS: usize = 1000;
pub const DEFAULT_DISTRIBUTION: &str = "Normal";

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate dial-in line costs, ideal revenue and gross margins per tier
    Simulate {
        /// Cost per minute per line
        #[arg(long, default_value_t = DEFAULT_COST_PER_MINUTE)]
        cpm: f64,
        /// Webinar length in minutes
        #[arg(long, default_value_t = DEFAULT_WEBINAR_LENGTH_MINUTES)]
        webinar_length: u32,
        /// Average utilization of the provisioned lines (0 to 1)
        #[arg(short, long, default_value_t = DEFAULT_AVERAGE_UTILIZATION)]
        utilization: f64,
        /// Line type (QnA or ListenOnly)
        #[arg(short, long, default_value = "QnA")]
        line_type: String,
        /// Ideal revenue as a multiple of the mean cost
        #[arg(short, long, default_value_t = DEFAULT_REVENUE_MULTIPLIER)]
        revenue_multiplier: f64,
        /// Number of simulations [default: 1000]
        #[arg(short = 'n', long)]
        runs: Option<usize>,
        /// Utilization distribution (Normal or Uniform) [default: Normal]
        #[arg(short, long)]
        distribution: Option<String>,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Scenario YAML file; replaces the cost parameters above
        #[arg(short, long)]
        scenario: Option<String>,
        /// Output file for the machine-readable report
        #[arg(short, long)]
        output: Option<String>,
        /// Format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Include raw utilization, cost and margin arrays in the output file
        #[arg(long)]
        include_samples: bool,
        /// Directory for utilization and gross margin histogram PNGs
        #[arg(long)]
        histogram_dir: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_uses_form_defaults() {
        let args = CliArgs::parse_from(["dialin", "simulate"]);

        if let Commands::Simulate {
            cpm,
            webinar_length,
            utilization,
            line_type,
            revenue_multiplier,
            runs,
            distribution,
            format,
            ..
        } = args.command
        {
            assert_eq!(cpm, 0.015);
            assert_eq!(webinar_length, 75);
            assert_eq!(utilization, 0.5);
            assert_eq!(line_type, "QnA");
            assert_eq!(revenue_multiplier, 3.5);
            assert_eq!(runs, None);
            assert_eq!(distribution, None);
            assert_eq!(format, OutputFormat::Yaml);
        } else {
            panic!("expected simulate command");
        }
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn simulate_parses_short_flags() {
        let args = CliArgs::parse_from([
            "dialin",
            "simulate",
            "-n",
            "250",
            "-d",
            "Uniform",
            "-l",
            "ListenOnly",
            "-u",
            "0.8",
            "-f",
            "json",
        ]);

        if let Commands::Simulate {
            runs,
            distribution,
            line_type,
            utilization,
            format,
            ..
        } = args.command
        {
            assert_eq!(runs, Some(250));
            assert_eq!(distribution.as_deref(), Some("Uniform"));
            assert_eq!(line_type, "ListenOnly");
            assert_eq!(utilization, 0.8);
            assert_eq!(format, OutputFormat::Json);
        } else {
            panic!("expected simulate command");
        }
    }
}
