use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use dialin::commands::base_commands::{CliArgs, Commands};
use dialin::commands::simulate_cmd::simulate_command;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    match args.command {
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut io::stdout());
            ExitCode::SUCCESS
        }
        cmd @ Commands::Simulate { .. } => match simulate_command(cmd) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "simulation failed");
                eprintln!("Failed to simulate: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
