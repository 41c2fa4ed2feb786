use crate::cli::Cli;
use crate::config::RunConfig;
use crate::errors::AppResult;
use crate::services::commands::dry_run_executor::DryRunExecutor;
use crate::services::commands::process_executor::ProcessExecutor;
use crate::services::commands::traits::command_executor_trait::CommandExecutorTrait;
use crate::services::csv_service::{RunSummary, run_from_csv_path};
use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

mod cli;
mod config;
mod consts;
mod errors;
mod models;
mod services;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    let config = RunConfig::from(Cli::parse());
    info!(
        "Creating rules from {} under firewall policy {} (global: {})",
        config.csv_path.display(),
        config.policy.policy_id,
        config.policy.global_scope
    );

    let executor: &dyn CommandExecutorTrait = if config.dry_run {
        &DryRunExecutor
    } else {
        &ProcessExecutor
    };

    ExitCode::from(exit_status(run_from_csv_path(&config, executor)))
}

/// Logs a fatal run error once and maps the result to a process exit status.
fn exit_status(result: AppResult<RunSummary>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            error!("Error: {e}");
            1
        }
    }
}
