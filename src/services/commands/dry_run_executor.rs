use crate::errors::AppResult;
use crate::models::invocation::{CommandInvocation, ProcessOutput};
use crate::services::commands::traits::command_executor_trait::CommandExecutorTrait;
use log::info;

/// Logs each invocation instead of running it and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunExecutor;

impl CommandExecutorTrait for DryRunExecutor {
    fn run(&self, invocation: &CommandInvocation) -> AppResult<ProcessOutput> {
        info!("[dry-run] would run: {invocation}");
        Ok(ProcessOutput::ok())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
