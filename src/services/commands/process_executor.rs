use crate::errors::{AppErrors, AppResult};
use crate::models::invocation::{CommandInvocation, ProcessOutput};
use crate::services::commands::traits::command_executor_trait::CommandExecutorTrait;
use std::process::Command;

/// Runs invocations as real child processes, one at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl CommandExecutorTrait for ProcessExecutor {
    /// Spawns the program and blocks until it exits. A failed run reports
    /// stderr followed by stdout as the error text; a successful one keeps
    /// everything it printed as output text.
    fn run(&self, invocation: &CommandInvocation) -> AppResult<ProcessOutput> {
        let program = invocation.program();
        let output = Command::new(program)
            .args(invocation.args())
            .output()
            .map_err(|source| AppErrors::Spawn {
                program: program.to_string(),
                source,
            })?;

        if output.status.success() {
            let mut output_text = String::from_utf8_lossy(&output.stdout).into_owned();
            output_text.push_str(&String::from_utf8_lossy(&output.stderr));
            return Ok(ProcessOutput::ok_with_output(output_text));
        }

        let mut error_text = String::from_utf8_lossy(&output.stderr).into_owned();
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            if !error_text.is_empty() && !error_text.ends_with('\n') {
                error_text.push('\n');
            }
            error_text.push_str(&stdout);
        }
        if error_text.trim().is_empty() {
            error_text = format!("{program} exited with {}", output.status);
        }
        Ok(ProcessOutput::failed(error_text))
    }
}
