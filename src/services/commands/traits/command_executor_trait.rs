use crate::errors::AppResult;
use crate::models::invocation::{CommandInvocation, ProcessOutput};

/// A trait that defines how a built command line is carried out.
/// Implementors run the invocation to completion and report what they saw;
/// a non-zero exit is an `Ok` output, only failing to run at all is an error.
pub trait CommandExecutorTrait {
    /// Runs the invocation and waits for it to finish.
    ///
    /// # Arguments
    /// * `invocation` - The program and arguments to run.
    ///
    /// # Returns
    /// * `AppResult<ProcessOutput>` - Exit success and captured error text,
    ///   or an `AppErrors` variant if the program could not be started.
    fn run(&self, invocation: &CommandInvocation) -> AppResult<ProcessOutput>;

    /// Whether invocations are only logged rather than run.
    fn is_dry_run(&self) -> bool {
        false
    }
}
