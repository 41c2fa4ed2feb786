use crate::cli::Cli;
use crate::models::policy::PolicyContext;
use std::path::PathBuf;

/// Settings for one run, resolved once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub csv_path: PathBuf,
    pub policy: PolicyContext,
    pub dry_run: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            csv_path: cli.csv_file,
            policy: PolicyContext::new(cli.firewall_policy, cli.global_policy),
            dry_run: cli.dry_run,
        }
    }
}
