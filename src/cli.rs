use crate::consts::{DEFAULT_CSV_FILE, DEFAULT_FIREWALL_POLICY};
use clap::Parser;
use std::path::PathBuf;

/// Create gcloud network firewall policy rules from a CSV file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV file with one rule per row
    #[arg(default_value = DEFAULT_CSV_FILE)]
    pub csv_file: PathBuf,

    /// Name of the firewall policy the rules are created under
    #[arg(default_value = DEFAULT_FIREWALL_POLICY)]
    pub firewall_policy: String,

    /// Treat the policy as a global firewall policy
    #[arg(long, alias = "global_policy")]
    pub global_policy: bool,

    /// Print the gcloud commands without running them
    #[arg(long)]
    pub dry_run: bool,
}
