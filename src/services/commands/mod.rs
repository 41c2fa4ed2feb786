pub mod dry_run_executor;
pub mod process_executor;
pub mod traits;
