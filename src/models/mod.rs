pub mod csv_models;
pub mod invocation;
pub mod policy;
