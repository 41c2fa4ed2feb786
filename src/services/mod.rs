pub mod commands;
pub mod csv_service;
pub mod translator;
