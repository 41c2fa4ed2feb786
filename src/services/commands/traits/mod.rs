pub mod command_executor_trait;
