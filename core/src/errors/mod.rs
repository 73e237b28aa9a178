pub mod algorithm_error;
pub mod cli_error;
pub mod config_error;
pub mod menu_error;

pub use algorithm_error::AlgorithmError;
pub use cli_error::CliError;
pub use config_error::ConfigError;
pub use menu_error::MenuError;
