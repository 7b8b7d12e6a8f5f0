pub mod age_config;
#[cfg(feature = "cli")]
pub mod cli;

pub use age_config::AgeConfig;
#[cfg(feature = "cli")]
pub use cli::CliConfig;
