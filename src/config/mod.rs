#[cfg(feature = "cli")]
pub mod cli;
pub mod drill_config;
pub mod presets;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
