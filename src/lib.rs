pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::drill_config::DrillConfig;
pub use core::{engine::SessionEngine, generator::ProblemGenerator, watcher::InputWatcher};
pub use utils::error::{Result, TrainerError};
