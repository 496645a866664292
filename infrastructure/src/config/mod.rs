//! Configuration loading for rutobot
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. Recognized environment variables (`ENABLE_PARALLEL`, `TASK_TIMEOUT_SECONDS`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./rutobot.toml` or `./.rutobot.toml`
//! 4. Global: `$XDG_CONFIG_HOME/rutobot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAgentToggles, FileConfig, FileLoggingConfig, FileModelsConfig,
    FileParallelConfig, FileProviderConfig, FileRoutingConfig,
};
pub use loader::{ConfigLoader, ENV_KEYS};
