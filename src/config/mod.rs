//! Driver configuration: built-in ACCEPT layout, optional TOML overrides,
//! and the `ENERCLANG_ROOT` environment override.

mod layout;
mod loader;
mod types;

pub use layout::{InstallLayout, ROOT_ENV_VAR};
pub use loader::{ConfigError, CONFIG_ENV_VAR};
pub use types::{Config, IncludeConfig, PluginConfig, RuleConfig, ToolchainConfig};
