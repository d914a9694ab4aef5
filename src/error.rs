//! Error types for the driver.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Exit status when the compiler cannot be found (shell convention).
pub const EXIT_NOT_FOUND: u8 = 127;
/// Exit status when the compiler exists but cannot be executed.
pub const EXIT_NOT_EXECUTABLE: u8 = 126;

/// Errors that stop the driver before the compiler runs.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Explicitly named config file could not be used
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Selected compiler binary is missing or not executable
    #[error("compiler not found or not executable: {}", path.display())]
    ToolNotFound { path: PathBuf },

    /// The OS refused to run a resolved compiler binary
    #[error("failed to execute '{}'", path.display())]
    ExecFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DriverError {
    /// Process exit status reported to whoever invoked the driver.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Config(_) => 1,
            DriverError::ToolNotFound { .. } => EXIT_NOT_FOUND,
            DriverError::ExecFailed { .. } => EXIT_NOT_EXECUTABLE,
        }
    }
}
