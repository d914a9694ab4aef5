//! Driver — one invocation in, one compiler invocation out.
//!
//! Everything that depends on the environment (install root, platform,
//! config file) is resolved once in [`Driver::new`]; the rest is pure.

use std::convert::Infallible;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::args::{build_command, rule_registry, ArgumentRule, FinalCommand, FixedFlags};
use crate::config::{Config, InstallLayout};
use crate::error::DriverError;
use crate::exec;
use crate::toolchain::select_toolchain;

/// Environment variable that switches on dry-run printing.
pub const DRY_RUN_ENV_VAR: &str = "ENERCLANG_DRY_RUN";

#[derive(Debug, Clone)]
pub struct Driver {
    layout: InstallLayout,
    rules: Vec<ArgumentRule>,
    platform_id: String,
}

impl Driver {
    pub fn new(config: &Config, root: &Path, platform_id: impl Into<String>) -> Self {
        let layout = config.layout(root);
        let platform_id = platform_id.into();
        tracing::debug!(
            "install root {}, platform {}, compiler {}",
            root.display(),
            platform_id,
            layout.compiler.display()
        );
        Self {
            layout,
            rules: rule_registry(&config.rules),
            platform_id,
        }
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    pub fn rules(&self) -> &[ArgumentRule] {
        &self.rules
    }

    /// Assemble the compiler command for `invocation` under `invoked_name`.
    pub fn command_for(&self, invoked_name: &OsStr, invocation: &[OsString]) -> FinalCommand {
        let toolchain = select_toolchain(invoked_name, &self.platform_id, &self.layout.compiler);
        tracing::debug!(
            "selected {} ({})",
            toolchain.binary.display(),
            toolchain.lib_ext
        );
        let fixed = FixedFlags::for_layout(&self.layout, toolchain.lib_ext);
        build_command(invocation, &toolchain, &fixed, &self.rules)
    }

    /// Assemble and execute. Returns only if the compiler could not be started.
    pub fn run(&self, invoked_name: &OsStr, invocation: &[OsString]) -> Result<Infallible, DriverError> {
        let command = self.command_for(invoked_name, invocation);
        exec::execute(&command)
    }
}

/// True when `value` of `ENERCLANG_DRY_RUN` asks for a dry run.
pub fn dry_run_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v != "0")
}
