//! Argument assembler — all injected flags in one place.

use std::ffi::OsString;
use std::path::Path;

use crate::args::classifier::ClassifiedArg;
use crate::args::command::FinalCommand;
use crate::config::InstallLayout;
use crate::toolchain::{LibraryExtension, ToolchainSelection};

/// Plugin-loading and include flags injected ahead of user arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedFlags {
    args: Vec<OsString>,
}

impl FixedFlags {
    /// Flags for `layout` with plugin libraries named for `ext`.
    ///
    /// ```text
    /// -Xclang -load -Xclang <type_checker>.<ext> -Xclang -add-plugin -Xclang <name>
    /// -Xclang -load -Xclang <pass>.<ext>
    /// -I <include_dir>
    /// ```
    pub fn for_layout(layout: &InstallLayout, ext: LibraryExtension) -> Self {
        let mut args = Vec::new();
        push_load(&mut args, &ext.apply(&layout.type_checker));
        push_xclang(&mut args, "-add-plugin");
        push_xclang(&mut args, &layout.type_checker_name);
        push_load(&mut args, &ext.apply(&layout.pass));
        args.push("-I".into());
        args.push(layout.include_dir.as_os_str().to_owned());
        Self { args }
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.args
    }
}

fn push_xclang(args: &mut Vec<OsString>, value: impl Into<OsString>) {
    args.push("-Xclang".into());
    args.push(value.into());
}

fn push_load(args: &mut Vec<OsString>, library: &Path) {
    push_xclang(args, "-load");
    push_xclang(args, library.as_os_str());
}

/// Builder for the final compiler command line.
#[derive(Debug, Clone)]
pub struct CommandAssembler {
    program: std::path::PathBuf,
    args: Vec<OsString>,
}

impl CommandAssembler {
    /// Start with the selected compiler binary and no arguments.
    pub fn new(toolchain: &ToolchainSelection) -> Self {
        Self {
            program: toolchain.binary.clone(),
            args: Vec::new(),
        }
    }

    /// Plugin and include flags.
    pub fn with_fixed(mut self, fixed: &FixedFlags) -> Self {
        self.args.extend(fixed.as_slice().iter().cloned());
        self
    }

    /// User arguments, flattened in their original order.
    pub fn with_classified(mut self, classified: Vec<ClassifiedArg>) -> Self {
        self.args
            .extend(classified.into_iter().flat_map(ClassifiedArg::into_tokens));
        self
    }

    /// Build the final command.
    pub fn build(self) -> FinalCommand {
        FinalCommand {
            program: self.program,
            args: self.args,
        }
    }
}
