//! Pipeline — ties all argument processing stages together.

use std::ffi::OsString;

use crate::args::assembler::{CommandAssembler, FixedFlags};
use crate::args::classifier::{classify, ClassifiedArg};
use crate::args::command::FinalCommand;
use crate::args::registry::ArgumentRule;
use crate::toolchain::ToolchainSelection;

/// Build the compiler command for one invocation.
///
/// Pure: binary, then `fixed`, then every user argument in order with
/// rule carriers inserted in front of the arguments they match.
pub fn build_command(
    invocation: &[OsString],
    toolchain: &ToolchainSelection,
    fixed: &FixedFlags,
    rules: &[ArgumentRule],
) -> FinalCommand {
    // Stage 1: Classify arguments
    let classified = classify(invocation, rules);

    for c in &classified {
        if let ClassifiedArg::Translated { carrier, arg } = c {
            tracing::debug!("{} -> {} {}", arg.to_string_lossy(), carrier, arg.to_string_lossy());
        }
    }

    // Stage 2: Assemble
    CommandAssembler::new(toolchain)
        .with_fixed(fixed)
        .with_classified(classified)
        .build()
}
