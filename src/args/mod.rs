//! Argument handling pipeline for enerclang.
//!
//! ```text
//! Invocation → Classify → Assemble (+ fixed plugin/include flags) → FinalCommand
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.

mod assembler;
mod classifier;
mod command;
mod pipeline;
mod registry;

pub use assembler::{CommandAssembler, FixedFlags};
pub use classifier::{classify, classify_one, translate_argument, ClassifiedArg};
pub use command::FinalCommand;
pub use pipeline::build_command;
pub use registry::{rule_registry, ArgumentRule, MLLVM};
