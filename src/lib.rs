//! enerclang: clang front-end driver for the EnerC/ACCEPT toolchain.
//!
//! Loads the type-checker and pass plugins into clang, injects the
//! annotation include directory, and forwards `-accept-*` flags to LLVM.

pub mod args;
pub mod config;
pub mod driver;
pub mod error;
pub mod exec;
pub mod logging;
pub mod toolchain;

pub use driver::Driver;
pub use error::DriverError;
