use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::{Context, Result};
use enerclang::config::{Config, ROOT_ENV_VAR};
use enerclang::driver::{dry_run_requested, DRY_RUN_ENV_VAR};
use enerclang::toolchain::platform_id;
use enerclang::{Driver, DriverError};

fn main() -> ExitCode {
    enerclang::logging::init_tracing();

    let mut argv = std::env::args_os();
    let invoked_name = argv.next().unwrap_or_else(|| OsString::from("enerclang"));
    let invocation: Vec<OsString> = argv.collect();

    match run(invoked_name, invocation) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("enerclang: error: {err:#}");
            let code = err
                .downcast_ref::<DriverError>()
                .map(DriverError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(invoked_name: OsString, invocation: Vec<OsString>) -> Result<ExitCode> {
    let config = Config::load().map_err(DriverError::from)?;
    let exe = std::env::current_exe().context("cannot locate the enerclang executable")?;
    let root = config.install_root(std::env::var_os(ROOT_ENV_VAR), &exe);
    let driver = Driver::new(&config, &root, platform_id());

    if dry_run_requested(std::env::var_os(DRY_RUN_ENV_VAR).as_deref()) {
        println!("{}", driver.command_for(&invoked_name, &invocation).render());
        return Ok(ExitCode::SUCCESS);
    }

    match driver.run(&invoked_name, &invocation)? {}
}
