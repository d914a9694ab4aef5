//! Process execution — hand the assembled command to the compiler.

use std::convert::Infallible;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::args::FinalCommand;
use crate::error::DriverError;

/// Check that `path` is an executable regular file.
pub fn resolve_executable(path: &Path) -> Result<(), DriverError> {
    let not_found = || DriverError::ToolNotFound {
        path: path.to_path_buf(),
    };

    let meta = std::fs::metadata(path).map_err(|_| not_found())?;
    if !meta.is_file() {
        return Err(not_found());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if meta.permissions().mode() & 0o111 == 0 {
            return Err(not_found());
        }
    }

    Ok(())
}

/// Run the compiler. Returns only on failure.
///
/// On Unix the driver process image is replaced, so signals, process
/// group and exit status belong to the compiler directly. Elsewhere the
/// compiler is spawned and its exit code becomes ours.
pub fn execute(command: &FinalCommand) -> Result<Infallible, DriverError> {
    if let Err(e) = resolve_executable(&command.program) {
        tracing::debug!("resolution failed: {}", e);
        return Err(e);
    }

    tracing::debug!("exec {}", command.render());

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args);

    Err(exec_error(&command.program, run(cmd)))
}

#[cfg(unix)]
fn run(mut cmd: Command) -> io::Error {
    use std::os::unix::process::CommandExt;
    cmd.exec()
}

#[cfg(not(unix))]
fn run(mut cmd: Command) -> io::Error {
    match cmd.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) => e,
    }
}

fn exec_error(path: &Path, source: io::Error) -> DriverError {
    if source.kind() == io::ErrorKind::NotFound {
        DriverError::ToolNotFound {
            path: path.to_path_buf(),
        }
    } else {
        DriverError::ExecFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}
