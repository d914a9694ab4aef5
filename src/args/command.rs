//! The fully assembled compiler invocation.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Program plus ordered arguments, handed to process execution as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl FinalCommand {
    /// Full argv, program first.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.as_os_str().to_owned());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// One shell-quoted line, suitable for pasting into a terminal.
    pub fn render(&self) -> String {
        self.argv()
            .iter()
            .map(|t| shell_quote(t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(token: &OsStr) -> String {
    let s = token.to_string_lossy();
    let safe = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if safe {
        s.into_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
