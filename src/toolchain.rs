//! Toolchain selection — invoked name + platform id → binary and library suffix.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Invocation-name suffix that selects the C++ compiler.
pub const VARIANT_SUFFIX: &str = "++";

/// Shared-library naming convention of the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryExtension {
    So,
    Dylib,
}

impl LibraryExtension {
    pub fn for_platform(platform_id: &str) -> Self {
        if platform_id == "Darwin" {
            Self::Dylib
        } else {
            Self::So
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::So => "so",
            Self::Dylib => "dylib",
        }
    }

    /// `path` with `.<ext>` appended. Existing dots in the file name are kept.
    pub fn apply(self, path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(self.as_str());
        PathBuf::from(name)
    }
}

impl fmt::Display for LibraryExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The binary/library-extension pair chosen for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainSelection {
    pub binary: PathBuf,
    pub lib_ext: LibraryExtension,
}

/// Choose the compiler binary and library extension.
///
/// Total: an unrecognized name selects `base_binary`, an unrecognized
/// platform selects `so`.
pub fn select_toolchain(
    invoked_name: &OsStr,
    platform_id: &str,
    base_binary: &Path,
) -> ToolchainSelection {
    let binary = if is_variant_name(invoked_name) {
        let mut variant: OsString = base_binary.as_os_str().to_owned();
        variant.push(VARIANT_SUFFIX);
        PathBuf::from(variant)
    } else {
        base_binary.to_path_buf()
    };

    ToolchainSelection {
        binary,
        lib_ext: LibraryExtension::for_platform(platform_id),
    }
}

fn is_variant_name(invoked_name: &OsStr) -> bool {
    Path::new(invoked_name)
        .file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(VARIANT_SUFFIX.as_bytes()))
}

/// Kernel name of the running system, as `uname -s` reports it.
#[cfg(unix)]
pub fn platform_id() -> String {
    use std::ffi::CStr;

    // SAFETY: utsname is plain old data; uname fills it with NUL-terminated fields.
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        tracing::warn!("uname failed, falling back to compile-time platform");
        return fallback_platform_id().to_string();
    }
    let sysname = unsafe { CStr::from_ptr(uts.sysname.as_ptr()) };
    sysname.to_string_lossy().into_owned()
}

#[cfg(not(unix))]
pub fn platform_id() -> String {
    fallback_platform_id().to_string()
}

fn fallback_platform_id() -> &'static str {
    match std::env::consts::OS {
        "macos" => "Darwin",
        "linux" => "Linux",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_detection_uses_file_name_only() {
        assert!(is_variant_name(OsStr::new("/usr/local/bin/enerclang++")));
        assert!(is_variant_name(OsStr::new("enerclang++")));
        assert!(!is_variant_name(OsStr::new("/opt/c++/bin/enerclang")));
        assert!(!is_variant_name(OsStr::new("")));
    }

    #[test]
    fn apply_keeps_dots_in_name() {
        let path = LibraryExtension::So.apply(Path::new("/lib/libEnerC.1"));
        assert_eq!(path, PathBuf::from("/lib/libEnerC.1.so"));
    }

    #[test]
    fn platform_id_is_not_empty() {
        assert!(!platform_id().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn platform_id_on_linux() {
        assert_eq!(platform_id(), "Linux");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn platform_id_on_macos() {
        assert_eq!(platform_id(), "Darwin");
    }
}
