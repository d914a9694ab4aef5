//! Installation layout — config paths resolved against the install root.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::types::Config;

/// Environment variable overriding the installation root.
pub const ROOT_ENV_VAR: &str = "ENERCLANG_ROOT";

/// Concrete paths for one installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    /// Base compiler binary.
    pub compiler: PathBuf,
    /// Type-checker plugin, extension not yet applied.
    pub type_checker: PathBuf,
    pub type_checker_name: String,
    /// Compiler-pass plugin, extension not yet applied.
    pub pass: PathBuf,
    pub include_dir: PathBuf,
}

impl Config {
    /// Pick the installation root.
    ///
    /// `ENERCLANG_ROOT` wins over `toolchain.root`; otherwise the root is
    /// the parent of the directory holding the driver (`<root>/bin/enerclang`).
    /// Empty values count as unset, so the compiler path always keeps a
    /// directory component and is never looked up on `PATH`.
    pub fn install_root(&self, env_root: Option<OsString>, exe: &Path) -> PathBuf {
        env_root
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                self.toolchain
                    .root
                    .clone()
                    .filter(|p| !p.as_os_str().is_empty())
            })
            .unwrap_or_else(|| root_for_exe(exe))
    }

    /// Resolve every configured path against `root`.
    pub fn layout(&self, root: &Path) -> InstallLayout {
        InstallLayout {
            compiler: root.join(&self.toolchain.compiler),
            type_checker: root.join(&self.plugins.type_checker),
            type_checker_name: self.plugins.type_checker_name.clone(),
            pass: root.join(&self.plugins.pass),
            include_dir: root.join(&self.include.dir),
        }
    }
}

fn root_for_exe(exe: &Path) -> PathBuf {
    exe.parent()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_defaults_to_grandparent_of_exe() {
        let config = Config::default();
        let root = config.install_root(None, Path::new("/opt/accept/bin/enerclang"));
        assert_eq!(root, PathBuf::from("/opt/accept"));
    }

    #[test]
    fn bare_exe_name_falls_back_to_parent_dir() {
        let config = Config::default();
        let root = config.install_root(None, Path::new("enerclang"));
        assert_eq!(root, PathBuf::from(".."));
    }

    #[test]
    fn env_root_overrides_config_root() {
        let mut config = Config::default();
        config.toolchain.root = Some(PathBuf::from("/from/config"));

        let root = config.install_root(Some("/from/env".into()), Path::new("/x/bin/enerclang"));
        assert_eq!(root, PathBuf::from("/from/env"));

        let root = config.install_root(Some("".into()), Path::new("/x/bin/enerclang"));
        assert_eq!(root, PathBuf::from("/from/config"));
    }

    #[test]
    fn empty_config_root_is_ignored() {
        let mut config = Config::default();
        config.toolchain.root = Some(PathBuf::new());
        config.toolchain.compiler = PathBuf::from("clang");

        let root = config.install_root(None, Path::new("/opt/accept/bin/enerclang"));
        assert_eq!(root, PathBuf::from("/opt/accept"));
        assert_eq!(config.layout(&root).compiler, PathBuf::from("/opt/accept/clang"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let mut config = Config::default();
        config.toolchain.compiler = PathBuf::from("/usr/bin/clang");

        let layout = config.layout(Path::new("/opt/accept"));
        assert_eq!(layout.compiler, PathBuf::from("/usr/bin/clang"));
        assert_eq!(layout.include_dir, PathBuf::from("/opt/accept/include"));
        assert_eq!(
            layout.type_checker,
            PathBuf::from("/opt/accept/build/enerc/bin/EnerCTypeChecker")
        );
    }
}
