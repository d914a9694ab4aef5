use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toolchain: ToolchainConfig,
    #[serde(default)]
    pub plugins: PluginConfig,
    #[serde(default)]
    pub include: IncludeConfig,
    /// Extra argument rules, evaluated after the built-in ones.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Location of the underlying compiler.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolchainConfig {
    /// Installation root. When unset, derived from the driver's own location.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Base compiler binary. The C++ variant is this path with `++` appended.
    #[serde(default = "default_compiler")]
    pub compiler: PathBuf,
}

/// The two plugins loaded into every compilation.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginConfig {
    /// Type-checker plugin library, without the shared-library extension.
    #[serde(default = "default_type_checker")]
    pub type_checker: PathBuf,
    /// Plugin action name registered by the type checker (`-add-plugin`).
    #[serde(default = "default_type_checker_name")]
    pub type_checker_name: String,
    /// Compiler-pass plugin library, without the shared-library extension.
    #[serde(default = "default_pass")]
    pub pass: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncludeConfig {
    /// Directory injected with `-I`, holding the annotation headers.
    #[serde(default = "default_include_dir")]
    pub dir: PathBuf,
}

/// A user-supplied prefix rule (e.g. `prefix = "-enerc-"`, `carrier = "-mllvm"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleConfig {
    pub prefix: String,
    pub carrier: String,
}

fn default_compiler() -> PathBuf {
    PathBuf::from("build/built/bin/clang")
}

fn default_type_checker() -> PathBuf {
    PathBuf::from("build/enerc/bin/EnerCTypeChecker")
}

fn default_type_checker_name() -> String {
    "enerc-type-checker".to_string()
}

fn default_pass() -> PathBuf {
    PathBuf::from("build/built/lib/enerc")
}

fn default_include_dir() -> PathBuf {
    PathBuf::from("include")
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            root: None,
            compiler: default_compiler(),
        }
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            type_checker: default_type_checker(),
            type_checker_name: default_type_checker_name(),
            pass: default_pass(),
        }
    }
}

impl Default for IncludeConfig {
    fn default() -> Self {
        Self {
            dir: default_include_dir(),
        }
    }
}
