use enerclang::config::{Config, ConfigError, RuleConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Test that Config::default() reproduces the installed layout.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.toolchain.root.is_none());
    assert_eq!(config.toolchain.compiler, PathBuf::from("build/built/bin/clang"));
    assert_eq!(
        config.plugins.type_checker,
        PathBuf::from("build/enerc/bin/EnerCTypeChecker")
    );
    assert_eq!(config.plugins.type_checker_name, "enerc-type-checker");
    assert_eq!(config.plugins.pass, PathBuf::from("build/built/lib/enerc"));
    assert_eq!(config.include.dir, PathBuf::from("include"));
    assert!(config.rules.is_empty());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("enerclang/config.toml"));
}

#[test]
fn test_empty_file_gives_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.include.dir, PathBuf::from("include"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[toolchain]
root = "/opt/accept"

[plugins]
pass = "lib/ACCEPTPass"

[[rules]]
prefix = "-enerc-"
carrier = "-mllvm"
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.toolchain.root, Some(PathBuf::from("/opt/accept")));
    assert_eq!(config.toolchain.compiler, PathBuf::from("build/built/bin/clang"));
    assert_eq!(config.plugins.pass, PathBuf::from("lib/ACCEPTPass"));
    assert_eq!(config.plugins.type_checker_name, "enerc-type-checker");
    assert_eq!(
        config.rules,
        vec![RuleConfig {
            prefix: "-enerc-".to_string(),
            carrier: "-mllvm".to_string()
        }]
    );

    let layout = config.layout(Path::new("/opt/accept"));
    assert_eq!(layout.pass, PathBuf::from("/opt/accept/lib/ACCEPTPass"));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let (_dir, path) = write_config("[toolchain\nroot = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_empty_plugin_name() {
    let (_dir, path) = write_config("[plugins]\ntype_checker_name = \"  \"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("type_checker_name"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_bad_rules() {
    for (prefix, carrier) in [("accept-", "-mllvm"), ("-", "-mllvm"), ("-x-", "")] {
        let mut config = Config::default();
        config.rules.push(RuleConfig {
            prefix: prefix.to_string(),
            carrier: carrier.to_string(),
        });
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "rule {prefix:?}/{carrier:?} should be rejected"
        );
    }
}

#[test]
fn test_load_or_default_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(&dir.path().join("config.toml"));
    assert!(config.toolchain.root.is_none());
}

#[test]
fn test_load_or_default_ignores_broken_file() {
    for content in ["[plugins", "[plugins]\ntype_checker_name = \"\"\n"] {
        let (_dir, path) = write_config(content);
        let config = Config::load_or_default(&path);
        assert_eq!(config.plugins.type_checker_name, "enerc-type-checker", "{content:?}");
    }
}

#[test]
fn test_load_or_default_uses_valid_file() {
    let (_dir, path) = write_config("[include]\ndir = \"share/enerc\"\n");
    let config = Config::load_or_default(&path);
    assert_eq!(config.include.dir, PathBuf::from("share/enerc"));
}
