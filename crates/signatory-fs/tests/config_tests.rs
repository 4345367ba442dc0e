use signatory_fs::ProjectConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_load_project_config_toml() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".signatory.toml"),
        r#"algorithm = "sha512"
scm = "directory"
checksum_file = "CHECKSUMS"
exclude = ["build/output.bin"]
"#,
    )
    .unwrap();

    let config = ProjectConfig::load(temp.path()).unwrap().unwrap();
    assert_eq!(config.algorithm.as_deref(), Some("sha512"));
    assert_eq!(config.scm.as_deref(), Some("directory"));
    assert_eq!(config.checksum_file, Some(PathBuf::from("CHECKSUMS")));
    assert_eq!(config.exclude, vec!["build/output.bin".to_string()]);
}

#[test]
fn test_missing_project_config_is_none() {
    let temp = TempDir::new().unwrap();
    assert!(ProjectConfig::load(temp.path()).unwrap().is_none());
}

#[test]
fn test_partial_project_config_uses_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".signatory.toml"), "scm = \"git\"\n").unwrap();

    let config = ProjectConfig::load(temp.path()).unwrap().unwrap();
    assert_eq!(config.scm.as_deref(), Some("git"));
    assert!(config.algorithm.is_none());
    assert!(config.exclude.is_empty());
}

#[test]
fn test_unknown_key_is_parse_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".signatory.toml"), "hash = \"sha256\"\n").unwrap();

    let err = ProjectConfig::load(temp.path()).unwrap_err();
    assert!(matches!(err, signatory_fs::Error::ConfigParse { .. }));
}

#[test]
fn test_parse_error_names_file() {
    let path = PathBuf::from("collection/.signatory.toml");
    let err = ProjectConfig::from_toml(&path, "algorithm = [").unwrap_err();

    match err {
        signatory_fs::Error::ConfigParse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn test_exclude_must_be_a_list() {
    let err = ProjectConfig::from_toml(Path::new(".signatory.toml"), "exclude = \"a.txt\"\n");
    assert!(err.is_err());
}
