extern crate uniform_clt as clt;

use clt::io::{find_config_files, ConfigError, ConfigRepr, ExperimentConfig};
use clt::CltError;
use std::fs::write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn load_yaml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("experiment.yaml");
    write(
        &path,
        r#"
experiment:
  n: 15
  m: 2000
  seed: 999
output:
  directory: "test_outputs"
"#,
    )
    .unwrap();

    let cfg = ExperimentConfig::load(&path).unwrap();
    assert_eq!(cfg.experiment.n, 15);
    assert_eq!(cfg.experiment.m, 2000);
    assert_eq!(cfg.experiment.seed, 999);
    assert_eq!(cfg.output.directory, PathBuf::from("test_outputs"));

    let params = cfg.parameters().unwrap();
    assert_eq!(params.n(), 15);
    assert_eq!(params.m(), 2000);
    assert_eq!(params.base_seed(), 999);
}

#[test]
fn invalid_parameters_are_rejected() {
    let cfg = ExperimentConfig::loads(
        "experiment:\n  n: 3\n  m: 0\n  seed: 1\noutput:\n  directory: out\n",
    )
    .unwrap();
    assert!(matches!(cfg.parameters(), Err(CltError::NoTrials)));

    let cfg = ExperimentConfig::loads(
        "experiment:\n  n: 0\n  m: 10\n  seed: 1\noutput:\n  directory: out\n",
    )
    .unwrap();
    assert!(matches!(cfg.parameters(), Err(CltError::NoVariables)));
}

#[test]
fn malformed_yaml() {
    // Negative counts cannot be represented
    let err = ExperimentConfig::loads(
        "experiment:\n  n: -3\n  m: 10\n  seed: 1\noutput:\n  directory: out\n",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));

    let err = ExperimentConfig::loads("experiment:\n  n: 3\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn missing_file() {
    let err = ExperimentConfig::load("/nonexistent/directory/experiment.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn find_yaml_files() {
    let dir = tempdir().unwrap();
    write(dir.path().join("config2.yml"), "test: 2").unwrap();
    write(dir.path().join("config1.yaml"), "test: 1").unwrap();
    write(dir.path().join("not_config.txt"), "test: 3").unwrap();

    let found = find_config_files(dir.path());
    let names = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<String>>();
    assert_eq!(names, vec!["config1.yaml", "config2.yml"]);
}

#[test]
fn empty_directory() {
    let dir = tempdir().unwrap();
    assert!(find_config_files(dir.path()).is_empty());
}

#[test]
fn nonexistent_directory() {
    assert!(find_config_files(Path::new("/nonexistent/directory")).is_empty());
}
