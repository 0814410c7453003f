use defaultgen::ui::{cli::Cli, config::build_config_builder};
use defaultgen::engine::{blob::DEFAULT_BLOB, config::DEFAULT_OUTPUT_FILE, config_file::ConfigFile};
use defaultgen::{GenConfigBuilder, GenSession, KeyStrategy};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = GenConfigBuilder::default().build().unwrap();
    assert_eq!(config.input, None);
    assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
    assert_eq!(config.strategy, KeyStrategy::Line);
    assert!(config.echo_stdout);
}

#[test]
fn test_builtin_blob_generates_all_vouchers() {
    let mut session = GenSession::from_builder(GenConfigBuilder::default()).unwrap();
    let rendered = session.generate().unwrap();
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(session.record_count, 32);
    assert_eq!(lines.len(), DEFAULT_BLOB.lines().count());
    assert_eq!(lines[0], r#"("v_blank", false, false, false),"#);
    assert_eq!(lines[31], r#"("v_money_tree", false, false, false),"#);
    assert!(!rendered.ends_with('\n'));
}

#[test]
fn test_quoted_without_input_is_an_error() {
    let mut builder = GenConfigBuilder::default();
    builder.strategy(KeyStrategy::Quoted);
    let mut session = GenSession::from_builder(builder).unwrap();
    let err = session.generate().unwrap_err();
    assert!(err.to_string().contains("--input"));
}

#[test]
fn test_missing_input_file_is_an_error() {
    let dir = tempdir().unwrap();
    let mut builder = GenConfigBuilder::default();
    builder.input(Some(dir.path().join("missing.txt")));
    let mut session = GenSession::from_builder(builder).unwrap();
    let err = session.generate().unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_input_file_with_quoted_strategy() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("defaults.rs");
    std::fs::write(&input, r#"("j_joker", true, true, true),"#).unwrap();

    let mut builder = GenConfigBuilder::default();
    builder.input(Some(input)).strategy(KeyStrategy::Quoted);
    let mut session = GenSession::from_builder(builder).unwrap();
    assert_eq!(
        session.generate().unwrap(),
        r#"("j_joker", false, false, false),"#
    );
}

#[test]
fn test_cli_overrides_config_file() {
    let cfg_file = ConfigFile {
        output_file: Some(PathBuf::from("from_config.txt")),
        strategy: Some(KeyStrategy::Quoted),
    };
    let args = Cli {
        output_file: Some(PathBuf::from("from_cli.txt")),
        ..Cli::default()
    };
    let config = build_config_builder(&args, &cfg_file).build().unwrap();
    assert_eq!(config.output_file, PathBuf::from("from_cli.txt"));
    assert_eq!(config.strategy, KeyStrategy::Quoted);
}

#[test]
fn test_config_file_overrides_defaults() {
    let cfg_file = ConfigFile {
        output_file: Some(PathBuf::from("from_config.txt")),
        strategy: None,
    };
    let args = Cli {
        no_stdout: true,
        ..Cli::default()
    };
    let config = build_config_builder(&args, &cfg_file).build().unwrap();
    assert_eq!(config.output_file, PathBuf::from("from_config.txt"));
    assert_eq!(config.strategy, KeyStrategy::Line);
    assert!(!config.echo_stdout);
}
