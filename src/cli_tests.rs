use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn parse_directory_only() {
    let cli = Cli::try_parse_from(["dirlines", "src"]).unwrap();

    assert_eq!(cli.dir, PathBuf::from("src"));
    assert!(cli.ext.is_none());
    assert!(!cli.omit_blank);
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.color, ColorChoice::Auto);
}

#[test]
fn parse_comma_separated_extensions() {
    let cli = Cli::try_parse_from(["dirlines", ".", "--ext", "go,rs,ts"]).unwrap();

    assert_eq!(
        cli.accepted_extensions(),
        Some(&["go".to_string(), "rs".to_string(), "ts".to_string()][..])
    );
}

#[test]
fn parse_omit_blank() {
    let cli = Cli::try_parse_from(["dirlines", "--omit-blank", "."]).unwrap();

    assert!(cli.omit_blank);
}

#[test]
fn empty_ext_means_no_filter() {
    let cli = Cli::try_parse_from(["dirlines", ".", "--ext", ""]).unwrap();

    assert!(cli.accepted_extensions().is_none());
}

#[test]
fn empty_directory_parses_for_later_validation() {
    let cli = Cli::try_parse_from(["dirlines", ""]).unwrap();

    assert!(cli.dir.as_os_str().is_empty());
}

#[test]
fn missing_directory_is_an_error() {
    assert!(Cli::try_parse_from(["dirlines"]).is_err());
}

#[test]
fn parse_json_format() {
    let cli = Cli::try_parse_from(["dirlines", ".", "-f", "json"]).unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn invalid_format_is_rejected() {
    assert!(Cli::try_parse_from(["dirlines", ".", "--format", "yaml"]).is_err());
}

#[test]
fn verbose_counts() {
    let cli = Cli::try_parse_from(["dirlines", ".", "-vv"]).unwrap();

    assert_eq!(cli.verbose, 2);
}

#[test]
fn quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["dirlines", ".", "-q", "-v"]).is_err());
}
