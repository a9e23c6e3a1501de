//! Unit tests for daemon argument parsing.

use super::{DaemonError, parse_args};
use rstest::rstest;
use std::path::PathBuf;

fn args(values: &[&str]) -> impl Iterator<Item = String> {
    std::iter::once("crosspostd".to_owned())
        .chain(values.iter().map(|value| (*value).to_owned()))
        .collect::<Vec<_>>()
        .into_iter()
}

#[rstest]
fn no_arguments_use_default_config_lookup() {
    let parsed = parse_args(args(&[])).expect("parses");

    assert_eq!(parsed, None);
}

#[rstest]
fn config_flag_names_the_file() {
    let parsed = parse_args(args(&["--config", "/etc/crosspost.toml"])).expect("parses");

    assert_eq!(parsed, Some(PathBuf::from("/etc/crosspost.toml")));
}

#[rstest]
#[case(&["--config"])]
#[case(&["--verbose"])]
#[case(&["--config", "a.toml", "extra"])]
fn malformed_arguments_are_rejected(#[case] values: &[&str]) {
    let result = parse_args(args(values));

    assert!(matches!(result, Err(DaemonError::InvalidArgs(_))));
}
