//! Tests for the command-line surface and error-to-exit-code mapping

use std::str::FromStr;

use clap::{CommandFactory, Parser};
use rust_decimal::Decimal;

use foursix::application::ApplicationError;
use foursix::cli::{Cli, CliError, OutputFormat};
use foursix::domain::{ConfigError, DomainError};
use foursix::exitcode;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("foursix").chain(args.iter().copied()))
}

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn given_long_flags_when_parsing_then_builds_brew_input() {
    // Act
    let cli = parse(&[
        "--ratio",
        "16",
        "--coffee-g",
        "18.5",
        "--pour-time",
        "45",
        "--ratio40",
        "0.4",
        "--pours60",
        "2",
    ])
    .unwrap();
    let input = cli.brew_input();

    // Assert
    assert_eq!(input.ratio, Some(16));
    assert_eq!(input.coffee_g, Some(Decimal::from_str("18.5").unwrap()));
    assert_eq!(input.water_g, None);
    assert_eq!(input.pour_time, 45);
    assert_eq!(input.ratio40, Some(Decimal::from_str("0.4").unwrap()));
    assert_eq!(input.pours60, Some(2));
    assert!(!input.ratio_override);
    assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn given_short_flags_when_parsing_then_builds_brew_input() {
    let cli = parse(&["-W", "300", "-P", "40", "-R", "?/80", "-p", "3", "-f", "json"]).unwrap();
    let input = cli.brew_input();

    assert_eq!(input.water_g, Some(Decimal::from(300)));
    assert_eq!(input.ratio40_raw.as_deref(), Some("?/80"));
    assert_eq!(input.pours60, Some(3));
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn given_missing_pour_time_when_parsing_then_fails() {
    assert!(parse(&["-C", "20"]).is_err());
}

#[test]
fn given_completion_when_parsing_then_pour_time_not_required() {
    let cli = parse(&["--completion", "bash"]).unwrap();

    assert!(cli.completion.is_some());
}

#[test]
fn given_debug_flags_when_parsing_then_counts_them() {
    let cli = parse(&["-C", "20", "-P", "45", "-dd"]).unwrap();

    assert_eq!(cli.debug, 2);
}

#[test]
fn given_non_decimal_mass_when_parsing_then_fails() {
    assert!(parse(&["-C", "twenty", "-P", "45"]).is_err());
}

#[test]
fn given_errors_when_mapping_then_uses_sysexits_codes() {
    let config: CliError = ApplicationError::from(ConfigError::AmountRequired).into();
    let unimplemented: CliError =
        ApplicationError::Domain(DomainError::Unimplemented("override")).into();
    let settings: CliError = ApplicationError::Settings {
        message: "bad".into(),
    }
    .into();

    assert_eq!(config.exit_code(), exitcode::USAGE);
    assert_eq!(unimplemented.exit_code(), exitcode::SOFTWARE);
    assert_eq!(settings.exit_code(), exitcode::CONFIG);
    assert!(config.to_string().contains("amount required"));
}
