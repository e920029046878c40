use super::*;
use clap::Parser;

#[test]
fn run_parses_with_defaults() {
    let cli = Cli::try_parse_from(["spotwatch", "run"]).expect("parse");
    match cli.command {
        Commands::Run(RunArgs { dry_run }) => assert!(!dry_run),
        _ => panic!("expected run command"),
    }
}

#[test]
fn run_parses_dry_run_flag() {
    let cli = Cli::try_parse_from(["spotwatch", "run", "--dry-run"]).expect("parse");
    match cli.command {
        Commands::Run(RunArgs { dry_run }) => assert!(dry_run),
        _ => panic!("expected run command"),
    }
}

#[test]
fn check_takes_no_arguments() {
    let cli = Cli::try_parse_from(["spotwatch", "check"]).expect("parse");
    assert!(matches!(cli.command, Commands::Check));

    let parsed = Cli::try_parse_from(["spotwatch", "check", "--verbose"]);
    assert!(parsed.is_err(), "unknown flag must be rejected");
}

#[test]
fn band_parses_positional_frequency() {
    let cli = Cli::try_parse_from(["spotwatch", "band", "14074"]).expect("parse");
    match cli.command {
        Commands::Band(BandArgs { khz }) => assert_eq!(khz, "14074"),
        _ => panic!("expected band command"),
    }
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["spotwatch"]).is_err());
}
