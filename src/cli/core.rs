use crate::cli;
use ipdupcheck::{Client, ClientConfig, DuplicateChecker, Result, Scanner};
use log::info;
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Read the configuration file
--------------------------------------------------------------------------------------*/

pub fn read_configuration(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|error| format!("Unable to read configuration file {:?}: {}", path, error).into())
}

/*--------------------------------------------------------------------------------------
  Build the controller client configuration from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_client_config(args: &cli::Args) -> ClientConfig {
    let mut config = ClientConfig::new();

    if let Some(url) = &args.url {
        config.url(url);
    }
    if let Some(username) = &args.username {
        config.username(username);
    }
    if let Some(password) = &args.password {
        config.password(password);
    }
    if args.insecure {
        config.accept_invalid_certs(true);
    }

    config
}

/*--------------------------------------------------------------------------------------
  Run the scan and duplicate check; returns `true` when a duplicate was found
--------------------------------------------------------------------------------------*/

pub fn run(args: &cli::Args) -> Result<bool> {
    let configuration = read_configuration(&args.config_file)?;

    let candidates = Scanner::default()
        .include_masks(!args.exclude_masks)
        .scan(&configuration);
    cli::log::candidates(&args.config_file, &candidates);
    cli::output::candidates(&candidates);

    if args.scan_only {
        return Ok(false);
    }

    if candidates.is_empty() {
        info!("No candidate addresses; skipping the inventory check");
        cli::output::verdict(false);
        return Ok(false);
    }

    let client = Client::connect(&build_client_config(args))?;
    let report = DuplicateChecker::new(&client).check(&candidates);
    cli::log::report(&report);

    if args.output == cli::OutputFormat::Table {
        cli::output::report_table(&report);
    }

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&report, csv_file)?;
        info!("Saved duplicate check results to {:?}", csv_file);
    }

    let duplicate = report.has_duplicates();
    cli::output::verdict(duplicate);

    Ok(duplicate)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use test_log::test;

    #[test]
    fn test_build_client_config_overrides() {
        let args = cli::Args::parse_from([
            "ipdupcheck",
            "--url",
            "https://10.93.140.80/api/v1",
            "--username",
            "admin",
            "--password",
            "secret",
            "--insecure",
            "router.cfg",
        ]);

        let config = build_client_config(&args);
        assert_eq!(config.get_url(), "https://10.93.140.80/api/v1");
        assert_eq!(config.get_username(), "admin");
        assert_eq!(config.get_password(), "secret");
        assert!(config.get_accept_invalid_certs());
    }

    #[test]
    fn test_read_configuration_missing_file() {
        let result = read_configuration(Path::new("./scratch/does-not-exist.cfg"));
        assert!(result.is_err());
    }
}
