use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about="Check a device configuration for IPv4 address conflicts.", long_about = None)]
pub struct Args {
    /// Device configuration file to check
    pub config_file: PathBuf,

    /// List the candidate addresses without querying the inventory
    #[arg(long)]
    pub scan_only: bool,

    /// Do not report network masks as candidate addresses
    #[arg(long)]
    pub exclude_masks: bool,

    /// Controller API base URL (default: $IPDUPCHECK_URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Controller username (default: $IPDUPCHECK_USERNAME)
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Controller password (default: $IPDUPCHECK_PASSWORD)
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Accept invalid (self-signed) controller TLS certificates
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Output format for the duplicate check results
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Save the duplicate check results to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Table of inventory lookup results per address
    Table,

    /// Candidate addresses and verdict only
    List,
}
