use ipdupcheck::{CandidateAddress, DuplicateReport};
use log::{info, warn};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Candidate Addresses
--------------------------------------------------------------------------------------*/

pub fn candidates(config_file: &Path, candidates: &[CandidateAddress]) {
    let count_candidates = candidates.len();
    info!("Found {count_candidates} candidate address(es) in {config_file:?}");
}

/*--------------------------------------------------------------------------------------
  Duplicate Report
--------------------------------------------------------------------------------------*/

pub fn report(report: &DuplicateReport) {
    let count_checked = report.addresses.len();
    info!("Checked {count_checked} candidate address(es) against the inventory");

    let count_duplicates = report.duplicates().count();
    if count_duplicates > 0 {
        warn!("{count_duplicates} candidate address(es) already in use");
    };

    let count_failed = report.failed_lookups();
    if count_failed > 0 {
        warn!("{count_failed} inventory lookup(s) failed; the result may miss duplicates");
    };
}
