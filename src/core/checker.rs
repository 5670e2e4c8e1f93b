use crate::core::candidate::CandidateAddress;
use crate::core::inventory::{Inventory, InventoryQueryResult, Location};
use log::{debug, info, warn};
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// Returns `true` when any candidate address is already configured on a device
/// interface or used by a host, according to `inventory`.
///
/// Lookup failures never abort the check; a failed lookup counts as "not
/// found" for that address and the remaining lookups still run.
pub fn check_duplicates<I: Inventory + ?Sized>(
    candidates: &[CandidateAddress],
    inventory: &I,
) -> bool {
    DuplicateChecker::new(inventory).has_duplicates(candidates)
}

/*-------------------------------------------------------------------------------------------------
  Lookup Outcome
-------------------------------------------------------------------------------------------------*/

/// Outcome of a single inventory lookup, keeping lookup failures distinct from
/// a negative answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LookupOutcome {
    Found(Location),
    NotFound,
    LookupError(String),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LookupOutcome::LookupError(_))
    }

    /// The outcome as seen by the aggregate check: lookup errors are folded
    /// into `NotFound`.
    pub fn as_query_result(&self) -> InventoryQueryResult {
        match self {
            LookupOutcome::Found(location) => InventoryQueryResult::Found(location.clone()),
            LookupOutcome::NotFound | LookupOutcome::LookupError(_) => {
                InventoryQueryResult::NotFound
            }
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found(location) => write!(f, "{location}"),
            LookupOutcome::NotFound => f.write_str("not found"),
            LookupOutcome::LookupError(error) => write!(f, "lookup failed: {error}"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Duplicate Report
-------------------------------------------------------------------------------------------------*/

/// Lookup outcomes for one candidate address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressReport {
    pub candidate: CandidateAddress,
    pub interface: LookupOutcome,
    pub host: LookupOutcome,
}

impl AddressReport {
    pub fn is_duplicate(&self) -> bool {
        self.interface.is_found() || self.host.is_found()
    }
}

/// Per-candidate outcomes of a duplicate check, in candidate order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DuplicateReport {
    pub addresses: Vec<AddressReport>,
}

impl DuplicateReport {
    /// `true` when any candidate was found by either lookup.
    pub fn has_duplicates(&self) -> bool {
        self.addresses.iter().any(AddressReport::is_duplicate)
    }

    /// Candidates found in use.
    pub fn duplicates(&self) -> impl Iterator<Item = &AddressReport> {
        self.addresses.iter().filter(|report| report.is_duplicate())
    }

    /// Number of lookups that failed and were counted as not found.
    pub fn failed_lookups(&self) -> usize {
        self.addresses
            .iter()
            .map(|report| report.interface.is_error() as usize + report.host.is_error() as usize)
            .sum()
    }
}

/*-------------------------------------------------------------------------------------------------
  Duplicate Checker
-------------------------------------------------------------------------------------------------*/

/// Checks candidate addresses against an [Inventory], one interface lookup and
/// one host lookup per candidate, sequentially.
#[derive(Debug)]
pub struct DuplicateChecker<'i, I: ?Sized> {
    inventory: &'i I,
}

impl<'i, I: Inventory + ?Sized> DuplicateChecker<'i, I> {
    pub fn new(inventory: &'i I) -> Self {
        Self { inventory }
    }

    /// Aggregate duplicate verdict for the candidates.
    pub fn has_duplicates(&self, candidates: &[CandidateAddress]) -> bool {
        self.check(candidates).has_duplicates()
    }

    /// Query both inventories for every candidate and collect the outcomes.
    pub fn check(&self, candidates: &[CandidateAddress]) -> DuplicateReport {
        let addresses = candidates
            .iter()
            .map(|candidate| {
                let interface = outcome(
                    candidate,
                    "interface",
                    self.inventory.lookup_interface_by_ip(candidate.address()),
                );
                let host = outcome(
                    candidate,
                    "host",
                    self.inventory.lookup_host_by_ip(candidate.address()),
                );
                AddressReport {
                    candidate: candidate.clone(),
                    interface,
                    host,
                }
            })
            .collect();

        let report = DuplicateReport { addresses };
        if report.failed_lookups() > 0 {
            warn!(
                "{} inventory lookup(s) failed and were counted as not found",
                report.failed_lookups()
            );
        }
        report
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Convert a lookup result to a [LookupOutcome], logging the outcome.
fn outcome(
    candidate: &CandidateAddress,
    inventory: &str,
    result: crate::core::errors::Result<InventoryQueryResult>,
) -> LookupOutcome {
    match result {
        Ok(InventoryQueryResult::Found(location)) => {
            info!(
                "Address {} is in use ({} inventory): {}",
                candidate, inventory, location
            );
            LookupOutcome::Found(location)
        }
        Ok(InventoryQueryResult::NotFound) => {
            debug!("Address {} not found ({} inventory)", candidate, inventory);
            LookupOutcome::NotFound
        }
        Err(error) => {
            warn!(
                "Address {} lookup failed ({} inventory): {}",
                candidate, inventory, error
            );
            LookupOutcome::LookupError(error.to_string())
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
