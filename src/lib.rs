/*!
Detect IPv4 address conflicts in a device configuration before it is deployed.

The crate scans configuration text for `ip address` statements, extracts the
IPv4 literals on them, and checks each address against the network inventory:
addresses configured on device interfaces and addresses used by end hosts.

```no_run
# fn main() -> ipdupcheck::Result<()> {
let configuration = "interface Vlan10\n ip address 10.1.1.1 255.255.255.0\n";

// Find the candidate addresses
let candidates = ipdupcheck::scan(configuration);

// Check them against the controller inventory
let client = ipdupcheck::Client::connect(&ipdupcheck::ClientConfig::new())?;
let report = ipdupcheck::DuplicateChecker::new(&client).check(&candidates);

for address in report.duplicates() {
    println!("{} is already in use", address.candidate);
}
# Ok(())
# }
```

Any type implementing [Inventory] can stand in for the controller [Client].
*/

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::candidate::{parse_candidate, CandidateAddress};
pub use crate::core::checker::{
    check_duplicates, AddressReport, DuplicateChecker, DuplicateReport, LookupOutcome,
};
pub use crate::core::client::Client;
pub use crate::core::config::ClientConfig;
pub use crate::core::errors::{Error, Result};
pub use crate::core::inventory::{Inventory, InventoryQueryResult, Location};
pub use crate::core::scanner::{scan, Scanner};
