use crate::core::errors::Result;
use std::fmt;
use std::net::Ipv4Addr;

/*-------------------------------------------------------------------------------------------------
  Inventory Collaborator
-------------------------------------------------------------------------------------------------*/

/// Where an address was found in the network inventory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    /// Hostname of the network device that owns (or connects) the address.
    pub hostname: String,

    /// Interface name, or a location description (VLAN, device type) when the
    /// inventory does not report an interface.
    pub detail: String,
}

impl Location {
    pub fn new(hostname: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hostname, self.detail)
    }
}

/// Answer from the inventory for a single address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InventoryQueryResult {
    Found(Location),
    NotFound,
}

/// Read-only view of the addresses in use across the managed network.
///
/// Implementations return `Ok(InventoryQueryResult::NotFound)` when the
/// inventory positively reports the address as unused, and `Err(_)` when the
/// question could not be answered (transport failures, unexpected status
/// codes, malformed payloads).
pub trait Inventory {
    /// Look up an address configured on a network-device interface.
    fn lookup_interface_by_ip(&self, address: Ipv4Addr) -> Result<InventoryQueryResult>;

    /// Look up an address used by an end host (wired or wireless client).
    fn lookup_host_by_ip(&self, address: Ipv4Addr) -> Result<InventoryQueryResult>;
}

impl<T: Inventory + ?Sized> Inventory for &T {
    fn lookup_interface_by_ip(&self, address: Ipv4Addr) -> Result<InventoryQueryResult> {
        (**self).lookup_interface_by_ip(address)
    }

    fn lookup_host_by_ip(&self, address: Ipv4Addr) -> Result<InventoryQueryResult> {
        (**self).lookup_host_by_ip(address)
    }
}

/*-------------------------------------------------------------------------------------------------
  Mock Inventory
-------------------------------------------------------------------------------------------------*/


/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
