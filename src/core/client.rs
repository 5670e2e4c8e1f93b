use crate::core::config::ClientConfig;
use crate::core::errors::Result;
use crate::core::inventory::{Inventory, InventoryQueryResult, Location};
use crate::core::json::{
    self, JsonCredentials, JsonHost, JsonInterface, JsonNetworkDevice, JsonResponse, JsonTicket,
};
use log::{debug, info, warn};
use reqwest::blocking;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::net::Ipv4Addr;

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

// Hostname reported for hosts without a connected network device
const UNKNOWN_DEVICE: &str = "unknown device";

/// A synchronous (blocking) client for the controller REST API that answers
/// [Inventory] lookups. The client authenticates once, when it is created,
/// and reuses the service ticket for every request.
///
/// ```no_run
/// # fn main() -> ipdupcheck::Result<()> {
/// let config = ipdupcheck::ClientConfig::new();
/// let client = ipdupcheck::Client::connect(&config)?;
///
/// let candidates = ipdupcheck::scan("ip address 10.1.1.1 255.255.255.0");
/// let duplicate = ipdupcheck::check_duplicates(&candidates, &client);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    http: blocking::Client,
    url: String,
    ticket: String,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Client {
    /// Create a client and request a service ticket with the configured
    /// credentials.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        if config.get_username().is_empty() {
            return Err(
                "No controller username configured; set IPDUPCHECK_USERNAME or --username".into(),
            );
        }

        let http = blocking::Client::builder()
            .danger_accept_invalid_certs(config.get_accept_invalid_certs())
            .build()?;
        let url = config.get_url().trim_end_matches('/').to_string();

        info!("Requesting service ticket from {}", url);
        let response = http
            .post(endpoint(&url, "ticket"))
            .header(ACCEPT, "application/json")
            .json(&JsonCredentials {
                username: config.get_username(),
                password: config.get_password(),
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Authentication failed: HTTP {status}").into());
        }
        let ticket = json::parse::<JsonResponse<JsonTicket>>(&response.text()?)?
            .response
            .service_ticket;
        info!("Authenticated to {}", url);

        Ok(Self { http, url, ticket })
    }

    /// The controller API base URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// GET a resource and parse the response envelope. Returns `Ok(None)`
    /// when the controller answers `404 Not Found`.
    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<Option<T>> {
        let url = endpoint(&self.url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(ACCEPT, "application/json")
            .header(AUTH_TOKEN_HEADER, &self.ticket)
            .send()?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(format!("GET {url}: HTTP {status}").into());
        }

        let envelope: JsonResponse<T> = json::parse(&response.text()?)?;
        Ok(Some(envelope.response))
    }

    /// Get a network device by its controller id.
    fn network_device(&self, device_id: &str) -> Result<JsonNetworkDevice> {
        self.get(&format!("network-device/{device_id}"), &[])?
            .ok_or_else(|| format!("Network device {device_id} not found").into())
    }

    /// Hostname of a device the controller already reported; the device id
    /// when the device cannot be resolved.
    fn device_hostname(&self, device_id: &str) -> String {
        match self.network_device(device_id) {
            Ok(device) => device.hostname,
            Err(error) => {
                warn!(
                    "Unable to resolve network device {}: {}; reporting the device id",
                    device_id, error
                );
                device_id.to_string()
            }
        }
    }

    /// Get the network device managed through `address`, if any.
    fn network_device_by_ip(&self, address: Ipv4Addr) -> Result<Option<JsonNetworkDevice>> {
        self.get(&format!("network-device/ip-address/{address}"), &[])
    }
}

/*--------------------------------------------------------------------------------------
  Inventory Implementation
--------------------------------------------------------------------------------------*/

impl Inventory for Client {
    fn lookup_interface_by_ip(&self, address: Ipv4Addr) -> Result<InventoryQueryResult> {
        let interfaces: Vec<JsonInterface> = self
            .get(&format!("interface/ip-address/{address}"), &[])?
            .unwrap_or_default();

        if let Some(interface) = interfaces.into_iter().next() {
            let hostname = self.device_hostname(&interface.device_id);
            return Ok(InventoryQueryResult::Found(Location::new(
                hostname,
                interface.port_name,
            )));
        }

        // Access points do not report interfaces; check management addresses
        Ok(match self.network_device_by_ip(address)? {
            Some(device) => InventoryQueryResult::Found(management_location(device)),
            None => InventoryQueryResult::NotFound,
        })
    }

    fn lookup_host_by_ip(&self, address: Ipv4Addr) -> Result<InventoryQueryResult> {
        let host_ip = address.to_string();
        let hosts: Vec<JsonHost> = self
            .get("host", &[("hostIp", host_ip.as_str())])?
            .unwrap_or_default();

        let Some(host) = hosts.into_iter().next() else {
            return Ok(InventoryQueryResult::NotFound);
        };

        let hostname = match (
            &host.connected_network_device_name,
            &host.connected_network_device_id,
        ) {
            (Some(name), _) => name.clone(),
            (None, Some(device_id)) => self.device_hostname(device_id),
            (None, None) => {
                warn!("Host {} has no connected network device", host.host_ip);
                UNKNOWN_DEVICE.to_string()
            }
        };

        Ok(InventoryQueryResult::Found(Location::new(
            hostname,
            host_detail(&host),
        )))
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Join the API base URL and a resource path.
fn endpoint(url: &str, path: &str) -> String {
    format!("{}/{}", url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Location of an address used as a device management address.
fn management_location(device: JsonNetworkDevice) -> Location {
    let detail = match device.device_type {
        Some(device_type) => format!("management address ({device_type})"),
        None => "management address".to_string(),
    };
    Location::new(device.hostname, detail)
}

/// Where a host attaches: the switch port for wired hosts, the VLAN for
/// wireless hosts.
fn host_detail(host: &JsonHost) -> String {
    let vlan = host.vlan_id.as_ref().map(|vlan_id| format!("VLAN {vlan_id}"));

    if host.is_wireless() {
        vlan.unwrap_or_else(|| "wireless".to_string())
    } else {
        host.connected_interface_name
            .clone()
            .or(vlan)
            .unwrap_or_default()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
