use crate::core::errors::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Response Envelope
--------------------------------------------------------------------------------------*/

/// Controller responses wrap their payload in a `response` member.
#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonResponse<T> {
    pub response: T,
}

/*--------------------------------------------------------------------------------------
  Authentication
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonTicket {
    pub service_ticket: String,
}

/*--------------------------------------------------------------------------------------
  Network Device
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonNetworkDevice {
    pub hostname: String,

    #[serde(rename = "type", default)]
    pub device_type: Option<String>,
}

/*--------------------------------------------------------------------------------------
  Interface
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonInterface {
    pub port_name: String,
    pub device_id: String,
}

/*--------------------------------------------------------------------------------------
  Host
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonHost {
    pub host_ip: String,

    #[serde(default)]
    pub host_type: Option<String>,

    #[serde(default)]
    pub connected_network_device_id: Option<String>,

    #[serde(default)]
    pub connected_network_device_name: Option<String>,

    #[serde(default)]
    pub connected_interface_name: Option<String>,

    #[serde(default)]
    pub vlan_id: Option<String>,
}

impl JsonHost {
    pub fn is_wireless(&self) -> bool {
        self.host_type.as_deref() == Some("wireless")
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
