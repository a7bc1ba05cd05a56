//! Device and machine records from the devices API

use serde::{Deserialize, Serialize};

/// A registered edge device (`devices/device/` resource).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Absent until the server assigns one (create flow).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub device_token: String,
    #[serde(default)]
    pub hardware_version: String,
    #[serde(default)]
    pub software_version: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub pub_topic: String,
    #[serde(default)]
    pub sub_topic: String,
    #[serde(default)]
    pub api_path: String,
}

/// A production machine as listed by `devices/machine/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    #[serde(default)]
    pub machine_id: String,
    #[serde(default)]
    pub machine_name: String,
}

/// A machine group as listed by `devices/machinegroup/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineGroup {
    #[serde(default)]
    pub group_id: u64,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub machines: Vec<Machine>,
}
