use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activation mode written to a wired interface when it gets enabled
pub const WIRED_ENABLED_MODE: &str = "dhcp";

/// Device configuration document as persisted by the configuration store
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub network: Option<NetworkConfig>,
}

/// Network section of the configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    #[serde(default)]
    pub interfaces: BTreeMap<String, InterfaceDescriptor>,
}

/// Configuration of a single network interface, keyed by its name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceDescriptor {
    Wired {
        #[serde(rename = "default")]
        mode: String,
    },
    Wireless {
        #[serde(default)]
        ssid: Option<String>,
        #[serde(default)]
        key: Option<String>,
    },
}

impl InterfaceDescriptor {
    pub fn wired(mode: impl Into<String>) -> Self {
        Self::Wired { mode: mode.into() }
    }

    pub fn wireless() -> Self {
        Self::Wireless {
            ssid: None,
            key: None,
        }
    }
}

impl ConfigFile {
    /// Interfaces of the document, empty if the network section is missing
    pub fn interfaces(&self) -> impl Iterator<Item = (&String, &InterfaceDescriptor)> {
        self.network
            .iter()
            .flat_map(|network| network.interfaces.iter())
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceDescriptor> {
        self.network.as_ref()?.interfaces.get(name)
    }

    pub(crate) fn interface_mut(&mut self, name: &str) -> Option<&mut InterfaceDescriptor> {
        self.network.as_mut()?.interfaces.get_mut(name)
    }
}
