use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::config::{ConfigFile, InterfaceDescriptor, WIRED_ENABLED_MODE};

/// Interface action that does not match the document.
///
/// These indicate a shell bug (e.g. an "enable" button rendered for a
/// wireless interface), not a user input problem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("unknown network interface: {0}")]
    Unknown(String),
    #[error("network interface {0} is not wired")]
    NotWired(String),
    #[error("network interface {0} is not wireless")]
    NotWireless(String),
}

/// Section of the store document that holds the device settings
const CONFIGURATION_SECTION: &str = "configuration";

/// Owner of the live configuration document.
///
/// All mutations of the document go through this type, so the document
/// that is pushed to the device is always the one that was edited. The store
/// document is kept as loaded; only the timezone and the network interfaces
/// are modelled, everything else is pushed back untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationSession {
    document: ConfigFile,
    #[serde(skip)]
    stored: Map<String, Value>,
}

impl ConfigurationSession {
    pub fn new(document: ConfigFile) -> Self {
        Self {
            document,
            stored: Map::new(),
        }
    }

    /// Parse a document as sent by the configuration store.
    ///
    /// The timezone is read from the `configuration` section, falling back to
    /// a top-level `timezone` key.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let stored: Map<String, Value> = serde_json::from_str(json)?;

        let timezone = stored
            .get(CONFIGURATION_SECTION)
            .and_then(|section| section.get("timezone"))
            .filter(|timezone| !timezone.is_null())
            .or_else(|| stored.get("timezone"))
            .cloned()
            .unwrap_or(Value::Null);
        let network = stored.get("network").cloned().unwrap_or(Value::Null);

        let document = ConfigFile {
            timezone: serde_json::from_value(timezone)?,
            network: serde_json::from_value(network)?,
        };

        Ok(Self { document, stored })
    }

    /// The full store document with the edits merged in, as JSON text
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut merged = self.stored.clone();

        if let Some(timezone) = &self.document.timezone {
            let timezone = Value::String(timezone.clone());
            match merged.get_mut(CONFIGURATION_SECTION) {
                Some(Value::Object(section)) => {
                    section.insert("timezone".to_string(), timezone);
                }
                _ => {
                    merged.insert("timezone".to_string(), timezone);
                }
            }
        }

        if let Some(network) = &self.document.network {
            let edits = serde_json::to_value(network)?;
            merge(merged.entry("network").or_insert(Value::Null), edits);
        }

        serde_json::to_string(&merged)
    }

    pub fn document(&self) -> &ConfigFile {
        &self.document
    }

    pub fn set_timezone(&mut self, timezone: impl Into<String>) {
        self.document.timezone = Some(timezone.into());
    }

    /// Switch a wired interface to its default activation mode
    pub fn enable_wired(&mut self, name: &str) -> Result<(), InterfaceError> {
        match self.document.interface_mut(name) {
            Some(InterfaceDescriptor::Wired { mode }) => {
                *mode = WIRED_ENABLED_MODE.to_string();
                Ok(())
            }
            Some(InterfaceDescriptor::Wireless { .. }) => {
                Err(InterfaceError::NotWired(name.to_string()))
            }
            None => Err(InterfaceError::Unknown(name.to_string())),
        }
    }

    pub fn ensure_wireless(&self, name: &str) -> Result<(), InterfaceError> {
        match self.document.interface(name) {
            Some(InterfaceDescriptor::Wireless { .. }) => Ok(()),
            Some(InterfaceDescriptor::Wired { .. }) => {
                Err(InterfaceError::NotWireless(name.to_string()))
            }
            None => Err(InterfaceError::Unknown(name.to_string())),
        }
    }

    pub fn set_wireless_ssid(&mut self, name: &str, value: String) -> Result<(), InterfaceError> {
        self.update_wireless(name, |ssid, _| *ssid = Some(value))
    }

    pub fn set_wireless_key(&mut self, name: &str, value: String) -> Result<(), InterfaceError> {
        self.update_wireless(name, |_, key| *key = Some(value))
    }

    fn update_wireless<F>(&mut self, name: &str, apply: F) -> Result<(), InterfaceError>
    where
        F: FnOnce(&mut Option<String>, &mut Option<String>),
    {
        match self.document.interface_mut(name) {
            Some(InterfaceDescriptor::Wireless { ssid, key }) => {
                apply(ssid, key);
                Ok(())
            }
            Some(InterfaceDescriptor::Wired { .. }) => {
                Err(InterfaceError::NotWireless(name.to_string()))
            }
            None => Err(InterfaceError::Unknown(name.to_string())),
        }
    }
}

/// Write `edits` over `target`, keeping keys of `target` that `edits` lacks.
/// Null edits never replace a stored value.
fn merge(target: &mut Value, edits: Value) {
    match (target, edits) {
        (_, Value::Null) => {}
        (Value::Object(target), Value::Object(edits)) => {
            for (key, value) in edits {
                if value.is_null() {
                    continue;
                }
                merge(target.entry(key).or_insert(Value::Null), value);
            }
        }
        (target, edits) => *target = edits,
    }
}
