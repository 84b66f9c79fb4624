//! Device command definitions.
//!
//! These types define the interface between the Core and the Shell for the
//! operations that reach the device: configuration push, credential upload,
//! login and WiFi scanning. How they are delivered is up to the Shell.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform against the device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceOperation {
    /// `document` is the JSON text of the full store document
    PushConfiguration {
        document: String,
    },
    UploadCredentials {
        email: String,
        password: String,
        server: String,
    },
    TryLogIn,
    Scan {
        interface: String,
    },
}

// The output from device operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceOutput {
    Done,
    Ssids(Vec<String>),
    Error(String),
}

impl Operation for DeviceOperation {
    type Output = DeviceOutput;
}

impl DeviceOutput {
    /// Outcome of an operation that carries no payload
    pub fn into_result(self) -> Result<(), String> {
        match self {
            Self::Done => Ok(()),
            Self::Ssids(_) => Err("unexpected scan result".to_string()),
            Self::Error(message) => Err(message),
        }
    }

    /// Outcome of a scan
    pub fn into_ssids(self) -> Result<Vec<String>, String> {
        match self {
            Self::Ssids(ssids) => Ok(ssids),
            Self::Done => Ok(Vec::new()),
            Self::Error(message) => Err(message),
        }
    }
}

/// Command-based device API
pub struct Device<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Device<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DeviceOperation>> + 'static,
    Event: Send + 'static,
{
    /// Deliver the full configuration document
    pub fn push_configuration(document: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DeviceOperation::PushConfiguration {
            document: document.into(),
        })
    }

    /// Deliver the web app login credentials
    pub fn upload_credentials(
        email: impl Into<String>,
        password: impl Into<String>,
        server: impl Into<String>,
    ) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DeviceOperation::UploadCredentials {
            email: email.into(),
            password: password.into(),
            server: server.into(),
        })
    }

    /// Authenticate with the previously uploaded credentials
    pub fn try_log_in() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DeviceOperation::TryLogIn)
    }

    /// Scan for WiFi networks on a wireless interface
    pub fn scan(interface: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DeviceOperation::Scan {
            interface: interface.into(),
        })
    }
}

/// Request builder for device operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: DeviceOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DeviceOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: DeviceOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DeviceOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_output_maps_to_err() {
        assert_eq!(
            DeviceOutput::Error("socket closed".to_string()).into_result(),
            Err("socket closed".to_string())
        );
        assert_eq!(
            DeviceOutput::Error("busy".to_string()).into_ssids(),
            Err("busy".to_string())
        );
    }

    #[test]
    fn scan_without_payload_is_empty_list() {
        assert_eq!(DeviceOutput::Done.into_ssids(), Ok(Vec::new()));
        assert_eq!(
            DeviceOutput::Ssids(vec!["farm".to_string()]).into_ssids(),
            Ok(vec!["farm".to_string()])
        );
    }

    #[test]
    fn scan_result_is_not_a_plain_success() {
        assert_eq!(DeviceOutput::Done.into_result(), Ok(()));
        assert_eq!(
            DeviceOutput::Ssids(vec!["farm".to_string()]).into_result(),
            Err("unexpected scan result".to_string())
        );
    }
}
