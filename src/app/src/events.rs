use serde::{Deserialize, Serialize};

use crate::types::{LogMessage, Settings};

/// Form field edits (draft only, no validation)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    TimezoneChanged(Option<String>),
    EmailChanged(Option<String>),
    PasswordChanged(Option<String>),
    ServerChanged(Option<String>),
}

/// Submission pipeline and the outcomes of the operations it issues
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit,
    #[serde(skip)]
    CredentialsUploadResponse(Result<(), String>),
    #[serde(skip)]
    ConfigurationPushResponse(Result<(), String>),
    #[serde(skip)]
    LoginResponse(Result<(), String>),
}

/// Direct edits of the document's network interfaces
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    EnableWired {
        interface: String,
    },
    Scan {
        interface: String,
    },
    SsidSelected {
        interface: String,
        ssid: String,
    },
    WirelessSsidChanged {
        interface: String,
        ssid: String,
    },
    WirelessKeyChanged {
        interface: String,
        key: String,
    },
    #[serde(skip)]
    ScanResponse {
        interface: String,
        result: Result<Vec<String>, String>,
    },
}

/// Device link events (pushed by the Shell)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum BotEvent {
    Connected,
    Disconnected,
    ConfigurationLoaded { config: String },
    LogReceived(LogMessage),
}

/// UI-only actions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize(Settings),
    Form(FormEvent),
    Submission(SubmissionEvent),
    Network(NetworkEvent),
    Bot(BotEvent),
    Ui(UiEvent),
}
