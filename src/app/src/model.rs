use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub settings: Settings,

    // Configuration document (edited in place, pushed on submit)
    pub session: ConfigurationSession,

    // Form state (unsubmitted edits)
    pub draft: DraftFields,

    // WiFi discovery, keyed by interface name
    pub discovered_ssids: HashMap<String, Vec<String>>,
    pub selected_ssids: HashMap<String, String>,

    // Device link state
    pub is_connected: bool,
    pub is_logged_in: bool,
    pub last_log: Option<LogMessage>,

    // UI state
    /// Input problem reported by the submit gates
    pub validation_error: Option<ValidationError>,
    /// Transport or logic error
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Model {
    pub fn current_draft(&self) -> &DraftFields {
        &self.draft
    }

    pub fn document(&self) -> &ConfigFile {
        self.session.document()
    }

    /// Set an error message
    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Record a failed submission gate and return a render command
    pub fn reject_submission(
        &mut self,
        error: ValidationError,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        log::warn!("Submission rejected: {error}");
        self.validation_error = Some(error);
        crux_core::render::render()
    }

    /// Forget scan results and selections of interfaces that are no longer
    /// wireless in the document
    pub fn drop_stale_ssids(&mut self) {
        let session = &self.session;
        self.discovered_ssids
            .retain(|interface, _| session.ensure_wireless(interface).is_ok());
        self.selected_ssids
            .retain(|interface, _| session.ensure_wireless(interface).is_ok());
    }

    /// Clear error and validation messages
    pub fn clear_error(&mut self) {
        self.error_message = None;
        self.validation_error = None;
    }
}
