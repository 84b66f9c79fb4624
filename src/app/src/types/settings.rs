use serde::{Deserialize, Serialize};

/// How a submission treats the timezone when the credential gate fails
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum CommitMode {
    /// The timezone is merged into the document before the credential gate
    /// runs and stays merged if that gate fails.
    #[default]
    PreservePartial,
    /// Both gates run before the document is touched.
    Atomic,
}

/// Runtime settings handed to the core by the shell on start-up
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub commit_mode: CommitMode,
}
