use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::upload::UploadId;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated by AppRunner, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (timers, file metadata, terminal control)
/// Cmd captures application intent; UploadOperation in the infrastructure layer
/// captures how the upload simulation carries it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Upload simulation
    ProbeFiles { paths: Vec<PathBuf> },
    StartUpload { id: UploadId },
    CancelUpload { id: UploadId },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via render_req_sender and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError { message: String },
}

impl Cmd {
    /// Human-readable command name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::ProbeFiles { paths } => format!("ProbeFiles({})", paths.len()),
            Cmd::StartUpload { .. } => "StartUpload".to_string(),
            Cmd::CancelUpload { .. } => "CancelUpload".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
        }
    }
}
