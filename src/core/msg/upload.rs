use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::upload::{SelectedFile, UploadId};

/// Messages for the upload panel (UploadState)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UploadMsg {
    // File picker input
    OpenPicker,
    ClosePicker,
    PickerInput(KeyEvent),
    PickerPaste(String),
    SubmitPicker,

    /// Text dropped onto the panel (a terminal paste)
    Drop(String),

    // Record lifecycle
    FilesSelected(Vec<SelectedFile>),
    Progress { id: UploadId, progress: f64 },
    Processed { id: UploadId },
    Remove(UploadId),
    RemoveSelected,

    // Record list navigation
    SelectNext,
    SelectPrev,
}

impl UploadMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, UploadMsg::Progress { .. })
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;

    #[test]
    fn test_progress_is_frequent() {
        let msg = UploadMsg::Progress {
            id: UploadId::new("a"),
            progress: 10.0,
        };
        assert!(msg.is_frequent());
        assert!(!UploadMsg::OpenPicker.is_frequent());
    }

    #[test]
    fn test_upload_msg_serde() -> Result<()> {
        let msg = UploadMsg::Remove(UploadId::new("k3j2h1g0f"));
        let s = serde_json::to_string(&msg)?;
        let back: UploadMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }
}
