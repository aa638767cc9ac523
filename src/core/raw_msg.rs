use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::upload::{SelectedFile, UploadId};

/// Everything that reaches the loop from outside: the terminal, the timers
/// and the upload service. `translate_raw_to_domain` turns these into `Msg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    Key(KeyEvent),
    Paste(String),

    // Upload service
    FilesSelected(Vec<SelectedFile>),
    UploadProgress { id: UploadId, progress: f64 },
    UploadProcessed { id: UploadId },

    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Messages too chatty for the debug log
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick | RawMsg::Render | RawMsg::UploadProgress { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(RawMsg::UploadProgress {
            id: UploadId::new("x"),
            progress: 3.0
        }
        .is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
        assert!(!RawMsg::Paste("/tmp/a.pdf".into()).is_frequent());
    }

    #[test]
    fn test_upload_progress_survives_json() -> color_eyre::Result<()> {
        let msg = RawMsg::UploadProgress {
            id: UploadId::new("upload-1"),
            progress: 42.5,
        };
        let json = serde_json::to_string(&msg)?;
        assert_eq!(serde_json::from_str::<RawMsg>(&json)?, msg);
        Ok(())
    }
}
