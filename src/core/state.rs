use crate::infrastructure::config::Config;

pub mod nav;
pub mod system;
pub mod upload;

pub use nav::NavState;
pub use system::SystemState;
pub use upload::UploadState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nav: NavState,
    pub upload: UploadState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given config
    pub fn new_with_config(config: Config) -> Self {
        let mut state = Self::default();
        state.system.toast_ticks = config.toast_ticks.max(1);
        state.config = ConfigState { config };
        state
    }

    /// Number of records still uploading or processing
    pub fn pending_uploads(&self) -> usize {
        self.upload
            .records
            .iter()
            .filter(|r| !r.is_completed())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{
        section::Section,
        upload::{SelectedFile, UploadId},
    };
    use crate::core::msg::upload::UploadMsg;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.nav.active(), Section::Hero);
        assert!(state.upload.records.is_empty());
        assert!(!state.system.should_quit);
        assert!(state.system.toast().is_none());
    }

    #[test]
    fn test_new_with_config_applies_toast_lifetime() {
        let config = Config {
            toast_ticks: 5,
            ..Default::default()
        };
        let state = AppState::new_with_config(config);
        assert_eq!(state.system.toast_ticks, 5);
    }

    #[test]
    fn test_new_with_config_keeps_toast_visible_for_one_tick() {
        let config = Config {
            toast_ticks: 0,
            ..Default::default()
        };
        let state = AppState::new_with_config(config);
        assert_eq!(state.system.toast_ticks, 1);
    }

    #[test]
    fn test_pending_uploads() {
        let mut state = AppState::default();
        state.upload.update(UploadMsg::FilesSelected(vec![
            SelectedFile::new(UploadId::new("a"), "a.pdf", 10),
            SelectedFile::new(UploadId::new("b"), "b.pdf", 10),
        ]));
        state.upload.update(UploadMsg::Progress {
            id: UploadId::new("a"),
            progress: 100.0,
        });
        state.upload.update(UploadMsg::Processed {
            id: UploadId::new("a"),
        });

        assert_eq!(state.pending_uploads(), 1);
    }
}
