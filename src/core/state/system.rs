use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::{SystemMsg, Toast},
};

pub const DEFAULT_TOAST_TICKS: u32 = 16;

/// A toast on screen together with its remaining lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub toast: Toast,
    pub remaining_ticks: u32,
}

/// System-related state
#[derive(Debug, Clone)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    pub toast: Option<ActiveToast>,
    /// Number of ticks a toast stays visible
    pub toast_ticks: u32,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            should_quit: false,
            should_suspend: false,
            status_message: None,
            toast: None,
            toast_ticks: DEFAULT_TOAST_TICKS,
        }
    }
}

impl SystemState {
    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref().map(|active| &active.toast)
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::Tick => self.expire_toast(),

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }

            // Notifications
            SystemMsg::ShowToast(toast) => {
                self.toast = Some(ActiveToast {
                    toast,
                    remaining_ticks: self.toast_ticks,
                });
                vec![Cmd::RequestRender]
            }

            SystemMsg::DismissToast => {
                if self.toast.take().is_some() {
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }
        }
    }

    fn expire_toast(&mut self) -> Vec<Cmd> {
        let Some(active) = self.toast.as_mut() else {
            return vec![];
        };

        active.remaining_ticks = active.remaining_ticks.saturating_sub(1);
        if active.remaining_ticks == 0 {
            self.toast = None;
            vec![Cmd::RequestRender]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_suspend_and_resume() {
        let mut system = SystemState::default();

        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);

        let cmds = system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_system_state_status_message_isolated() {
        let mut system = SystemState::default();
        assert!(system.status_message.is_none());

        let cmds = system.update(SystemMsg::UpdateStatusMessage("Test".to_string()));

        assert_eq!(system.status_message, Some("Test".to_string()));
        assert!(cmds.is_empty());

        system.update(SystemMsg::UpdateStatusMessage("Newer".to_string()));
        assert_eq!(system.status_message, Some("Newer".to_string()));
    }

    #[test]
    fn test_system_state_resize_generates_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_show_error_prefixes_and_logs() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::ShowError("boom".into()));

        assert_eq!(system.status_message.as_deref(), Some("Error: boom"));
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".into()
            }]
        );
    }

    #[test]
    fn test_toast_expires_after_configured_ticks() {
        let mut system = SystemState {
            toast_ticks: 3,
            ..Default::default()
        };

        system.update(SystemMsg::ShowToast(Toast::new("Done", "All set")));
        assert_eq!(system.toast().map(|t| t.title.as_str()), Some("Done"));

        assert!(system.update(SystemMsg::Tick).is_empty());
        assert!(system.update(SystemMsg::Tick).is_empty());
        assert!(system.toast().is_some());

        let cmds = system.update(SystemMsg::Tick);
        assert!(system.toast().is_none());
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_new_toast_replaces_previous_and_resets_lifetime() {
        let mut system = SystemState {
            toast_ticks: 2,
            ..Default::default()
        };

        system.update(SystemMsg::ShowToast(Toast::new("First", "")));
        system.update(SystemMsg::Tick);
        system.update(SystemMsg::ShowToast(Toast::new("Second", "")));

        let active = system.toast.clone();
        assert_eq!(
            active,
            Some(ActiveToast {
                toast: Toast::new("Second", ""),
                remaining_ticks: 2
            })
        );
    }

    #[test]
    fn test_dismiss_toast() {
        let mut system = SystemState::default();
        assert!(system.update(SystemMsg::DismissToast).is_empty());

        system.update(SystemMsg::ShowToast(Toast::new("t", "d")));
        assert_eq!(
            system.update(SystemMsg::DismissToast),
            vec![Cmd::RequestRender]
        );
        assert!(system.toast().is_none());
    }
}
