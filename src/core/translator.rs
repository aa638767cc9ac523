use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::config::keybindings::Action;
use crate::{
    core::{
        msg::{nav::NavMsg, system::SystemMsg, upload::UploadMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::section::Section,
};

pub const PASTE_OUTSIDE_UPLOAD_HINT: &str = "Open the Upload panel to add files";

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        // Upload simulation events
        RawMsg::FilesSelected(files) => vec![Msg::Upload(UploadMsg::FilesSelected(files))],
        RawMsg::UploadProgress { id, progress } => {
            vec![Msg::Upload(UploadMsg::Progress { id, progress })]
        }
        RawMsg::UploadProcessed { id } => vec![Msg::Upload(UploadMsg::Processed { id })],

        // System events
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Rendering is orchestrated by AppRunner
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.upload.is_picking() {
        translate_picker_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the file picker is open
fn translate_picker_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc => vec![Msg::Upload(UploadMsg::ClosePicker)],
        KeyCode::Enter => vec![Msg::Upload(UploadMsg::SubmitPicker)],
        // All other keys go to the TextArea
        _ => vec![Msg::Upload(UploadMsg::PickerInput(key))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    let active = state.nav.active();

    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        Action::NextSection => vec![Msg::Nav(NavMsg::NextSection)],
        Action::PrevSection => vec![Msg::Nav(NavMsg::PrevSection)],
        Action::ShowDashboard => vec![Msg::Nav(NavMsg::SelectSection(Section::Dashboard))],
        Action::ShowUpload => vec![Msg::Nav(NavMsg::SelectSection(Section::Upload))],
        Action::ShowRecommendations => {
            vec![Msg::Nav(NavMsg::SelectSection(Section::Recommendations))]
        }
        Action::ShowLibrary => vec![Msg::Nav(NavMsg::SelectSection(Section::Library))],
        Action::ToggleMenu => {
            if active.is_hero() {
                vec![]
            } else {
                vec![Msg::Nav(NavMsg::ToggleMenu)]
            }
        }

        Action::Activate => match active {
            Section::Hero => vec![Msg::Nav(NavMsg::EnterPlatform)],
            Section::Upload => vec![Msg::Upload(UploadMsg::OpenPicker)],
            Section::Dashboard | Section::Recommendations | Section::Library => vec![],
        },

        Action::ScrollUp => match active {
            Section::Upload => vec![Msg::Upload(UploadMsg::SelectPrev)],
            Section::Recommendations | Section::Library => vec![Msg::Nav(NavMsg::ScrollUp)],
            Section::Hero | Section::Dashboard => vec![],
        },
        Action::ScrollDown => match active {
            Section::Upload => vec![Msg::Upload(UploadMsg::SelectNext)],
            Section::Recommendations | Section::Library => vec![Msg::Nav(NavMsg::ScrollDown)],
            Section::Hero | Section::Dashboard => vec![],
        },

        Action::OpenFilePicker => {
            if active == Section::Upload {
                vec![Msg::Upload(UploadMsg::OpenPicker)]
            } else {
                vec![
                    Msg::Nav(NavMsg::SelectSection(Section::Upload)),
                    Msg::Upload(UploadMsg::OpenPicker),
                ]
            }
        }
        Action::RemoveFile => {
            if active == Section::Upload {
                vec![Msg::Upload(UploadMsg::RemoveSelected)]
            } else {
                vec![]
            }
        }

        Action::DismissToast => {
            if state.system.toast().is_some() {
                vec![Msg::System(SystemMsg::DismissToast)]
            } else if state.nav.menu_open {
                vec![Msg::Nav(NavMsg::ToggleMenu)]
            } else {
                vec![]
            }
        }
    }
}

/// Pasted text is typed into the picker, or dropped onto the upload panel
fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    if state.upload.is_picking() {
        return vec![Msg::Upload(UploadMsg::PickerPaste(text))];
    }

    if state.nav.active() == Section::Upload {
        vec![Msg::Upload(UploadMsg::Drop(text))]
    } else {
        vec![Msg::System(SystemMsg::UpdateStatusMessage(
            PASTE_OUTSIDE_UPLOAD_HINT.to_string(),
        ))]
    }
}
