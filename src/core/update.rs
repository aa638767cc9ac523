use crate::{
    core::cmd::Cmd,
    core::msg::{
        system::{SystemMsg, Toast},
        upload::UploadMsg,
        Msg,
    },
    core::state::AppState,
    domain::selection::parse_selection,
};

pub const PROCESSED_TOAST_TITLE: &str = "Document processed successfully";
pub const PROCESSED_TOAST_DESCRIPTION: &str = "Ready for assessment generation and analysis";

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Navigation messages (delegated to NavState)
        Msg::Nav(nav_msg) => {
            let commands = state.nav.update(nav_msg);
            (state, commands)
        }

        // Upload messages that span several sub-states are coordinated here
        Msg::Upload(UploadMsg::SubmitPicker) => {
            let input = state.upload.picker.take();
            let commands = select_paths(&mut state, &input);
            (state, commands)
        }

        Msg::Upload(UploadMsg::Drop(text)) => {
            let commands = select_paths(&mut state, &text);
            (state, commands)
        }

        Msg::Upload(UploadMsg::FilesSelected(files)) => {
            let count = files.len();
            let mut commands = state.upload.update(UploadMsg::FilesSelected(files));
            if count > 0 {
                state.system.update(SystemMsg::UpdateStatusMessage(format!(
                    "Uploading {count} file(s)"
                )));
                commands.push(Cmd::RequestRender);
            }
            (state, commands)
        }

        Msg::Upload(UploadMsg::Processed { id }) => {
            let mut commands = vec![];
            if state.upload.complete(&id) {
                log::info!("upload {id} processed");
                commands.extend(state.system.update(SystemMsg::ShowToast(Toast::new(
                    PROCESSED_TOAST_TITLE,
                    PROCESSED_TOAST_DESCRIPTION,
                ))));
            }
            (state, commands)
        }

        Msg::Upload(upload_msg) => {
            let commands = state.upload.update(upload_msg);
            (state, commands)
        }
    }
}

/// Parse picker or drop text and ask the infrastructure to probe the paths
fn select_paths(state: &mut AppState, input: &str) -> Vec<Cmd> {
    let paths = parse_selection(input);
    if paths.is_empty() {
        state
            .system
            .update(SystemMsg::UpdateStatusMessage("No files selected".into()));
        return vec![Cmd::RequestRender];
    }

    state.system.update(SystemMsg::UpdateStatusMessage(format!(
        "Reading {} file(s)...",
        paths.len()
    )));
    vec![Cmd::ProbeFiles { paths }, Cmd::RequestRender]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::nav::NavMsg,
        domain::{
            section::Section,
            upload::{SelectedFile, UploadId, UploadStatus},
        },
    };

    fn files(ids: &[&str]) -> Vec<SelectedFile> {
        ids.iter()
            .map(|id| SelectedFile::new(UploadId::new(*id), format!("{id}.pdf"), 2048))
            .collect()
    }

    #[test]
    fn test_update_quit() {
        let state = AppState::default();
        let (new_state, cmds) = update(Msg::System(SystemMsg::Quit), state);

        assert!(new_state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_drop_parses_paths_into_probe() {
        let state = AppState::default();
        let (new_state, cmds) = update(
            Msg::Upload(UploadMsg::Drop("'/tmp/my notes.md' /tmp/b.pdf".into())),
            state,
        );

        assert_eq!(
            cmds,
            vec![
                Cmd::ProbeFiles {
                    paths: vec![PathBuf::from("/tmp/my notes.md"), PathBuf::from("/tmp/b.pdf")]
                },
                Cmd::RequestRender
            ]
        );
        assert_eq!(
            new_state.system.status_message(),
            Some(&"Reading 2 file(s)...".to_string())
        );
        assert!(new_state.upload.records.is_empty());
    }

    #[test]
    fn test_empty_selection_sets_status_only() {
        let state = AppState::default();
        let (new_state, cmds) = update(Msg::Upload(UploadMsg::Drop("   \n ".into())), state);

        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert_eq!(
            new_state.system.status_message(),
            Some(&"No files selected".to_string())
        );
        assert!(new_state.upload.records.is_empty());
    }

    #[test]
    fn test_submit_picker_consumes_input() {
        let mut state = AppState::default();
        state.upload.update(UploadMsg::OpenPicker);
        state.upload.update(UploadMsg::PickerPaste("/tmp/a.txt".into()));

        let (new_state, cmds) = update(Msg::Upload(UploadMsg::SubmitPicker), state);

        assert!(!new_state.upload.is_picking());
        assert!(new_state.upload.picker.content.is_empty());
        assert!(cmds.contains(&Cmd::ProbeFiles {
            paths: vec![PathBuf::from("/tmp/a.txt")]
        }));
    }

    #[test]
    fn test_files_selected_starts_each_upload() {
        let state = AppState::default();
        let (new_state, cmds) = update(
            Msg::Upload(UploadMsg::FilesSelected(files(&["a", "b"]))),
            state,
        );

        assert_eq!(new_state.upload.records.len(), 2);
        let starts = cmds
            .iter()
            .filter(|cmd| matches!(cmd, Cmd::StartUpload { .. }))
            .count();
        assert_eq!(starts, 2);
        assert_eq!(
            new_state.system.status_message(),
            Some(&"Uploading 2 file(s)".to_string())
        );
    }

    #[test]
    fn test_processed_raises_toast_once() {
        let id = UploadId::new("a");
        let (state, _) = update(
            Msg::Upload(UploadMsg::FilesSelected(files(&["a"]))),
            AppState::default(),
        );
        let (state, _) = update(
            Msg::Upload(UploadMsg::Progress {
                id: id.clone(),
                progress: 100.0,
            }),
            state,
        );

        let (state, cmds) = update(Msg::Upload(UploadMsg::Processed { id: id.clone() }), state);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert_eq!(
            state.system.toast(),
            Some(&Toast::new(PROCESSED_TOAST_TITLE, PROCESSED_TOAST_DESCRIPTION))
        );
        assert_eq!(state.upload.records[0].status, UploadStatus::Completed);

        // a second report changes nothing
        let (_, cmds) = update(Msg::Upload(UploadMsg::Processed { id }), state);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_processed_while_uploading_is_ignored() {
        let id = UploadId::new("a");
        let (state, _) = update(
            Msg::Upload(UploadMsg::FilesSelected(files(&["a"]))),
            AppState::default(),
        );

        let (state, cmds) = update(Msg::Upload(UploadMsg::Processed { id }), state);

        assert!(cmds.is_empty());
        assert!(state.system.toast().is_none());
        assert_eq!(state.upload.records[0].status, UploadStatus::Uploading);
    }

    #[test]
    fn test_section_switch_leaves_upload_records_alone() {
        let (state, _) = update(
            Msg::Upload(UploadMsg::FilesSelected(files(&["a", "b"]))),
            AppState::default(),
        );
        let (state, _) = update(
            Msg::Upload(UploadMsg::Progress {
                id: UploadId::new("b"),
                progress: 42.0,
            }),
            state,
        );
        let before = state.upload.records.clone();

        let (state, _) = update(Msg::Nav(NavMsg::SelectSection(Section::Library)), state);
        let (state, _) = update(Msg::Nav(NavMsg::SelectSection(Section::Upload)), state);

        assert_eq!(state.upload.records, before);
        assert_eq!(state.nav.active(), Section::Upload);
    }
}
