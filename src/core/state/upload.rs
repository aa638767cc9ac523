use crossterm::event::KeyEvent;
use tui_textarea::{CursorMove, TextArea};

use crate::{
    core::{cmd::Cmd, msg::upload::UploadMsg},
    domain::upload::{SelectedFile, UploadId, UploadRecord},
};

/// Single-line text input state of the file picker
/// The TextArea is recreated from this state for every key, so the state
/// is the only thing that survives between frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickerState {
    pub open: bool,
    pub content: String,
    /// Cursor column, in characters
    pub cursor: usize,
}

impl PickerState {
    pub fn textarea(&self) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![self.content.clone()]);
        textarea.move_cursor(CursorMove::Jump(0, self.cursor as u16));
        textarea
    }

    /// Flatten the TextArea back into one line; a newline becomes a space
    fn store(&mut self, textarea: &TextArea<'_>) {
        let lines = textarea.lines();
        let (row, col) = textarea.cursor();
        self.cursor = lines
            .iter()
            .take(row)
            .map(|line| line.chars().count() + 1)
            .sum::<usize>()
            + col;
        self.content = lines.join(" ");
    }

    pub fn apply_key(&mut self, key: KeyEvent) {
        let mut textarea = self.textarea();
        textarea.input(key);
        self.store(&textarea);
    }

    pub fn insert(&mut self, text: &str) {
        let mut textarea = self.textarea();
        textarea.insert_str(text.replace(['\r', '\n'], " "));
        self.store(&textarea);
    }

    /// Close the picker and hand back what was typed
    pub fn take(&mut self) -> String {
        self.open = false;
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }
}

/// Upload panel state: the simulated upload records and the file picker
#[derive(Debug, Clone, Default)]
pub struct UploadState {
    pub records: Vec<UploadRecord>,
    pub selected: Option<usize>,
    pub picker: PickerState,
}

impl UploadState {
    pub fn is_picking(&self) -> bool {
        self.picker.open
    }

    pub fn record(&self, id: &UploadId) -> Option<&UploadRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    fn record_mut(&mut self, id: &UploadId) -> Option<&mut UploadRecord> {
        self.records.iter_mut().find(|r| &r.id == id)
    }

    pub fn selected_record(&self) -> Option<&UploadRecord> {
        self.selected.and_then(|i| self.records.get(i))
    }

    /// Processing -> completed for the given record
    /// Returns false for unknown ids and records in any other status.
    pub fn complete(&mut self, id: &UploadId) -> bool {
        self.record_mut(id).is_some_and(UploadRecord::complete)
    }

    pub fn update(&mut self, msg: UploadMsg) -> Vec<Cmd> {
        match msg {
            UploadMsg::OpenPicker => {
                self.picker.open = true;
                vec![Cmd::RequestRender]
            }
            UploadMsg::ClosePicker => {
                self.picker.take();
                vec![Cmd::RequestRender]
            }
            UploadMsg::PickerInput(key) => {
                if self.picker.open {
                    self.picker.apply_key(key);
                }
                vec![]
            }
            UploadMsg::PickerPaste(text) => {
                if self.picker.open {
                    self.picker.insert(&text);
                }
                vec![]
            }
            UploadMsg::FilesSelected(files) => self.add_files(files),
            UploadMsg::Progress { id, progress } => {
                if let Some(record) = self.record_mut(&id) {
                    record.advance(progress);
                }
                vec![]
            }
            UploadMsg::Processed { id } => {
                self.complete(&id);
                vec![]
            }
            UploadMsg::Remove(id) => self.remove(&id),
            UploadMsg::RemoveSelected => match self.selected_record() {
                Some(record) => {
                    let id = record.id.clone();
                    self.remove(&id)
                }
                None => vec![],
            },
            UploadMsg::SelectNext => {
                if !self.records.is_empty() {
                    let last = self.records.len() - 1;
                    self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
                }
                vec![]
            }
            UploadMsg::SelectPrev => {
                if !self.records.is_empty() {
                    self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
                }
                vec![]
            }
            // Selection parsing touches system status; handled by the coordinator
            UploadMsg::SubmitPicker | UploadMsg::Drop(_) => vec![],
        }
    }

    fn add_files(&mut self, files: Vec<SelectedFile>) -> Vec<Cmd> {
        let mut cmds = Vec::with_capacity(files.len());
        for file in files {
            if self.record(&file.id).is_some() {
                log::warn!("ignoring duplicate upload id {}", file.id);
                continue;
            }
            cmds.push(Cmd::StartUpload {
                id: file.id.clone(),
            });
            self.records.push(UploadRecord::from(file));
        }

        if self.selected.is_none() && !self.records.is_empty() {
            self.selected = Some(0);
        }

        cmds
    }

    fn remove(&mut self, id: &UploadId) -> Vec<Cmd> {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        if self.records.len() == before {
            return vec![];
        }

        self.selected = match self.records.len() {
            0 => None,
            len => self.selected.map(|i| i.min(len - 1)),
        };

        vec![Cmd::CancelUpload { id: id.clone() }, Cmd::RequestRender]
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::upload::UploadStatus;

    fn file(id: &str, name: &str) -> SelectedFile {
        SelectedFile::new(UploadId::new(id), name, 1024)
    }

    fn state_with(ids: &[&str]) -> UploadState {
        let mut state = UploadState::default();
        let files = ids
            .iter()
            .map(|id| file(id, &format!("{id}.pdf")))
            .collect();
        state.update(UploadMsg::FilesSelected(files));
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_files_selected_creates_uploading_records() {
        let mut state = UploadState::default();

        let cmds = state.update(UploadMsg::FilesSelected(vec![
            file("a", "a.pdf"),
            file("b", "b.md"),
            file("c", "c.txt"),
        ]));

        assert_eq!(state.records.len(), 3);
        assert!(state
            .records
            .iter()
            .all(|r| r.status == UploadStatus::Uploading && r.progress == 0.0));
        assert_eq!(
            cmds,
            vec![
                Cmd::StartUpload {
                    id: UploadId::new("a")
                },
                Cmd::StartUpload {
                    id: UploadId::new("b")
                },
                Cmd::StartUpload {
                    id: UploadId::new("c")
                },
            ]
        );
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_duplicate_ids_are_ignored() {
        let mut state = state_with(&["a"]);
        let cmds = state.update(UploadMsg::FilesSelected(vec![file("a", "again.pdf")]));
        assert!(cmds.is_empty());
        assert_eq!(state.records.len(), 1);
    }

    #[test]
    fn test_progress_then_processed_completes() {
        let mut state = state_with(&["a"]);
        let id = UploadId::new("a");

        state.update(UploadMsg::Progress {
            id: id.clone(),
            progress: 55.0,
        });
        assert_eq!(state.record(&id).map(|r| r.status), Some(UploadStatus::Uploading));

        state.update(UploadMsg::Progress {
            id: id.clone(),
            progress: 104.0,
        });
        assert_eq!(state.record(&id).map(|r| r.status), Some(UploadStatus::Processing));

        state.update(UploadMsg::Processed { id: id.clone() });
        assert_eq!(state.record(&id).map(|r| r.status), Some(UploadStatus::Completed));
    }

    #[test]
    fn test_processed_before_full_progress_is_ignored() {
        let mut state = state_with(&["a"]);
        let id = UploadId::new("a");

        assert!(!state.complete(&id));
        assert_eq!(state.record(&id).map(|r| r.status), Some(UploadStatus::Uploading));
    }

    #[test]
    fn test_progress_for_unknown_record_is_ignored() {
        let mut state = state_with(&["a"]);
        state.update(UploadMsg::Progress {
            id: UploadId::new("zzz"),
            progress: 50.0,
        });
        assert_eq!(state.records[0].progress, 0.0);
    }

    #[test]
    fn test_remove_deletes_exactly_one_and_cancels() {
        let mut state = state_with(&["a", "b", "c"]);
        state.update(UploadMsg::Progress {
            id: UploadId::new("c"),
            progress: 30.0,
        });
        let untouched: Vec<UploadRecord> = state
            .records
            .iter()
            .filter(|r| r.id.as_str() != "b")
            .cloned()
            .collect();

        let cmds = state.update(UploadMsg::Remove(UploadId::new("b")));

        assert_eq!(state.records, untouched);
        assert_eq!(
            cmds,
            vec![
                Cmd::CancelUpload {
                    id: UploadId::new("b")
                },
                Cmd::RequestRender
            ]
        );
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut state = state_with(&["a"]);
        assert!(state.update(UploadMsg::Remove(UploadId::new("x"))).is_empty());
        assert_eq!(state.records.len(), 1);
    }

    #[test]
    fn test_remove_selected_clamps_selection() {
        let mut state = state_with(&["a", "b"]);
        state.update(UploadMsg::SelectNext);
        assert_eq!(state.selected, Some(1));

        state.update(UploadMsg::RemoveSelected);
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.selected, Some(0));

        state.update(UploadMsg::RemoveSelected);
        assert!(state.records.is_empty());
        assert_eq!(state.selected, None);
        assert!(state.update(UploadMsg::RemoveSelected).is_empty());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = state_with(&["a", "b"]);
        state.update(UploadMsg::SelectPrev);
        assert_eq!(state.selected, Some(0));
        state.update(UploadMsg::SelectNext);
        state.update(UploadMsg::SelectNext);
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_picker_typing() {
        let mut state = UploadState::default();
        state.update(UploadMsg::OpenPicker);
        for c in "a.md".chars() {
            state.update(UploadMsg::PickerInput(key(KeyCode::Char(c))));
        }
        state.update(UploadMsg::PickerInput(key(KeyCode::Backspace)));

        assert_eq!(state.picker.content, "a.m");
        assert_eq!(state.picker.cursor, 3);
    }

    #[test]
    fn test_picker_newline_key_keeps_cursor_in_joined_text() {
        let mut state = UploadState::default();
        state.update(UploadMsg::OpenPicker);
        for c in "abc".chars() {
            state.update(UploadMsg::PickerInput(key(KeyCode::Char(c))));
        }
        state.update(UploadMsg::PickerInput(key(KeyCode::Left)));
        // Ctrl-M breaks the line in the TextArea
        state.update(UploadMsg::PickerInput(KeyEvent::new(
            KeyCode::Char('m'),
            KeyModifiers::CONTROL,
        )));

        assert_eq!(state.picker.content, "ab c");
        assert_eq!(state.picker.cursor, 3);

        state.update(UploadMsg::PickerInput(key(KeyCode::Char('x'))));
        assert_eq!(state.picker.content, "ab xc");
        assert_eq!(state.picker.cursor, 4);
    }

    #[test]
    fn test_picker_input_ignored_when_closed() {
        let mut state = UploadState::default();
        state.update(UploadMsg::PickerInput(key(KeyCode::Char('x'))));
        state.update(UploadMsg::PickerPaste("/tmp/a.pdf".into()));
        assert!(state.picker.content.is_empty());
    }

    #[test]
    fn test_picker_paste_flattens_newlines() {
        let mut state = UploadState::default();
        state.update(UploadMsg::OpenPicker);
        state.update(UploadMsg::PickerPaste("/tmp/a.pdf\n/tmp/b.md".into()));
        assert_eq!(state.picker.content, "/tmp/a.pdf /tmp/b.md");
    }

    #[test]
    fn test_close_picker_clears_input() {
        let mut state = UploadState::default();
        state.update(UploadMsg::OpenPicker);
        state.update(UploadMsg::PickerPaste("x".into()));
        state.update(UploadMsg::ClosePicker);
        assert_eq!(state.picker, PickerState::default());
    }
}
