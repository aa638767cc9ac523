//! Upload panel: drop zone, file picker and the list of simulated uploads

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::{
        config::keybindings::Action,
        widgets::{
            drop_zone::DropZone,
            upload_item::{self, UploadItem},
        },
    },
};

pub const PANEL_TITLE: &str = "Document Upload & Processing";
pub const LIST_TITLE: &str = "Processing Files";
pub const PICKER_TITLE: &str = " File path(s): Enter to add, Esc to cancel ";
const PICKER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Default)]
pub struct UploadComponent;

impl UploadComponent {
    pub fn new() -> Self {
        Self
    }

    /// First record to draw so that the selected one stays on screen
    pub fn first_visible(selected: Option<usize>, capacity: usize) -> usize {
        match selected {
            Some(i) if capacity > 0 && i >= capacity => i + 1 - capacity,
            _ => 0,
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Line::from(vec![
                Span::styled(" ⇪ ", styles.style("primary")),
                Span::styled(PANEL_TITLE, Style::default().bold()),
                Span::raw(" "),
            ]));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let picking = state.upload.is_picking();
        let has_records = !state.upload.records.is_empty();
        let [zone_area, picker_area, title_area, list_area] = Layout::vertical([
            Constraint::Length(DropZone::HEIGHT),
            Constraint::Length(if picking { PICKER_HEIGHT } else { 0 }),
            Constraint::Length(if has_records { 1 } else { 0 }),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(DropZone::new(picking, styles), zone_area);

        if picking {
            self.view_picker(state, frame, picker_area);
        }

        if has_records {
            frame.render_widget(
                Line::styled(format!(" {LIST_TITLE}"), Style::default().bold()),
                title_area,
            );
            self.view_records(state, frame, list_area);
        }
    }

    fn view_picker(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut textarea = state.upload.picker.textarea();
        textarea.set_block(
            Block::bordered()
                .border_style(styles.style("drop_zone_active"))
                .title(PICKER_TITLE),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("/path/to/notes.pdf \"/path/with spaces/essay.docx\"");
        frame.render_widget(&textarea, area);
    }

    fn view_records(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let remove_hint = state
            .config
            .config
            .keybindings
            .hint_for(Action::RemoveFile);

        let capacity = (area.height / UploadItem::HEIGHT) as usize;
        let first = Self::first_visible(state.upload.selected, capacity);

        let mut y = area.y;
        for (index, record) in state.upload.records.iter().enumerate().skip(first) {
            if y + UploadItem::HEIGHT > area.bottom() {
                break;
            }
            let ctx = upload_item::ViewContext {
                styles,
                selected: state.upload.selected == Some(index),
                remove_hint: remove_hint.as_deref(),
            };
            frame.render_widget(
                UploadItem::new(record, ctx),
                Rect::new(area.x, y, area.width, UploadItem::HEIGHT),
            );
            y += UploadItem::HEIGHT;
        }
    }
}
