//! Status bar component
//!
//! One line under every panel: active section, latest status message and
//! the keys that matter on this panel.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState, domain::section::Section, presentation::config::keybindings::Action,
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Actions worth advertising on the active panel
    pub fn hinted_actions(state: &AppState) -> Vec<(Action, &'static str)> {
        if state.upload.is_picking() {
            return vec![];
        }

        let mut actions = vec![(Action::NextSection, "next")];
        match state.nav.active() {
            Section::Upload => {
                actions.push((Action::OpenFilePicker, "add files"));
                if !state.upload.records.is_empty() {
                    actions.push((Action::ScrollDown, "select"));
                    actions.push((Action::RemoveFile, "remove"));
                }
            }
            Section::Recommendations | Section::Library => {
                actions.push((Action::ScrollDown, "scroll"));
            }
            Section::Hero => {
                actions.push((Action::Activate, "enter"));
            }
            Section::Dashboard => {}
        }
        actions.push((Action::Quit, "quit"));
        actions
    }

    pub fn hints(&self, state: &AppState) -> String {
        if state.upload.is_picking() {
            return "Enter add • Esc cancel".to_string();
        }

        let keybindings = &state.config.config.keybindings;
        Self::hinted_actions(state)
            .into_iter()
            .filter_map(|(action, label)| {
                keybindings
                    .hint_for(action)
                    .map(|key| format!("{key} {label}"))
            })
            .collect::<Vec<_>>()
            .join(" • ")
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.style("status_bar");
        frame.render_widget(Clear, area);
        frame.render_widget(Block::new().style(style), area);

        let hints = self.hints(state);
        let [section_area, message_area, hints_area] = Layout::horizontal([
            Constraint::Length(state.nav.active().title().len() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(hints.chars().count() as u16 + 1),
        ])
        .areas(area);

        frame.render_widget(
            Span::styled(format!(" {} ", state.nav.active().title()), style.bold()),
            section_area,
        );
        let message = state.system.status_message().cloned().unwrap_or_default();
        frame.render_widget(Span::styled(format!(" {message}"), style), message_area);
        frame.render_widget(Span::styled(hints, style), hints_area);
    }
}
