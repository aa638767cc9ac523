use ratatui::prelude::*;

use crate::{
    core::state::{nav::scroll_limit, AppState},
    domain::{catalog::LIBRARY, section::Section},
    presentation::{
        components::{scroll_position, stack_cards},
        widgets::cards::DocumentCard,
    },
};

pub const PANEL_TITLE: &str = "Study Library";
pub const UPLOAD_NEW: &str = "Upload New Document";

#[derive(Debug, Clone, Default)]
pub struct LibraryComponent;

impl LibraryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let button = format!("[ ▤ {UPLOAD_NEW} ]");
        let position = scroll_position(state.nav.scroll, scroll_limit(Section::Library));
        let [title_area, position_area, button_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(position.len() as u16 + 2),
            Constraint::Length(button.chars().count() as u16),
        ])
        .areas(header_area);

        frame.render_widget(
            Span::styled(PANEL_TITLE, Style::default().bold()),
            title_area,
        );
        frame.render_widget(Span::styled(position, styles.style("muted")), position_area);
        frame.render_widget(
            Span::styled(button, styles.style("nav_active")),
            button_area,
        );

        let cards = LIBRARY
            .iter()
            .skip(state.nav.scroll as usize)
            .map(|doc| (DocumentCard::HEIGHT, DocumentCard::new(doc, styles)));
        stack_cards(frame, body_area, cards);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        core::msg::nav::NavMsg,
        infrastructure::{config::Config, tui::test::buffer_text},
    };

    fn draw(state: &AppState) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 20))?;
        terminal.draw(|f| LibraryComponent::new().view(state, f, f.area()))?;
        Ok(buffer_text(terminal.backend().buffer()))
    }

    #[test]
    fn test_library_lists_documents() -> color_eyre::Result<()> {
        let mut state = AppState::new_with_config(Config::embedded().unwrap_or_default());
        state.nav.update(NavMsg::SelectSection(Section::Library));

        let text = draw(&state)?;
        assert!(text.contains(PANEL_TITLE));
        assert!(text.contains(UPLOAD_NEW));
        assert!(text.contains("Advanced Calculus Notes"));
        assert!(text.contains("World War II Timeline"));
        assert!(text.contains("Shakespeare Analysis"));

        state.nav.update(NavMsg::ScrollDown);
        let text = draw(&state)?;
        assert!(!text.contains("Advanced Calculus Notes"));
        assert!(text.contains("Shakespeare Analysis"));
        Ok(())
    }
}
