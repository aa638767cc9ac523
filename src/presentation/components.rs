//! Component collection and management
//!
//! Components are stateless renderers: each receives the state and an area
//! during render and owns nothing between frames.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::section::Section};

pub mod dashboard;
pub mod hero;
pub mod library;
pub mod navigation;
pub mod recommendations;
pub mod status_bar;
pub mod toast;
pub mod upload;

pub use dashboard::DashboardComponent;
pub use hero::HeroComponent;
pub use library::LibraryComponent;
pub use navigation::NavigationComponent;
pub use recommendations::RecommendationsComponent;
pub use status_bar::StatusBarComponent;
pub use toast::ToastComponent;
pub use upload::UploadComponent;

/// "current/total" indicator for card-scrolled panels
pub(crate) fn scroll_position(scroll: u16, limit: u16) -> String {
    format!("{}/{}", scroll.min(limit) + 1, limit + 1)
}

/// Draws cards top to bottom and returns how many made it on screen.
///
/// The first card is clipped when it alone is taller than `area`; later cards
/// are drawn only when they fit whole.
pub(crate) fn stack_cards<W: Widget>(
    frame: &mut Frame,
    area: Rect,
    cards: impl IntoIterator<Item = (u16, W)>,
) -> usize {
    let mut y = area.y;
    let mut drawn = 0;
    for (height, card) in cards {
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 || (drawn > 0 && height > remaining) {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, height.min(remaining));
        frame.render_widget(card, card_area);
        y = y.saturating_add(height);
        drawn += 1;
    }
    drawn
}

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub navigation: NavigationComponent,
    pub hero: HeroComponent,
    pub dashboard: DashboardComponent,
    pub upload: UploadComponent,
    pub recommendations: RecommendationsComponent,
    pub library: LibraryComponent,
    pub status_bar: StatusBarComponent,
    pub toast: ToastComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        if state.nav.is_hero() {
            self.hero.view(state, frame, area);
            self.toast.view(state, frame, area);
            return;
        }

        let [header_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(navigation::HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.navigation.view(state, frame, header_area);

        let panel_area = Block::new()
            .padding(Padding::horizontal(1))
            .inner(main_area);
        match state.nav.active() {
            Section::Hero => self.hero.view(state, frame, panel_area),
            Section::Dashboard => self.dashboard.view(state, frame, panel_area),
            Section::Upload => self.upload.view(state, frame, panel_area),
            Section::Recommendations => self.recommendations.view(state, frame, panel_area),
            Section::Library => self.library.view(state, frame, panel_area),
        }

        self.status_bar.view(state, frame, status_area);
        self.navigation.view_menu(state, frame, main_area);
        self.toast.view(state, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use rstest::rstest;

    use super::*;
    use crate::{
        core::msg::nav::NavMsg,
        infrastructure::{config::Config, tui::test::buffer_text},
    };

    fn render(state: &AppState, width: u16, height: u16) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        let mut components = Components::new();
        terminal.draw(|f| components.render(f, state))?;
        Ok(buffer_text(terminal.backend().buffer()))
    }

    #[rstest]
    #[case(0, 5, "1/6")]
    #[case(5, 5, "6/6")]
    #[case(9, 2, "3/3")]
    fn test_scroll_position(#[case] scroll: u16, #[case] limit: u16, #[case] expected: &str) {
        assert_eq!(scroll_position(scroll, limit), expected);
    }

    #[test]
    fn test_stack_cards_stops_at_first_overflow() -> color_eyre::Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(10, 5))?;
        let mut drawn = 0;
        terminal.draw(|f| {
            let cards = ["a", "b", "c"].map(|s| (2, Paragraph::new(s)));
            drawn = stack_cards(f, f.area(), cards);
        })?;
        assert_eq!(drawn, 2);
        assert_eq!(buffer_text(terminal.backend().buffer()), "a\n\nb\n\n");
        Ok(())
    }

    #[test]
    fn test_stack_cards_clips_oversized_first_card() -> color_eyre::Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(10, 2))?;
        let mut drawn = 0;
        terminal.draw(|f| {
            drawn = stack_cards(f, f.area(), [(4, Paragraph::new("a\nb\nc\nd"))]);
        })?;
        assert_eq!(drawn, 1);
        assert_eq!(buffer_text(terminal.backend().buffer()), "a\nb");
        Ok(())
    }

    #[test]
    fn test_hero_has_no_shell() -> color_eyre::Result<()> {
        let text = render(&AppState::default(), 100, 30)?;
        assert!(text.contains(hero::ENTER_PLATFORM));
        assert!(!text.contains(navigation::SETTINGS));
        Ok(())
    }

    #[rstest]
    #[case(Section::Dashboard, dashboard::PROGRESS_TITLE)]
    #[case(Section::Upload, upload::PANEL_TITLE)]
    #[case(Section::Recommendations, recommendations::PANEL_TITLE)]
    #[case(Section::Library, library::PANEL_TITLE)]
    fn test_active_panel_is_rendered(
        #[case] section: Section,
        #[case] marker: &str,
    ) -> color_eyre::Result<()> {
        let mut state = AppState::new_with_config(Config::embedded().unwrap_or_default());
        state.nav.update(NavMsg::SelectSection(section));

        let text = render(&state, 120, 50)?;

        assert!(text.contains(marker), "{section} missing {marker:?}");
        assert!(text.contains(navigation::BRAND_WIDE));
        assert!(text.contains(section.title()));
        Ok(())
    }
}
