use ratatui::prelude::*;

use crate::{
    core::state::{nav::scroll_limit, AppState},
    domain::{
        catalog::{QUICK_ACTIONS, RECOMMENDATIONS, STUDY_TIPS},
        section::Section,
    },
    presentation::{
        components::{scroll_position, stack_cards},
        config::Styles,
        widgets::cards::{QuickActionsCard, RecommendationCard, TipsCard},
    },
};

pub const PANEL_TITLE: &str = "AI Study Recommendations";

/// Everything the panel stacks, in scroll order
enum FeedCard<'a> {
    Recommendation(RecommendationCard<'a>),
    Tips(TipsCard<'a>),
    Actions(QuickActionsCard<'a>),
}

impl<'a> FeedCard<'a> {
    fn all(styles: &'a Styles) -> Vec<FeedCard<'a>> {
        let mut cards: Vec<FeedCard> = RECOMMENDATIONS
            .iter()
            .map(|rec| FeedCard::Recommendation(RecommendationCard::new(rec, styles)))
            .collect();
        cards.push(FeedCard::Tips(TipsCard::new(STUDY_TIPS, styles)));
        cards.push(FeedCard::Actions(QuickActionsCard::new(QUICK_ACTIONS, styles)));
        cards
    }

    fn height(&self, width: u16) -> u16 {
        match self {
            FeedCard::Recommendation(card) => card.height(width),
            FeedCard::Tips(card) => card.height(width),
            FeedCard::Actions(card) => card.height(),
        }
    }
}

impl<'a> Widget for FeedCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        match self {
            FeedCard::Recommendation(card) => card.render(area, buf),
            FeedCard::Tips(card) => card.render(area, buf),
            FeedCard::Actions(card) => card.render(area, buf),
        }
    }
}

/// Recommendation feed, study tips and quick actions; scrolled card by card
#[derive(Debug, Clone, Default)]
pub struct RecommendationsComponent;

impl RecommendationsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let position = scroll_position(
            state.nav.scroll,
            scroll_limit(Section::Recommendations),
        );
        let [title_area, position_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(position.len() as u16),
        ])
        .areas(header_area);
        frame.render_widget(
            Line::from(vec![
                Span::styled("✦ ", styles.style("primary")),
                Span::styled(PANEL_TITLE, Style::default().bold()),
            ]),
            title_area,
        );
        frame.render_widget(Span::styled(position, styles.style("muted")), position_area);

        let width = body_area.width;
        let cards = FeedCard::all(styles)
            .into_iter()
            .skip(state.nav.scroll as usize)
            .map(|card| (card.height(width), card));
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
        let mut terminal = Terminal::new(TestBackend::new(100, 60))?;
        terminal.draw(|f| RecommendationsComponent::new().view(state, f, f.area()))?;
        Ok(buffer_text(terminal.backend().buffer()))
    }

    fn state() -> AppState {
        let mut state = AppState::new_with_config(Config::embedded().unwrap_or_default());
        state.nav.update(NavMsg::SelectSection(Section::Recommendations));
        state
    }

    #[test]
    fn test_feed_from_top() -> color_eyre::Result<()> {
        let text = draw(&state())?;
        assert!(text.contains(PANEL_TITLE));
        assert!(text.contains("Focus on Calculus Derivatives"));
        assert!(text.contains("Strengthen Historical Timeline Knowledge"));
        assert!(text.contains("1/6"));
        Ok(())
    }

    #[test]
    fn test_scrolling_skips_whole_cards() -> color_eyre::Result<()> {
        let mut state = state();
        for _ in 0..4 {
            state.nav.update(NavMsg::ScrollDown);
        }

        let text = draw(&state)?;
        assert!(!text.contains("Focus on Calculus Derivatives"));
        assert!(!text.contains("Upcoming Physics Quiz Prep"));
        assert!(text.contains(TipsCard::TITLE));
        assert!(text.contains(QuickActionsCard::TITLE));
        assert!(text.contains("5/6"));
        Ok(())
    }
}
