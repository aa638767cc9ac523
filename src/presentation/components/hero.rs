use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState, domain::catalog::HERO_FEATURES,
    presentation::config::keybindings::Action,
};

pub const HEADLINE: &str = "AI-Powered";
pub const HEADLINE_ACCENT: &str = "Study Platform";
pub const TAGLINE: &str = "Transform your learning with intelligent document processing, automated assessments, and personalized study recommendations powered by AI.";
pub const ENTER_PLATFORM: &str = "Enter Platform";

/// Landing panel shown before the navigation shell
#[derive(Debug, Clone, Default)]
pub struct HeroComponent;

impl HeroComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(&self, state: &AppState) -> Vec<Line<'static>> {
        let styles = &state.config.config.styles;
        let primary = styles.style("primary");
        let muted = styles.style("muted");

        // two pills per row so narrow terminals never split one
        let features: Vec<Line> = HERO_FEATURES
            .chunks(2)
            .map(|pair| {
                let spans: Vec<Span> = pair
                    .iter()
                    .map(|label| Span::styled(format!(" ( ● {label} ) "), muted))
                    .collect();
                Line::from(spans)
            })
            .collect();

        let enter_hint = state
            .config
            .config
            .keybindings
            .hint_for(Action::Activate)
            .map(|key| format!("  press {key}"))
            .unwrap_or_default();

        let mut lines = vec![
            Line::styled(HEADLINE, Style::default().bold()),
            Line::styled(HEADLINE_ACCENT, primary.bold()),
            Line::default(),
            Line::raw(TAGLINE),
            Line::default(),
            Line::from(vec![
                Span::styled("[ ⇪ Upload Documents ]", styles.style("nav_active")),
                Span::raw("  "),
                Span::styled("[ ▦ View Analytics ]", primary),
            ]),
            Line::default(),
        ];
        lines.extend(features);
        lines.extend([
            Line::default(),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("[ {ENTER_PLATFORM} ]"), styles.style("nav_active").bold()),
                Span::styled(enter_hint, muted),
            ]),
        ]);
        lines
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let lines = self.lines(state);
        let width = area.width.saturating_sub(4).min(80);
        let height = (lines.len() as u16 + 4).min(area.height);

        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            content,
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::infrastructure::{config::Config, tui::test::buffer_text};

    #[test]
    fn test_hero_content() -> color_eyre::Result<()> {
        let state = AppState::new_with_config(Config::embedded().unwrap_or_default());
        let mut terminal = Terminal::new(TestBackend::new(100, 30))?;
        terminal.draw(|f| HeroComponent::new().view(&state, f, f.area()))?;

        let text = buffer_text(terminal.backend().buffer());
        for expected in [
            HEADLINE,
            HEADLINE_ACCENT,
            "Transform your learning",
            "Upload Documents",
            "View Analytics",
            "Smart Assessments",
            ENTER_PLATFORM,
            "press Enter",
        ] {
            assert!(text.contains(expected), "missing {expected}");
        }
        Ok(())
    }
}
