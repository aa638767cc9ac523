//! Navigation shell
//!
//! Wide terminals get the full bar; narrow ones a compact header whose
//! menu opens as an overlay.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::catalog::NAV_ITEMS,
    presentation::{config::keybindings::Action, widgets::badge::Badge},
};

/// Narrowest terminal that still gets the full navigation bar
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;
pub const BRAND_WIDE: &str = "StudyPlatform AI";
pub const BRAND_COMPACT: &str = "StudyPlatform";
pub const SETTINGS: &str = "Settings";
pub const PROFILE: &str = "Profile";
/// Header row plus its bottom rule
pub const HEADER_HEIGHT: u16 = 2;

pub fn is_wide(width: u16) -> bool {
    width >= WIDE_LAYOUT_MIN_WIDTH
}

#[derive(Debug, Clone, Default)]
pub struct NavigationComponent;

impl NavigationComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(styles.style("muted"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (left, right) = if is_wide(area.width) {
            (self.bar(state), self.account_line(state))
        } else {
            (self.compact_brand(state), self.menu_indicator(state))
        };

        let [left_area, right_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(right.width() as u16),
        ])
        .areas(inner);
        frame.render_widget(left, left_area);
        frame.render_widget(right, right_area);
    }

    /// Brand followed by every nav item; the active one highlighted
    pub fn bar(&self, state: &AppState) -> Line<'static> {
        let styles = &state.config.config.styles;
        let mut spans = vec![
            Span::styled("◆ ", styles.style("brand")),
            Span::styled(BRAND_WIDE, styles.style("brand")),
            Span::raw("   "),
        ];

        for item in NAV_ITEMS {
            let style = if item.section == state.nav.active() {
                styles.style("nav_active")
            } else {
                styles.style("nav_inactive")
            };
            spans.push(Span::styled(format!(" {} ", item.section.title()), style));
            if let Some(badge) = item.badge {
                spans.push(Badge::new(badge, styles.style("badge")).into());
            }
            spans.push(Span::raw(" "));
        }

        Line::from(spans)
    }

    fn account_line(&self, state: &AppState) -> Line<'static> {
        let muted = state.config.config.styles.style("nav_inactive");
        Line::from(vec![
            Span::styled(format!("⚙ {SETTINGS}"), muted),
            Span::raw("  "),
            Span::styled(format!("◉ {PROFILE}"), muted),
        ])
    }

    fn compact_brand(&self, state: &AppState) -> Line<'static> {
        let brand = state.config.config.styles.style("brand");
        Line::from(vec![
            Span::styled("◆ ", brand),
            Span::styled(BRAND_COMPACT, brand),
        ])
    }

    fn menu_indicator(&self, state: &AppState) -> Line<'static> {
        let (icon, label) = if state.nav.menu_open {
            ("✕", "Close")
        } else {
            ("≡", "Menu")
        };
        let hint = state
            .config
            .config
            .keybindings
            .hint_for(Action::ToggleMenu)
            .map(|key| format!(" ({key})"))
            .unwrap_or_default();
        Line::styled(
            format!("{icon} {label}{hint}"),
            state.config.config.styles.style("nav_inactive"),
        )
    }

    /// Entries of the compact menu, nav items first
    pub fn menu_items(&self, state: &AppState) -> Vec<ListItem<'static>> {
        let styles = &state.config.config.styles;
        let mut items: Vec<ListItem> = NAV_ITEMS
            .iter()
            .map(|item| {
                let active = item.section == state.nav.active();
                let mut spans = vec![Span::styled(
                    format!("{} {}", if active { "▸" } else { " " }, item.section.title()),
                    if active {
                        styles.style("nav_active")
                    } else {
                        Style::default()
                    },
                )];
                if let Some(badge) = item.badge {
                    spans.push(Span::raw(" "));
                    spans.push(Badge::new(badge, styles.style("badge")).into());
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        items.push(ListItem::new(Line::styled(
            format!("  ⚙ {SETTINGS}"),
            styles.style("nav_inactive"),
        )));
        items.push(ListItem::new(Line::styled(
            format!("  ◉ {PROFILE}"),
            styles.style("nav_inactive"),
        )));
        items
    }

    /// Menu overlay in the top-right corner of `area` (the panel area)
    pub fn view_menu(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.nav.menu_open || is_wide(frame.area().width) {
            return;
        }

        let items = self.menu_items(state);
        let width = 26.min(area.width);
        let height = (items.len() as u16 + 2).min(area.height);
        let menu_area = Rect::new(area.right().saturating_sub(width), area.y, width, height);

        frame.render_widget(Clear, menu_area);
        frame.render_widget(
            List::new(items).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" Menu "),
            ),
            menu_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        core::msg::nav::NavMsg, domain::section::Section,
        infrastructure::{config::Config, tui::test::buffer_text},
    };

    fn state_on(section: Section) -> AppState {
        let mut state = AppState::new_with_config(Config::embedded().unwrap_or_default());
        state.nav.update(NavMsg::SelectSection(section));
        state
    }

    fn draw(state: &AppState, width: u16) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, 12))?;
        let nav = NavigationComponent::new();
        terminal.draw(|f| {
            let [header, body] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(f.area());
            nav.view(state, f, header);
            nav.view_menu(state, f, body);
        })?;
        Ok(buffer_text(terminal.backend().buffer()))
    }

    #[test]
    fn test_wide_bar() -> color_eyre::Result<()> {
        let text = draw(&state_on(Section::Upload), 120)?;
        let first = text.lines().next().unwrap_or_default();
        assert!(first.contains(BRAND_WIDE));
        for label in ["Dashboard", "Upload", "AI Insights", "Library", SETTINGS, PROFILE] {
            assert!(first.contains(label), "missing {label}");
        }
        assert!(first.contains(" 3 "));
        Ok(())
    }

    #[test]
    fn test_compact_header_hides_items_until_menu_opens() -> color_eyre::Result<()> {
        let mut state = state_on(Section::Library);
        let text = draw(&state, 60)?;
        assert!(text.contains(BRAND_COMPACT));
        assert!(!text.contains(BRAND_WIDE));
        assert!(text.contains("≡ Menu (m)"));
        assert!(!text.contains("AI Insights"));

        state.nav.update(NavMsg::ToggleMenu);
        let text = draw(&state, 60)?;
        assert!(text.contains("✕ Close"));
        assert!(text.contains("AI Insights"));
        assert!(text.contains("▸ Library"));
        assert!(text.contains(SETTINGS));
        assert!(text.contains(PROFILE));
        Ok(())
    }

    #[test]
    fn test_active_item_is_highlighted() {
        let state = state_on(Section::Dashboard);
        let line = NavigationComponent::new().bar(&state);
        let active = line
            .spans
            .iter()
            .find(|s| s.content == " Dashboard ")
            .map(|s| s.style);
        assert_eq!(active, Some(state.config.config.styles.style("nav_active")));
    }

    #[test]
    fn test_layout_breakpoint() {
        assert!(is_wide(100));
        assert!(!is_wide(99));
    }
}
