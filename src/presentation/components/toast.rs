use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 4;

/// Transient notification in the bottom-right corner
#[derive(Debug, Clone, Default)]
pub struct ToastComponent;

impl ToastComponent {
    pub fn new() -> Self {
        Self
    }

    /// Where the toast goes inside `area`; leaves one row for the status bar
    pub fn placement(area: Rect) -> Rect {
        let width = TOAST_WIDTH.min(area.width);
        let height = TOAST_HEIGHT.min(area.height);
        Rect::new(
            area.right().saturating_sub(width + 1).max(area.x),
            area.bottom().saturating_sub(height + 1).max(area.y),
            width,
            height,
        )
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(toast) = state.system.toast() else {
            return;
        };
        let styles = &state.config.config.styles;
        let toast_area = Self::placement(area);

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("✓ ", styles.style("success")),
                    Span::styled(toast.title.as_str(), Style::default().bold()),
                ]),
                Line::raw(toast.description.as_str()),
            ])
            .wrap(Wrap { trim: true })
            .style(styles.style("toast"))
            .block(Block::bordered().border_type(BorderType::Rounded)),
            toast_area,
        );
    }
}
