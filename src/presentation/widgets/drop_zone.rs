use ratatui::{prelude::*, widgets::*};

use crate::presentation::config::Styles;

pub const DROP_ZONE_TITLE: &str = "Upload Study Materials";
pub const DROP_ZONE_HINT: &str = "Drag & drop files here, or press o to select";
pub const DROP_ZONE_FORMATS: &str = "Supports: PDF, DOCX, TXT, MD • Max 20MB per file";
pub const CHOOSE_FILES: &str = "Choose Files";

/// Target for pasted paths. `active` is the drag-over look, shown while
/// the file picker is open.
pub struct DropZone<'a> {
    active: bool,
    styles: &'a Styles,
}

impl<'a> DropZone<'a> {
    pub fn new(active: bool, styles: &'a Styles) -> Self {
        Self { active, styles }
    }

    /// Rows needed to show every line
    pub const HEIGHT: u16 = 8;
}

impl<'a> Widget for DropZone<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (border_style, border_type) = if self.active {
            (self.styles.style("drop_zone_active"), BorderType::Thick)
        } else {
            (self.styles.style("drop_zone"), BorderType::Rounded)
        };
        let muted = self.styles.style("muted");

        let lines = vec![
            Line::styled("⇪", muted),
            Line::styled(DROP_ZONE_TITLE, Style::default().bold()),
            Line::styled(DROP_ZONE_HINT, muted),
            Line::styled(DROP_ZONE_FORMATS, muted),
            Line::default(),
            Line::styled(
                format!("[ {CHOOSE_FILES} ]"),
                self.styles.style("nav_active"),
            ),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(border_type)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::infrastructure::tui::test::buffer_text;

    fn draw(active: bool) -> color_eyre::Result<Buffer> {
        let styles = Styles::default();
        let mut terminal = Terminal::new(TestBackend::new(60, DropZone::HEIGHT))?;
        terminal.draw(|f| f.render_widget(DropZone::new(active, &styles), f.area()))?;
        Ok(terminal.backend().buffer().clone())
    }

    #[test]
    fn test_texts() -> color_eyre::Result<()> {
        let text = buffer_text(&draw(false)?);
        for expected in [DROP_ZONE_TITLE, DROP_ZONE_HINT, DROP_ZONE_FORMATS, CHOOSE_FILES] {
            assert!(text.contains(expected), "missing {expected}");
        }
        Ok(())
    }

    #[test]
    fn test_active_uses_thick_border() -> color_eyre::Result<()> {
        assert_eq!(draw(true)?[(0, 0)].symbol(), "┏");
        assert_eq!(draw(false)?[(0, 0)].symbol(), "╭");
        Ok(())
    }
}
