use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::catalog::{StatCard, StatTone},
    presentation::config::Styles,
};

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub styles: &'a Styles,
}

/// One headline number of the dashboard
pub struct StatCardWidget<'a> {
    card: &'a StatCard,
    ctx: ViewContext<'a>,
}

impl<'a> StatCardWidget<'a> {
    pub fn new(card: &'a StatCard, ctx: ViewContext<'a>) -> Self {
        Self { card, ctx }
    }

    fn tone_style(&self) -> Style {
        let name = match self.card.tone {
            StatTone::Primary => "primary",
            StatTone::Success => "success",
            StatTone::Accent => "accent",
        };
        self.ctx.styles.style(name)
    }

    pub fn caption(&self) -> Span<'a> {
        if self.card.trending {
            Span::styled(
                format!("↗ {}", self.card.caption),
                self.ctx.styles.style("success"),
            )
        } else {
            Span::styled(self.card.caption, self.ctx.styles.style("muted"))
        }
    }
}

impl<'a> Widget for StatCardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered().border_type(BorderType::Rounded);
        let lines = vec![
            Line::styled(self.card.label, self.ctx.styles.style("muted")),
            Line::styled(self.card.value, self.tone_style().bold()),
            Line::from(self.caption()),
        ];
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
