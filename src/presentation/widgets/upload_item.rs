use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        text::truncate_to_width,
        upload::{format_file_size, UploadRecord, UploadStatus},
    },
    presentation::config::Styles,
};

pub const GENERATE_QUIZ: &str = "Generate Quiz";
pub const VIEW_ANALYSIS: &str = "View Analysis";

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub styles: &'a Styles,
    pub selected: bool,
    /// Key hint shown next to the dismiss mark, e.g. `x`
    pub remove_hint: Option<&'a str>,
}

/// One upload record: name, size, progress or completion actions
pub struct UploadItem<'a> {
    record: &'a UploadRecord,
    ctx: ViewContext<'a>,
}

impl<'a> UploadItem<'a> {
    pub fn new(record: &'a UploadRecord, ctx: ViewContext<'a>) -> Self {
        Self { record, ctx }
    }

    /// Rows taken by one item, borders included
    pub const HEIGHT: u16 = 5;

    fn header(&self, width: u16) -> Line<'a> {
        let mut right = vec![];
        if self.record.is_completed() {
            right.push(Span::styled("✓ ", self.ctx.styles.style("success")));
        }
        let dismiss = match self.ctx.remove_hint {
            Some(hint) => format!("✕ {hint}"),
            None => "✕".to_string(),
        };
        right.push(Span::styled(dismiss, self.ctx.styles.style("muted")));

        let right_width: usize = right.iter().map(Span::width).sum();
        let name_width = (width as usize).saturating_sub(right_width + 3);
        let name = truncate_to_width(&self.record.name, name_width);
        let gap = (width as usize).saturating_sub(name.width() + 2 + right_width);

        let mut spans = vec![
            Span::styled("▤ ", self.ctx.styles.style("primary")),
            Span::styled(name, Style::default().bold()),
            Span::raw(" ".repeat(gap)),
        ];
        spans.extend(right);
        Line::from(spans)
    }

    fn caption_style(&self) -> Style {
        match self.record.status {
            UploadStatus::Error => Style::default().fg(Color::Red),
            _ => self.ctx.styles.style("muted"),
        }
    }
}

impl<'a> Widget for UploadItem<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut block = Block::bordered().border_type(BorderType::Rounded);
        if self.ctx.selected {
            block = block
                .border_type(BorderType::Thick)
                .border_style(self.ctx.styles.style("primary"));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Length(1); 3]).split(inner);

        self.header(inner.width).render(rows[0], buf);

        let size = Span::styled(
            format_file_size(self.record.size),
            self.ctx.styles.style("muted"),
        );

        if self.record.is_completed() {
            Line::from(size).render(rows[1], buf);
            let outline = self.ctx.styles.style("primary");
            Line::from(vec![
                Span::styled(format!("[ {GENERATE_QUIZ} ]"), outline),
                Span::raw(" "),
                Span::styled(format!("[ {VIEW_ANALYSIS} ]"), outline),
            ])
            .render(rows[2], buf);
            return;
        }

        Line::from(vec![
            size,
            Span::raw(" • "),
            Span::styled(self.record.status.caption(), self.caption_style()),
        ])
        .render(rows[1], buf);

        LineGauge::default()
            .filled_style(self.ctx.styles.style("primary"))
            .unfilled_style(self.ctx.styles.style("muted"))
            .line_set(symbols::line::THICK)
            .ratio((self.record.progress / 100.0).clamp(0.0, 1.0))
            .label(format!("{:>3}%", self.record.percent()))
            .render(rows[2], buf);
    }
}
