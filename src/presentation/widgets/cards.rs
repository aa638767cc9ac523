//! Cards stacked by the scrollable panels
//!
//! Every card knows its own height for a given width, so a panel can skip
//! the first `scroll` cards and fill the rest of its area.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::catalog::{
        DocumentStatus, LibraryDocument, Priority, QuickAction, Recommendation,
        RecommendationKind, StudyTip, TipKind,
    },
    presentation::{config::Styles, widgets::badge},
};

/// Rows a word-wrapped `text` needs at `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let mut lines = 1usize;
    let mut used = 0;
    for word in text.split_whitespace() {
        let w = word.width();
        if used > 0 && used + 1 + w <= width {
            used += 1 + w;
            continue;
        }
        if used > 0 {
            lines += 1;
        }
        // words longer than a row spill over
        lines += w.saturating_sub(1) / width;
        used = match w % width {
            0 if w > 0 => width,
            rest => rest,
        };
    }
    lines as u16
}

fn card_block<'a>(title: Option<Line<'a>>) -> Block<'a> {
    let block = Block::bordered().border_type(BorderType::Rounded);
    match title {
        Some(title) => block.title(title),
        None => block,
    }
}

pub fn kind_icon(kind: RecommendationKind) -> &'static str {
    match kind {
        RecommendationKind::Urgent => "◎",
        RecommendationKind::Opportunity => "↗",
        RecommendationKind::Reinforcement => "✓",
        RecommendationKind::Preparation => "▦",
    }
}

pub fn tip_icon(kind: TipKind) -> &'static str {
    match kind {
        TipKind::Clock => "◷",
        TipKind::Trend => "↗",
        TipKind::Target => "◎",
    }
}

fn priority_style(priority: Priority, styles: &Styles) -> Style {
    match priority {
        Priority::High => styles.style("badge"),
        Priority::Medium => styles.style("nav_active"),
        Priority::Low => styles.style("muted").reversed(),
    }
}

pub struct RecommendationCard<'a> {
    rec: &'a Recommendation,
    styles: &'a Styles,
}

impl<'a> RecommendationCard<'a> {
    pub fn new(rec: &'a Recommendation, styles: &'a Styles) -> Self {
        Self { rec, styles }
    }

    pub fn height(&self, width: u16) -> u16 {
        // title, meta and tag rows plus borders
        wrapped_height(self.rec.description, width.saturating_sub(2)) + 5
    }
}

impl<'a> Widget for RecommendationCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = card_block(None);
        let inner = block.inner(area);
        block.render(area, buf);

        let desc_height = wrapped_height(self.rec.description, inner.width);
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(desc_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        Line::from(vec![
            Span::styled(
                format!("{} ", kind_icon(self.rec.kind)),
                self.styles.style("primary"),
            ),
            Span::styled(self.rec.title, Style::default().bold()),
            Span::raw(" "),
            badge::Badge::new(
                self.rec.priority.label(),
                priority_style(self.rec.priority, self.styles),
            )
            .into(),
        ])
        .render(rows[0], buf);

        Paragraph::new(self.rec.description)
            .style(self.styles.style("muted"))
            .wrap(Wrap { trim: true })
            .render(rows[1], buf);

        let meta = Line::from(vec![
            Span::styled(
                format!("◷ {}  ★ {}% confidence", self.rec.estimated_time, self.rec.confidence),
                self.styles.style("muted"),
            ),
        ]);
        let action = Line::styled(
            format!("[ {} → ]", self.rec.action),
            self.styles.style("nav_active"),
        );
        let [meta_area, action_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(action.width() as u16),
        ])
        .areas(rows[2]);
        meta.render(meta_area, buf);
        action.render(action_area, buf);

        badge::chips(self.rec.tags, self.styles.style("muted").reversed()).render(rows[3], buf);
    }
}

/// "Personalized Study Tips" card holding every tip
pub struct TipsCard<'a> {
    tips: &'a [StudyTip],
    styles: &'a Styles,
}

impl<'a> TipsCard<'a> {
    pub const TITLE: &'static str = "Personalized Study Tips";

    pub fn new(tips: &'a [StudyTip], styles: &'a Styles) -> Self {
        Self { tips, styles }
    }

    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(4);
        self.tips
            .iter()
            .map(|tip| 1 + wrapped_height(tip.tip, inner))
            .sum::<u16>()
            + 2
    }
}

impl<'a> Widget for TipsCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let accent = self.styles.style("accent");
        let block = card_block(Some(Line::from(vec![
            Span::styled(" ✦ ", accent),
            Span::styled(Self::TITLE, Style::default().bold()),
            Span::raw(" "),
        ])));
        let inner = block.inner(area);
        block.render(area, buf);

        let tip_width = inner.width.saturating_sub(2);
        let constraints: Vec<Constraint> = self
            .tips
            .iter()
            .map(|tip| Constraint::Length(1 + wrapped_height(tip.tip, tip_width)))
            .collect();
        let rows = Layout::vertical(constraints).split(inner);

        for (tip, row) in self.tips.iter().zip(rows.iter()) {
            let [icon_area, body_area] =
                Layout::horizontal([Constraint::Length(2), Constraint::Min(0)]).areas(*row);
            Span::styled(tip_icon(tip.kind), accent).render(icon_area, buf);

            let [title_area, text_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(body_area);
            Span::styled(tip.title, Style::default().bold()).render(title_area, buf);
            Paragraph::new(tip.tip)
                .style(self.styles.style("muted"))
                .wrap(Wrap { trim: true })
                .render(text_area, buf);
        }
    }
}

/// "Quick Study Actions" card
pub struct QuickActionsCard<'a> {
    actions: &'a [QuickAction],
    styles: &'a Styles,
}

impl<'a> QuickActionsCard<'a> {
    pub const TITLE: &'static str = "Quick Study Actions";

    pub fn new(actions: &'a [QuickAction], styles: &'a Styles) -> Self {
        Self { actions, styles }
    }

    pub fn height(&self) -> u16 {
        self.actions.len() as u16 + 2
    }
}

impl<'a> Widget for QuickActionsCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = card_block(Some(Line::from(vec![
            Span::styled(" ◎ ", self.styles.style("success")),
            Span::styled(Self::TITLE, Style::default().bold()),
            Span::raw(" "),
        ])));
        let lines: Vec<Line> = self
            .actions
            .iter()
            .map(|action| {
                Line::from(vec![
                    Span::styled(format!("[ {} ]", action.title), self.styles.style("primary")),
                    Span::raw(" "),
                    Span::styled(action.caption, self.styles.style("muted")),
                ])
            })
            .collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct DocumentCard<'a> {
    doc: &'a LibraryDocument,
    styles: &'a Styles,
}

impl<'a> DocumentCard<'a> {
    pub const HEIGHT: u16 = 5;

    pub fn new(doc: &'a LibraryDocument, styles: &'a Styles) -> Self {
        Self { doc, styles }
    }

    fn status_style(&self) -> Style {
        match self.doc.status {
            DocumentStatus::Processed => self.styles.style("success").reversed(),
            DocumentStatus::Processing => self.styles.style("accent").reversed(),
        }
    }
}

impl<'a> Widget for DocumentCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = card_block(None);
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(32)]).areas(inner);
        let left_rows = Layout::vertical([Constraint::Length(1); 3]).split(left);
        let right_rows = Layout::vertical([Constraint::Length(1); 3]).split(right);

        Line::from(vec![
            Span::styled("▤ ", self.styles.style("primary")),
            Span::styled(self.doc.title, Style::default().bold()),
        ])
        .render(left_rows[0], buf);
        Line::styled(
            format!(
                "  {} • {}   ◷ {}",
                self.doc.kind, self.doc.size, self.doc.upload_date
            ),
            self.styles.style("muted"),
        )
        .render(left_rows[1], buf);
        Line::from(vec![
            Span::raw("  "),
            Span::styled("[ View ]", self.styles.style("primary")),
            Span::raw(" "),
            Span::styled("[ Quiz ]", self.styles.style("primary")),
        ])
        .render(left_rows[2], buf);

        Line::from(Span::from(badge::Badge::new(
            self.doc.status.label(),
            self.status_style(),
        )))
        .alignment(Alignment::Right)
        .render(right_rows[0], buf);
        badge::chips(self.doc.subjects, self.styles.style("muted").reversed())
            .alignment(Alignment::Right)
            .render(right_rows[1], buf);
    }
}
