use ratatui::prelude::*;

/// A short padded label, e.g. a priority or a nav item counter
#[derive(Debug, Clone, PartialEq)]
pub struct Badge<'a> {
    label: &'a str,
    style: Style,
}

impl<'a> Badge<'a> {
    pub fn new(label: &'a str, style: Style) -> Self {
        Self { label, style }
    }
}

impl<'a> From<Badge<'a>> for Span<'a> {
    fn from(value: Badge<'a>) -> Self {
        Span::styled(format!(" {} ", value.label), value.style)
    }
}

/// A row of chips separated by a space
pub fn chips<'a>(labels: &[&'a str], style: Style) -> Line<'a> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Badge::new(label, style).into());
    }
    Line::from(spans)
}
