use chrono::NaiveDate;
use ratatui::{prelude::*, symbols::Marker, widgets::*};

use crate::{
    core::state::AppState,
    domain::catalog::{PERFORMANCE, STAT_CARDS, STUDY_SESSIONS, SUBJECTS},
    presentation::{
        components::navigation::is_wide,
        config::Styles,
        widgets::{
            badge::Badge,
            catalog_color,
            stat_card::{self, StatCardWidget},
        },
    },
};

pub const PROGRESS_TITLE: &str = "Study Progress Over Time";
pub const DISTRIBUTION_TITLE: &str = "Performance Distribution";
pub const SUBJECTS_TITLE: &str = "Subject Progress";

const STAT_CARD_HEIGHT: u16 = 5;

/// `2024-01-03` -> `Jan 03`; anything unparsable is shown as is
pub fn date_label(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date.format("%b %d").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

fn titled_block<'a>(icon: &'a str, title: &'a str, icon_style: Style) -> Block<'a> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .title(Line::from(vec![
            Span::styled(format!(" {icon} "), icon_style),
            Span::styled(title, Style::default().bold()),
            Span::raw(" "),
        ]))
}

/// Analytics panel: stat cards, charts and subject progress
#[derive(Debug, Clone, Default)]
pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let wide = is_wide(area.width);
        let cards_height = if wide {
            STAT_CARD_HEIGHT
        } else {
            STAT_CARD_HEIGHT * 2
        };
        let subjects_height = SUBJECTS.len() as u16 + 2;

        let [cards_area, charts_area, subjects_area] = Layout::vertical([
            Constraint::Length(cards_height),
            Constraint::Min(8),
            Constraint::Length(subjects_height),
        ])
        .areas(area);

        self.view_stat_cards(styles, frame, cards_area, wide);

        let [progress_area, distribution_area] = if wide {
            Layout::horizontal([Constraint::Percentage(50); 2]).areas(charts_area)
        } else {
            Layout::vertical([Constraint::Percentage(50); 2]).areas(charts_area)
        };
        self.view_progress_chart(styles, frame, progress_area);
        self.view_distribution(styles, frame, distribution_area);
        self.view_subjects(styles, frame, subjects_area);
    }

    fn view_stat_cards(&self, styles: &Styles, frame: &mut Frame, area: Rect, wide: bool) {
        let ctx = stat_card::ViewContext { styles };
        let cells: Vec<Rect> = if wide {
            Layout::horizontal([Constraint::Ratio(1, 4); 4])
                .split(area)
                .to_vec()
        } else {
            Layout::vertical([Constraint::Length(STAT_CARD_HEIGHT); 2])
                .split(area)
                .iter()
                .flat_map(|row| {
                    Layout::horizontal([Constraint::Ratio(1, 2); 2])
                        .split(*row)
                        .to_vec()
                })
                .collect()
        };

        for (card, cell) in STAT_CARDS.iter().zip(cells) {
            frame.render_widget(StatCardWidget::new(card, ctx), cell);
        }
    }

    fn view_progress_chart(&self, styles: &Styles, frame: &mut Frame, area: Rect) {
        let points: Vec<(f64, f64)> = STUDY_SESSIONS
            .iter()
            .enumerate()
            .map(|(i, session)| (i as f64, session.hours))
            .collect();
        let max_hours = STUDY_SESSIONS
            .iter()
            .map(|s| s.hours)
            .fold(0.0_f64, f64::max)
            .ceil();

        let first = STUDY_SESSIONS.first().map(|s| date_label(s.date));
        let middle = STUDY_SESSIONS
            .get(STUDY_SESSIONS.len() / 2)
            .map(|s| date_label(s.date));
        let last = STUDY_SESSIONS.last().map(|s| date_label(s.date));
        let x_labels: Vec<String> = [first, middle, last].into_iter().flatten().collect();

        let dataset = Dataset::default()
            .name("hours")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(styles.style("primary"))
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .block(titled_block("▦", PROGRESS_TITLE, styles.style("primary")))
            .legend_position(None)
            .x_axis(
                Axis::default()
                    .style(styles.style("muted"))
                    .bounds([0.0, points.len().saturating_sub(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(styles.style("muted"))
                    .bounds([0.0, max_hours])
                    .labels([
                        "0".to_string(),
                        format!("{}", max_hours / 2.0),
                        format!("{max_hours}"),
                    ]),
            );
        frame.render_widget(chart, area);
    }

    fn view_distribution(&self, styles: &Styles, frame: &mut Frame, area: Rect) {
        let block = titled_block("★", DISTRIBUTION_TITLE, styles.style("success"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [bars_area, legend_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let bars: Vec<Bar> = PERFORMANCE
            .iter()
            .map(|bucket| {
                let color = catalog_color(bucket.color);
                Bar::default()
                    .value(u64::from(bucket.value))
                    .text_value(format!("{}%", bucket.value))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();
        let bar_width = (bars_area.width / PERFORMANCE.len().max(1) as u16)
            .saturating_sub(2)
            .clamp(3, 16);
        frame.render_widget(
            BarChart::default()
                .data(BarGroup::default().bars(&bars))
                .bar_width(bar_width)
                .bar_gap(2)
                .max(100),
            bars_area,
        );

        let mut legend = vec![];
        for bucket in PERFORMANCE {
            legend.push(Span::styled("■ ", Style::default().fg(catalog_color(bucket.color))));
            legend.push(Span::raw(format!("{}: {}%  ", bucket.name, bucket.value)));
        }
        frame.render_widget(
            Line::from(legend).alignment(Alignment::Center),
            legend_area,
        );
    }

    fn view_subjects(&self, styles: &Styles, frame: &mut Frame, area: Rect) {
        let block = titled_block("◎", SUBJECTS_TITLE, styles.style("accent"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical(vec![Constraint::Length(1); SUBJECTS.len()]).split(inner);
        for (subject, row) in SUBJECTS.iter().zip(rows.iter()) {
            let color = catalog_color(subject.color);
            let [name_area, gauge_area, value_area] = Layout::horizontal([
                Constraint::Length(13),
                Constraint::Min(0),
                Constraint::Length(6),
            ])
            .areas(*row);

            frame.render_widget(Span::raw(subject.subject), name_area);
            frame.render_widget(
                LineGauge::default()
                    .filled_style(Style::default().fg(color))
                    .unfilled_style(styles.style("muted"))
                    .line_set(symbols::line::THICK)
                    .label("")
                    .ratio(f64::from(subject.progress) / 100.0),
                gauge_area,
            );
            let value = format!("{}%", subject.progress);
            frame.render_widget(
                Line::from(Span::from(Badge::new(&value, styles.style("muted").reversed())))
                    .alignment(Alignment::Right),
                value_area,
            );
        }
    }
}
