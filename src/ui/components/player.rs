use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    symbols::{self, border},
    text::{Line, Span, ToSpan},
    widgets::{Block, Borders, Gauge, LineGauge, Paragraph, Widget},
};

use crate::{audio::state::PlaybackState, util::colors::Palette};

/// Transport bar: play button, progress, mute and volume.
pub struct PlayerWidget<'a> {
    state: &'a PlaybackState,
    title: &'a str,
    palette: &'a Palette,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(state: &'a PlaybackState, title: &'a str, palette: &'a Palette) -> Self {
        Self {
            state,
            title,
            palette,
        }
    }
}

impl<'a> Widget for PlayerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(10),
                Constraint::Length(18),
            ])
            .split(area);

        let play_icon = if self.state.is_playing { "⏸" } else { "▶" };
        let button = Paragraph::new(Line::from(play_icon.fg(self.palette.primary).bold()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::new().fg(self.palette.secondary)),
            )
            .centered();
        button.render(layout[0], buf);

        let progress = (self.state.progress / 100.0).clamp(0.0, 1.0);
        LineGauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::Set {
                        top_left: symbols::line::ROUNDED.horizontal_down,
                        bottom_left: symbols::line::ROUNDED.horizontal_up,
                        ..symbols::border::ROUNDED
                    })
                    .border_style(Style::new().fg(self.palette.secondary))
                    .title_top(Line::from(self.title.to_span().fg(self.palette.foreground)).centered()),
            )
            .filled_style(Style::new().fg(self.palette.primary))
            .unfilled_style(Style::new().fg(self.palette.neutral))
            .label(format!("{:>3.0}%", self.state.progress))
            .ratio(progress)
            .render(layout[1], buf);

        let (icon, ratio, fill) = if self.state.is_muted {
            ("🔇", 0.0, self.palette.neutral)
        } else {
            (
                "🔊",
                f64::from(self.state.volume).clamp(0.0, 1.0),
                self.palette.primary,
            )
        };
        let label = Span::styled(
            format!("{icon} {:>3}%", (self.state.volume * 100.0).round() as u8),
            Style::new()
                .fg(self.palette.foreground)
                .add_modifier(Modifier::BOLD),
        );
        Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::Set {
                        top_left: symbols::line::ROUNDED.horizontal_down,
                        bottom_left: symbols::line::ROUNDED.horizontal_up,
                        ..symbols::border::ROUNDED
                    })
                    .border_style(Style::new().fg(self.palette.secondary)),
            )
            .gauge_style(Style::new().fg(fill).bg(self.palette.background))
            .ratio(ratio)
            .label(label)
            .render(layout[2], buf);
    }
}
