use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::{
    ui::notify::{Toast, ToastVariant},
    util::colors::Palette,
};

pub const TOAST_WIDTH: u16 = 40;
pub const TOAST_HEIGHT: u16 = 4;

pub struct ToastWidget<'a> {
    toast: &'a Toast,
    palette: &'a Palette,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast, palette: &'a Palette) -> Self {
        Self { toast, palette }
    }
}

impl<'a> Widget for ToastWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = match self.toast.variant {
            ToastVariant::Default => self.palette.accent,
            ToastVariant::Destructive => self.palette.danger,
        };

        Clear.render(area, buf);
        Paragraph::new(Line::styled(
            self.toast.description,
            Style::new().fg(self.palette.foreground),
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::new().fg(accent))
                .title_top(Line::styled(
                    self.toast.title,
                    Style::new().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .style(Style::new().bg(self.palette.background)),
        )
        .render(area, buf);
    }
}
