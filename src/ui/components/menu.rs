use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

use crate::{
    content::{NavLabels, Section},
    util::colors::Palette,
};

/// Section picker shown over the page.
pub struct MenuPopup<'a> {
    title: &'a str,
    labels: &'a NavLabels,
    cursor: usize,
    palette: &'a Palette,
    alignment: Alignment,
}

impl<'a> MenuPopup<'a> {
    pub fn new(
        title: &'a str,
        labels: &'a NavLabels,
        cursor: usize,
        palette: &'a Palette,
        alignment: Alignment,
    ) -> Self {
        Self {
            title,
            labels,
            cursor,
            palette,
            alignment,
        }
    }

    pub fn height() -> u16 {
        Section::ALL.len() as u16 + 2
    }
}

impl<'a> Widget for MenuPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let style = if i == self.cursor {
                    Style::new()
                        .fg(self.palette.background)
                        .bg(self.palette.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::new().fg(self.palette.foreground)
                };
                ListItem::new(
                    Line::from(format!(" {} ", self.labels.label(*section)))
                        .alignment(self.alignment),
                )
                .style(style)
            })
            .collect();

        Clear.render(area, buf);
        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::new().fg(self.palette.primary))
                    .title_top(Line::from(self.title).centered())
                    .style(Style::new().bg(self.palette.background)),
            )
            .render(area, buf);
    }
}
