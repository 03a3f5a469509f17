use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{List, ListItem, Widget},
};

use crate::util::colors::Palette;

pub struct Sidebar<'a> {
    items: Vec<&'a str>,
    selected_index: usize,
    palette: &'a Palette,
    alignment: Alignment,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: Vec<&'a str>, selected_index: usize, palette: &'a Palette) -> Self {
        Self {
            items,
            selected_index,
            palette,
            alignment: Alignment::Left,
        }
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl<'a> Widget for Sidebar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let (marker, style) = if i == self.selected_index {
                    (
                        "▌",
                        Style::default()
                            .fg(self.palette.primary)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (" ", Style::default().fg(self.palette.neutral))
                };
                let text = match self.alignment {
                    Alignment::Right => format!("{item} {} {marker}", i + 1),
                    _ => format!("{marker} {} {item}", i + 1),
                };
                ListItem::new(Line::from(text).alignment(self.alignment)).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
