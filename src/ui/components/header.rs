use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{content::profile, util::colors::Palette};

pub struct Header<'a> {
    language_switch: &'a str,
    theme_label: &'a str,
    lang_code: &'a str,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(
        language_switch: &'a str,
        theme_label: &'a str,
        lang_code: &'a str,
        palette: &'a Palette,
    ) -> Self {
        Self {
            language_switch,
            theme_label,
            lang_code,
            palette,
        }
    }
}

impl<'a> Widget for Header<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let brand = Line::from(vec![
            Span::styled(" ⛨ ", Style::new().fg(self.palette.primary)),
            Span::styled(
                profile::BRAND,
                Style::new()
                    .fg(self.palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(brand).left_aligned().render(area, buf);

        let key = Style::new().fg(self.palette.background).bg(self.palette.neutral);
        let controls = Line::from(vec![
            Span::styled(format!("[{}] ", self.lang_code), Style::new().fg(self.palette.neutral)),
            Span::styled(" l ", key),
            Span::styled(
                format!(" {}  ", self.language_switch),
                Style::new().fg(self.palette.foreground),
            ),
            Span::styled(" t ", key),
            Span::styled(
                format!(" {} ", self.theme_label),
                Style::new().fg(self.palette.foreground),
            ),
        ]);
        Paragraph::new(controls).right_aligned().render(area, buf);
    }
}
