//! The single scrolling page, built as pre-wrapped lines so the position of
//! every section is known before drawing.

pub mod about;
pub mod achievements;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod services;

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    content::{Content, Section, TextDirection, profile},
    ui::state::UiState,
    util::colors::Palette,
};

pub type SectionOffsets = [usize; 6];

pub struct PageContext<'a> {
    pub content: &'static Content,
    pub palette: &'static Palette,
    pub direction: TextDirection,
    pub state: &'a UiState,
}

pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub offsets: SectionOffsets,
}

impl Page {
    pub fn build(ctx: &PageContext, width: u16) -> Self {
        let mut builder = PageBuilder::new(ctx.palette, ctx.direction, width as usize);

        hero::render(&mut builder, ctx);
        about::render(&mut builder, ctx);
        services::render(&mut builder, ctx);
        achievements::render(&mut builder, ctx);
        projects::render(&mut builder, ctx);
        contact::render(&mut builder, ctx);
        footer(&mut builder, ctx);

        builder.finish()
    }

    pub fn max_scroll(&self, viewport_height: u16) -> usize {
        self.lines.len().saturating_sub(viewport_height as usize)
    }
}

fn footer(page: &mut PageBuilder, ctx: &PageContext) {
    page.blank();
    page.rule();
    page.centered(vec![Span::styled(
        profile::BRAND,
        Style::new()
            .fg(ctx.palette.primary)
            .add_modifier(Modifier::BOLD),
    )]);
    page.text_centered(ctx.content.footer.rights, Style::new().fg(ctx.palette.neutral));
}

pub struct PageBuilder {
    palette: &'static Palette,
    direction: TextDirection,
    width: usize,
    lines: Vec<Line<'static>>,
    offsets: SectionOffsets,
}

impl PageBuilder {
    pub fn new(palette: &'static Palette, direction: TextDirection, width: usize) -> Self {
        Self {
            palette,
            direction,
            width: width.max(1),
            lines: Vec::new(),
            offsets: [0; 6],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn alignment(&self) -> Alignment {
        if self.direction.is_rtl() {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    pub fn begin(&mut self, section: Section) {
        self.offsets[section.index()] = self.lines.len();
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn rule(&mut self) {
        self.lines.push(
            Line::styled("─".repeat(self.width), Style::new().fg(self.palette.secondary))
                .alignment(Alignment::Center),
        );
    }

    /// Section title and subtitle, centred.
    pub fn heading(&mut self, title: &'static str, subtitle: &'static str) {
        self.blank();
        self.text_centered(
            title,
            Style::new()
                .fg(self.palette.primary)
                .add_modifier(Modifier::BOLD),
        );
        let underline = title.width().min(self.width);
        self.lines.push(
            Line::styled("━".repeat(underline), Style::new().fg(self.palette.secondary))
                .alignment(Alignment::Center),
        );
        self.text_centered(subtitle, Style::new().fg(self.palette.neutral));
        self.blank();
    }

    pub fn text(&mut self, text: &str, style: Style) {
        let alignment = self.alignment();
        for line in wrap(text, self.width) {
            self.lines.push(Line::styled(line, style).alignment(alignment));
        }
    }

    pub fn text_centered(&mut self, text: &str, style: Style) {
        for line in wrap(text, self.width) {
            self.lines
                .push(Line::styled(line, style).alignment(Alignment::Center));
        }
    }

    /// A single unwrapped line in reading direction.
    pub fn spans(&mut self, mut spans: Vec<Span<'static>>) {
        if self.direction.is_rtl() {
            spans.reverse();
        }
        let alignment = self.alignment();
        self.lines.push(Line::from(spans).alignment(alignment));
    }

    pub fn centered(&mut self, spans: Vec<Span<'static>>) {
        self.lines
            .push(Line::from(spans).alignment(Alignment::Center));
    }

    /// Wrapped text behind a marker, continuation lines indented under the text.
    pub fn item(&mut self, marker: &str, text: &str, marker_style: Style, text_style: Style) {
        let marker_width = marker.width() + 1;
        let body_width = self.width.saturating_sub(marker_width).max(1);
        let indent = " ".repeat(marker_width);

        for (i, line) in wrap(text, body_width).into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(format!("{marker} "), marker_style)
            } else {
                Span::raw(indent.clone())
            };
            let body = Span::styled(line, text_style);
            if self.direction.is_rtl() {
                let lead = Span::styled(
                    format!(" {}", lead.content.trim_end()),
                    lead.style,
                );
                self.lines
                    .push(Line::from(vec![body, lead]).alignment(Alignment::Right));
            } else {
                self.lines
                    .push(Line::from(vec![lead, body]).alignment(Alignment::Left));
            }
        }
    }

    /// Bracketed tags, flowed over as many lines as the width needs.
    pub fn tags(&mut self, tags: &[&str], style: Style) {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut row_width = 0;
        for tag in tags {
            let label = format!("[{tag}]");
            let label_width = label.width() + 1;
            if row_width > 0 && row_width + label_width > self.width {
                self.spans(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(Span::styled(label, style));
            row.push(Span::raw(" "));
            row_width += label_width;
        }
        if !row.is_empty() {
            self.spans(row);
        }
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn finish(self) -> Page {
        Page {
            lines: self.lines,
            offsets: self.offsets,
        }
    }
}

/// Greedy word wrap by display width. Explicit newlines start new lines and
/// words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width > width {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if line_width > 0 && line_width + w > width {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += w;
                }
                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        out.push(line);
    }

    out
}
