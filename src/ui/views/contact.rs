use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::{
    content::{Section, profile},
    form::FormField,
    ui::views::{PageBuilder, PageContext},
};

const CURSOR: &str = "▏";

pub fn render(page: &mut PageBuilder, ctx: &PageContext) {
    let contact = &ctx.content.contact;
    let palette = ctx.palette;
    let state = ctx.state;

    page.begin(Section::Contact);
    page.heading(contact.title, contact.subtitle);

    for field in FormField::ALL {
        let focused = state.is_editing && state.focused_field == field;
        let label_style = if focused {
            Style::new()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(palette.foreground)
        };

        page.spans(vec![
            Span::styled(label(ctx, field), label_style),
            Span::styled(" *", Style::new().fg(palette.danger)),
        ]);
        field_value(page, ctx, field, focused);
        page.blank();
    }

    let button = if state.is_submitting {
        Span::styled(
            format!("[ {} ]", contact.form.sending),
            Style::new().fg(palette.neutral),
        )
    } else {
        Span::styled(
            format!("[ {} ]", contact.form.send),
            Style::new()
                .fg(palette.background)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )
    };
    page.spans(vec![button]);
    page.blank();

    let icon = Style::new().fg(palette.primary);
    let text = Style::new().fg(palette.foreground);
    let muted = Style::new().fg(palette.neutral);

    page.spans(vec![
        Span::styled("✉ ", icon),
        Span::styled(format!("{}: ", contact.info.email), text),
        Span::styled(profile::EMAIL, muted),
    ]);
    page.spans(vec![
        Span::styled("⌖ ", icon),
        Span::styled(contact.info.location, muted),
    ]);
    page.spans(vec![
        Span::styled("☎ ", icon),
        Span::styled(contact.info.phone, muted),
    ]);
    page.spans(vec![
        Span::styled("Instagram ", text),
        Span::styled(profile::INSTAGRAM_URL, muted),
    ]);
    page.spans(vec![
        Span::styled("GitHub ", text),
        Span::styled(profile::GITHUB_URL, muted),
    ]);
}

fn label(ctx: &PageContext, field: FormField) -> &'static str {
    let form = &ctx.content.contact.form;
    match field {
        FormField::Name => form.name,
        FormField::Email => form.email,
        FormField::Subject => form.subject,
        FormField::Message => form.message,
    }
}

fn field_value(page: &mut PageBuilder, ctx: &PageContext, field: FormField, focused: bool) {
    let palette = ctx.palette;
    let bar_style = if focused {
        Style::new().fg(palette.primary)
    } else {
        Style::new().fg(palette.secondary)
    };
    let value_style = Style::new().fg(palette.foreground);

    let value = ctx.state.form.get(field);
    let mut lines = hard_wrap(value, page.width().saturating_sub(3));
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_str(CURSOR);
        }
    }

    let rtl = ctx.direction.is_rtl();
    for line in lines {
        let spans = if rtl {
            vec![Span::styled(line, value_style), Span::styled(" ┃", bar_style)]
        } else {
            vec![Span::styled("┃ ", bar_style), Span::styled(line, value_style)]
        };
        let alignment = if rtl { Alignment::Right } else { Alignment::Left };
        page.push(Line::from(spans).alignment(alignment));
    }
}

/// Breaks typed text by display width only, so every space the user entered
/// stays visible in front of the cursor.
fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for c in paragraph.chars() {
            let w = c.width().unwrap_or(0);
            if line_width > 0 && line_width + w > width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(c);
            line_width += w;
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::{self, Language},
        ui::{state::UiState, views::Page},
        util::colors,
    };

    fn text_of(page: &Page) -> Vec<String> {
        page.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    fn build(state: &UiState) -> Page {
        let ctx = PageContext {
            content: content::content(state.language),
            palette: &colors::DARK,
            direction: state.language.direction(),
            state,
        };
        Page::build(&ctx, 60)
    }

    #[test]
    fn cursor_marks_the_focused_field() {
        let mut state = UiState {
            is_editing: true,
            focused_field: FormField::Email,
            ..Default::default()
        };
        state.form.email = "jane@example.com".into();

        let lines = text_of(&build(&state));
        assert!(lines.iter().any(|l| l == "┃ jane@example.com▏"));
        assert_eq!(lines.iter().filter(|l| l.contains(CURSOR)).count(), 1);
    }

    #[test]
    fn typed_spaces_stay_in_front_of_the_cursor() {
        let mut state = UiState {
            is_editing: true,
            focused_field: FormField::Name,
            ..Default::default()
        };
        state.form.name = "Jane  ".into();
        let lines = text_of(&build(&state));
        assert!(lines.iter().any(|l| l == "┃ Jane  ▏"));

        state.form.name = "a  b".into();
        let lines = text_of(&build(&state));
        assert!(lines.iter().any(|l| l == "┃ a  b▏"));
    }

    #[test]
    fn hard_wrap_keeps_whitespace() {
        assert_eq!(hard_wrap("ab cd", 3), ["ab ", "cd"]);
        assert_eq!(hard_wrap("one\n  two", 10), ["one", "  two"]);
        assert_eq!(hard_wrap("", 10), [""]);
    }

    #[test]
    fn button_reflects_submission() {
        let mut state = UiState::default();
        assert!(text_of(&build(&state)).iter().any(|l| l == "[ Send Message ]"));

        state.is_submitting = true;
        assert!(text_of(&build(&state)).iter().any(|l| l == "[ Sending... ]"));
    }

    #[test]
    fn arabic_labels_are_used() {
        let state = UiState {
            language: Language::Ar,
            ..Default::default()
        };
        let lines = text_of(&build(&state));
        assert!(lines.iter().any(|l| l.contains("الاسم الكامل")));
    }
}
