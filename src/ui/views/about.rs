use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::{
    content::{Section, profile},
    ui::views::{PageBuilder, PageContext},
};

pub fn render(page: &mut PageBuilder, ctx: &PageContext) {
    let about = &ctx.content.about;
    let palette = ctx.palette;

    page.begin(Section::About);
    page.heading(about.title, about.description);
    page.text(about.biography, Style::new().fg(palette.foreground));
    page.blank();

    let label = Style::new().fg(palette.primary);
    let link = Style::new()
        .fg(palette.accent)
        .add_modifier(Modifier::UNDERLINED);
    page.spans(vec![
        Span::styled(format!("{}: ", about.download_cv), label),
        Span::styled(profile::CV_PATH, link),
    ]);
    page.spans(vec![
        Span::styled(format!("{}: ", about.view_profile), label),
        Span::styled(profile::INSTAGRAM_URL, link),
    ]);
    page.blank();

    page.text(
        about.skills,
        Style::new()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    );
    page.tags(&profile::SKILLS, Style::new().fg(palette.accent));
}
