use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::{
    content::Section,
    ui::views::{PageBuilder, PageContext},
};

pub fn render(page: &mut PageBuilder, ctx: &PageContext) {
    let achievements = &ctx.content.achievements;
    let palette = ctx.palette;

    page.begin(Section::Achievements);
    page.heading(achievements.title, achievements.subtitle);

    for achievement in &achievements.items {
        page.spans(vec![
            Span::styled("★ ", Style::new().fg(palette.accent)),
            Span::styled(
                achievement.platform,
                Style::new()
                    .fg(palette.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", achievement.year),
                Style::new().fg(palette.background).bg(palette.secondary),
            ),
        ]);
        page.text(achievement.description, Style::new().fg(palette.neutral));
        page.blank();
    }
}
