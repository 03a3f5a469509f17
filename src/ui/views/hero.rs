use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::{
    content::Section,
    ui::views::{PageBuilder, PageContext},
};

pub fn render(page: &mut PageBuilder, ctx: &PageContext) {
    let hero = &ctx.content.hero;
    let palette = ctx.palette;

    page.begin(Section::Home);
    page.blank();
    page.text_centered(
        hero.title,
        Style::new()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    );
    page.text_centered(hero.subtitle, Style::new().fg(palette.accent));
    page.blank();
    page.text_centered(hero.description, Style::new().fg(palette.foreground));
    page.blank();

    let key = Style::new().fg(palette.background).bg(palette.primary);
    page.centered(vec![
        Span::styled(" c ", key),
        Span::styled(
            format!(" {} ", hero.cta),
            Style::new()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(" p ", key),
        Span::styled(
            format!(" {} ", hero.cta_secondary),
            Style::new().fg(palette.foreground),
        ),
    ]);
    page.blank();
}
