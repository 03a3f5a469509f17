use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::{
    content::Section,
    ui::views::{PageBuilder, PageContext},
};

pub fn render(page: &mut PageBuilder, ctx: &PageContext) {
    let projects = &ctx.content.projects;
    let palette = ctx.palette;

    page.begin(Section::Projects);
    page.heading(projects.title, projects.subtitle);

    for project in &projects.items {
        page.item(
            "▸",
            project.name,
            Style::new().fg(palette.primary),
            Style::new()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        );
        page.text(project.description, Style::new().fg(palette.neutral));
        page.tags(project.tech, Style::new().fg(palette.accent));
        // "#" marks a project without a public page yet.
        if project.link != "#" {
            page.spans(vec![
                Span::styled("↗ ", Style::new().fg(palette.primary)),
                Span::styled(
                    project.link,
                    Style::new()
                        .fg(palette.primary)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]);
        }
        page.blank();
    }
}
