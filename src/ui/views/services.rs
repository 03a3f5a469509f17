use ratatui::style::{Modifier, Style};

use crate::{
    content::Section,
    ui::views::{PageBuilder, PageContext},
};

pub fn render(page: &mut PageBuilder, ctx: &PageContext) {
    let services = &ctx.content.services;
    let palette = ctx.palette;

    page.begin(Section::Services);
    page.heading(services.title, services.subtitle);

    for service in &services.items {
        page.item(
            "◆",
            service.title,
            Style::new().fg(palette.primary),
            Style::new()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        );
        page.text(service.description, Style::new().fg(palette.neutral));
        for feature in service.features {
            page.item(
                "  ✓",
                feature,
                Style::new().fg(palette.accent),
                Style::new().fg(palette.foreground),
            );
        }
        page.blank();
    }
}
