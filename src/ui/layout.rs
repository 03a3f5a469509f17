use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::{self, border},
    text::Line,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::{
    content::{Content, Section},
    ui::{
        app::App,
        components::{
            header::Header,
            menu::MenuPopup,
            player::PlayerWidget,
            sidebar::Sidebar,
            toast::{TOAST_HEIGHT, TOAST_WIDTH, ToastWidget},
        },
        theme::Theme,
        views::{Page, PageContext},
    },
    util::colors::Palette,
};

const SIDEBAR_WIDTH: u16 = 24;
/// Below this width the sidebar is dropped and the menu popup is the only
/// way to jump between sections.
const SIDEBAR_MIN_TERMINAL_WIDTH: u16 = 80;
const MENU_WIDTH: u16 = 30;

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let controller = &mut self.app.controller;
        let palette = controller.theme().palette();
        let content = controller.content();
        let direction = controller.document().dir;
        let alignment = if direction.is_rtl() {
            Alignment::Right
        } else {
            Alignment::Left
        };

        f.buffer_mut()
            .set_style(area, Style::new().bg(palette.background).fg(palette.foreground));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);
        let (header_area, main_area, player_area, hints_area) =
            (chunks[0], chunks[1], chunks[2], chunks[3]);

        let theme_label = match controller.theme().toggled() {
            Theme::Light => content.chrome.theme_light,
            Theme::Dark => content.chrome.theme_dark,
        };
        f.render_widget(
            Header::new(
                content.chrome.switch_language,
                theme_label,
                controller.document().lang.code(),
                palette,
            ),
            header_area,
        );

        let show_sidebar = area.width >= SIDEBAR_MIN_TERMINAL_WIDTH;
        let content_area = if show_sidebar {
            let constraints = if direction.is_rtl() {
                [Constraint::Min(1), Constraint::Length(SIDEBAR_WIDTH)]
            } else {
                [Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)]
            };
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(main_area);
            let (sidebar_area, content_area) = if direction.is_rtl() {
                (split[1], split[0])
            } else {
                (split[0], split[1])
            };

            let sidebar_block = rounded_block(palette).title(
                Line::from(content.chrome.menu_title).alignment(Alignment::Center),
            );
            let sidebar_inner = sidebar_block.inner(sidebar_area);
            f.render_widget(sidebar_block, sidebar_area);
            f.render_widget(
                Sidebar::new(
                    nav_items(content),
                    controller.state().active_section.index(),
                    palette,
                )
                .alignment(alignment),
                sidebar_inner,
            );
            content_area
        } else {
            main_area
        };

        let active = controller.state().active_section;
        let content_block = rounded_block(palette).title(
            Line::from(format!(" {} ", content.nav.label(active))).alignment(alignment),
        );
        let inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        let page = {
            let ctx = PageContext {
                content,
                palette,
                direction,
                state: controller.state(),
            };
            Page::build(&ctx, inner.width.saturating_sub(1))
        };
        controller.apply_layout(&page.offsets, page.max_scroll(inner.height));

        let offset = controller.state().scroll.offset;
        let visible: Vec<Line> = page
            .lines
            .iter()
            .skip(offset)
            .take(inner.height as usize)
            .cloned()
            .collect();
        f.render_widget(Paragraph::new(visible), inner);

        if page.lines.len() > inner.height as usize {
            let mut scrollbar_state =
                ScrollbarState::new(page.max_scroll(inner.height)).position(offset);
            f.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .style(Style::new().fg(palette.neutral)),
                inner,
                &mut scrollbar_state,
            );
        }

        f.render_widget(
            PlayerWidget::new(self.app.player.state(), content.chrome.audio_title, palette),
            player_area,
        );

        let hints = if self.app.controller.state().is_editing {
            content.chrome.hints_edit
        } else {
            content.chrome.hints_browse
        };
        f.render_widget(
            Paragraph::new(Line::from(hints).alignment(alignment))
                .style(Style::new().fg(palette.neutral)),
            hints_area,
        );

        let controller = &self.app.controller;
        let mut toast_y = inner.y;
        for toast in controller.notifier().toasts().rev() {
            if toast_y + TOAST_HEIGHT > inner.bottom() || inner.width < TOAST_WIDTH {
                break;
            }
            let x = if direction.is_rtl() {
                inner.x
            } else {
                inner.right() - TOAST_WIDTH
            };
            f.render_widget(
                ToastWidget::new(toast, palette),
                Rect::new(x, toast_y, TOAST_WIDTH, TOAST_HEIGHT),
            );
            toast_y += TOAST_HEIGHT;
        }

        if controller.state().is_menu_open {
            f.render_widget(
                MenuPopup::new(
                    content.chrome.menu_title,
                    &content.nav,
                    controller.state().menu_cursor,
                    palette,
                    alignment,
                ),
                centered(area, MENU_WIDTH, MenuPopup::height()),
            );
        }
    }
}

fn rounded_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::Set {
            ..symbols::border::ROUNDED
        })
        .border_style(Style::new().fg(palette.secondary))
}

fn nav_items(content: &'static Content) -> Vec<&'static str> {
    Section::ALL
        .iter()
        .map(|section| content.nav.label(*section))
        .collect()
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
