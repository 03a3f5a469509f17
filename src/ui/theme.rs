use crate::util::colors::{self, Palette};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &colors::LIGHT,
            Theme::Dark => &colors::DARK,
        }
    }
}

/// Owns the active theme on behalf of the page.
#[derive(Debug, Default)]
pub struct ThemeProvider {
    theme: Theme,
}

impl ThemeProvider {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
