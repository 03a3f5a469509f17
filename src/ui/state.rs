use crate::{
    content::{Language, Section, TextDirection},
    form::{ContactForm, FormField},
};

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub language: Language,
    pub is_menu_open: bool,
    pub menu_cursor: usize,
    pub active_section: Section,
    pub form: ContactForm,
    pub focused_field: FormField,
    pub is_editing: bool,
    pub is_submitting: bool,
    pub scroll: ScrollState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Menu,
    Edit,
}

impl UiState {
    pub fn input_mode(&self) -> InputMode {
        if self.is_menu_open {
            InputMode::Menu
        } else if self.is_editing {
            InputMode::Edit
        } else {
            InputMode::Browse
        }
    }
}

/// What the page declares about itself: reading direction and language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Document {
    pub dir: TextDirection,
    pub lang: Language,
}

impl Document {
    pub fn for_language(language: Language) -> Self {
        Self {
            dir: language.direction(),
            lang: language,
        }
    }
}

/// Vertical scroll of the page, in wrapped lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    pub target: usize,
    pub max: usize,
    /// Section waiting for the next layout pass to learn where it starts.
    pub pending: Option<Section>,
}

impl ScrollState {
    /// Moves `offset` a fraction of the way to `target`. Returns whether it moved.
    pub fn step(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }
        let distance = self.offset.abs_diff(self.target);
        let delta = (distance / 3).max(1);
        if self.offset < self.target {
            self.offset += delta;
        } else {
            self.offset -= delta;
        }
        true
    }

    pub fn jump_by(&mut self, delta: isize) {
        let next = self.target.saturating_add_signed(delta).min(self.max);
        self.offset = next;
        self.target = next;
        self.pending = None;
    }

    pub fn set_max(&mut self, max: usize) {
        self.max = max;
        self.offset = self.offset.min(max);
        self.target = self.target.min(max);
    }
}
