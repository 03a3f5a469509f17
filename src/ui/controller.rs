use std::time::Instant;

use tracing::{debug, info, warn};

use crate::{
    content::{self, Content, Language, Section},
    form::{ContactForm, FormField},
    http::{ContactSubmitter, SubmitError},
    ui::{
        notify::{Notifier, ToastVariant},
        state::{Document, UiState},
        theme::{Theme, ThemeProvider},
    },
};

/// Owns all page-level UI state and the collaborators it drives.
pub struct PageController {
    state: UiState,
    document: Document,
    theme: ThemeProvider,
    notifier: Notifier,
}

impl PageController {
    pub fn new(language: Language, theme: Theme) -> Self {
        let mut controller = Self {
            state: UiState::default(),
            document: Document::default(),
            theme: ThemeProvider::new(theme),
            notifier: Notifier::default(),
        };
        controller.set_language(language);
        controller
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn content(&self) -> &'static Content {
        content::content(self.state.language)
    }

    pub fn set_language(&mut self, language: Language) {
        self.state.language = language;
        self.document = Document::for_language(language);
        info!(
            lang = language.code(),
            dir = self.document.dir.attr(),
            "language_changed"
        );
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.state.language.toggled());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.set_theme(theme);
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme().toggled());
    }

    pub fn navigate_to(&mut self, section: Section) {
        self.state.active_section = section;
        self.state.scroll.pending = Some(section);
        self.state.is_menu_open = false;
        debug!(section = section.key(), "navigate");
    }

    pub fn next_section(&mut self) {
        self.navigate_to(self.state.active_section.next());
    }

    pub fn previous_section(&mut self) {
        self.navigate_to(self.state.active_section.previous());
    }

    pub fn toggle_menu(&mut self) {
        self.state.is_menu_open = !self.state.is_menu_open;
        if self.state.is_menu_open {
            self.state.menu_cursor = self.state.active_section.index();
        }
    }

    pub fn close_menu(&mut self) {
        self.state.is_menu_open = false;
    }

    pub fn menu_next(&mut self) {
        self.state.menu_cursor = (self.state.menu_cursor + 1) % Section::ALL.len();
    }

    pub fn menu_previous(&mut self) {
        self.state.menu_cursor =
            (self.state.menu_cursor + Section::ALL.len() - 1) % Section::ALL.len();
    }

    pub fn menu_select(&mut self) {
        if let Some(section) = Section::from_index(self.state.menu_cursor) {
            self.navigate_to(section);
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.state.scroll.jump_by(delta);
    }

    /// Feeds the latest layout back in: where each section starts and how far
    /// the page can scroll.
    pub fn apply_layout(&mut self, offsets: &[usize; 6], max_scroll: usize) {
        let scroll = &mut self.state.scroll;
        scroll.set_max(max_scroll);
        if let Some(section) = scroll.pending.take() {
            scroll.target = offsets[section.index()].min(max_scroll);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.state.scroll.step();
        self.notifier.expire(now);
    }

    pub fn start_editing(&mut self) {
        if self.state.active_section != Section::Contact {
            self.navigate_to(Section::Contact);
        }
        self.state.is_editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.state.is_editing = false;
    }

    pub fn focus_next_field(&mut self) {
        self.state.focused_field = self.state.focused_field.next();
    }

    pub fn focus_previous_field(&mut self) {
        self.state.focused_field = self.state.focused_field.previous();
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.form.set(field, value);
    }

    pub fn push_str(&mut self, text: &str) {
        let field = self.state.focused_field;
        let value = self.state.form.get_mut(field);
        // Only the message may span lines.
        if field == FormField::Message {
            value.push_str(text);
        } else {
            value.extend(text.chars().map(|c| if c == '\n' { ' ' } else { c }));
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.state.form.get_mut(self.state.focused_field).push(c);
    }

    pub fn pop_char(&mut self) {
        self.state.form.get_mut(self.state.focused_field).pop();
    }

    /// Validates the form and marks a submission as in flight. Returns the
    /// snapshot to send, or `None` when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.state.is_submitting {
            debug!("submit_ignored_in_flight");
            return None;
        }

        if let Some(field) = self.state.form.first_invalid() {
            self.state.focused_field = field;
            self.state.is_editing = true;
            let toasts = &self.content().toasts;
            self.notifier.notify(
                toasts.invalid_title,
                toasts.invalid_description,
                ToastVariant::Destructive,
            );
            debug!(?field, "submit_blocked_invalid");
            return None;
        }

        self.state.is_submitting = true;
        Some(self.state.form.normalized())
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        self.state.is_submitting = false;
        let toasts = &self.content().toasts;

        match result {
            Ok(()) => {
                self.state.form.clear();
                self.state.focused_field = FormField::Name;
                self.state.is_editing = false;
                self.notifier.notify(
                    toasts.sent_title,
                    toasts.sent_description,
                    ToastVariant::Default,
                );
                info!("contact_form_sent");
            }
            Err(e) => {
                self.notifier.notify(
                    toasts.failed_title,
                    toasts.failed_description,
                    ToastVariant::Destructive,
                );
                warn!(error = %e, "contact_form_failed");
            }
        }
    }

    /// Runs a whole submission inline. Returns whether anything was sent.
    pub async fn submit(&mut self, submitter: &dyn ContactSubmitter) -> bool {
        let Some(form) = self.begin_submit() else {
            return false;
        };
        let result = submitter.send(&form).await;
        self.finish_submit(result);
        true
    }
}
