use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

pub const TOAST_TTL: Duration = Duration::from_secs(5);
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: ToastVariant,
    pub created_at: Instant,
}

/// Transient notifications, newest last.
#[derive(Debug, Default)]
pub struct Notifier {
    toasts: VecDeque<Toast>,
}

impl Notifier {
    pub fn notify(&mut self, title: &'static str, description: &'static str, variant: ToastVariant) {
        self.notify_at(title, description, variant, Instant::now());
    }

    pub fn notify_at(
        &mut self,
        title: &'static str,
        description: &'static str,
        variant: ToastVariant,
        now: Instant,
    ) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            title,
            description,
            variant,
            created_at: now,
        });
    }

    pub fn expire(&mut self, now: Instant) {
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < TOAST_TTL);
    }

    pub fn toasts(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }
}
