use std::time::Instant;

use ratatui::crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        state::InputMode,
        tui::{TerminalEvent, Tui},
    },
};

const WHEEL_STEP: u16 = 3;

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => debug!("terminal_ready"),
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Paste(text) => {
                if app.controller.state().input_mode() == InputMode::Edit {
                    app.update(AppMessage::InsertText(text));
                }
            }
            TerminalEvent::Tick => {
                app.controller.tick(Instant::now());
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::Transport(event) => app.player.handle(event),
            Event::SubmissionFinished(result) => app.controller.finish_submit(result),
        }
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }
        if let Some(msg) = InputHandler::handle_key(evt, app.controller.state().input_mode()) {
            app.update(msg);
        }
    }

    fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        let msg = match (evt.kind, evt.modifiers) {
            (MouseEventKind::ScrollUp, KeyModifiers::SHIFT) => AppMessage::VolumeUp,
            (MouseEventKind::ScrollDown, KeyModifiers::SHIFT) => AppMessage::VolumeDown,
            (MouseEventKind::ScrollUp, _) => AppMessage::ScrollUp(WHEEL_STEP),
            (MouseEventKind::ScrollDown, _) => AppMessage::ScrollDown(WHEEL_STEP),
            _ => return,
        };
        app.update(msg);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use super::*;
    use crate::{
        audio::{TransportEvent, silent::SilentTransport},
        config::AppConfig,
        form::{ContactForm, FormField},
        http::{ContactSubmitter, SubmitError},
        ui::notify::ToastVariant,
    };

    struct Reply(Option<StatusCode>);

    #[async_trait]
    impl ContactSubmitter for Reply {
        async fn send(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            match self.0 {
                Some(status) => Err(SubmitError::Status(status)),
                None => Ok(()),
            }
        }
    }

    fn app(reply: Reply) -> App {
        App::with_parts(
            AppConfig::default(),
            Box::new(SilentTransport),
            Arc::new(reply),
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(AppMessage::InsertChar(c));
        }
    }

    fn fill(app: &mut App) {
        app.update(AppMessage::EditForm);
        type_text(app, "Jane");
        app.update(AppMessage::NextField);
        type_text(app, "jane@example.com");
        app.update(AppMessage::NextField);
        type_text(app, "Audit");
        app.update(AppMessage::NextField);
        type_text(app, "Hello there");
    }

    #[tokio::test]
    async fn submission_round_trips_through_event_channel() {
        let mut app = app(Reply(None));
        fill(&mut app);
        app.update(AppMessage::Submit);
        assert!(app.controller.state().is_submitting);

        let evt = app.event_rx.recv_async().await.unwrap();
        EventHandler::handle_action(&mut app, evt);

        assert!(!app.controller.state().is_submitting);
        assert!(app.controller.state().form.is_empty());
        assert_eq!(
            app.controller.notifier().latest().unwrap().variant,
            ToastVariant::Default
        );
    }

    #[tokio::test]
    async fn failed_submission_keeps_typed_text() {
        let mut app = app(Reply(Some(StatusCode::SERVICE_UNAVAILABLE)));
        fill(&mut app);
        app.update(AppMessage::Submit);

        let evt = app.event_rx.recv_async().await.unwrap();
        EventHandler::handle_action(&mut app, evt);

        assert_eq!(app.controller.state().form.get(FormField::Name), "Jane");
        assert_eq!(app.controller.state().form.get(FormField::Message), "Hello there");
        assert_eq!(
            app.controller.notifier().latest().unwrap().variant,
            ToastVariant::Destructive
        );
    }

    #[tokio::test]
    async fn transport_events_reach_the_player() {
        let mut app = app(Reply(None));
        app.update(AppMessage::TogglePlayPause);
        assert!(app.player.state().is_playing);

        EventHandler::handle_action(
            &mut app,
            Event::Transport(TransportEvent::TimeUpdate {
                elapsed: std::time::Duration::from_secs(1),
                duration: Some(std::time::Duration::from_secs(4)),
            }),
        );
        assert_eq!(app.player.state().progress, 25.0);

        EventHandler::handle_action(&mut app, Event::Transport(TransportEvent::Ended));
        assert!(!app.player.state().is_playing);
        assert_eq!(app.player.state().progress, 0.0);
    }

    #[test]
    fn language_switch_keeps_playback_and_form() {
        let mut app = app(Reply(None));
        app.update(AppMessage::TogglePlayPause);
        app.update(AppMessage::VolumeDown);
        app.update(AppMessage::ToggleMute);
        fill(&mut app);
        app.update(AppMessage::StopEditing);

        let playback = *app.player.state();
        let form = app.controller.state().form.clone();

        app.update(AppMessage::ToggleLanguage);
        assert!(app.controller.document().dir.is_rtl());
        assert_eq!(*app.player.state(), playback);
        assert_eq!(app.controller.state().form, form);

        app.update(AppMessage::ToggleLanguage);
        assert!(!app.controller.document().dir.is_rtl());
        assert_eq!(*app.player.state(), playback);
        assert_eq!(app.controller.state().form, form);
        assert!(playback.is_playing && playback.is_muted);
        assert_eq!(app.player.volume_percent(), 65);
    }

    #[test]
    fn mouse_wheel_scrolls_and_shift_wheel_changes_volume() {
        let mut app = app(Reply(None));
        let wheel = |kind, modifiers| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers,
        };

        EventHandler::handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollUp, KeyModifiers::SHIFT));
        assert_eq!(app.player.volume_percent(), 75);

        app.controller.apply_layout(&[0; 6], 50);
        EventHandler::handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollDown, KeyModifiers::NONE));
        assert_eq!(app.controller.state().scroll.offset, WHEEL_STEP as usize);
    }
}
