use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{info, warn};

use crate::{
    audio::{AudioPlayer, Transport, playback::PlaybackEngine, silent::SilentTransport},
    config::AppConfig,
    event::events::Event,
    http::{ContactService, ContactSubmitter, SubmitError},
    util::task::TaskManager,
};

use super::{
    controller::PageController, layout::AppLayout, message::AppMessage, tui,
    util::handler::EventHandler,
};

const SUBMIT_TASK: &str = "contact_submit";

/// Sends `SubmissionFinished` when dropped, so the controller hears back even
/// if the submit task panics or is aborted.
struct SubmissionReport {
    event_tx: Sender<Event>,
    result: Option<Result<(), SubmitError>>,
}

impl SubmissionReport {
    fn new(event_tx: Sender<Event>) -> Self {
        Self {
            event_tx,
            result: None,
        }
    }

    fn set(&mut self, result: Result<(), SubmitError>) {
        self.result = Some(result);
    }
}

impl Drop for SubmissionReport {
    fn drop(&mut self) {
        let result = self.result.take().unwrap_or_else(|| {
            warn!("contact_submit_interrupted");
            Err(SubmitError::Interrupted)
        });
        let _ = self.event_tx.send(Event::SubmissionFinished(result));
    }
}

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub config: AppConfig,
    pub controller: PageController,
    pub player: AudioPlayer<Box<dyn Transport>>,
    pub contact: Arc<dyn ContactSubmitter>,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let contact = Arc::new(ContactService::new(config.contact_endpoint.clone())?);

        let transport: Box<dyn Transport> =
            match PlaybackEngine::open(&config.audio_path, event_tx.clone()) {
                Ok(engine) => Box::new(engine),
                Err(e) => {
                    warn!(
                        error = %e,
                        path = %config.audio_path.display(),
                        "audio_unavailable_using_silent_transport"
                    );
                    Box::new(SilentTransport)
                }
            };

        Ok(Self::assemble(event_tx, event_rx, config, transport, contact))
    }

    /// Builds an app around the given collaborators, without touching audio
    /// devices or the network.
    pub fn with_parts(
        config: AppConfig,
        transport: Box<dyn Transport>,
        contact: Arc<dyn ContactSubmitter>,
    ) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        Self::assemble(event_tx, event_rx, config, transport, contact)
    }

    fn assemble(
        event_tx: Sender<Event>,
        event_rx: Receiver<Event>,
        config: AppConfig,
        transport: Box<dyn Transport>,
        contact: Arc<dyn ContactSubmitter>,
    ) -> Self {
        let controller = PageController::new(config.language, config.theme);

        Self {
            event_rx,
            event_tx,
            config,
            controller,
            player: AudioPlayer::new(transport),
            contact,
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true).paste(true);
        tui.enter()?;
        info!("app_started");

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            while !EventHandler::handle_events(self, &mut tui).await? {}
        }

        self.task_manager.abort_all();
        tui.exit()?;
        info!("app_stopped");
        Ok(())
    }

    pub fn update(&mut self, msg: AppMessage) {
        let step = self.config.volume_step;
        let controller = &mut self.controller;

        match msg {
            AppMessage::Quit => self.should_quit = true,

            AppMessage::TogglePlayPause => self.player.toggle_play(),
            AppMessage::ToggleMute => self.player.toggle_mute(),
            AppMessage::VolumeUp => self.player.volume_up(step),
            AppMessage::VolumeDown => self.player.volume_down(step),

            AppMessage::ToggleLanguage => controller.toggle_language(),
            AppMessage::ToggleTheme => controller.toggle_theme(),
            AppMessage::NavigateTo(section) => controller.navigate_to(section),
            AppMessage::NextSection => controller.next_section(),
            AppMessage::PreviousSection => controller.previous_section(),
            AppMessage::ScrollUp(lines) => controller.scroll_by(-(lines as isize)),
            AppMessage::ScrollDown(lines) => controller.scroll_by(lines as isize),

            AppMessage::ToggleMenu => controller.toggle_menu(),
            AppMessage::CloseMenu => controller.close_menu(),
            AppMessage::MenuNext => controller.menu_next(),
            AppMessage::MenuPrevious => controller.menu_previous(),
            AppMessage::MenuSelect => controller.menu_select(),

            AppMessage::EditForm => controller.start_editing(),
            AppMessage::StopEditing => controller.stop_editing(),
            AppMessage::NextField => controller.focus_next_field(),
            AppMessage::PreviousField => controller.focus_previous_field(),
            AppMessage::InsertChar(c) => controller.push_char(c),
            AppMessage::InsertText(text) => controller.push_str(&text),
            AppMessage::DeleteChar => controller.pop_char(),
            AppMessage::Submit => self.submit(),
        }
    }

    fn submit(&mut self) {
        let Some(form) = self.controller.begin_submit() else {
            return;
        };

        let contact = self.contact.clone();
        let mut report = SubmissionReport::new(self.event_tx.clone());
        self.task_manager.spawn(SUBMIT_TASK, async move {
            report.set(contact.send(&form).await);
        });
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}
