use std::time::Duration;

use tracing::debug;

use crate::audio::{
    state::PlaybackState,
    traits::{Transport, TransportEvent},
};

/// The audio widget: one transport, one [`PlaybackState`].
pub struct AudioPlayer<T: Transport> {
    transport: T,
    state: PlaybackState,
}

impl<T: Transport> AudioPlayer<T> {
    pub fn new(transport: T) -> Self {
        let state = PlaybackState::default();
        transport.set_volume(state.volume);
        transport.set_muted(state.is_muted);

        Self { transport, state }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.transport.pause();
        } else {
            self.transport.play();
        }
        self.state.is_playing = !self.state.is_playing;
        debug!(playing = self.state.is_playing, "audio_toggle_play");
    }

    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
        self.transport.set_muted(self.state.is_muted);
    }

    /// Sets the output level. Muting is left as it is.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        self.state.volume = volume;
        self.transport.set_volume(volume);
    }

    pub fn volume_percent(&self) -> u8 {
        (self.state.volume * 100.0).round() as u8
    }

    pub fn volume_up(&mut self, step: u8) {
        let percent = self.volume_percent().saturating_add(step).min(100);
        self.set_volume(percent as f32 / 100.0);
    }

    pub fn volume_down(&mut self, step: u8) {
        let percent = self.volume_percent().saturating_sub(step);
        self.set_volume(percent as f32 / 100.0);
    }

    pub fn on_time_update(&mut self, elapsed: Duration, duration: Option<Duration>) {
        let Some(duration) = duration.filter(|d| !d.is_zero()) else {
            return;
        };
        let percent = elapsed.as_secs_f64() / duration.as_secs_f64() * 100.0;
        self.state.progress = percent.clamp(0.0, 100.0);
    }

    pub fn on_ended(&mut self) {
        self.state.is_playing = false;
        self.state.progress = 0.0;
        self.transport.rewind();
        debug!("audio_ended");
    }

    pub fn handle(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::TimeUpdate { elapsed, duration } => {
                self.on_time_update(elapsed, duration)
            }
            TransportEvent::Ended => self.on_ended(),
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;

    use crate::audio::traits::Transport;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Command {
        Play,
        Pause,
        Muted(bool),
        Volume(f32),
        Rewind,
    }

    #[derive(Default)]
    pub struct RecordingTransport {
        pub commands: Mutex<Vec<Command>>,
    }

    impl RecordingTransport {
        pub fn take(&self) -> Vec<Command> {
            std::mem::take(&mut *self.commands.lock().unwrap())
        }
    }

    impl Transport for RecordingTransport {
        fn play(&self) {
            self.commands.lock().unwrap().push(Command::Play);
        }

        fn pause(&self) {
            self.commands.lock().unwrap().push(Command::Pause);
        }

        fn set_muted(&self, muted: bool) {
            self.commands.lock().unwrap().push(Command::Muted(muted));
        }

        fn set_volume(&self, volume: f32) {
            self.commands.lock().unwrap().push(Command::Volume(volume));
        }

        fn rewind(&self) {
            self.commands.lock().unwrap().push(Command::Rewind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{Command, RecordingTransport};
    use super::*;
    use crate::audio::state::DEFAULT_VOLUME;

    fn player() -> AudioPlayer<RecordingTransport> {
        let player = AudioPlayer::new(RecordingTransport::default());
        player.transport().take();
        player
    }

    #[test]
    fn starts_paused_at_default_volume() {
        let player = AudioPlayer::new(RecordingTransport::default());
        assert_eq!(*player.state(), PlaybackState::default());
        assert_eq!(
            player.transport().take(),
            vec![Command::Volume(DEFAULT_VOLUME), Command::Muted(false)]
        );
    }

    #[test]
    fn double_toggle_play_restores_state() {
        let mut player = player();
        player.toggle_play();
        assert!(player.state().is_playing);
        player.toggle_play();
        assert!(!player.state().is_playing);
        assert_eq!(player.transport().take(), vec![Command::Play, Command::Pause]);
    }

    #[test]
    fn mute_round_trip_keeps_volume() {
        let mut player = player();
        player.set_volume(0.0);
        let before = *player.state();

        player.toggle_mute();
        assert!(player.state().is_muted);
        player.toggle_mute();

        assert_eq!(player.state().is_muted, before.is_muted);
        assert_eq!(player.state().volume, 0.0);
        assert_eq!(
            player.transport().take(),
            vec![
                Command::Volume(0.0),
                Command::Muted(true),
                Command::Muted(false)
            ]
        );
    }

    #[test]
    fn volume_does_not_unmute() {
        let mut player = player();
        player.toggle_mute();
        player.set_volume(0.3);
        assert!(player.state().is_muted);
        assert_eq!(player.state().volume, 0.3);
    }

    #[test]
    fn volume_is_clamped() {
        let mut player = player();
        player.set_volume(1.5);
        assert_eq!(player.state().volume, 1.0);
        player.set_volume(-0.2);
        assert_eq!(player.state().volume, 0.0);
        player.set_volume(f32::NAN);
        assert_eq!(player.state().volume, 0.0);
    }

    #[test]
    fn volume_steps_in_percent() {
        let mut player = player();
        assert_eq!(player.volume_percent(), 70);
        player.volume_up(5);
        assert_eq!(player.volume_percent(), 75);
        player.volume_up(50);
        assert_eq!(player.volume_percent(), 100);
        player.volume_down(120);
        assert_eq!(player.volume_percent(), 0);
    }

    #[test]
    fn time_update_tracks_percent() {
        let mut player = player();
        player.on_time_update(Duration::from_secs(30), Some(Duration::from_secs(120)));
        assert!((player.state().progress - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn time_update_without_duration_is_ignored() {
        let mut player = player();
        player.on_time_update(Duration::from_secs(30), Some(Duration::from_secs(60)));
        player.on_time_update(Duration::from_secs(40), None);
        player.on_time_update(Duration::from_secs(40), Some(Duration::ZERO));
        assert!((player.state().progress - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ended_resets_from_any_state() {
        let mut player = player();
        player.toggle_play();
        player.toggle_mute();
        player.on_time_update(Duration::from_secs(59), Some(Duration::from_secs(60)));
        player.transport().take();

        player.handle(TransportEvent::Ended);

        assert!(!player.state().is_playing);
        assert_eq!(player.state().progress, 0.0);
        assert!(player.state().is_muted);
        assert_eq!(player.transport().take(), vec![Command::Rewind]);

        player.on_ended();
        assert!(!player.state().is_playing);
        assert_eq!(player.state().progress, 0.0);
    }
}
