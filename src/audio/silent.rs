use tracing::trace;

use crate::audio::traits::Transport;

/// Stand-in used when no output device or source file is available. Accepts
/// every command and never reports progress.
#[derive(Debug, Default)]
pub struct SilentTransport;

impl Transport for SilentTransport {
    fn play(&self) {
        trace!("silent_transport_play");
    }

    fn pause(&self) {
        trace!("silent_transport_pause");
    }

    fn set_muted(&self, _muted: bool) {}

    fn set_volume(&self, _volume: f32) {}

    fn rewind(&self) {}
}
