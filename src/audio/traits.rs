use std::time::Duration;

/// Commands the playback widget issues to whatever actually produces sound.
///
/// Implementations report back through [`TransportEvent`]s on the application
/// event channel instead of being polled by the widget.
pub trait Transport {
    fn play(&self);
    fn pause(&self);
    fn set_muted(&self, muted: bool);
    fn set_volume(&self, volume: f32);
    fn rewind(&self);
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn play(&self) {
        (**self).play()
    }

    fn pause(&self) {
        (**self).pause()
    }

    fn set_muted(&self, muted: bool) {
        (**self).set_muted(muted)
    }

    fn set_volume(&self, volume: f32) {
        (**self).set_volume(volume)
    }

    fn rewind(&self) {
        (**self).rewind()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportEvent {
    /// Elapsed time changed. `duration` is `None` until the source length is known.
    TimeUpdate {
        elapsed: Duration,
        duration: Option<Duration>,
    },
    Ended,
}
