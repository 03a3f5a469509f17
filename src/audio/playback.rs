use std::{
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU32, Ordering},
    },
    time::Duration,
};

use flume::Sender;
use rodio::{OutputStream, Sink, Source};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    audio::{
        error::AudioError,
        state::DEFAULT_VOLUME,
        traits::{Transport, TransportEvent},
        util::{decode, open_output},
    },
    event::events::Event,
};

/// Roughly the cadence a browser fires `timeupdate` at.
const MONITOR_INTERVAL: Duration = Duration::from_millis(250);

/// Rodio-backed transport for a single audio file.
pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Arc<Sink>,
    path: PathBuf,
    playing: Arc<AtomicBool>,
    muted: AtomicBool,
    volume: AtomicU32,
    monitor: JoinHandle<()>,
}

impl PlaybackEngine {
    pub fn open(path: impl AsRef<Path>, event_tx: Sender<Event>) -> Result<Self, AudioError> {
        let path = path.as_ref().to_path_buf();
        let source = decode(&path)?;
        let duration = source.total_duration();

        let (stream, sink) = open_output()?;
        sink.pause();
        sink.append(source);

        let sink = Arc::new(sink);
        let playing = Arc::new(AtomicBool::new(false));
        let monitor = start_monitor(sink.clone(), playing.clone(), duration, event_tx);

        info!(
            path = %path.display(),
            duration_ms = duration.map(|d| d.as_millis() as u64),
            "playback_engine_ready"
        );

        Ok(Self {
            _stream: stream,
            sink,
            path,
            playing,
            muted: AtomicBool::new(false),
            volume: AtomicU32::new(DEFAULT_VOLUME.to_bits()),
            monitor,
        })
    }

    fn apply_volume(&self) {
        let volume = if self.muted.load(Ordering::Relaxed) {
            0.0
        } else {
            f32::from_bits(self.volume.load(Ordering::Relaxed))
        };
        self.sink.set_volume(volume);
    }
}

fn start_monitor(
    sink: Arc<Sink>,
    playing: Arc<AtomicBool>,
    duration: Option<Duration>,
    event_tx: Sender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(MONITOR_INTERVAL);
        loop {
            interval.tick().await;

            if !playing.load(Ordering::Relaxed) {
                continue;
            }

            let event = if sink.empty() {
                playing.store(false, Ordering::Relaxed);
                TransportEvent::Ended
            } else {
                TransportEvent::TimeUpdate {
                    elapsed: sink.get_pos(),
                    duration,
                }
            };

            if event_tx.send(Event::Transport(event)).is_err() {
                break;
            }
        }
    })
}

impl Transport for PlaybackEngine {
    fn play(&self) {
        self.playing.store(true, Ordering::Relaxed);
        self.sink.play();
    }

    fn pause(&self) {
        self.playing.store(false, Ordering::Relaxed);
        self.sink.pause();
    }

    fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
        self.apply_volume();
    }

    fn set_volume(&self, volume: f32) {
        self.volume.store(volume.to_bits(), Ordering::Relaxed);
        self.apply_volume();
    }

    fn rewind(&self) {
        if self.sink.empty() {
            self.sink.pause();
            self.playing.store(false, Ordering::Relaxed);
            match decode(&self.path) {
                Ok(source) => self.sink.append(source),
                Err(e) => warn!(error = %e, "playback_reload_failed"),
            }
        } else if let Err(e) = self.sink.try_seek(Duration::ZERO) {
            warn!(error = %e, "playback_rewind_failed");
        }
    }
}

impl Drop for PlaybackEngine {
    fn drop(&mut self) {
        self.monitor.abort();
        self.sink.stop();
    }
}
