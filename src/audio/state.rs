pub const DEFAULT_VOLUME: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
    /// Output level in `[0, 1]`.
    pub volume: f32,
    /// Percent of the source elapsed, `[0, 100]`.
    pub progress: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_muted: false,
            volume: DEFAULT_VOLUME,
            progress: 0.0,
        }
    }
}
