use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("No audio output device available")]
    NoDevice,

    #[error("Audio output device error: {0}")]
    DeviceError(String),

    #[error("Cannot open audio source {path}: {source}")]
    SourceError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Decoding error: {0}")]
    DecodingError(String),
}
