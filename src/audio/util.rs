use std::{fs::File, io::BufReader, path::Path};

use rodio::{
    Decoder, DeviceTrait, OutputStream, OutputStreamBuilder, Sink,
    cpal::{BufferSize, SampleFormat, SampleRate, StreamConfig, default_host, traits::HostTrait},
};

use crate::audio::error::AudioError;

pub fn open_output() -> Result<(OutputStream, Sink), AudioError> {
    let host = default_host();
    let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

    let best = device
        .supported_output_configs()
        .ok()
        .and_then(|configs| configs.max_by_key(|cfg| cfg.max_sample_rate().0));

    let (config, sample_format) = match best {
        Some(cfg) => (
            StreamConfig {
                channels: cfg.channels(),
                sample_rate: cfg.max_sample_rate(),
                buffer_size: BufferSize::Fixed(4096),
            },
            cfg.sample_format(),
        ),
        None => (
            StreamConfig {
                channels: 2,
                sample_rate: SampleRate(48000),
                buffer_size: BufferSize::Fixed(4096),
            },
            SampleFormat::F32,
        ),
    };

    let stream = OutputStreamBuilder::default()
        .with_buffer_size(config.buffer_size)
        .with_sample_rate(config.sample_rate.0)
        .with_device(device)
        .with_sample_format(sample_format)
        .open_stream_or_fallback()
        .map_err(|e| AudioError::DeviceError(e.to_string()))?;
    let sink = Sink::connect_new(stream.mixer());

    Ok((stream, sink))
}

pub fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::SourceError {
        path: path.display().to_string(),
        source,
    })?;
    let byte_len = file.metadata().map(|m| m.len()).ok();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_seekable(true)
        .with_gapless(true);
    if let Some(len) = byte_len {
        builder = builder.with_byte_len(len);
    }
    builder
        .build()
        .map_err(|e| AudioError::DecodingError(e.to_string()))
}
