//! Utilities for creating `rodio` spatial sinks from an opened file.
//!
//! The helpers here encapsulate opening/decoding a file and preparing a
//! paused `SpatialSink` carrying the engine's current settings, optionally
//! starting part-way into the file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::mixer::Mixer;
use rodio::{Decoder, Source, SpatialSink};

use crate::error::StreamError;

use super::types::Position;

const LEFT_EAR: [f32; 3] = [-1.0, 0.0, 0.0];
const RIGHT_EAR: [f32; 3] = [1.0, 0.0, 0.0];

/// Playback parameters applied to every sink the engine builds.
#[derive(Copy, Clone, Debug)]
pub(super) struct SinkParams {
    pub volume: f32,
    pub pitch: f32,
    pub looping: bool,
    pub position: Position,
}

pub(super) fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, StreamError> {
    let file = File::open(path).map_err(|source| StreamError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| StreamError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Total duration of `path`, asking the decoder first and falling back to the
/// container's audio properties.
pub(super) fn track_duration(path: &Path, decoder: &Decoder<BufReader<File>>) -> Duration {
    decoder
        .total_duration()
        .or_else(|| {
            lofty::read_from_path(path)
                .ok()
                .map(|tagged| tagged.properties().duration())
        })
        .unwrap_or(Duration::ZERO)
}

/// Create a paused `SpatialSink` for `path` on `mixer` that starts at `start_at`.
///
/// While looping, the rest of the current pass plays first and the whole
/// track repeats after it.
pub(super) fn create_sink_at(
    mixer: &Mixer,
    path: &Path,
    params: SinkParams,
    start_at: Duration,
) -> Result<SpatialSink, StreamError> {
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let head = decode(path)?.skip_duration(start_at);

    let sink = SpatialSink::connect_new(mixer, params.position.into(), LEFT_EAR, RIGHT_EAR);
    sink.append(head);
    if params.looping {
        sink.append(decode(path)?.repeat_infinite());
    }
    sink.set_volume(linear_gain(params.volume));
    sink.set_speed(params.pitch);
    sink.pause();
    Ok(sink)
}

/// Map a 0..100 engine volume onto rodio's linear gain.
pub(super) fn linear_gain(volume: f32) -> f32 {
    volume.clamp(0.0, 100.0) / 100.0
}

/// Fold a sink position back into the track while looping.
pub(super) fn wrap_offset(pos: Duration, duration: Duration, looping: bool) -> Duration {
    if !looping || duration.is_zero() {
        return pos;
    }
    let wrapped = pos.as_nanos() % duration.as_nanos();
    Duration::from_nanos(wrapped as u64)
}
