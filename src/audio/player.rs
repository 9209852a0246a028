use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{OutputStream, OutputStreamBuilder, SpatialSink};

use crate::error::{BackendError, StreamError};

use super::sink::{SinkParams, create_sink_at, decode, linear_gain, track_duration, wrap_offset};
use super::types::{AudioStream, PlayStatus, Position};

/// Owner of the audio output device.
///
/// Streams created from a backend keep playing only while the backend is
/// alive.
pub struct AudioBackend {
    stream: OutputStream,
}

impl AudioBackend {
    pub fn open_default() -> Result<Self, BackendError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }

    /// Create a new stopped engine connected to this output.
    pub fn stream(&self) -> RodioStream {
        RodioStream::new(self.stream.mixer().clone())
    }
}

struct Opened {
    path: PathBuf,
    duration: Duration,
}

/// `AudioStream` implementation over a rodio `SpatialSink`.
///
/// A fresh sink is built on every start from stopped, so `stop` always
/// rewinds. Toggling looping on a live sink rebuilds it at the current
/// offset.
pub struct RodioStream {
    mixer: Mixer,
    opened: Option<Opened>,
    sink: Option<SpatialSink>,
    /// Offset into the track at which the live sink started.
    sink_start: Duration,
    params: SinkParams,
}

impl RodioStream {
    pub fn new(mixer: Mixer) -> Self {
        Self {
            mixer,
            opened: None,
            sink: None,
            sink_start: Duration::ZERO,
            params: SinkParams {
                volume: 100.0,
                pitch: 1.0,
                looping: false,
                position: Position::default(),
            },
        }
    }

    /// Swap the live sink for one at the same offset and transport state.
    fn rebuild_live_sink(&mut self, offset: Duration) {
        let (Some(opened), Some(old)) = (self.opened.as_ref(), self.sink.as_ref()) else {
            return;
        };
        let paused = old.is_paused();

        match create_sink_at(&self.mixer, &opened.path, self.params, offset) {
            Ok(sink) => {
                if !paused {
                    sink.play();
                }
                old.stop();
                self.sink = Some(sink);
                self.sink_start = offset;
            }
            Err(e) => log::warn!("cannot apply looping to live playback: {e}"),
        }
    }
}

impl AudioStream for RodioStream {
    fn open(&mut self, path: &Path) -> Result<(), StreamError> {
        let decoder = decode(path)?;
        let duration = track_duration(path, &decoder);

        self.stop();
        self.opened = Some(Opened {
            path: path.to_path_buf(),
            duration,
        });
        Ok(())
    }

    fn play(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            if !sink.empty() && sink.is_paused() {
                sink.play();
                return;
            }
        }

        let Some(opened) = self.opened.as_ref() else {
            return;
        };

        match create_sink_at(&self.mixer, &opened.path, self.params, Duration::ZERO) {
            Ok(sink) => {
                sink.play();
                self.sink = Some(sink);
                self.sink_start = Duration::ZERO;
            }
            Err(e) => {
                log::warn!("cannot start playback: {e}");
                self.sink = None;
            }
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn status(&self) -> PlayStatus {
        match self.sink.as_ref() {
            None => PlayStatus::Stopped,
            Some(sink) if sink.empty() => PlayStatus::Stopped,
            Some(sink) if sink.is_paused() => PlayStatus::Paused,
            Some(_) => PlayStatus::Playing,
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.params.volume = volume.clamp(0.0, 100.0);
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(linear_gain(self.params.volume));
        }
    }

    fn volume(&self) -> f32 {
        self.params.volume
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.params.pitch = pitch;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_speed(pitch);
        }
    }

    fn pitch(&self) -> f32 {
        self.params.pitch
    }

    fn set_looping(&mut self, looping: bool) {
        if looping == self.params.looping {
            return;
        }
        let live = self.status() != PlayStatus::Stopped;
        let offset = self.playing_offset();

        self.params.looping = looping;
        if live {
            self.rebuild_live_sink(offset);
        }
    }

    fn is_looping(&self) -> bool {
        self.params.looping
    }

    fn set_position(&mut self, position: Position) {
        self.params.position = position;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_emitter_position(position.into());
        }
    }

    fn position(&self) -> Position {
        self.params.position
    }

    fn duration(&self) -> Duration {
        self.opened
            .as_ref()
            .map(|o| o.duration)
            .unwrap_or(Duration::ZERO)
    }

    fn playing_offset(&self) -> Duration {
        match self.sink.as_ref() {
            Some(sink) if !sink.empty() => {
                let pos = self.sink_start + sink.get_pos();
                wrap_offset(pos, self.duration(), self.params.looping)
            }
            _ => Duration::ZERO,
        }
    }
}
