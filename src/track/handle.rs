use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::audio::{AudioStream, PlayStatus, Position};
use crate::context::{ContextHandle, SoundCategory};
use crate::error::{MetadataError, TrackError};
use crate::metadata::{TagField, TrailingTag};
use crate::paths::{clean_path, is_relative_path, resolve_path};

/// Volume actually sent to the engine for a user volume and a category
/// volume, both on a 0..100 scale.
pub fn effective_volume(user: f32, category: f32) -> f32 {
    user * category / 100.0
}

/// A streamed music track driven by a script.
///
/// Every method degrades to an empty or default value on failure. The
/// `try_*` variants report what went wrong instead.
pub struct TrackHandle<S: AudioStream> {
    path: Option<PathBuf>,
    volume: f32,
    stream: S,
    context: Option<ContextHandle>,
}

impl<S: AudioStream> TrackHandle<S> {
    /// Wrap `stream`. With a context the engine starts at the category
    /// volume; without one the engine default is left untouched.
    pub fn new(mut stream: S, looping: bool, context: Option<ContextHandle>) -> Self {
        stream.set_looping(looping);

        if let Some(ctx) = context.as_ref() {
            let category = ctx.play_volume(SoundCategory::Sound);
            stream.set_volume(effective_volume(100.0, category));
        }

        Self {
            path: None,
            volume: 100.0,
            stream,
            context,
        }
    }

    /// Swap the presentation context. The engine volume is not touched until
    /// the next `set_volume` or `refresh_volume`.
    pub fn set_context(&mut self, context: Option<ContextHandle>) {
        self.context = context;
    }

    pub fn context(&self) -> Option<&ContextHandle> {
        self.context.as_ref()
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    /// Open `path` as-is. The file name is only kept when the engine accepts it.
    pub(crate) fn load(&mut self, path: PathBuf) -> Result<(), TrackError> {
        match self.stream.open(&path) {
            Ok(()) => {
                log::debug!("loaded audio file: {}", path.display());
                self.path = Some(path);
                Ok(())
            }
            Err(source) => {
                log::error!("Error loading audio file: {}: {source}", path.display());
                self.path = None;
                Err(TrackError::Load { path, source })
            }
        }
    }

    /// Load `raw`, resolving relative names against the script base path.
    /// A blank name unloads and stops.
    pub fn try_set_file_name(&mut self, raw: &str) -> Result<(), TrackError> {
        let cleaned = clean_path(raw);

        if cleaned.is_empty() {
            log::debug!("unloading audio file");
            self.path = None;
            self.stream.stop();
            return Ok(());
        }

        let path = if is_relative_path(&cleaned) {
            resolve_path(&cleaned, &self.base_path())
        } else {
            PathBuf::from(cleaned)
        };

        self.load(path)
    }

    pub fn set_file_name(&mut self, raw: &str) {
        // Already logged by `load`.
        let _ = self.try_set_file_name(raw);
    }

    /// Absolute path of the loaded file, or an empty string.
    pub fn file_name(&self) -> String {
        self.path
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn base_path(&self) -> PathBuf {
        match self.context.as_ref() {
            Some(ctx) => ctx.base_path(),
            None => {
                log::warn!("no presentation context, resolving against the working directory");
                std::env::current_dir().unwrap_or_default()
            }
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Store `v` clamped to 0..100 and push the composed volume to the engine.
    /// Passing exactly the stored value does nothing; an out-of-range value
    /// always re-pushes, picking up any category change.
    pub fn set_volume(&mut self, v: f32) {
        if v.is_nan() || v == self.volume {
            return;
        }
        self.volume = v.clamp(0.0, 100.0);
        self.push_volume();
    }

    /// Re-read the category volume and push the composed value again.
    pub fn refresh_volume(&mut self) {
        self.push_volume();
    }

    fn push_volume(&mut self) {
        let effective = match self.context.as_ref() {
            Some(ctx) => effective_volume(self.volume, ctx.play_volume(SoundCategory::Sound)),
            None => self.volume,
        };
        log::debug!("volume {} -> engine {}", self.volume, effective);
        self.stream.set_volume(effective);
    }

    pub fn is_playing(&self) -> bool {
        self.stream.status() == PlayStatus::Playing
    }

    /// Stop, then start from the beginning when `state` is set and a file
    /// is loaded.
    pub fn set_playing(&mut self, state: bool) {
        self.stream.stop();

        if state && self.path.is_some() {
            self.stream.play();
        }
    }

    pub fn pitch(&self) -> f32 {
        self.stream.pitch()
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.stream.set_pitch(pitch);
    }

    pub fn is_looping(&self) -> bool {
        self.stream.is_looping()
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.stream.set_looping(looping);
    }

    pub fn position(&self) -> Position {
        self.stream.position()
    }

    pub fn x(&self) -> f32 {
        self.stream.position().x
    }

    pub fn y(&self) -> f32 {
        self.stream.position().y
    }

    pub fn z(&self) -> f32 {
        self.stream.position().z
    }

    pub fn set_x(&mut self, x: f32) {
        let p = self.stream.position();
        self.stream.set_position(Position { x, ..p });
    }

    pub fn set_y(&mut self, y: f32) {
        let p = self.stream.position();
        self.stream.set_position(Position { y, ..p });
    }

    pub fn set_z(&mut self, z: f32) {
        let p = self.stream.position();
        self.stream.set_position(Position { z, ..p });
    }

    /// Total duration in milliseconds, 0 when nothing is loaded.
    pub fn duration_ms(&self) -> i64 {
        millis(self.stream.duration())
    }

    /// Current playback offset in milliseconds.
    pub fn time_ms(&self) -> i64 {
        millis(self.stream.playing_offset())
    }

    /// Text of trailing tag field `tag` ("title", "artist", "album", "year"
    /// or "comment"), or an empty string.
    pub fn metadata(&self, tag: &str) -> String {
        self.try_metadata(tag).unwrap_or_default()
    }

    pub fn try_metadata(&self, tag: &str) -> Result<String, MetadataError> {
        let path = self.path.as_deref().ok_or(MetadataError::NotLoaded)?;
        let field: TagField = tag.parse()?;
        let block = TrailingTag::read(path)?;
        Ok(block.text(field))
    }
}

fn millis(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}
