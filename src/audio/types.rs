//! Audio-related small types and the engine trait.
//!
//! This module defines the playback status, the 3D emitter position and the
//! `AudioStream` trait that every streaming engine implements.

use std::path::Path;
use std::time::Duration;

use crate::error::StreamError;

/// Transport status reported by an engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayStatus {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlayStatus {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Position of a sound emitter in listener space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Position> for [f32; 3] {
    fn from(p: Position) -> Self {
        [p.x, p.y, p.z]
    }
}

/// A streamed audio resource that can be re-opened in place.
///
/// Volume is on a 0..100 scale. Pitch is a playback-rate multiplier where
/// `1.0` is the original speed.
pub trait AudioStream {
    /// Open `path` for streaming. On failure the previously opened resource
    /// (if any) stays in place.
    fn open(&mut self, path: &Path) -> Result<(), StreamError>;

    fn play(&mut self);
    /// Stop playback and rewind to the beginning.
    fn stop(&mut self);
    fn status(&self) -> PlayStatus;

    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;

    fn set_pitch(&mut self, pitch: f32);
    fn pitch(&self) -> f32;

    /// Takes effect on the current playback too, keeping its offset.
    fn set_looping(&mut self, looping: bool);
    fn is_looping(&self) -> bool;

    fn set_position(&mut self, position: Position);
    fn position(&self) -> Position;

    /// Total duration of the opened stream, zero when nothing is open.
    fn duration(&self) -> Duration;
    /// Current playback offset, zero when stopped.
    fn playing_offset(&self) -> Duration;
}
