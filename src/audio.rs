//! Audio engine boundary and its rodio implementation.
//!
//! `TrackHandle` only talks to the narrow `AudioStream` trait. `AudioBackend`
//! owns the output device and hands out `RodioStream` engines bound to it.

mod player;
mod sink;
mod types;

pub use player::{AudioBackend, RodioStream};
pub use types::*;
