//! The script-facing track handle.
//!
//! `TrackHandle` owns one streamed audio resource and composes its own
//! volume with the host's "Sound" category volume.

mod handle;

pub use handle::*;
