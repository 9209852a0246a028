//! A scriptable handle for one streamed music track.
//!
//! [`TrackHandle`] wraps an [`AudioStream`] engine (rodio-backed by default),
//! resolves script-relative file names, composes its volume with the host's
//! category volume and reads the legacy 128-byte trailing tag block.

pub mod audio;
pub mod config;
pub mod context;
pub mod error;
pub mod metadata;
pub mod paths;
pub mod track;

#[cfg(test)]
mod test_env;

pub use audio::{AudioBackend, AudioStream, PlayStatus, Position, RodioStream};
pub use context::{ContextHandle, FrontendContext, PresentationContext, SoundCategory};
pub use error::{BackendError, MetadataError, StreamError, TrackError};
pub use metadata::{TagField, TrailingTag};
pub use track::{TrackHandle, effective_volume};
