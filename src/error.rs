//! Error types shared by the audio, track and metadata modules.
//!
//! Script-facing methods on `TrackHandle` collapse all of these into empty
//! or default values; the `try_*` variants return them unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to open a file as a playable stream.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("failed to open {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// Failure to open the audio output device.
#[derive(Error, Debug)]
#[error("no audio output device: {0}")]
pub struct BackendError(#[from] pub rodio::StreamError);

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("error loading audio file {path:?}")]
    Load {
        path: PathBuf,
        #[source]
        source: StreamError,
    },
}

/// Reasons a trailing tag field could not be produced.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("no file is loaded")]
    NotLoaded,

    #[error("empty tag name")]
    EmptyTag,

    #[error("unknown tag: {0}")]
    UnknownTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is {0} bytes, shorter than a tag block")]
    TooShort(u64),

    #[error("no TAG signature at end of file")]
    MissingSignature,
}
